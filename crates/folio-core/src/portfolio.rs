//! The single controller instance behind the page.
//!
//! `Portfolio` owns every piece of mutable state (theme, menu, pointer,
//! throttle, running animations) and turns events and due tasks into
//! directives. It never touches the page directly.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::PortfolioConfig;
use crate::directive::{Directive, Target};
use crate::effects::{self, ButtonAnimator, Control};
use crate::error::FolioResult;
use crate::form::{self, FormController, FormInput, FormPhase};
use crate::layout::Layout;
use crate::navigation::{self, Key, MobileMenu};
use crate::scheduler::{Scheduler, Task};
use crate::scroll::{self, ScrollThrottle};
use crate::section::SectionId;
use crate::theme::{self, Theme, ThemeController, ThemeStore};
use crate::tilt::{self, PointerPosition, PointerTracker};

const INTRO_DELAY_MS: u64 = 100;
const INTRO_SETTLE_MS: u64 = 800;
const NAV_LINK_PRESS_MS: u64 = 150;
const NAVBAR_NUDGE_MS: u64 = 300;

/// Something the page reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Raw window scroll
    Scroll,
    PointerMove { client_x: f64, client_y: f64 },
    NavLinkClick(SectionId),
    LogoClick,
    MenuToggleClick,
    ThemeToggleClick,
    Key { key: Key, theme_toggle_focused: bool },
    Resize,
    /// The intersection observer saw a section cross its threshold
    SectionIntersecting(SectionId),
    ResumeClick { label: String },
    ProjectLinkClick { index: usize, label: String },
    Submit { input: FormInput, button_label: String },
}

pub struct Portfolio<S: ThemeStore> {
    config: PortfolioConfig,
    store: S,
    scheduler: Scheduler,
    theme: ThemeController,
    menu: MobileMenu,
    throttle: ScrollThrottle,
    pointer: PointerTracker,
    revealed: BTreeSet<SectionId>,
    form: FormController,
    buttons: ButtonAnimator,
    rng: SmallRng,
    next_particle: u32,
    live_particles: BTreeSet<u32>,
}

impl<S: ThemeStore> Portfolio<S> {
    /// Validate the config and build an idle instance. `seed` drives the
    /// particle velocities.
    pub fn new(config: PortfolioConfig, store: S, seed: u64) -> FolioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            scheduler: Scheduler::new(),
            theme: ThemeController::default(),
            menu: MobileMenu::default(),
            throttle: ScrollThrottle::default(),
            pointer: PointerTracker::default(),
            revealed: BTreeSet::new(),
            form: FormController::default(),
            buttons: ButtonAnimator::default(),
            rng: SmallRng::seed_from_u64(seed),
            next_particle: 0,
            live_particles: BTreeSet::new(),
        })
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer.position()
    }

    /// Whether the pointer moved within the idle window. Informational only.
    pub fn is_pointer_moving(&self) -> bool {
        self.pointer.is_moving()
    }

    pub fn form_phase(&self) -> FormPhase {
        self.form.phase()
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Completed runs of the combined scroll handler.
    pub fn scroll_ticks(&self) -> u64 {
        self.throttle.ticks()
    }

    /// Particles spawned and not yet removed.
    pub fn live_particles(&self) -> usize {
        self.live_particles.len()
    }

    pub fn current_section(&self, layout: &Layout) -> SectionId {
        navigation::current_section_or_home(layout, self.config.active_link_lead)
    }

    /// Due time of the next deferred task, for the host's timer.
    pub fn next_due(&mut self) -> Option<u64> {
        self.scheduler.next_due()
    }

    /// Startup: theme, section poses, first scroll pass, page intro.
    pub fn init(&mut self, now: u64, layout: &Layout) -> Vec<Directive> {
        self.scheduler.set_now(now);
        let mut directives = self.theme.init(&self.store);
        directives.extend(scroll::intersection_setup(&self.config.sections));
        directives.extend(navigation::update_active_nav_link(
            layout,
            &self.config.sections,
            self.config.active_link_lead,
        ));
        directives.extend(self.navbar(layout));
        directives.extend(self.reveal_sections(layout));

        directives.push(Directive::style(Target::Body, "opacity", "0"));
        directives.push(Directive::style(Target::Body, "transform", "translateY(20px)"));
        self.scheduler.schedule(INTRO_DELAY_MS, Task::IntroReveal);

        tracing::info!(
            sections = layout.sections.len(),
            theme = %self.theme(),
            "portfolio initialised"
        );
        directives
    }

    /// React to one page event.
    pub fn handle(&mut self, now: u64, layout: &Layout, event: Event) -> Vec<Directive> {
        self.scheduler.set_now(now);
        match event {
            Event::Scroll => {
                self.note_scroll(now);
                Vec::new()
            }
            Event::PointerMove { client_x, client_y } => {
                let position = PointerPosition::from_client(client_x, client_y, &layout.viewport);
                self.pointer
                    .on_move(position, &mut self.scheduler, self.config.pointer_idle_ms);
                tilt::apply_mouse_tilt(position, layout, self.config.tilt_intensity)
            }
            Event::NavLinkClick(section) => self.follow_link(layout, section),
            Event::LogoClick => self.scroll_to_top(),
            Event::MenuToggleClick => self.menu.toggle(),
            Event::ThemeToggleClick => self.toggle_theme(layout),
            Event::Key {
                key,
                theme_toggle_focused,
            } => self.handle_key(layout, key, theme_toggle_focused),
            Event::Resize => self.handle_resize(layout),
            Event::SectionIntersecting(section) => scroll::intersection_reveal(section),
            Event::ResumeClick { label } => {
                tracing::info!("resume download initiated");
                self.press(Control::ResumeDownload, &label)
            }
            Event::ProjectLinkClick { index, label } => {
                tracing::info!(link = %label, "project link clicked");
                self.press(Control::ProjectLink(index), &label)
            }
            Event::Submit {
                input,
                button_label,
            } => self
                .form
                .submit(&input, &button_label, &mut self.buttons, &mut self.scheduler),
        }
    }

    /// A raw scroll event. Arms the throttle; needs no layout and produces
    /// nothing until the throttled tick runs.
    pub fn note_scroll(&mut self, now: u64) {
        self.scheduler.set_now(now);
        self.throttle
            .on_scroll(&mut self.scheduler, self.config.scroll_throttle_ms);
    }

    /// Run every task due at or before `now`.
    pub fn advance(&mut self, now: u64, layout: &Layout) -> Vec<Directive> {
        let mut directives = Vec::new();
        while let Some(task) = self.scheduler.pop_due(now) {
            directives.extend(self.run_task(task, layout));
        }
        self.scheduler.set_now(now);
        directives
    }

    /// Switch theme; the navbar preset follows immediately.
    pub fn toggle_theme(&mut self, layout: &Layout) -> Vec<Directive> {
        let mut directives = self.theme.toggle(
            &mut self.store,
            &mut self.scheduler,
            self.config.theme_transition_ms,
        );
        directives.extend(self.navbar(layout));
        directives
    }

    /// Step `direction` sections from the current one.
    pub fn navigate_sections(&mut self, layout: &Layout, direction: i32) -> Vec<Directive> {
        let current = self.current_section(layout);
        match navigation::step_section(&self.config.sections, current, direction) {
            Some(index) => vec![Directive::ScrollIntoView {
                target: Target::Section(self.config.sections[index]),
            }],
            None => Vec::new(),
        }
    }

    fn run_task(&mut self, task: Task, layout: &Layout) -> Vec<Directive> {
        match task {
            Task::ScrollTick => {
                self.throttle.on_tick();
                self.on_scroll_tick(layout)
            }
            Task::PointerIdle => {
                self.pointer.on_idle();
                Vec::new()
            }
            Task::ClearThemeTransition => vec![theme::clear_theme_transition()],
            Task::ClearNavLinkPress(section) => {
                vec![Directive::clear_style(Target::NavLink(section), "transform")]
            }
            Task::ClearNavbarNudge => vec![Directive::clear_style(Target::Navbar, "transform")],
            Task::RevealChild { section, index } => scroll::reveal_child(section, index),
            Task::FadeInError(field) => form::fade_in_error(field),
            Task::ButtonStage { control, stage } => self.button_stage(control, stage, layout),
            Task::RemoveParticle(id) => {
                self.live_particles.remove(&id);
                vec![Directive::RemoveParticle { id }]
            }
            Task::IntroReveal => {
                self.scheduler.schedule(INTRO_SETTLE_MS, Task::IntroSettle);
                vec![
                    Directive::style(
                        Target::Body,
                        "transition",
                        "all 0.8s cubic-bezier(0.23, 1, 0.320, 1)",
                    ),
                    Directive::style(Target::Body, "opacity", "1"),
                    Directive::style(Target::Body, "transform", "translateY(0)"),
                ]
            }
            Task::IntroSettle => vec![Directive::clear_style(Target::Body, "transition")],
        }
    }

    /// The combined handler behind the scroll throttle.
    fn on_scroll_tick(&mut self, layout: &Layout) -> Vec<Directive> {
        let mut directives = navigation::update_active_nav_link(
            layout,
            &self.config.sections,
            self.config.active_link_lead,
        );
        directives.extend(self.navbar(layout));
        directives.extend(self.reveal_sections(layout));
        directives.extend(scroll::handle_parallax_effect(
            layout,
            self.config.parallax_speed,
        ));
        directives
    }

    fn navbar(&self, layout: &Layout) -> Vec<Directive> {
        scroll::handle_navbar_scroll(
            layout.scroll_y,
            self.theme(),
            self.config.navbar_scroll_threshold,
        )
    }

    /// Reveal sections entering the viewport. Each section staggers its
    /// children once; later ticks leave it alone.
    fn reveal_sections(&mut self, layout: &Layout) -> Vec<Directive> {
        let mut directives = Vec::new();
        for section in scroll::sections_in_view(layout, self.config.reveal_margin) {
            if self.revealed.insert(section.id) {
                directives.extend(scroll::reveal_section(
                    section,
                    self.config.reveal_stagger_ms,
                    &mut self.scheduler,
                ));
            }
        }
        directives
    }

    fn follow_link(&mut self, layout: &Layout, section: SectionId) -> Vec<Directive> {
        let Some(top) = navigation::link_scroll_offset(layout, section, self.config.header_offset)
        else {
            tracing::debug!(%section, "link target not on page");
            return Vec::new();
        };
        let link = Target::NavLink(section);
        let mut directives = vec![
            Directive::style(link, "transform", "scale(0.95) translateZ(5px)"),
            Directive::ScrollTo { top },
        ];
        self.scheduler
            .schedule(NAV_LINK_PRESS_MS, Task::ClearNavLinkPress(section));
        directives.extend(self.menu.close());
        directives
    }

    fn scroll_to_top(&mut self) -> Vec<Directive> {
        self.scheduler.schedule(NAVBAR_NUDGE_MS, Task::ClearNavbarNudge);
        vec![
            Directive::ScrollTo { top: 0.0 },
            Directive::style(Target::Navbar, "transform", "translateY(-10px)"),
        ]
    }

    fn handle_key(
        &mut self,
        layout: &Layout,
        key: Key,
        theme_toggle_focused: bool,
    ) -> Vec<Directive> {
        match key {
            Key::Escape if self.menu.is_open() => self.menu.toggle(),
            Key::Enter if theme_toggle_focused => self.toggle_theme(layout),
            _ => match key.section_step() {
                Some(direction) => self.navigate_sections(layout, direction),
                None => Vec::new(),
            },
        }
    }

    fn handle_resize(&mut self, layout: &Layout) -> Vec<Directive> {
        let mut directives = Vec::new();
        if layout.viewport.width > self.config.mobile_breakpoint {
            directives.extend(self.menu.close());
        }
        directives.extend(tilt::reset_tilt(layout));
        directives
    }

    fn press(&mut self, control: Control, label: &str) -> Vec<Directive> {
        self.buttons
            .start(control, label, &mut self.scheduler)
            .unwrap_or_default()
    }

    fn button_stage(&mut self, control: Control, stage: usize, layout: &Layout) -> Vec<Directive> {
        let outcome = self.buttons.enter(control, stage, &mut self.scheduler);
        let mut directives = outcome.directives;
        if control == Control::SubmitButton && self.form.on_button_stage(stage, outcome.finished) {
            directives.push(Directive::ResetForm);
            directives.extend(self.spawn_particles(layout));
        }
        directives
    }

    fn spawn_particles(&mut self, layout: &Layout) -> Vec<Directive> {
        let first = self.next_particle;
        let directives = effects::create_success_particles(
            &layout.submit_button,
            first,
            &mut self.rng,
            &mut self.scheduler,
        );
        self.next_particle = first.wrapping_add(effects::PARTICLE_COUNT);
        self.live_particles
            .extend((0..effects::PARTICLE_COUNT).map(|i| first.wrapping_add(i)));
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Viewport;
    use crate::theme::MemoryThemeStore;

    fn page(scroll_y: f64) -> Layout {
        let offsets: Vec<_> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i as f64 * 1000.0))
            .collect();
        Layout::stacked(
            Viewport {
                width: 1200.0,
                height: 800.0,
            },
            scroll_y,
            &offsets,
        )
    }

    fn portfolio() -> Portfolio<MemoryThemeStore> {
        Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 42).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PortfolioConfig {
            sections: Vec::new(),
            ..Default::default()
        };
        assert!(Portfolio::new(config, MemoryThemeStore::new(), 0).is_err());
    }

    #[test]
    fn init_applies_theme_and_starts_intro() {
        let mut p = portfolio();
        let directives = p.init(0, &page(0.0));
        assert!(directives.contains(&Directive::SetAttribute {
            target: Target::Root,
            name: "data-theme",
            value: "light".into(),
        }));
        assert!(directives.contains(&Directive::add_class(
            Target::NavLink(SectionId::Home),
            "active"
        )));
        assert!(directives.contains(&Directive::style(Target::Body, "opacity", "0")));
        assert_eq!(p.next_due(), Some(100));

        let intro = p.advance(100, &page(0.0));
        assert!(intro.contains(&Directive::style(Target::Body, "opacity", "1")));
        assert_eq!(p.next_due(), Some(900));
    }

    #[test]
    fn scroll_events_coalesce_into_one_tick() {
        let mut p = portfolio();
        p.init(0, &page(0.0));
        p.advance(2_000, &page(0.0));

        for t in 2_000..2_010 {
            assert!(p.handle(t, &page(1500.0), Event::Scroll).is_empty());
        }
        assert_eq!(p.scroll_ticks(), 0);
        let directives = p.advance(2_016, &page(1500.0));
        assert_eq!(p.scroll_ticks(), 1);
        assert!(directives.contains(&Directive::add_class(
            Target::NavLink(SectionId::About),
            "active"
        )));
        assert!(directives.contains(&Directive::style(
            Target::Hero,
            "transform",
            "translateY(750px)"
        )));
    }

    #[test]
    fn navigate_sections_clamps_at_ends() {
        let mut p = portfolio();
        let last = page(7000.0);
        assert_eq!(p.current_section(&last), SectionId::Contact);
        assert!(p.navigate_sections(&last, 1).is_empty());
        assert!(p.navigate_sections(&page(0.0), -1).is_empty());
        assert_eq!(
            p.navigate_sections(&page(0.0), 1),
            vec![Directive::ScrollIntoView {
                target: Target::Section(SectionId::About)
            }]
        );
    }

    #[test]
    fn escape_only_closes_an_open_menu() {
        let mut p = portfolio();
        let layout = page(0.0);
        let escape = Event::Key {
            key: Key::Escape,
            theme_toggle_focused: false,
        };
        assert!(p.handle(0, &layout, escape.clone()).is_empty());
        p.handle(0, &layout, Event::MenuToggleClick);
        assert!(p.menu_open());
        assert!(!p.handle(0, &layout, escape).is_empty());
        assert!(!p.menu_open());
    }

    #[test]
    fn enter_toggles_theme_only_when_focused() {
        let mut p = portfolio();
        let layout = page(0.0);
        p.handle(
            0,
            &layout,
            Event::Key {
                key: Key::Enter,
                theme_toggle_focused: false,
            },
        );
        assert_eq!(p.theme(), Theme::Light);
        p.handle(
            0,
            &layout,
            Event::Key {
                key: Key::Enter,
                theme_toggle_focused: true,
            },
        );
        assert_eq!(p.theme(), Theme::Dark);
        assert_eq!(p.store().value(), Some("dark"));
    }

    #[test]
    fn link_click_scrolls_below_header_and_closes_menu() {
        let mut p = portfolio();
        let layout = page(0.0);
        p.handle(0, &layout, Event::MenuToggleClick);
        let directives = p.handle(0, &layout, Event::NavLinkClick(SectionId::Projects));
        assert!(directives.contains(&Directive::ScrollTo { top: 3920.0 }));
        assert!(!p.menu_open());
        let later = p.advance(150, &layout);
        assert!(later.contains(&Directive::clear_style(
            Target::NavLink(SectionId::Projects),
            "transform"
        )));
    }

    #[test]
    fn resize_to_desktop_closes_menu_and_resets_tilt() {
        let mut p = portfolio();
        let mut layout = page(0.0);
        layout.tilt_targets = vec![Default::default(); 2];
        p.handle(0, &layout, Event::MenuToggleClick);
        let directives = p.handle(0, &layout, Event::Resize);
        assert!(!p.menu_open());
        assert!(directives.contains(&Directive::clear_style(Target::TiltTarget(1), "transform")));

        layout.viewport.width = 600.0;
        p.handle(0, &layout, Event::MenuToggleClick);
        p.handle(0, &layout, Event::Resize);
        assert!(p.menu_open());
    }

    #[test]
    fn pointer_flag_does_not_gate_tilt() {
        let mut p = portfolio();
        let mut layout = page(0.0);
        layout.tilt_targets = vec![crate::layout::Rect::new(100.0, 100.0, 200.0, 200.0)];
        let first = p.handle(
            0,
            &layout,
            Event::PointerMove {
                client_x: 600.0,
                client_y: 400.0,
            },
        );
        assert_eq!(first.len(), 1);
        assert!(p.is_pointer_moving());
        p.advance(100, &layout);
        assert!(!p.is_pointer_moving());
        assert_eq!(p.pointer(), PointerPosition { x: 0.0, y: 0.0 });
    }
}
