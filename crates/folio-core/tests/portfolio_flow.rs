//! End-to-end flows through the driver and the in-memory surface
//!
//! These tests exercise whole interactions the way the browser host does:
//! measure, dispatch, apply, then advance the clock.

use folio_core::{
    Directive, Driver, Event, Field, FolioError, FormInput, FormPhase, Key, Layout,
    MemoryThemeStore, Portfolio, PortfolioConfig, Rect, RecordingSurface, SectionId, Target,
    Viewport,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("folio_core=debug")
        .try_init();
}

fn page(scroll_y: f64) -> Layout {
    let offsets: Vec<_> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i as f64 * 900.0))
        .collect();
    let mut layout = Layout::stacked(
        Viewport {
            width: 1280.0,
            height: 800.0,
        },
        scroll_y,
        &offsets,
    );
    layout.submit_button = Rect::new(600.0, 500.0, 160.0, 48.0);
    for section in &mut layout.sections {
        section.animated_children = 3;
    }
    layout
}

fn driver_with(store: MemoryThemeStore) -> Driver<MemoryThemeStore, RecordingSurface> {
    init_tracing();
    let portfolio = Portfolio::new(PortfolioConfig::default(), store, 2024).unwrap();
    let mut driver = Driver::new(portfolio, RecordingSurface::new(page(0.0)));
    driver.start(0).unwrap();
    driver
}

/// Advance the clock to `until`, firing every timer on the way.
fn run_until(driver: &mut Driver<MemoryThemeStore, RecordingSurface>, until: u64) {
    while let Some(due) = driver.next_due() {
        if due > until {
            break;
        }
        driver.tick(due).unwrap();
    }
    driver.tick(until).unwrap();
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn startup_fails_when_required_element_missing() {
    let portfolio =
        Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 0).unwrap();
    let mut driver = Driver::new(portfolio, RecordingSurface::missing("#navbar"));
    let err = driver.start(0).unwrap_err();
    assert!(matches!(err, FolioError::MissingElement(ref id) if id == "#navbar"));
}

#[test]
fn startup_fails_without_resume_button() {
    let portfolio =
        Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 0).unwrap();
    let mut driver = Driver::new(portfolio, RecordingSurface::missing("#resume-download"));
    let err = driver.start(0).unwrap_err();
    assert!(matches!(err, FolioError::MissingElement(ref id) if id == "#resume-download"));
    assert!(driver.surface().applied().is_empty());
}

#[test]
fn startup_tolerates_missing_decoration() {
    let portfolio =
        Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 0).unwrap();
    let mut driver = Driver::new(portfolio, RecordingSurface::missing(".hero"));
    driver.start(0).unwrap();
    assert_eq!(driver.surface().style(Target::Body, "opacity"), Some("0"));
}

#[test]
fn startup_applies_persisted_theme_and_intro() {
    let mut driver = driver_with(MemoryThemeStore::with_value("dark"));
    let surface = driver.surface();
    assert_eq!(surface.attribute(Target::Root, "data-theme"), Some("dark"));
    assert_eq!(surface.text(Target::ThemeIcon), Some("\u{2600}\u{FE0F}"));
    assert_eq!(
        surface.style(Target::Navbar, "background"),
        Some("rgba(45, 55, 72, 0.95)")
    );
    assert_eq!(surface.style(Target::Body, "opacity"), Some("0"));

    run_until(&mut driver, 1_000);
    let surface = driver.surface();
    assert_eq!(surface.style(Target::Body, "opacity"), Some("1"));
    assert_eq!(surface.style(Target::Body, "transition"), None);
}

#[test]
fn startup_reveals_sections_already_in_view() {
    let mut driver = driver_with(MemoryThemeStore::new());
    assert!(driver
        .surface()
        .has_class(Target::Section(SectionId::Home), "visible"));
    assert!(!driver
        .surface()
        .has_class(Target::Section(SectionId::About), "visible"));

    run_until(&mut driver, 250);
    let child = Target::SectionChild {
        section: SectionId::Home,
        index: 2,
    };
    assert_eq!(driver.surface().style(child, "opacity"), Some("1"));
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn toggle_theme_twice_restores_everything() {
    let mut driver = driver_with(MemoryThemeStore::with_value("light"));
    driver.dispatch(5, Event::ThemeToggleClick).unwrap();
    assert_eq!(driver.portfolio().store().value(), Some("dark"));
    assert_eq!(
        driver.surface().attribute(Target::Root, "data-theme"),
        Some("dark")
    );
    assert_eq!(
        driver.surface().style(Target::Navbar, "background"),
        Some("rgba(45, 55, 72, 0.95)")
    );

    driver.dispatch(10, Event::ThemeToggleClick).unwrap();
    assert_eq!(driver.portfolio().store().value(), Some("light"));
    assert_eq!(
        driver.surface().attribute(Target::Root, "data-theme"),
        Some("light")
    );
}

#[test]
fn theme_transition_clears_after_half_a_second() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver.dispatch(1_000, Event::ThemeToggleClick).unwrap();
    assert!(driver.surface().style(Target::Body, "transition").is_some());
    run_until(&mut driver, 1_499);
    assert!(driver.surface().style(Target::Body, "transition").is_some());
    run_until(&mut driver, 1_500);
    assert_eq!(driver.surface().style(Target::Body, "transition"), None);
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn burst_of_scroll_events_runs_handler_once() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver.surface_mut().set_layout(page(1_000.0));

    for t in 1_000..1_012 {
        driver.dispatch(t, Event::Scroll).unwrap();
    }
    run_until(&mut driver, 1_015);
    assert_eq!(driver.portfolio().scroll_ticks(), 0);
    run_until(&mut driver, 1_016);
    assert_eq!(driver.portfolio().scroll_ticks(), 1);

    let surface = driver.surface();
    assert!(surface.has_class(Target::NavLink(SectionId::About), "active"));
    assert!(!surface.has_class(Target::NavLink(SectionId::Home), "active"));
    assert_eq!(
        surface.style(Target::Navbar, "box-shadow"),
        Some("0 8px 32px rgba(0, 0, 0, 0.1)")
    );
    assert_eq!(
        surface.style(Target::Hero, "transform"),
        Some("translateY(500px)")
    );
}

#[test]
fn raw_scroll_events_are_not_measured() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    let before = driver.surface().measurements();

    for t in 1_000..1_012 {
        driver.dispatch(t, Event::Scroll).unwrap();
    }
    assert_eq!(driver.surface().measurements(), before);

    driver.tick(1_016).unwrap();
    assert_eq!(driver.surface().measurements(), before + 1);
    assert_eq!(driver.portfolio().scroll_ticks(), 1);
}

#[test]
fn active_link_boundary_is_inclusive() {
    let mut driver = driver_with(MemoryThemeStore::new());
    let about_top = 900.0;

    driver.surface_mut().set_layout(page(about_top - 201.0));
    driver.dispatch(100, Event::Scroll).unwrap();
    run_until(&mut driver, 116);
    assert!(!driver
        .surface()
        .has_class(Target::NavLink(SectionId::About), "active"));

    driver.surface_mut().set_layout(page(about_top - 200.0));
    driver.dispatch(200, Event::Scroll).unwrap();
    run_until(&mut driver, 216);
    assert!(driver
        .surface()
        .has_class(Target::NavLink(SectionId::About), "active"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn arrow_keys_walk_sections_and_stop_at_the_ends() {
    let mut driver = driver_with(MemoryThemeStore::new());
    let up = Event::Key {
        key: Key::ArrowUp,
        theme_toggle_focused: false,
    };
    let down = Event::Key {
        key: Key::ArrowDown,
        theme_toggle_focused: false,
    };

    driver.surface_mut().clear_log();
    driver.dispatch(1, up.clone()).unwrap();
    assert!(driver.surface().scroll_requests().is_empty());

    driver.dispatch(2, down.clone()).unwrap();
    assert_eq!(
        driver.surface().scroll_requests(),
        &[Directive::ScrollIntoView {
            target: Target::Section(SectionId::About)
        }]
    );

    driver.surface_mut().set_layout(page(7.0 * 900.0));
    driver.surface_mut().clear_log();
    driver.dispatch(3, down).unwrap();
    assert!(driver.surface().scroll_requests().is_empty());
    driver.dispatch(4, up).unwrap();
    assert_eq!(
        driver.surface().scroll_requests(),
        &[Directive::ScrollIntoView {
            target: Target::Section(SectionId::Achievements)
        }]
    );
}

#[test]
fn nav_link_click_closes_open_menu() {
    let mut driver = driver_with(MemoryThemeStore::new());
    driver.dispatch(1, Event::MenuToggleClick).unwrap();
    assert!(driver.surface().has_class(Target::NavMenu, "active"));
    assert_eq!(
        driver.surface().style(Target::MenuToggle, "transform"),
        Some("rotateY(180deg)")
    );

    driver.surface_mut().clear_log();
    driver
        .dispatch(2, Event::NavLinkClick(SectionId::Skills))
        .unwrap();
    assert_eq!(
        driver.surface().scroll_requests(),
        &[Directive::ScrollTo {
            top: 5.0 * 900.0 - 80.0
        }]
    );
    assert!(!driver.surface().has_class(Target::NavMenu, "active"));
    assert!(!driver.portfolio().menu_open());
}

#[test]
fn logo_click_scrolls_home_and_nudges_navbar() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver.dispatch(1_000, Event::LogoClick).unwrap();
    assert_eq!(
        driver.surface().style(Target::Navbar, "transform"),
        Some("translateY(-10px)")
    );
    run_until(&mut driver, 1_300);
    assert_eq!(driver.surface().style(Target::Navbar, "transform"), None);
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn invalid_form_shows_errors_then_fades_them_in() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver
        .dispatch(
            1_000,
            Event::Submit {
                input: FormInput::new("A", "bad", "short"),
                button_label: "Send Message".into(),
            },
        )
        .unwrap();

    for field in [Field::Name, Field::Email, Field::Message] {
        let slot = Target::ErrorSlot(field);
        assert!(driver.surface().text(slot).is_some_and(|t| !t.is_empty()));
        assert_eq!(driver.surface().style(slot, "opacity"), Some("0"));
    }
    run_until(&mut driver, 1_050);
    assert_eq!(
        driver
            .surface()
            .style(Target::ErrorSlot(Field::Name), "opacity"),
        Some("1")
    );
    assert_eq!(driver.portfolio().form_phase(), FormPhase::Idle);
}

#[test]
fn valid_submission_resets_form_and_bursts_particles() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver
        .dispatch(
            1_000,
            Event::Submit {
                input: FormInput::new("Al", "a@b.co", "Hello there!"),
                button_label: "Send Message".into(),
            },
        )
        .unwrap();

    assert_eq!(driver.portfolio().form_phase(), FormPhase::Submitting);
    assert!(driver.surface().is_disabled(Target::SubmitButton));
    assert_eq!(
        driver.surface().text(Target::SubmitButton),
        Some("Sending...")
    );

    run_until(&mut driver, 2_500);
    assert_eq!(driver.portfolio().form_phase(), FormPhase::Success);
    assert_eq!(
        driver.surface().text(Target::SubmitButton),
        Some("Message Sent! \u{2728}")
    );

    run_until(&mut driver, 4_500);
    let surface = driver.surface();
    assert_eq!(driver.portfolio().form_phase(), FormPhase::Idle);
    assert_eq!(surface.text(Target::SubmitButton), Some("Send Message"));
    assert!(!surface.is_disabled(Target::SubmitButton));
    assert_eq!(surface.form_resets(), 1);
    assert_eq!(surface.particles_spawned(), 12);
    assert_eq!(surface.live_particles(), 12);
}

#[test]
fn particles_are_removed_within_their_lifetime() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    driver
        .dispatch(
            1_000,
            Event::Submit {
                input: FormInput::new("Grace", "grace@navy.mil", "Compilers are fun."),
                button_label: "Send".into(),
            },
        )
        .unwrap();

    // burst spawns when the button resets at 1000 + 1500 + 2000
    run_until(&mut driver, 4_500);
    assert_eq!(driver.surface().live_particles(), 12);
    assert_eq!(driver.portfolio().live_particles(), 12);
    run_until(&mut driver, 5_499);
    assert_eq!(driver.surface().live_particles(), 12);
    run_until(&mut driver, 5_500);
    assert_eq!(driver.surface().live_particles(), 0);
    assert_eq!(driver.portfolio().live_particles(), 0);
}

// ============================================================================
// Button animations
// ============================================================================

#[test]
fn resume_button_cycles_back_to_its_label() {
    let mut driver = driver_with(MemoryThemeStore::new());
    run_until(&mut driver, 1_000);
    let click = Event::ResumeClick {
        label: "Download Resume".into(),
    };
    driver.dispatch(1_000, click).unwrap();
    driver
        .dispatch(
            1_100,
            Event::ResumeClick {
                label: "Downloading...".into(),
            },
        )
        .unwrap();
    assert_eq!(
        driver.surface().text(Target::ResumeButton),
        Some("Downloading...")
    );
    run_until(&mut driver, 2_000);
    assert_eq!(
        driver.surface().text(Target::ResumeButton),
        Some("Downloaded! \u{1F4C4}")
    );
    run_until(&mut driver, 4_000);
    assert_eq!(
        driver.surface().text(Target::ResumeButton),
        Some("Download Resume")
    );
    assert_eq!(driver.surface().style(Target::ResumeButton, "background"), None);
}

#[test]
fn pointer_moves_tilt_visible_cards() {
    let mut driver = driver_with(MemoryThemeStore::new());
    let mut layout = page(0.0);
    layout.tilt_targets = vec![
        Rect::new(100.0, 100.0, 300.0, 200.0),
        Rect::new(100.0, 900.0, 300.0, 200.0),
    ];
    driver.surface_mut().set_layout(layout);
    driver
        .dispatch(
            1_000,
            Event::PointerMove {
                client_x: 1280.0,
                client_y: 800.0,
            },
        )
        .unwrap();

    let transform = driver
        .surface()
        .style(Target::TiltTarget(0), "transform")
        .unwrap();
    assert!(transform.starts_with("perspective(1000px)"));
    assert!(transform.ends_with("translateZ(10px)"));
    assert_eq!(driver.surface().style(Target::TiltTarget(1), "transform"), None);
    assert!(driver.portfolio().is_pointer_moving());

    driver.dispatch(1_200, Event::Resize).unwrap();
    assert_eq!(driver.surface().style(Target::TiltTarget(0), "transform"), None);
}
