//! Transient decorative effects: button-state animations and the success
//! particle burst.
//!
//! Button animations are tables of [`ButtonStage`]s. Entering a stage applies
//! its label and styles and schedules the next stage after `hold_ms`; the
//! last stage restores the control's original label and ends the animation.

use std::collections::HashMap;
use std::f64::consts::PI;

use rand::Rng;

use crate::directive::{Directive, Target};
use crate::layout::Rect;
use crate::scheduler::{Scheduler, Task};

/// A control that runs a button-state animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SubmitButton,
    ResumeDownload,
    ProjectLink(usize),
}

impl Control {
    pub fn target(&self) -> Target {
        match self {
            Control::SubmitButton => Target::SubmitButton,
            Control::ResumeDownload => Target::ResumeButton,
            Control::ProjectLink(index) => Target::ProjectLink(*index),
        }
    }

    pub fn stages(&self) -> &'static [ButtonStage] {
        match self {
            Control::SubmitButton => SUBMIT_STAGES,
            Control::ResumeDownload => DOWNLOAD_STAGES,
            Control::ProjectLink(_) => PROJECT_LINK_STAGES,
        }
    }
}

/// One visual state of an animated control.
#[derive(Debug)]
pub struct ButtonStage {
    /// Label to show; `None` restores the original
    pub label: Option<&'static str>,
    /// Time spent in this stage before the next one; unused on the last
    pub hold_ms: u64,
    pub disabled: Option<bool>,
    pub styles: &'static [(&'static str, &'static str)],
}

const SUCCESS_GRADIENT: &str = "linear-gradient(135deg, #38A169, #68D391)";

const RESTORE: ButtonStage = ButtonStage {
    label: None,
    hold_ms: 0,
    disabled: None,
    styles: &[("background", "")],
};

pub const SUBMIT_STAGES: &[ButtonStage] = &[
    ButtonStage {
        label: Some("Sending..."),
        hold_ms: 1500,
        disabled: Some(true),
        styles: &[
            ("transform", "scale(0.95)"),
            ("background", "linear-gradient(45deg, #4063B5, #E6791B, #4063B5)"),
            ("background-size", "200% 200%"),
            ("animation", "gradientShift 1.5s ease infinite"),
        ],
    },
    ButtonStage {
        label: Some("Message Sent! \u{2728}"),
        hold_ms: 2000,
        disabled: None,
        styles: &[
            ("background", SUCCESS_GRADIENT),
            ("animation", "none"),
            ("transform", "scale(1)"),
        ],
    },
    ButtonStage {
        disabled: Some(false),
        ..RESTORE
    },
];

pub const DOWNLOAD_STAGES: &[ButtonStage] = &[
    ButtonStage {
        label: Some("Downloading..."),
        hold_ms: 1000,
        disabled: None,
        styles: &[
            ("transform", "scale(0.95)"),
            (
                "background",
                "linear-gradient(90deg, #4063B5 0%, #E6791B 50%, #4063B5 100%)",
            ),
            ("background-size", "200% 100%"),
            ("animation", "downloadProgress 1s ease-in-out"),
        ],
    },
    ButtonStage {
        label: Some("Downloaded! \u{1F4C4}"),
        hold_ms: 2000,
        disabled: None,
        styles: &[
            ("background", SUCCESS_GRADIENT),
            ("animation", "none"),
            ("transform", "scale(1)"),
        ],
    },
    RESTORE,
];

pub const PROJECT_LINK_STAGES: &[ButtonStage] = &[
    ButtonStage {
        label: Some("Opening..."),
        hold_ms: 1000,
        disabled: None,
        styles: &[
            ("transform", "scale(0.95)"),
            ("background", "linear-gradient(45deg, #4063B5, #E6791B)"),
            ("background-size", "200% 200%"),
            ("animation", "gradientShift 1s ease infinite"),
        ],
    },
    ButtonStage {
        label: Some("Opened! \u{1F680}"),
        hold_ms: 2000,
        disabled: None,
        styles: &[
            ("background", SUCCESS_GRADIENT),
            ("animation", "none"),
            ("transform", "scale(1)"),
        ],
    },
    RESTORE,
];

/// Result of entering a stage.
#[derive(Debug, PartialEq)]
pub struct StageOutcome {
    pub directives: Vec<Directive>,
    /// The animation reached its last stage
    pub finished: bool,
}

/// Tracks which controls are mid-animation and their original labels.
#[derive(Debug, Default)]
pub struct ButtonAnimator {
    running: HashMap<Control, String>,
}

impl ButtonAnimator {
    pub fn is_running(&self, control: Control) -> bool {
        self.running.contains_key(&control)
    }

    /// Begin the animation. Returns `None` if the control is already animating.
    pub fn start(
        &mut self,
        control: Control,
        original_label: &str,
        scheduler: &mut Scheduler,
    ) -> Option<Vec<Directive>> {
        if self.is_running(control) {
            tracing::debug!(?control, "ignoring press while animating");
            return None;
        }
        self.running.insert(control, original_label.to_string());
        Some(self.enter(control, 0, scheduler).directives)
    }

    /// Enter `stage` of a running animation.
    pub fn enter(
        &mut self,
        control: Control,
        stage: usize,
        scheduler: &mut Scheduler,
    ) -> StageOutcome {
        let stages = control.stages();
        let Some(current) = stages.get(stage) else {
            self.running.remove(&control);
            return StageOutcome {
                directives: Vec::new(),
                finished: true,
            };
        };
        let target = control.target();
        let finished = stage + 1 == stages.len();

        let label = match current.label {
            Some(label) => Some(label.to_string()),
            None => self.running.get(&control).cloned(),
        };
        let mut directives: Vec<Directive> = label
            .map(|l| Directive::text(target, l))
            .into_iter()
            .collect();
        if let Some(disabled) = current.disabled {
            directives.push(Directive::SetDisabled { target, disabled });
        }
        directives.extend(
            current.styles
                .iter()
                .map(|&(property, value)| Directive::style(target, property, value)),
        );

        if finished {
            self.running.remove(&control);
        } else {
            scheduler.schedule(
                current.hold_ms,
                Task::ButtonStage {
                    control,
                    stage: stage + 1,
                },
            );
        }
        StageOutcome {
            directives,
            finished,
        }
    }
}

pub const PARTICLE_COUNT: u32 = 12;
pub const PARTICLE_LIFETIME_MS: u64 = 1000;

/// Displacement of each particle: evenly spaced angles, random speed in
/// [100, 150).
pub fn burst_vectors(rng: &mut impl Rng) -> Vec<(f64, f64)> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let angle = f64::from(i) / f64::from(PARTICLE_COUNT) * PI * 2.0;
            let velocity: f64 = rng.random_range(100.0..150.0);
            (angle.cos() * velocity, angle.sin() * velocity)
        })
        .collect()
}

/// Spawn a burst at the anchor's center; ids start at `first_id`.
pub fn create_success_particles(
    anchor: &Rect,
    first_id: u32,
    rng: &mut impl Rng,
    scheduler: &mut Scheduler,
) -> Vec<Directive> {
    let (x, y) = anchor.center();
    burst_vectors(rng)
        .into_iter()
        .zip(first_id..)
        .map(|((dx, dy), id)| {
            scheduler.schedule(PARTICLE_LIFETIME_MS, Task::RemoveParticle(id));
            Directive::SpawnParticle {
                id,
                x,
                y,
                dx,
                dy,
                duration_ms: PARTICLE_LIFETIME_MS,
            }
        })
        .collect()
}
