//! Contact form validation and the simulated submission.
//!
//! Nothing is sent anywhere. A valid submission drives the submit button
//! through [`crate::effects::SUBMIT_STAGES`]; when that animation finishes
//! the form is reset and a particle burst is spawned.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::directive::{Directive, Target};
use crate::effects::{ButtonAnimator, Control};
use crate::scheduler::{Scheduler, Task};

/// Whitespace as browsers define it for `\s` and `trim()`: ASCII spaces,
/// the Unicode space separators, line/paragraph separators and the BOM.
/// Differs from [`char::is_whitespace`], which lacks U+FEFF and has U+0085.
const WHITESPACE_CLASS: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with browser whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{WHITESPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

const ERROR_FADE_IN_MS: u64 = 50;

/// The three fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Input element id; the error slot is `<id>-error`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values captured at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Field → message for every failing field.
pub type ValidationErrors = BTreeMap<Field, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length after trimming, in UTF-16 code units as a browser counts it.
pub fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_whitespace).encode_utf16().count()
}

/// Check all three fields independently.
pub fn validate_form(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if trimmed_len(&input.name) < 2 {
        errors.insert(Field::Name, "Name must be at least 2 characters long");
    }
    if !is_valid_email(&input.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if trimmed_len(&input.message) < 10 {
        errors.insert(Field::Message, "Message must be at least 10 characters long");
    }
    errors
}

/// Clear every error slot, then show the new messages starting hidden; the
/// fade-in is scheduled.
pub fn display_form_errors(errors: &ValidationErrors, scheduler: &mut Scheduler) -> Vec<Directive> {
    let mut directives: Vec<Directive> = Field::ALL
        .iter()
        .map(|&field| Directive::text(Target::ErrorSlot(field), ""))
        .collect();
    for (&field, &message) in errors {
        let slot = Target::ErrorSlot(field);
        directives.push(Directive::text(slot, message));
        directives.push(Directive::style(slot, "opacity", "0"));
        directives.push(Directive::style(slot, "transform", "translateY(-10px)"));
        scheduler.schedule(ERROR_FADE_IN_MS, Task::FadeInError(field));
    }
    directives
}

pub fn fade_in_error(field: Field) -> Vec<Directive> {
    let slot = Target::ErrorSlot(field);
    vec![
        Directive::style(slot, "transition", "all 0.3s ease"),
        Directive::style(slot, "opacity", "1"),
        Directive::style(slot, "transform", "translateY(0)"),
    ]
}

/// Where a submission attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// "Sending..." is showing
    Submitting,
    /// "Message Sent!" is showing
    Success,
}

/// Owns the submission state machine.
#[derive(Debug, Default)]
pub struct FormController {
    phase: FormPhase,
    errors: ValidationErrors,
    submissions: u64,
}

impl FormController {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Errors from the most recent attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Number of accepted (simulated) submissions.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Validate and, if clean, start the simulated send.
    pub fn submit(
        &mut self,
        input: &FormInput,
        button_label: &str,
        buttons: &mut ButtonAnimator,
        scheduler: &mut Scheduler,
    ) -> Vec<Directive> {
        if self.phase != FormPhase::Idle {
            tracing::debug!(phase = ?self.phase, "submission ignored while sending");
            return Vec::new();
        }

        self.errors = validate_form(input);
        let mut directives = display_form_errors(&self.errors, scheduler);
        if !self.errors.is_empty() {
            tracing::debug!(fields = self.errors.len(), "contact form rejected");
            return directives;
        }

        if let Some(start) = buttons.start(Control::SubmitButton, button_label, scheduler) {
            directives.extend(start);
            self.phase = FormPhase::Submitting;
            self.submissions += 1;
            tracing::info!("contact form accepted, simulating send");
        }
        directives
    }

    /// Follow the submit button's animation. Returns true when the sequence
    /// completed and the form should reset.
    pub fn on_button_stage(&mut self, stage: usize, finished: bool) -> bool {
        if finished {
            self.phase = FormPhase::Idle;
            self.errors.clear();
            true
        } else {
            self.phase = if stage == 0 {
                FormPhase::Submitting
            } else {
                FormPhase::Success
            };
            false
        }
    }
}
