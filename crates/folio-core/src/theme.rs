//! Light/dark theme preference.
//!
//! The preference lives under a single storage key and is mirrored onto the
//! document root as `data-theme`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::directive::{Directive, Target};
use crate::error::FolioResult;
use crate::scheduler::{Scheduler, Task};

/// Storage key holding the preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Presentation attribute set on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

const THEME_TRANSITION: &str = "all 0.5s cubic-bezier(0.23, 1, 0.320, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark` reads as light.
    pub fn from_stored(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            other => {
                tracing::debug!(value = other, "unrecognised stored theme, using light");
                Theme::Light
            }
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: it offers the opposite theme.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{FE0F}",
            Theme::Light => "\u{1F319}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value store for the theme preference.
pub trait ThemeStore {
    /// Stored raw value, `None` on first visit.
    fn load(&self) -> FolioResult<Option<String>>;
    fn save(&mut self, value: &str) -> FolioResult<()>;
}

/// In-memory store, used off-browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> FolioResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> FolioResult<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Owns the active theme.
#[derive(Debug, Default)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Read the persisted preference (default light) and apply it.
    pub fn init(&mut self, store: &impl ThemeStore) -> Vec<Directive> {
        self.theme = match store.load() {
            Ok(Some(value)) => Theme::from_stored(&value),
            Ok(None) => Theme::Light,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::Light
            }
        };
        tracing::debug!(theme = %self.theme, "theme initialised");
        apply_theme(self.theme)
    }

    /// Flip the theme, persist it, and run the page-wide transition.
    pub fn toggle(
        &mut self,
        store: &mut impl ThemeStore,
        scheduler: &mut Scheduler,
        transition_ms: u64,
    ) -> Vec<Directive> {
        self.theme = self.theme.toggled();
        if let Err(e) = store.save(self.theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        tracing::info!(theme = %self.theme, "theme toggled");

        let mut directives = apply_theme(self.theme);
        directives.push(Directive::style(Target::Body, "transition", THEME_TRANSITION));
        scheduler.schedule(transition_ms, Task::ClearThemeTransition);
        directives
    }
}

/// Directives that put `theme` on the page.
pub fn apply_theme(theme: Theme) -> Vec<Directive> {
    vec![
        Directive::SetAttribute {
            target: Target::Root,
            name: THEME_ATTRIBUTE,
            value: theme.as_str().to_string(),
        },
        Directive::text(Target::ThemeIcon, theme.icon()),
    ]
}

pub fn clear_theme_transition() -> Directive {
    Directive::clear_style(Target::Body, "transition")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> FolioResult<Option<String>> {
            Err(FolioError::Storage("quota".into()))
        }

        fn save(&mut self, _value: &str) -> FolioResult<()> {
            Err(FolioError::Storage("quota".into()))
        }
    }

    #[test]
    fn first_visit_defaults_to_light() {
        let mut controller = ThemeController::default();
        let directives = controller.init(&MemoryThemeStore::new());
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(directives, apply_theme(Theme::Light));
    }

    #[test]
    fn init_reads_stored_dark() {
        let mut controller = ThemeController::default();
        controller.init(&MemoryThemeStore::with_value("dark"));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_persists_and_schedules_transition_clear() {
        let mut controller = ThemeController::default();
        let mut store = MemoryThemeStore::new();
        let mut scheduler = Scheduler::new();
        controller.init(&store);

        let directives = controller.toggle(&mut store, &mut scheduler, 500);
        assert_eq!(store.value(), Some("dark"));
        assert!(directives.contains(&Directive::style(
            Target::Body,
            "transition",
            THEME_TRANSITION
        )));
        assert_eq!(scheduler.next_due(), Some(500));
        assert_eq!(scheduler.pop_due(500), Some(Task::ClearThemeTransition));
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut controller = ThemeController::default();
        let mut store = MemoryThemeStore::with_value("light");
        let mut scheduler = Scheduler::new();
        let initial = controller.init(&store);

        controller.toggle(&mut store, &mut scheduler, 500);
        let second = controller.toggle(&mut store, &mut scheduler, 500);
        assert_eq!(store.value(), Some("light"));
        assert_eq!(&second[..2], &initial[..]);
    }

    #[test]
    fn storage_failures_do_not_block_toggle() {
        let mut controller = ThemeController::default();
        let mut store = BrokenStore;
        let mut scheduler = Scheduler::new();
        controller.init(&store);
        assert_eq!(controller.theme(), Theme::Light);
        controller.toggle(&mut store, &mut scheduler, 500);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_reads_as_light() {
        assert_eq!(Theme::from_stored("sepia"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
