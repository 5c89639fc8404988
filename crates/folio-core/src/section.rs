//! Page sections and their fixed document order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Identifier of a top-level page section.
///
/// Variants are declared in document order, which is also the order used
/// for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// The element id of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Achievements => "achievements",
            SectionId::Contact => "contact",
        }
    }

    /// Human readable title used in navigation.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Achievements => "Achievements",
            SectionId::Contact => "Contact",
        }
    }

    /// The fragment a navigation link points at, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Parse a link fragment (`#about`) back into a section.
    pub fn from_href(href: &str) -> Option<SectionId> {
        href.strip_prefix('#').and_then(|id| id.parse().ok())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}
