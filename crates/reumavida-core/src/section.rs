#![forbid(unsafe_code)]

//! The fixed, ordered list of navigable page sections.
//!
//! Declaration order matters twice: it is the order the nav bar renders its
//! controls in, and it is the priority order the sampler walks when several
//! section spans could contain the probe offset.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Stable identifier of a page section. Doubles as the DOM element id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Specialties,
    Contact,
}

impl SectionId {
    /// All ids in declaration order.
    pub const ALL: [SectionId; 4] = [Self::Home, Self::About, Self::Specialties, Self::Contact];

    /// Element id used in the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Specialties => "specialties",
            Self::Contact => "contact",
        }
    }

    /// Display label of the nav control for this section.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::About => "Sobre",
            Self::Specialties => "Especialidades",
            Self::Contact => "Contato",
        }
    }

    /// Position in declaration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_owned()))
    }
}

/// Static descriptor of one navigable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

impl Section {
    const fn of(id: SectionId) -> Self {
        Self {
            id,
            label: id.label(),
        }
    }
}

/// The page's sections, in declaration order.
pub const SECTIONS: [Section; 4] = [
    Section::of(SectionId::Home),
    Section::of(SectionId::About),
    Section::of(SectionId::Specialties),
    Section::of(SectionId::Contact),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_declaration_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        for (idx, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.id.index(), idx);
        }
    }

    #[test]
    fn labels_are_the_rendered_pt_br_text() {
        let labels: Vec<_> = SECTIONS.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Início", "Sobre", "Especialidades", "Contato"]);
    }

    #[test]
    fn parse_round_trips_every_id() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_differently_cased_ids() {
        assert_eq!(
            "Contact".parse::<SectionId>(),
            Err(NavError::UnknownSection("Contact".into()))
        );
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn serde_uses_element_ids() {
        let json = serde_json::to_string(&SectionId::Specialties).unwrap();
        assert_eq!(json, "\"specialties\"");
        let back: SectionId = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(back, SectionId::About);
    }
}
