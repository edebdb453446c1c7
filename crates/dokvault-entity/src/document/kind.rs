//! Document type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a stored document.
///
/// The wire representation uses the German labels shown to the user,
/// matching the values persisted by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Product manual.
    Handbuch,
    /// Technical datasheet.
    Datenblatt,
    /// Certificate.
    Zertifikat,
    /// Specification document.
    Spezifikation,
    /// Instructions.
    Anleitung,
    /// Anything else.
    Sonstiges,
}

impl DocumentKind {
    /// All kinds, in the order they are offered for selection.
    pub const ALL: [DocumentKind; 6] = [
        Self::Handbuch,
        Self::Datenblatt,
        Self::Zertifikat,
        Self::Spezifikation,
        Self::Anleitung,
        Self::Sonstiges,
    ];

    /// Return the kind as its persisted label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Handbuch => "Handbuch",
            Self::Datenblatt => "Datenblatt",
            Self::Zertifikat => "Zertifikat",
            Self::Spezifikation => "Spezifikation",
            Self::Anleitung => "Anleitung",
            Self::Sonstiges => "Sonstiges",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
