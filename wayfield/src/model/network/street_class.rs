use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// street classification assigned by network loading from the source data's
/// road labels, stored per edge as a single byte code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetClass {
    Motorway,
    Primary,
    Secondary,
    Tertiary,
    Other,
}

impl StreetClass {
    /// the single-byte code stored in the edge columns.
    pub fn code(&self) -> u8 {
        match self {
            StreetClass::Motorway => 0,
            StreetClass::Primary => 1,
            StreetClass::Secondary => 2,
            StreetClass::Tertiary => 3,
            StreetClass::Other => 4,
        }
    }

    /// decodes a stored street-class byte. unrecognized codes decode to
    /// [`StreetClass::Other`] so downstream policy lookups always resolve.
    pub fn from_code(code: u8) -> StreetClass {
        match code {
            0 => StreetClass::Motorway,
            1 => StreetClass::Primary,
            2 => StreetClass::Secondary,
            3 => StreetClass::Tertiary,
            _ => StreetClass::Other,
        }
    }
}

impl Display for StreetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreetClass::Motorway => write!(f, "motorway"),
            StreetClass::Primary => write!(f, "primary"),
            StreetClass::Secondary => write!(f, "secondary"),
            StreetClass::Tertiary => write!(f, "tertiary"),
            StreetClass::Other => write!(f, "other"),
        }
    }
}
