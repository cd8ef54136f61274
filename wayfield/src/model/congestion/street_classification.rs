use crate::model::network::StreetClass;
use serde::{Deserialize, Serialize};

/// Jaakkonen (2013)'s street classes, based on the functional classes of
/// the DigiRoad road classification. the source data's finer street-class
/// labels collapse into these three for crossing-penalty lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetClassification {
    Class1And2,
    Class3,
    Class4To6,
}

impl StreetClassification {
    /// collapses a street class into its crossing-penalty classification.
    /// tertiary and unclassified streets share the lowest class, so every
    /// input maps to a classification.
    pub fn from_street_class(street_class: StreetClass) -> StreetClassification {
        match street_class {
            StreetClass::Motorway | StreetClass::Primary => StreetClassification::Class1And2,
            StreetClass::Secondary => StreetClassification::Class3,
            StreetClass::Tertiary | StreetClass::Other => StreetClassification::Class4To6,
        }
    }

    /// collapses a stored street-class byte code; unrecognized codes land
    /// in the catch-all lowest class.
    pub fn from_code(code: u8) -> StreetClassification {
        StreetClassification::from_street_class(StreetClass::from_code(code))
    }
}
