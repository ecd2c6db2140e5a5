//! Identity document and gender enums
//!
//! Both enums are closed: every value has exactly one display label, and
//! there is no way to construct an unrecognized value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of identity document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    /// Resident identity card
    IdentityCard,
    /// Passport
    Passport,
    /// Home-return permit (Hong Kong, Macao and Taiwan residents)
    HomeReturnPermit,
}

impl IdType {
    /// All document types in selector order
    pub const ALL: [IdType; 3] = [
        IdType::IdentityCard,
        IdType::Passport,
        IdType::HomeReturnPermit,
    ];

    /// Human-readable label shown in the selector and the summary
    pub fn label(self) -> &'static str {
        match self {
            Self::IdentityCard => "resident ID card",
            Self::Passport => "passport",
            Self::HomeReturnPermit => "home-return permit",
        }
    }

    /// Next document type in selector order, wrapping around
    pub fn cycle_next(self) -> Self {
        match self {
            Self::IdentityCard => Self::Passport,
            Self::Passport => Self::HomeReturnPermit,
            Self::HomeReturnPermit => Self::IdentityCard,
        }
    }

    /// Previous document type in selector order, wrapping around
    pub fn cycle_prev(self) -> Self {
        match self {
            Self::IdentityCard => Self::HomeReturnPermit,
            Self::Passport => Self::IdentityCard,
            Self::HomeReturnPermit => Self::Passport,
        }
    }
}

impl Default for IdType {
    fn default() -> Self {
        Self::IdentityCard
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Gender as collected by the personal info step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// The other radio option
    pub fn toggle(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_type_labels() {
        assert_eq!(IdType::IdentityCard.label(), "resident ID card");
        assert_eq!(IdType::Passport.label(), "passport");
        assert_eq!(IdType::HomeReturnPermit.label(), "home-return permit");
    }

    #[test]
    fn test_id_type_labels_are_distinct() {
        let labels: HashSet<&str> = IdType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), IdType::ALL.len());
    }

    #[test]
    fn test_id_type_cycle_visits_every_value() {
        let mut seen = vec![IdType::default()];
        let mut current = IdType::default().cycle_next();
        while current != IdType::default() {
            seen.push(current);
            current = current.cycle_next();
        }
        assert_eq!(seen, IdType::ALL.to_vec());
        assert_eq!(IdType::IdentityCard.cycle_prev(), IdType::HomeReturnPermit);
    }

    #[test]
    fn test_serde_values() {
        let json = serde_json::to_string(&IdType::HomeReturnPermit).unwrap();
        assert_eq!(json, "\"home_return_permit\"");
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
        assert!(serde_json::from_str::<IdType>("\"drivers_license\"").is_err());
    }

    #[test]
    fn test_gender_toggle() {
        assert_eq!(Gender::Male.toggle(), Gender::Female);
        assert_eq!(Gender::Female.toggle(), Gender::Male);
    }
}
