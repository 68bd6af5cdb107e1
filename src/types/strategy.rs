//! Boolean combination strategies for multi-word queries.

use std::str::FromStr;

use serde::Serialize;

use crate::types::error::PsearchError;

/// How the per-word position sets of a query are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// A record must contain every query word (intersection).
    All,
    /// A record must contain at least one query word (union).
    Any,
    /// A record must contain none of the query words (complement of union).
    None,
}

impl Strategy {
    /// Every strategy, in the order they are offered to the user.
    pub const VARIANTS: [Strategy; 3] = [Self::All, Self::Any, Self::None];

    /// Return the canonical upper-case name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Any => "ANY",
            Self::None => "NONE",
        }
    }

    /// Parse a strategy from its name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "ALL" => Some(Self::All),
            "ANY" => Some(Self::Any),
            "NONE" => Some(Self::None),
            _ => None,
        }
    }

    /// Comma-separated list of all strategy names, e.g. `ALL, ANY, NONE`.
    pub fn joined_names() -> String {
        Self::VARIANTS
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = PsearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PsearchError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Strategy::from_name("all"), Some(Strategy::All));
        assert_eq!(Strategy::from_name("Any"), Some(Strategy::Any));
        assert_eq!(Strategy::from_name("  nOnE \n"), Some(Strategy::None));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert!(Strategy::from_name("some").is_none());
        assert!(Strategy::from_name("").is_none());
        assert!(matches!(
            "every".parse::<Strategy>(),
            Err(PsearchError::UnknownStrategy(s)) if s == "every"
        ));
    }

    #[test]
    fn test_name_roundtrip() {
        for s in Strategy::VARIANTS {
            assert_eq!(Strategy::from_name(s.name()), Some(s));
        }
        assert_eq!(Strategy::joined_names(), "ALL, ANY, NONE");
    }
}
