//! Location domain model.
//!
//! A location is anything a trip can depart from or arrive to: a planet,
//! a star, a city. Locations form a containment tree through
//! `parent_location` (a city within a star system), referenced by name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// A named place in the directory.
///
/// The name is the identity: saving a location with an existing name
/// overwrites its attributes (upsert). Parent references are held by name
/// and are not validated for existence; a dangling parent is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub parent_location: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_location: None,
        }
    }

    pub fn with_parent(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_location: Some(parent.into()),
        }
    }
}

/// Typed save parameters parsed from a string-keyed form map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSaveParams {
    pub name: String,
    pub parent: Option<String>,
}

impl LocationSaveParams {
    /// Parse from form parameters. Absent keys are treated as empty strings.
    ///
    /// Fails with `ValidationFailed` when `name` is empty. An empty
    /// `parent` means no parent.
    pub fn from_params(params: &HashMap<String, String>) -> DomainResult<Self> {
        let name = params.get("name").map(String::as_str).unwrap_or("").trim();
        if name.is_empty() {
            return Err(DomainError::ValidationFailed(
                "location name is required".to_string(),
            ));
        }

        let parent = params
            .get("parent")
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            name: name.to_string(),
            parent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_name_and_parent() {
        let parsed =
            LocationSaveParams::from_params(&params(&[("name", "Mos Eisley"), ("parent", "Tatooine")]))
                .unwrap();
        assert_eq!(parsed.name, "Mos Eisley");
        assert_eq!(parsed.parent.as_deref(), Some("Tatooine"));
    }

    #[test]
    fn empty_parent_means_no_parent() {
        let parsed =
            LocationSaveParams::from_params(&params(&[("name", "Tatooine"), ("parent", "")])).unwrap();
        assert_eq!(parsed.parent, None);
    }

    #[test]
    fn rejects_missing_name() {
        let err = LocationSaveParams::from_params(&params(&[("parent", "Tatooine")])).unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
    }

    #[test]
    fn rejects_blank_name() {
        let err = LocationSaveParams::from_params(&params(&[("name", "   ")])).unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
    }
}
