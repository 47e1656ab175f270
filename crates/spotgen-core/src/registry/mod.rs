//! Spot registry - the ordered list of pages to generate

mod builtin;

use crate::error::{Result, SpotgenError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Markup delimiters that must not appear in substituted text
const FORBIDDEN_DELIMITERS: [char; 2] = ['<', '>'];

/// Parameters for one output page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotRecord {
    /// Destination file stem, unique within a registry
    pub output_id: String,
    /// Text for the `<title>` element
    pub page_title: String,
    /// Text for the location heading
    pub location_label: String,
    /// Label placed before the "Last updated" anchor
    pub sub_location_name: String,
}

impl SpotRecord {
    pub fn new(
        output_id: impl Into<String>,
        page_title: impl Into<String>,
        location_label: impl Into<String>,
        sub_location_name: impl Into<String>,
    ) -> Self {
        Self {
            output_id: output_id.into(),
            page_title: page_title.into(),
            location_label: location_label.into(),
            sub_location_name: sub_location_name.into(),
        }
    }

    /// Check field-level invariants
    ///
    /// # Errors
    ///
    /// Returns `RegistryInvalidField` if a field is blank, the output id is not
    /// a plain file stem, or a text field carries a markup delimiter.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| SpotgenError::RegistryInvalidField {
            output_id: self.output_id.clone(),
            field,
            reason: reason.to_string(),
        };

        if self.output_id.trim().is_empty() {
            return Err(invalid("output_id", "must not be empty"));
        }
        if self.output_id.contains(['/', '\\']) || self.output_id == "." || self.output_id == ".."
        {
            return Err(invalid("output_id", "must be a file stem, not a path"));
        }

        let text_fields = [
            ("page_title", &self.page_title),
            ("location_label", &self.location_label),
            ("sub_location_name", &self.sub_location_name),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
            if value.contains(FORBIDDEN_DELIMITERS) {
                return Err(invalid(field, "must not contain '<' or '>'"));
            }
        }

        Ok(())
    }
}

/// Validated, ordered collection of spots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpotRegistry {
    spots: Vec<SpotRecord>,
}

impl SpotRegistry {
    /// Build a registry, validating every record and id uniqueness
    ///
    /// # Errors
    ///
    /// - `RegistryEmpty` if `spots` is empty
    /// - `RegistryInvalidField` for the first invalid record
    /// - `RegistryDuplicateId` for the first repeated output id
    pub fn new(spots: Vec<SpotRecord>) -> Result<Self> {
        if spots.is_empty() {
            return Err(SpotgenError::RegistryEmpty);
        }

        let mut seen = HashSet::new();
        for spot in &spots {
            spot.validate()?;
            if !seen.insert(spot.output_id.as_str()) {
                return Err(SpotgenError::RegistryDuplicateId(spot.output_id.clone()));
            }
        }

        Ok(Self { spots })
    }

    /// The spots shipped with spotgen
    pub fn builtin() -> Self {
        Self {
            spots: builtin::builtin_spots(),
        }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpotRecord> {
        self.spots.iter()
    }

    pub fn get(&self, output_id: &str) -> Option<&SpotRecord> {
        self.spots.iter().find(|spot| spot.output_id == output_id)
    }

    /// Keep only the listed ids, preserving registry order
    ///
    /// # Errors
    ///
    /// Returns `SpotNotFound` for the first id the registry does not contain.
    pub fn select(&self, output_ids: &[String]) -> Result<Self> {
        if let Some(unknown) = output_ids.iter().find(|id| self.get(id).is_none()) {
            return Err(SpotgenError::SpotNotFound(unknown.clone()));
        }

        let spots = self
            .spots
            .iter()
            .filter(|spot| output_ids.contains(&spot.output_id))
            .cloned()
            .collect();
        Ok(Self { spots })
    }
}

impl<'a> IntoIterator for &'a SpotRegistry {
    type Item = &'a SpotRecord;
    type IntoIter = std::slice::Iter<'a, SpotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.spots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: &str) -> SpotRecord {
        SpotRecord::new(id, format!("Title {}", id), "Somewhere", "Some Break")
    }

    #[test]
    fn test_new_keeps_order() {
        let registry = SpotRegistry::new(vec![spot("b"), spot("a"), spot("c")]).unwrap();
        let ids: Vec<_> = registry.iter().map(|s| s.output_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            SpotRegistry::new(Vec::new()),
            Err(SpotgenError::RegistryEmpty)
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_id() {
        let result = SpotRegistry::new(vec![spot("a"), spot("b"), spot("a")]);
        match result {
            Err(SpotgenError::RegistryDuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("Expected RegistryDuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_blank_field() {
        let mut record = spot("a");
        record.location_label = "   ".to_string();
        match record.validate() {
            Err(SpotgenError::RegistryInvalidField { field, .. }) => {
                assert_eq!(field, "location_label")
            }
            other => panic!("Expected RegistryInvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_markup() {
        let mut record = spot("a");
        record.page_title = "Hossegor</title><script>".to_string();
        match record.validate() {
            Err(SpotgenError::RegistryInvalidField { field, .. }) => {
                assert_eq!(field, "page_title")
            }
            other => panic!("Expected RegistryInvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_path_like_id() {
        for id in ["../escape", "dir/page", "dir\\page", ".."] {
            let record = spot(id);
            assert!(
                matches!(
                    record.validate(),
                    Err(SpotgenError::RegistryInvalidField {
                        field: "output_id",
                        ..
                    })
                ),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_validate_allows_ampersand() {
        let record = SpotRecord::new(
            "hossegor",
            "Ultra Forecast & Conditions | Hossegor",
            "Hossegor, France",
            "La Gravière",
        );
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_select_preserves_registry_order() {
        let registry = SpotRegistry::new(vec![spot("a"), spot("b"), spot("c")]).unwrap();
        let selected = registry
            .select(&["c".to_string(), "a".to_string()])
            .unwrap();
        let ids: Vec<_> = selected.iter().map(|s| s.output_id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_select_unknown_id() {
        let registry = SpotRegistry::builtin();
        match registry.select(&["pipeline".to_string()]) {
            Err(SpotgenError::SpotNotFound(id)) => assert_eq!(id, "pipeline"),
            other => panic!("Expected SpotNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_record() {
        let toml = r#"
output_id = "latorche"
page_title = "Ultra Forecast & Conditions | La Torche"
location_label = "La Torche, France"
sub_location_name = "Pointe de la Torche"
"#;
        let record: SpotRecord = toml::from_str(toml).unwrap();
        assert_eq!(record.output_id, "latorche");
        assert_eq!(record.sub_location_name, "Pointe de la Torche");
    }
}
