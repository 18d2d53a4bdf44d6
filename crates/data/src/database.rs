use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use crate::features::ObjectiveFeature;

/// Top-level layout of a feature-set JSON document.
#[derive(Deserialize)]
struct FeatureSetFile {
    features: Vec<ObjectiveFeature>,
}

/// Immutable lookup of objective feature definitions.
///
/// Built once per mission generation run. A missing id is a first-class
/// outcome (`feature` returns `None`), not an error.
#[derive(Debug, Default)]
pub struct Database {
    features: HashMap<String, ObjectiveFeature>,
}

impl Database {
    /// Build a database from a list of definitions. Duplicate ids keep the
    /// first definition and drop the rest with a warning.
    pub fn with_features(features: Vec<ObjectiveFeature>) -> Self {
        let mut map = HashMap::new();
        for feature in features {
            if map.contains_key(&feature.id) {
                warn!(
                    "Database: duplicate feature id '{}', ignoring second definition",
                    feature.id
                );
                continue;
            }
            map.insert(feature.id.clone(), feature);
        }
        Self { features: map }
    }

    /// Parse a feature-set JSON document.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: FeatureSetFile =
            serde_json::from_str(json).map_err(|e| format!("feature set: {}", e))?;
        Ok(Self::with_features(file.features))
    }

    /// The stock feature set embedded in the crate.
    pub fn builtin() -> Self {
        match Self::from_json(include_str!("../data/features.json")) {
            Ok(db) => db,
            Err(e) => {
                warn!(
                    "Database: embedded feature set failed to parse, starting empty: {}",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn feature(&self, id: &str) -> Option<&ObjectiveFeature> {
        self.features.get(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{DistanceRange, FeatureTraits};

    fn bare_feature(id: &str) -> ObjectiveFeature {
        ObjectiveFeature {
            id: id.to_string(),
            traits: FeatureTraits::default(),
            spawn_distance: DistanceRange::default(),
            valid_spawn_points: Vec::new(),
            families: Vec::new(),
            group_template: String::new(),
            briefing_remarks: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_set_loads() {
        let db = Database::builtin();
        assert!(!db.is_empty());
        assert!(db.feature("TargetDesignationLaser").is_some());
        assert!(db.feature("EnemyCAP").is_some());
        assert!(db.feature("NoSuchFeature").is_none());
    }

    #[test]
    fn test_builtin_laser_feature_shape() {
        let db = Database::builtin();
        let jtac = db.feature("TargetDesignationLaser").unwrap();
        assert!(jtac.traits.has_unit_group);
        assert!(jtac.traits.spawn_on_objective);
        assert!(jtac.front_line_family().is_some());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Database::from_json("not json").is_err());
        assert!(Database::from_json(r#"{"features": [{"no_id": true}]}"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut a = bare_feature("Dup");
        a.group_template = "First".to_string();
        let mut b = bare_feature("Dup");
        b.group_template = "Second".to_string();

        let db = Database::with_features(vec![a, b]);
        assert_eq!(db.len(), 1);
        assert_eq!(db.feature("Dup").unwrap().group_template, "First");
    }
}
