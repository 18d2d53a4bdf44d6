use serde::{Deserialize, Serialize};

use crate::terrain::SpawnPointType;
use crate::units::UnitFamily;

/// Placement capabilities of an objective feature.
///
/// These are orthogonal switches, checked independently and in a fixed order
/// by the placement engine:
/// 1. `intercept` moves the anchor onto the target's flight path,
/// 2. `spawn_on_objective` / `has_unit_group` select how the primary spawn
///    point is found,
/// 3. `use_front_line` constrains the spawn search toward contested ground,
/// 4. `move_to_objective` redirects the egress point back to the anchor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureTraits {
    pub intercept: bool,
    pub spawn_on_objective: bool,
    pub move_to_objective: bool,
    pub use_front_line: bool,
    pub has_unit_group: bool,
}

/// Inclusive distance bounds for a spawn search.
///
/// The unit is decided by the consumer: the spawn-on-objective path reads
/// these as meters, the spawn-point search reads them as nautical miles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

impl DistanceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Immutable definition of an objective feature: an auxiliary scenario
/// element (escort flight, JTAC, air defense site...) attached to a mission
/// objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveFeature {
    pub id: String,
    #[serde(default)]
    pub traits: FeatureTraits,
    #[serde(default)]
    pub spawn_distance: DistanceRange,
    #[serde(default)]
    pub valid_spawn_points: Vec<SpawnPointType>,
    #[serde(default)]
    pub families: Vec<UnitFamily>,
    #[serde(default)]
    pub group_template: String,
    #[serde(default)]
    pub briefing_remarks: Vec<String>,
}

impl ObjectiveFeature {
    /// The family used for front-line proximity lookups.
    pub fn front_line_family(&self) -> Option<UnitFamily> {
        self.families.first().copied()
    }

    pub fn allows_spawn_in(&self, point_type: SpawnPointType) -> bool {
        self.valid_spawn_points.contains(&point_type)
    }
}
