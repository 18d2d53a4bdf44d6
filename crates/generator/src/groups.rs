use serde::{Deserialize, Serialize};

use data::features::ObjectiveFeature;
use data::units::UnitCategory;

use crate::coordinates::Coordinates;
use crate::settings::GroupSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Ally,
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub coordinates: Coordinates,
}

/// A materialized (or previously placed) unit group.
///
/// The placement engine reads these as objective targets and produces new
/// ones through the group factory; it never mutates an existing group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupInfo {
    pub group_id: u32,
    pub name: String,
    pub coordinates: Coordinates,
    pub waypoints: Vec<Waypoint>,
    pub side: Side,
    pub category: UnitCategory,
    pub uncontrolled: bool,
    pub hidden: bool,
}

/// Materializes unit groups from resolved placement data.
///
/// May decline (returning `None`) for reasons outside the placement
/// engine's control; the engine reports the placement either way.
pub trait GroupFactory {
    #[allow(clippy::too_many_arguments)]
    fn materialize(
        &mut self,
        feature: &ObjectiveFeature,
        template: &str,
        primary: Option<Coordinates>,
        secondary: Option<Coordinates>,
        settings: &GroupSettings,
        side: Side,
        hide_enemy: bool,
    ) -> Option<GroupInfo>;
}

/// Reference factory: stamps groups straight from the template name and
/// settings, assigning sequential group ids.
#[derive(Debug, Default)]
pub struct TemplateGroupFactory {
    groups_created: u32,
}

impl TemplateGroupFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups_created(&self) -> u32 {
        self.groups_created
    }
}

impl GroupFactory for TemplateGroupFactory {
    fn materialize(
        &mut self,
        feature: &ObjectiveFeature,
        template: &str,
        primary: Option<Coordinates>,
        secondary: Option<Coordinates>,
        settings: &GroupSettings,
        side: Side,
        hide_enemy: bool,
    ) -> Option<GroupInfo> {
        if !feature.traits.has_unit_group || template.is_empty() {
            return None;
        }
        let coordinates = primary?;

        self.groups_created += 1;
        let group_id = self.groups_created;
        let name = match settings.get("ObjectiveName") {
            Some(objective) => format!("{}-{}-{}", template, objective, group_id),
            None => format!("{}-{}", template, group_id),
        };
        let category = feature
            .families
            .first()
            .map(|family| family.category())
            .unwrap_or(UnitCategory::Static);

        let mut waypoints = vec![Waypoint {
            name: "SPAWN".to_string(),
            coordinates,
        }];
        if let Some(egress) = secondary {
            waypoints.push(Waypoint {
                name: "EGRESS".to_string(),
                coordinates: egress,
            });
        }

        Some(GroupInfo {
            group_id,
            name,
            coordinates,
            waypoints,
            side,
            category,
            uncontrolled: false,
            hidden: hide_enemy && side == Side::Enemy,
        })
    }
}
