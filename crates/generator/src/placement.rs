//! Objective feature placement orchestration.
//!
//! One `place` call runs a fixed pipeline per feature request: feature
//! lookup, coordinate resolution, settings merge, named special cases,
//! group materialization, briefing. Failures skip the feature with a
//! warning; they never abort the surrounding mission build.

use log::warn;
use rand::Rng;

use data::database::Database;
use data::features::ObjectiveFeature;
use data::units::UnitCategory;

use crate::briefing::BriefingItemType;
use crate::coordinates::Coordinates;
use crate::groups::{GroupFactory, GroupInfo, Side};
use crate::laser_codes::{FC3_LASER_CODE, SINGLE_LASER_CODE};
use crate::lua;
use crate::mission::{MissionBuild, MissionOption};
use crate::resolver;
use crate::settings::GroupSettings;
use crate::spawn_points::SpawnPointFinder;

/// Feature ids handled as named special cases. The set is open-ended: a new
/// case is one more id check that only touches the settings map or the
/// per-call template.
const LASER_DESIGNATION_ID: &str = "TargetDesignationLaser";
const ENEMY_CAP_ID: &str = "EnemyCAP";
/// Template swapped in when enemy CAP is tasked against a live aircraft
/// group.
const ESCORT_TEMPLATE: &str = "AircraftEscort";

/// One placement request. Constructed fresh per call and consumed by
/// [`FeaturePlacer::place`]; the target group is only read.
pub struct PlacementRequest<'a> {
    pub feature_id: &'a str,
    pub objective_name: &'a str,
    /// 0-based; briefed and exported 1-based.
    pub objective_index: usize,
    pub target: &'a GroupInfo,
    pub side: Side,
    pub hide_enemy: bool,
    pub override_coordinates: Option<Coordinates>,
    /// Caller-provided settings. Written first, so they win over anything
    /// the engine merges afterwards.
    pub settings: GroupSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnknownFeature,
    InvalidSpawn,
    NoSpawnPoint,
}

impl SkipReason {
    fn describe(self, feature_id: &str) -> String {
        match self {
            SkipReason::UnknownFeature => format!("Objective feature {} not found", feature_id),
            SkipReason::InvalidSpawn => {
                format!("Cannot spawn objective feature {}, invalid spawn", feature_id)
            }
            SkipReason::NoSpawnPoint => {
                format!("No spawn point found for objective feature {}", feature_id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    /// The feature was skipped; nothing was mutated.
    Skipped(SkipReason),
    /// The feature went through the factory. `group` is `None` when the
    /// factory declined.
    Placed {
        group: Option<GroupInfo>,
        settings: GroupSettings,
    },
}

impl PlacementOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, PlacementOutcome::Skipped(_))
    }

    pub fn group(&self) -> Option<&GroupInfo> {
        match self {
            PlacementOutcome::Placed { group, .. } => group.as_ref(),
            PlacementOutcome::Skipped(_) => None,
        }
    }

    pub fn settings(&self) -> Option<&GroupSettings> {
        match self {
            PlacementOutcome::Placed { settings, .. } => Some(settings),
            PlacementOutcome::Skipped(_) => None,
        }
    }
}

/// Places objective features for one mission build.
pub struct FeaturePlacer<'a, V, F> {
    database: &'a Database,
    theater: &'a mut V,
    factory: &'a mut F,
}

impl<'a, V: SpawnPointFinder, F: GroupFactory> FeaturePlacer<'a, V, F> {
    pub fn new(database: &'a Database, theater: &'a mut V, factory: &'a mut F) -> Self {
        Self {
            database,
            theater,
            factory,
        }
    }

    pub fn place(
        &mut self,
        build: &mut MissionBuild,
        request: PlacementRequest<'_>,
    ) -> PlacementOutcome {
        let database = self.database;
        let Some(feature) = database.feature(request.feature_id) else {
            return skip(SkipReason::UnknownFeature, request.feature_id);
        };

        let resolved = match resolver::resolve(&request, feature, self.theater, &mut build.rng) {
            Ok(resolved) => resolved,
            Err(reason) => return skip(reason, request.feature_id),
        };

        let mut settings = request.settings;
        settings.set_if_unused("ObjectiveName", request.objective_name);
        settings.set_if_unused("ObjectiveIndex", (request.objective_index + 1) as i64);
        settings.set_if_unused("ObjectiveGroupID", i64::from(request.target.group_id));

        // Per-call template override; the shared definition is never touched.
        let mut template = feature.group_template.clone();

        if request.feature_id == LASER_DESIGNATION_ID {
            let code = laser_code_for(build);
            settings.set_if_unused("LASERCODE", i64::from(code));
            build.briefing.append_item(
                BriefingItemType::Jtac,
                format!("{}\t{}", request.objective_name, code),
            );
        }

        if request.feature_id == ENEMY_CAP_ID
            && request.target.category == UnitCategory::Plane
            && !request.target.uncontrolled
        {
            template = ESCORT_TEMPLATE.to_string();
        }

        let group = self.factory.materialize(
            feature,
            &template,
            resolved.primary,
            resolved.secondary,
            &settings,
            request.side,
            request.hide_enemy,
        );

        append_feature_remark(build, feature, &settings);

        PlacementOutcome::Placed { group, settings }
    }
}

fn skip(reason: SkipReason, feature_id: &str) -> PlacementOutcome {
    warn!("{}", reason.describe(feature_id));
    PlacementOutcome::Skipped(reason)
}

/// The laser code for this placement: a mission-wide fixed code when one of
/// the fixed-code options is active, otherwise the next cursor value.
fn laser_code_for(build: &mut MissionBuild) -> u16 {
    if build.options.contains(MissionOption::Fc3LaserCode) {
        FC3_LASER_CODE
    } else if build.options.contains(MissionOption::SingleLaserCode) {
        SINGLE_LASER_CODE
    } else {
        build.laser_codes.next()
    }
}

/// Append one of the feature's briefing remark templates with the settings
/// substituted in.
fn append_feature_remark(
    build: &mut MissionBuild,
    feature: &ObjectiveFeature,
    settings: &GroupSettings,
) {
    if feature.briefing_remarks.is_empty() {
        return;
    }
    let index = build.rng.0.gen_range(0..feature.briefing_remarks.len());
    let mut remark = feature.briefing_remarks[index].clone();
    lua::replace_from_settings(&mut remark, settings);
    build.briefing.append_remark(remark);
}
