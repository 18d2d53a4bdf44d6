//! TestTheater: headless fixture for placement tests and benches.
//!
//! Wires the stock database, a deterministic theater index, the reference
//! group factory and a seeded mission build into one struct, so a test can
//! place features with one call and assert on the outcome.

use data::database::Database;
use data::terrain::SpawnPointType;
use data::units::UnitCategory;

use crate::coordinates::Coordinates;
use crate::groups::{GroupInfo, Side, TemplateGroupFactory, Waypoint};
use crate::mission::{MissionBuild, MissionOption, MissionOptions};
use crate::placement::{FeaturePlacer, PlacementOutcome, PlacementRequest};
use crate::settings::GroupSettings;
use crate::spawn_points::TheaterIndex;

/// Cell size of the fixture theater, meters.
const CELL: f64 = 1000.0;

pub struct TestTheater {
    pub database: Database,
    pub theater: TheaterIndex,
    pub factory: TemplateGroupFactory,
    pub build: MissionBuild,
}

impl Default for TestTheater {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTheater {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// A 64x64 km theater: the western 16 km strip is sea, land spawn
    /// candidates sit on a fixed lattice east of it, a few sea candidates
    /// float in the water, and the front line runs along the coast.
    pub fn with_seed(seed: u64) -> Self {
        let mut theater = TheaterIndex::all_land(64, 64, CELL);
        theater.set_sea_rect(0, 0, 15, 63);

        for gx in (18..62).step_by(4) {
            for gy in (2..62).step_by(4) {
                let coordinates =
                    Coordinates::new(gx as f64 * CELL + 500.0, gy as f64 * CELL + 500.0);
                let point_type = match (gx + gy) % 3 {
                    0 => SpawnPointType::LandSmall,
                    1 => SpawnPointType::LandMedium,
                    _ => SpawnPointType::LandLarge,
                };
                theater.add_spawn_point(coordinates, point_type);
            }
        }
        for gy in (4..60).step_by(6) {
            theater.add_spawn_point(
                Coordinates::new(8500.0, gy as f64 * CELL + 500.0),
                SpawnPointType::Sea,
            );
        }
        theater.set_front_line(
            (0..64)
                .step_by(8)
                .map(|gy| Coordinates::new(16_500.0, gy as f64 * CELL))
                .collect(),
        );

        Self {
            database: Database::builtin(),
            theater,
            factory: TemplateGroupFactory::new(),
            build: MissionBuild::new(seed, MissionOptions::default()),
        }
    }

    pub fn enable_option(mut self, option: MissionOption) -> Self {
        self.build.options.enable(option);
        self
    }

    /// A static enemy vehicle group on land, well clear of the coast.
    pub fn ground_target(&self) -> GroupInfo {
        GroupInfo {
            group_id: 901,
            name: "OBJ-GROUND".to_string(),
            coordinates: Coordinates::new(40_000.0, 32_000.0),
            waypoints: Vec::new(),
            side: Side::Enemy,
            category: UnitCategory::Vehicle,
            uncontrolled: false,
            hidden: false,
        }
    }

    /// A static enemy group anchored over open water.
    pub fn sea_target(&self) -> GroupInfo {
        GroupInfo {
            group_id: 902,
            name: "OBJ-SEA".to_string(),
            coordinates: Coordinates::new(8000.0, 32_000.0),
            waypoints: Vec::new(),
            side: Side::Enemy,
            category: UnitCategory::Ship,
            uncontrolled: false,
            hidden: false,
        }
    }

    /// An enemy transport flight with a three-waypoint route.
    pub fn air_target(&self) -> GroupInfo {
        let route = [
            Coordinates::new(44_000.0, 8000.0),
            Coordinates::new(40_000.0, 32_000.0),
            Coordinates::new(20_000.0, 52_000.0),
        ];
        GroupInfo {
            group_id: 903,
            name: "OBJ-AIR".to_string(),
            coordinates: route[0],
            waypoints: route
                .iter()
                .enumerate()
                .map(|(i, &coordinates)| Waypoint {
                    name: format!("WP{}", i),
                    coordinates,
                })
                .collect(),
            side: Side::Enemy,
            category: UnitCategory::Plane,
            uncontrolled: false,
            hidden: false,
        }
    }

    /// Place a feature with default request fields.
    pub fn place(
        &mut self,
        feature_id: &str,
        objective_name: &str,
        objective_index: usize,
        target: &GroupInfo,
    ) -> PlacementOutcome {
        self.place_request(PlacementRequest {
            feature_id,
            objective_name,
            objective_index,
            target,
            side: Side::Enemy,
            hide_enemy: false,
            override_coordinates: None,
            settings: GroupSettings::new(),
        })
    }

    pub fn place_request(&mut self, request: PlacementRequest<'_>) -> PlacementOutcome {
        let mut placer =
            FeaturePlacer::new(&self.database, &mut self.theater, &mut self.factory);
        placer.place(&mut self.build, request)
    }
}
