//! Coordinate resolution: the anchor point, the primary spawn point and the
//! secondary (egress) point for one feature request.

use rand::Rng;

use data::features::{DistanceRange, ObjectiveFeature};
use data::terrain::SpawnPointType;

use crate::config::{
    EGRESS_OFFSET_MAX_NM, EGRESS_OFFSET_MIN_NM, INTERCEPT_LERP_MAX, NM_TO_METERS,
    SPAWN_DISTANCE_HIGH_SCALE, SPAWN_DISTANCE_LOW_SCALE,
};
use crate::coordinates::Coordinates;
use crate::gen_rng::GenRng;
use crate::placement::{PlacementRequest, SkipReason};
use crate::spawn_points::SpawnPointFinder;

/// Where a feature spawns and where it moves to afterwards. An absent
/// primary point means the feature needs no spawn at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCoordinates {
    pub primary: Option<Coordinates>,
    pub secondary: Option<Coordinates>,
}

pub fn resolve<V: SpawnPointFinder>(
    request: &PlacementRequest<'_>,
    feature: &ObjectiveFeature,
    finder: &mut V,
    rng: &mut GenRng,
) -> Result<ResolvedCoordinates, SkipReason> {
    let traits = feature.traits;
    let mut anchor = request
        .override_coordinates
        .unwrap_or(request.target.coordinates);

    // Interceptors engage along the target's route, biased toward the
    // inbound leg rather than the destination.
    let waypoints = &request.target.waypoints;
    if traits.intercept && waypoints.len() > 1 {
        let t = rng.0.gen_range(0.0..INTERCEPT_LERP_MAX);
        anchor = Coordinates::lerp(
            waypoints[0].coordinates,
            waypoints[waypoints.len() - 1].coordinates,
            t,
        );
    }

    let mut primary = None;
    if traits.spawn_on_objective {
        // Spawn distance bounds are read as meters here; the spawn point
        // search below reads the same field as nautical miles.
        let point = anchor.offset_random(
            rng,
            feature.spawn_distance.min * SPAWN_DISTANCE_LOW_SCALE,
            feature.spawn_distance.max * SPAWN_DISTANCE_HIGH_SCALE,
        );
        let open_water_allowed = feature.allows_spawn_in(SpawnPointType::Sea)
            || feature.allows_spawn_in(SpawnPointType::Air);
        if !open_water_allowed && finder.classify(point) == SpawnPointType::Sea {
            return Err(SkipReason::InvalidSpawn);
        }
        primary = Some(point);
    } else if traits.has_unit_group {
        let range = DistanceRange::new(
            feature.spawn_distance.min * SPAWN_DISTANCE_LOW_SCALE * NM_TO_METERS,
            feature.spawn_distance.max * SPAWN_DISTANCE_HIGH_SCALE * NM_TO_METERS,
        );
        let family = if traits.use_front_line {
            feature.front_line_family()
        } else {
            None
        };
        match finder.find_spawn_point(rng, &feature.valid_spawn_points, anchor, range, family) {
            Some(point) => primary = Some(point),
            None => return Err(SkipReason::NoSpawnPoint),
        }
    }

    let mut secondary = primary.map(|point| {
        point.offset_random(
            rng,
            EGRESS_OFFSET_MIN_NM * NM_TO_METERS,
            EGRESS_OFFSET_MAX_NM * NM_TO_METERS,
        )
    });
    if traits.move_to_objective {
        secondary = Some(anchor);
    }

    Ok(ResolvedCoordinates { primary, secondary })
}
