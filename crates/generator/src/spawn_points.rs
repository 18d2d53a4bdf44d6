//! Theater spawn-point classification and search.
//!
//! The placement engine only sees the `SpawnPointFinder` trait; the
//! `TheaterIndex` below is the stock implementation backed by a coarse
//! sea/land cell grid and a list of surveyed spawn candidates.

use rand::Rng;

use data::features::DistanceRange;
use data::terrain::SpawnPointType;
use data::units::UnitFamily;

use crate::config::{FRONT_LINE_RADIUS_AIR_NM, FRONT_LINE_RADIUS_GROUND_NM, NM_TO_METERS};
use crate::coordinates::Coordinates;
use crate::gen_rng::GenRng;

/// Terrain queries the placement engine needs from the theater.
pub trait SpawnPointFinder {
    /// Classify the terrain under a coordinate.
    fn classify(&self, coordinates: Coordinates) -> SpawnPointType;

    /// Search for a random spawn point of one of `valid_types`, within
    /// `range` meters of `anchor`. When `front_line_family` is given the
    /// search is constrained toward the front line. `None` when the search
    /// is exhausted.
    fn find_spawn_point(
        &mut self,
        rng: &mut GenRng,
        valid_types: &[SpawnPointType],
        anchor: Coordinates,
        range: DistanceRange,
        front_line_family: Option<UnitFamily>,
    ) -> Option<Coordinates>;
}

/// How far from the front line a spawn point may be, by the lead family's
/// mobility.
fn front_line_radius(family: UnitFamily) -> f64 {
    if family.category().is_aircraft() {
        FRONT_LINE_RADIUS_AIR_NM * NM_TO_METERS
    } else {
        FRONT_LINE_RADIUS_GROUND_NM * NM_TO_METERS
    }
}

/// Stock spawn-point source for one theater.
///
/// Holds a sea/land cell grid plus the surveyed spawn candidates. Chosen
/// candidates are consumed so the same point is never handed out twice
/// within a mission build.
#[derive(Debug, Clone)]
pub struct TheaterIndex {
    width: usize,
    height: usize,
    cell_size: f64,
    sea: Vec<bool>,
    candidates: Vec<(Coordinates, SpawnPointType)>,
    front_line: Vec<Coordinates>,
}

impl TheaterIndex {
    /// An all-land theater of `width` x `height` cells of `cell_size` meters.
    pub fn all_land(width: usize, height: usize, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
            sea: vec![false; width * height],
            candidates: Vec::new(),
            front_line: Vec::new(),
        }
    }

    /// Mark the inclusive cell rectangle as open water.
    pub fn set_sea_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        for y in y0..=y1.min(self.height - 1) {
            for x in x0..=x1.min(self.width - 1) {
                self.sea[y * self.width + x] = true;
            }
        }
    }

    pub fn add_spawn_point(&mut self, coordinates: Coordinates, point_type: SpawnPointType) {
        self.candidates.push((coordinates, point_type));
    }

    pub fn set_front_line(&mut self, points: Vec<Coordinates>) {
        self.front_line = points;
    }

    pub fn remaining_spawn_points(&self) -> usize {
        self.candidates.len()
    }

    fn cell_index(&self, coordinates: Coordinates) -> Option<usize> {
        if coordinates.x < 0.0 || coordinates.y < 0.0 {
            return None;
        }
        let x = (coordinates.x / self.cell_size) as usize;
        let y = (coordinates.y / self.cell_size) as usize;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn near_front_line(&self, coordinates: Coordinates, radius: f64) -> bool {
        self.front_line
            .iter()
            .any(|point| point.distance_from(coordinates) <= radius)
    }
}

impl SpawnPointFinder for TheaterIndex {
    fn classify(&self, coordinates: Coordinates) -> SpawnPointType {
        match self.cell_index(coordinates) {
            Some(index) if self.sea[index] => SpawnPointType::Sea,
            Some(_) => SpawnPointType::LandMedium,
            // Everything beyond the mapped area is open ocean.
            None => SpawnPointType::Sea,
        }
    }

    fn find_spawn_point(
        &mut self,
        rng: &mut GenRng,
        valid_types: &[SpawnPointType],
        anchor: Coordinates,
        range: DistanceRange,
        front_line_family: Option<UnitFamily>,
    ) -> Option<Coordinates> {
        // Airborne spawns are free-form: any bearing within the range ring.
        if valid_types.contains(&SpawnPointType::Air) {
            return Some(anchor.offset_random(rng, range.min, range.max));
        }

        let mut matches: Vec<usize> = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, (coordinates, point_type))| {
                valid_types.contains(point_type)
                    && range.contains(coordinates.distance_from(anchor))
            })
            .map(|(index, _)| index)
            .collect();

        if let Some(family) = front_line_family {
            if !self.front_line.is_empty() {
                let radius = front_line_radius(family);
                matches.retain(|&index| self.near_front_line(self.candidates[index].0, radius));
            }
        }

        if matches.is_empty() {
            return None;
        }
        let pick = matches[rng.0.gen_range(0..matches.len())];
        let (coordinates, _) = self.candidates.swap_remove(pick);
        Some(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_theater() -> TheaterIndex {
        // 10x10 km, western 4 km is sea.
        let mut theater = TheaterIndex::all_land(10, 10, 1000.0);
        theater.set_sea_rect(0, 0, 3, 9);
        theater
    }

    #[test]
    fn test_classify_sea_land_and_off_map() {
        let theater = small_theater();
        assert_eq!(
            theater.classify(Coordinates::new(2000.0, 5000.0)),
            SpawnPointType::Sea
        );
        assert_eq!(
            theater.classify(Coordinates::new(8000.0, 5000.0)),
            SpawnPointType::LandMedium
        );
        assert_eq!(
            theater.classify(Coordinates::new(-500.0, 5000.0)),
            SpawnPointType::Sea
        );
        assert_eq!(
            theater.classify(Coordinates::new(5000.0, 25_000.0)),
            SpawnPointType::Sea
        );
    }

    #[test]
    fn test_air_spawn_is_free_form() {
        let mut theater = small_theater();
        let mut rng = GenRng::from_seed_u64(3);
        let anchor = Coordinates::new(5000.0, 5000.0);
        let point = theater
            .find_spawn_point(
                &mut rng,
                &[SpawnPointType::Air],
                anchor,
                DistanceRange::new(2000.0, 4000.0),
                None,
            )
            .expect("air spawn always resolves");
        let d = point.distance_from(anchor);
        assert!(d >= 1999.9 && d < 4000.1, "distance {} out of ring", d);
    }

    #[test]
    fn test_candidates_filtered_by_type_and_distance() {
        let mut theater = small_theater();
        let anchor = Coordinates::new(5000.0, 5000.0);
        // Wrong type, right distance.
        theater.add_spawn_point(Coordinates::new(5000.0, 7000.0), SpawnPointType::Sea);
        // Right type, too close.
        theater.add_spawn_point(Coordinates::new(5100.0, 5000.0), SpawnPointType::LandSmall);
        // Right type, right distance.
        let good = Coordinates::new(5000.0, 8000.0);
        theater.add_spawn_point(good, SpawnPointType::LandSmall);

        let mut rng = GenRng::from_seed_u64(11);
        let found = theater.find_spawn_point(
            &mut rng,
            &[SpawnPointType::LandSmall],
            anchor,
            DistanceRange::new(1000.0, 5000.0),
            None,
        );
        assert_eq!(found, Some(good));
    }

    #[test]
    fn test_chosen_candidates_are_consumed() {
        let mut theater = small_theater();
        let anchor = Coordinates::new(5000.0, 5000.0);
        theater.add_spawn_point(Coordinates::new(5000.0, 8000.0), SpawnPointType::LandSmall);
        assert_eq!(theater.remaining_spawn_points(), 1);

        let mut rng = GenRng::from_seed_u64(4);
        let range = DistanceRange::new(1000.0, 5000.0);
        assert!(theater
            .find_spawn_point(&mut rng, &[SpawnPointType::LandSmall], anchor, range, None)
            .is_some());
        assert_eq!(theater.remaining_spawn_points(), 0);
        assert!(theater
            .find_spawn_point(&mut rng, &[SpawnPointType::LandSmall], anchor, range, None)
            .is_none());
    }

    #[test]
    fn test_front_line_constraint_filters_far_candidates() {
        // 100x100 km so candidates can actually sit beyond the 15 NM
        // ground-unit front line radius.
        let mut theater = TheaterIndex::all_land(100, 100, 1000.0);
        let anchor = Coordinates::new(50_000.0, 50_000.0);
        theater.set_front_line(vec![Coordinates::new(40_000.0, 50_000.0)]);

        let near_front = Coordinates::new(45_000.0, 50_000.0);
        theater.add_spawn_point(near_front, SpawnPointType::LandMedium);
        // In range of the anchor but ~41 km from the front line marker.
        theater.add_spawn_point(Coordinates::new(50_000.0, 90_000.0), SpawnPointType::LandMedium);

        let mut far_line = theater.clone();
        far_line.set_front_line(vec![Coordinates::new(900_000.0, 900_000.0)]);

        let mut rng = GenRng::from_seed_u64(8);
        let range = DistanceRange::new(1000.0, 45_000.0);
        let found = theater.find_spawn_point(
            &mut rng,
            &[SpawnPointType::LandMedium],
            anchor,
            range,
            Some(UnitFamily::VehicleSamShort),
        );
        assert_eq!(found, Some(near_front));

        // Nothing survives the filter when the whole front is out of reach.
        let mut rng = GenRng::from_seed_u64(8);
        let found = far_line.find_spawn_point(
            &mut rng,
            &[SpawnPointType::LandMedium],
            anchor,
            range,
            Some(UnitFamily::VehicleSamShort),
        );
        assert_eq!(found, None);
    }
}
