use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::gen_rng::GenRng;

/// A point on the flat theater map plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_from(self, other: Coordinates) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation between two points. `t` = 0 is `from`, 1 is `to`.
    pub fn lerp(from: Coordinates, to: Coordinates, t: f64) -> Coordinates {
        Coordinates {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }

    /// A point at a random bearing from `self`, at a distance drawn
    /// uniformly from `[min, max)` meters.
    pub fn offset_random(self, rng: &mut GenRng, min: f64, max: f64) -> Coordinates {
        let bearing = rng.0.gen_range(0.0..std::f64::consts::TAU);
        let distance = if max > min { rng.0.gen_range(min..max) } else { min };
        Coordinates {
            x: self.x + bearing.cos() * distance,
            y: self.y + bearing.sin() * distance,
        }
    }
}
