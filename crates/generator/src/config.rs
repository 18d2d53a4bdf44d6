pub const NM_TO_METERS: f64 = 1852.0;

/// Scale factors applied to a feature's spawn distance bounds before a
/// spawn search: the search ring is [0.75 * min, 1.5 * max].
pub const SPAWN_DISTANCE_LOW_SCALE: f64 = 0.75;
pub const SPAWN_DISTANCE_HIGH_SCALE: f64 = 1.5;

/// Egress offset from the primary spawn point, in nautical miles.
pub const EGRESS_OFFSET_MIN_NM: f64 = 10.0;
pub const EGRESS_OFFSET_MAX_NM: f64 = 20.0;

/// Upper bound of the intercept anchor interpolation along the target's
/// route. Biases the anchor toward the inbound leg rather than the
/// destination.
pub const INTERCEPT_LERP_MAX: f64 = 0.8;

/// How close to the front line a spawn point must be when a feature
/// requests front-line proximity, by the lead family's mobility.
pub const FRONT_LINE_RADIUS_AIR_NM: f64 = 40.0;
pub const FRONT_LINE_RADIUS_GROUND_NM: f64 = 15.0;
