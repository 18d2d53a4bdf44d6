//! Objective feature placement engine.
//!
//! For each mission objective, this crate decides where auxiliary scenario
//! elements (escort flights, JTAC laser designators, intercept patrols...)
//! are spawned, how their egress point is chosen, and which derived
//! parameters (rotating laser codes, templated settings) are attached before
//! the group factory materializes them.
//!
//! Placement is a sequential batch process: one `MissionBuild` at a time,
//! one feature request at a time, with all randomness drawn from the build's
//! seeded RNG so identical seeds produce identical missions.

pub mod briefing;
pub mod config;
pub mod coordinates;
pub mod gen_rng;
pub mod groups;
pub mod laser_codes;
pub mod lua;
pub mod mission;
pub mod placement;
pub mod resolver;
pub mod settings;
pub mod spawn_points;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;
