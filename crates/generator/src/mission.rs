use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::briefing::Briefing;
use crate::gen_rng::GenRng;
use crate::laser_codes::LaserCodeCursor;

/// Mission-wide toggles chosen in the mission template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionOption {
    /// Add ingress/egress waypoints along the flight path in addition to the
    /// objective waypoints.
    AddExtraWaypoints,
    EnableCivilianTraffic,
    /// Force laser code 1113 so FC3 aircraft can buddy-lase.
    Fc3LaserCode,
    ImperialUnitsForBriefing,
    RadioMessagesTextOnly,
    /// Use a single fixed laser code (1688) for every JTAC.
    SingleLaserCode,
}

/// The set of options active for one mission template.
#[derive(Debug, Clone, Default)]
pub struct MissionOptions(HashSet<MissionOption>);

impl MissionOptions {
    pub fn contains(&self, option: MissionOption) -> bool {
        self.0.contains(&option)
    }

    pub fn enable(&mut self, option: MissionOption) {
        self.0.insert(option);
    }
}

impl FromIterator<MissionOption> for MissionOptions {
    fn from_iter<I: IntoIterator<Item = MissionOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mutable state owned by one mission generation run.
///
/// The RNG and the laser code cursor live here so that concurrent builds of
/// different missions never share them, and a fixed seed replays the exact
/// same mission.
pub struct MissionBuild {
    pub rng: GenRng,
    pub laser_codes: LaserCodeCursor,
    pub briefing: Briefing,
    pub options: MissionOptions,
}

impl MissionBuild {
    pub fn new(seed: u64, options: MissionOptions) -> Self {
        Self {
            rng: GenRng::from_seed_u64(seed),
            laser_codes: LaserCodeCursor::new(),
            briefing: Briefing::default(),
            options,
        }
    }
}
