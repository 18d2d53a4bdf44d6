use serde::{Deserialize, Serialize};

/// Terrain classification of a candidate spawn coordinate.
///
/// Land variants are sized by how much flat ground surrounds the point:
/// a `LandSmall` point fits an infantry section, a `LandLarge` point fits
/// a full vehicle column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnPointType {
    Air,
    Sea,
    LandSmall,
    LandMedium,
    LandLarge,
}

impl SpawnPointType {
    pub fn is_land(self) -> bool {
        matches!(
            self,
            SpawnPointType::LandSmall | SpawnPointType::LandMedium | SpawnPointType::LandLarge
        )
    }
}
