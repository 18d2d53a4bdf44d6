use serde::{Deserialize, Serialize};

/// Broad unit categories, used for category-specific placement rules and
/// group script selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Helicopter,
    Infantry,
    Plane,
    Ship,
    Static,
    Vehicle,
}

impl UnitCategory {
    pub fn is_aircraft(self) -> bool {
        matches!(self, UnitCategory::Helicopter | UnitCategory::Plane)
    }
}

/// Functional family of a unit type. A feature lists its families in order;
/// the first one drives front-line proximity lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
    HelicopterAttack,
    HelicopterTransport,
    Infantry,
    InfantryManpads,
    PlaneCap,
    PlaneSead,
    PlaneStrike,
    ShipFrigate,
    ShipTransport,
    StaticStructure,
    VehicleAaa,
    VehicleApc,
    VehicleMbt,
    VehicleSamShort,
    VehicleTransport,
}

impl UnitFamily {
    pub fn category(self) -> UnitCategory {
        match self {
            UnitFamily::HelicopterAttack | UnitFamily::HelicopterTransport => {
                UnitCategory::Helicopter
            }
            UnitFamily::Infantry | UnitFamily::InfantryManpads => UnitCategory::Infantry,
            UnitFamily::PlaneCap | UnitFamily::PlaneSead | UnitFamily::PlaneStrike => {
                UnitCategory::Plane
            }
            UnitFamily::ShipFrigate | UnitFamily::ShipTransport => UnitCategory::Ship,
            UnitFamily::StaticStructure => UnitCategory::Static,
            UnitFamily::VehicleAaa
            | UnitFamily::VehicleApc
            | UnitFamily::VehicleMbt
            | UnitFamily::VehicleSamShort
            | UnitFamily::VehicleTransport => UnitCategory::Vehicle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_category_mapping() {
        assert_eq!(UnitFamily::PlaneCap.category(), UnitCategory::Plane);
        assert_eq!(UnitFamily::VehicleApc.category(), UnitCategory::Vehicle);
        assert_eq!(UnitFamily::ShipFrigate.category(), UnitCategory::Ship);
        assert_eq!(
            UnitFamily::HelicopterTransport.category(),
            UnitCategory::Helicopter
        );
    }

    #[test]
    fn test_aircraft_categories() {
        assert!(UnitCategory::Plane.is_aircraft());
        assert!(UnitCategory::Helicopter.is_aircraft());
        assert!(!UnitCategory::Vehicle.is_aircraft());
        assert!(!UnitCategory::Ship.is_aircraft());
    }
}
