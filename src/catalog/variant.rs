//! Variant table.

/// Coarse category used for scoring dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Void,
    Residential,
    Transit,
    Fire,
    Police,
    Health,
    Park,
    Education,
    Factory,
}

/// Fine-grained building type. Several variants share a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingType {
    Void,
    Residential,
    Road,
    Rail,
    Crossing,
    PoliceStation,
    FireStation,
    HealthClinic,
    RailwayStation,
    School,
    Factory,
    Park,
}

impl BuildingType {
    /// Returns the scoring category of this type.
    pub const fn kind(self) -> Kind {
        match self {
            BuildingType::Void => Kind::Void,
            BuildingType::Residential => Kind::Residential,
            BuildingType::Road
            | BuildingType::Rail
            | BuildingType::Crossing
            | BuildingType::RailwayStation => Kind::Transit,
            BuildingType::PoliceStation => Kind::Police,
            BuildingType::FireStation => Kind::Fire,
            BuildingType::HealthClinic => Kind::Health,
            BuildingType::School => Kind::Education,
            BuildingType::Factory => Kind::Factory,
            BuildingType::Park => Kind::Park,
        }
    }

    /// Road network cells: road and crossing.
    pub const fn is_road_network(self) -> bool {
        matches!(self, BuildingType::Road | BuildingType::Crossing)
    }

    /// Rail network cells: rail, crossing and stations.
    pub const fn is_rail_network(self) -> bool {
        matches!(
            self,
            BuildingType::Rail | BuildingType::Crossing | BuildingType::RailwayStation
        )
    }
}

/// A catalog entry.
///
/// Footprints are `width × height` cells anchored at one corner. Coverage
/// radii are per-axis boxes (`|dx| <= rx && |dy| <= ry`), not Euclidean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Void,
    Residential,
    Road,
    Rail,
    Crossing,
    SmallPoliceStation,
    BasicPoliceStation,
    PolicePrecinct,
    SmallFireStation,
    BasicFireStation,
    DeluxeFireStation,
    SmallHealthClinic,
    BasicHealthClinic,
    Hospital,
    SmallRailwayStation,
    MediumRailwayStation,
    CentralRailwayStation,
    DptEducation,
    NurserySchool,
    GradeSchool,
    PublicLibrary,
    HighSchool,
    CommunityCollege,
    University,
    SmallFountainPark,
    Factory,
}

/// Static attributes of one variant.
struct Attributes {
    building_type: BuildingType,
    width: usize,
    height: usize,
    radius_x: usize,
    radius_y: usize,
    needs_road: bool,
    needs_rail: bool,
    cost: f64,
}

const fn entry(
    building_type: BuildingType,
    footprint: (usize, usize),
    radius: (usize, usize),
    needs_road: bool,
    needs_rail: bool,
    cost: f64,
) -> Attributes {
    Attributes {
        building_type,
        width: footprint.0,
        height: footprint.1,
        radius_x: radius.0,
        radius_y: radius.1,
        needs_road,
        needs_rail,
        cost,
    }
}

impl Variant {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Variant; 26] = [
        Variant::Void,
        Variant::Residential,
        Variant::Road,
        Variant::Rail,
        Variant::Crossing,
        Variant::SmallPoliceStation,
        Variant::BasicPoliceStation,
        Variant::PolicePrecinct,
        Variant::SmallFireStation,
        Variant::BasicFireStation,
        Variant::DeluxeFireStation,
        Variant::SmallHealthClinic,
        Variant::BasicHealthClinic,
        Variant::Hospital,
        Variant::SmallRailwayStation,
        Variant::MediumRailwayStation,
        Variant::CentralRailwayStation,
        Variant::DptEducation,
        Variant::NurserySchool,
        Variant::GradeSchool,
        Variant::PublicLibrary,
        Variant::HighSchool,
        Variant::CommunityCollege,
        Variant::University,
        Variant::SmallFountainPark,
        Variant::Factory,
    ];

    /// Railway station variants.
    pub const STATIONS: [Variant; 3] = [
        Variant::SmallRailwayStation,
        Variant::MediumRailwayStation,
        Variant::CentralRailwayStation,
    ];

    /// Small services placed next to a struggling residence.
    pub const USEFUL_SMALL_SERVICES: [Variant; 6] = [
        Variant::SmallFountainPark,
        Variant::SmallHealthClinic,
        Variant::SmallPoliceStation,
        Variant::SmallFireStation,
        Variant::NurserySchool,
        Variant::SmallRailwayStation,
    ];

    const fn attributes(self) -> Attributes {
        use BuildingType as T;
        match self {
            Variant::Void => entry(T::Void, (1, 1), (0, 0), false, false, 0.0),
            Variant::Residential => entry(T::Residential, (2, 2), (0, 0), true, false, 50.0),
            Variant::Road => entry(T::Road, (1, 1), (0, 0), true, false, 1.0),
            Variant::Rail => entry(T::Rail, (1, 1), (0, 0), false, true, 1.0),
            Variant::Crossing => entry(T::Crossing, (1, 1), (0, 0), false, false, 3.0),

            Variant::SmallPoliceStation => entry(T::PoliceStation, (1, 1), (6, 8), true, false, 80.0),
            Variant::BasicPoliceStation => {
                entry(T::PoliceStation, (2, 2), (12, 12), true, false, 150.0)
            }
            Variant::PolicePrecinct => entry(T::PoliceStation, (4, 2), (24, 24), true, false, 300.0),
            Variant::SmallFireStation => entry(T::FireStation, (1, 1), (6, 8), true, false, 80.0),
            Variant::BasicFireStation => entry(T::FireStation, (2, 2), (10, 12), true, false, 150.0),
            Variant::DeluxeFireStation => {
                entry(T::FireStation, (4, 2), (22, 22), true, false, 300.0)
            }
            Variant::SmallHealthClinic => entry(T::HealthClinic, (1, 1), (8, 8), true, false, 80.0),
            Variant::BasicHealthClinic => {
                entry(T::HealthClinic, (2, 2), (12, 12), true, false, 150.0)
            }
            Variant::Hospital => entry(T::HealthClinic, (4, 2), (24, 24), true, false, 300.0),

            Variant::SmallRailwayStation => {
                entry(T::RailwayStation, (2, 3), (8, 8), true, true, 200.0)
            }
            Variant::MediumRailwayStation => {
                entry(T::RailwayStation, (4, 3), (10, 10), true, true, 300.0)
            }
            Variant::CentralRailwayStation => {
                entry(T::RailwayStation, (6, 3), (16, 16), true, true, 500.0)
            }

            Variant::DptEducation => entry(T::School, (2, 3), (8, 8), true, false, 120.0),
            Variant::NurserySchool => entry(T::School, (2, 2), (8, 8), true, false, 120.0),
            Variant::GradeSchool => entry(T::School, (3, 2), (10, 8), true, false, 120.0),
            Variant::PublicLibrary => entry(T::School, (2, 2), (12, 8), true, false, 120.0),
            Variant::HighSchool => entry(T::School, (4, 2), (14, 12), true, false, 200.0),
            Variant::CommunityCollege => entry(T::School, (4, 3), (16, 16), true, false, 200.0),
            Variant::University => entry(T::School, (4, 4), (22, 22), true, false, 400.0),

            Variant::SmallFountainPark => entry(T::Park, (1, 1), (8, 8), true, false, 40.0),
            Variant::Factory => entry(T::Factory, (2, 2), (4, 4), true, false, 100.0),
        }
    }

    pub const fn building_type(self) -> BuildingType {
        self.attributes().building_type
    }

    pub const fn kind(self) -> Kind {
        self.building_type().kind()
    }

    /// Footprint as `(width, height)` in cells.
    pub const fn footprint(self) -> (usize, usize) {
        let s = self.attributes();
        (s.width, s.height)
    }

    /// Coverage radius as `(rx, ry)`.
    pub const fn radius(self) -> (usize, usize) {
        let s = self.attributes();
        (s.radius_x, s.radius_y)
    }

    /// Whether a road-network cell must touch the footprint.
    pub const fn needs_road(self) -> bool {
        self.attributes().needs_road
    }

    /// Whether a rail-network cell must touch the footprint.
    pub const fn needs_rail(self) -> bool {
        self.attributes().needs_rail
    }

    /// Construction cost of one instance.
    pub const fn cost(self) -> f64 {
        self.attributes().cost
    }

    pub const fn is_void(self) -> bool {
        matches!(self, Variant::Void)
    }

    /// Variants dropped on random cells by seeding and random additions:
    /// everything except void, residences and roads.
    pub const fn is_randomly_placeable(self) -> bool {
        !matches!(self, Variant::Void | Variant::Residential | Variant::Road)
    }

    /// The randomly placeable variants, in catalog order.
    pub fn randomly_placeable() -> Vec<Variant> {
        Variant::ALL
            .into_iter()
            .filter(|v| v.is_randomly_placeable())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Variant::ALL[0], Variant::Void);
    }

    #[test]
    fn test_basic_health_clinic() {
        let v = Variant::BasicHealthClinic;
        assert_eq!(v.footprint(), (2, 2));
        assert!((v.cost() - 150.0).abs() < 1e-12);
        assert!(v.needs_road());
        assert!(!v.needs_rail());
        assert_eq!(v.kind(), Kind::Health);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Variant::Road.kind(), Kind::Transit);
        assert_eq!(Variant::SmallRailwayStation.kind(), Kind::Transit);
        assert_eq!(Variant::University.kind(), Kind::Education);
        assert_eq!(Variant::Factory.kind(), Kind::Factory);
        assert_eq!(Variant::Void.kind(), Kind::Void);
    }

    #[test]
    fn test_networks() {
        assert!(BuildingType::Road.is_road_network());
        assert!(BuildingType::Crossing.is_road_network());
        assert!(!BuildingType::Rail.is_road_network());
        assert!(BuildingType::Crossing.is_rail_network());
        assert!(BuildingType::RailwayStation.is_rail_network());
        assert!(!BuildingType::Road.is_rail_network());
    }

    #[test]
    fn test_stations_need_both_networks() {
        for v in Variant::STATIONS {
            assert_eq!(v.building_type(), BuildingType::RailwayStation);
            assert!(v.needs_road() && v.needs_rail());
        }
    }

    #[test]
    fn test_void_is_free_single_cell() {
        assert_eq!(Variant::Void.footprint(), (1, 1));
        assert_eq!(Variant::Void.cost(), 0.0);
        assert!(Variant::Void.is_void());
        assert!(!Variant::Road.is_void());
    }
}
