//! The fixed set of cities shown on the globe.

use crate::continent::Continent;
use crate::geo::GeoCoord;

/// Stable identity of a catalog entry (its index in [`CITY_CATALOG`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub u8);

impl CityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityRecord {
    /// Display name, shown on the hover label and as the detail heading.
    pub name: &'static str,
    /// One-line blurb shown in the detail panel.
    pub description: &'static str,
    pub coord: GeoCoord,
    pub continent: Continent,
}

const fn record(
    name: &'static str,
    description: &'static str,
    lat: f32,
    lon: f32,
    continent: Continent,
) -> CityRecord {
    CityRecord {
        name,
        description,
        coord: GeoCoord::new(lat, lon),
        continent,
    }
}

pub const CITY_COUNT: usize = 10;

pub static CITY_CATALOG: [CityRecord; CITY_COUNT] = [
    record("New York", "The Big Apple!", 40.7128, -74.006, Continent::NorthAmerica),
    record("Paris", "The City of Lights!", 48.8566, 2.3522, Continent::Europe),
    record(
        "Sydney",
        "Home of the Sydney Opera House!",
        -33.8688,
        151.2093,
        Continent::Australia,
    ),
    record("Tokyo", "The bustling capital of Japan!", 35.6895, 139.6917, Continent::Asia),
    record(
        "London",
        "Famous for its history and architecture!",
        51.5074,
        -0.1278,
        Continent::Europe,
    ),
    record(
        "São Paulo",
        "The largest city in Brazil!",
        -23.5505,
        -46.6333,
        Continent::SouthAmerica,
    ),
    record("Moscow", "The capital of Russia!", 55.7558, 37.6173, Continent::Europe),
    record("Delhi", "The heart of India!", 28.6139, 77.209, Continent::Asia),
    record(
        "Buenos Aires",
        "The Paris of South America!",
        -34.6037,
        -58.3816,
        Continent::SouthAmerica,
    ),
    record("Rome", "The Eternal City!", 41.9028, 12.4964, Continent::Europe),
];

pub fn city(id: CityId) -> Option<&'static CityRecord> {
    CITY_CATALOG.get(id.index())
}

/// Every catalog entry paired with its id, in catalog order.
pub fn iter_cities() -> impl Iterator<Item = (CityId, &'static CityRecord)> {
    CITY_CATALOG
        .iter()
        .enumerate()
        .map(|(i, record)| (CityId(i as u8), record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_cities() {
        assert_eq!(CITY_CATALOG.len(), 10);
        assert_eq!(iter_cities().count(), 10);
    }

    #[test]
    fn test_catalog_coordinates_in_range() {
        for record in &CITY_CATALOG {
            assert!(
                (-90.0..=90.0).contains(&record.coord.lat),
                "{} latitude out of range",
                record.name
            );
            assert!(
                (-180.0..=180.0).contains(&record.coord.lon),
                "{} longitude out of range",
                record.name
            );
        }
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<_> = CITY_CATALOG.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CITY_COUNT);
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(city(CityId(1)).map(|c| c.name), Some("Paris"));
        assert_eq!(city(CityId(9)).map(|c| c.name), Some("Rome"));
        assert!(city(CityId(10)).is_none());
    }

    #[test]
    fn test_iter_ids_match_index() {
        for (id, record) in iter_cities() {
            assert_eq!(city(id), Some(record));
        }
    }
}
