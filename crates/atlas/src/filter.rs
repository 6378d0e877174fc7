//! Continent filtering over the city catalog.

use crate::catalog::{iter_cities, CityId, CityRecord};
use crate::continent::ContinentFilter;

/// Ordered subsequence of `catalog` whose continent passes `filter`.
///
/// `ContinentFilter::All` yields every entry in catalog order.
pub fn filter_by_continent(catalog: &[CityRecord], filter: ContinentFilter) -> Vec<&CityRecord> {
    catalog
        .iter()
        .filter(|record| filter.matches(record.continent))
        .collect()
}

/// Ids of the catalog cities that should currently have a marker.
pub fn visible_city_ids(filter: ContinentFilter) -> Vec<CityId> {
    iter_cities()
        .filter(|(_, record)| filter.matches(record.continent))
        .map(|(id, _)| id)
        .collect()
}
