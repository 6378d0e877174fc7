//! Continent tags and the sidebar's continent filter.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

/// Closed set of continent tags used to group catalog cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    NorthAmerica,
    Europe,
    Asia,
    Australia,
    SouthAmerica,
}

impl Continent {
    /// All continents, in selector order.
    pub const ALL: [Continent; 5] = [
        Continent::NorthAmerica,
        Continent::Europe,
        Continent::Asia,
        Continent::Australia,
        Continent::SouthAmerica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Continent {
    type Err = ParseContinentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseContinentError(s.to_string()))
    }
}

/// The continent filter currently applied to the marker set.
///
/// Owned as a resource by the top-level view; only changed through
/// [`crate::view_state::SetContinentFilter`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContinentFilter {
    #[default]
    All,
    Only(Continent),
}

impl ContinentFilter {
    /// The six options offered by the sidebar selector, in display order.
    pub const OPTIONS: [ContinentFilter; 6] = [
        ContinentFilter::All,
        ContinentFilter::Only(Continent::NorthAmerica),
        ContinentFilter::Only(Continent::Europe),
        ContinentFilter::Only(Continent::Asia),
        ContinentFilter::Only(Continent::Australia),
        ContinentFilter::Only(Continent::SouthAmerica),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContinentFilter::All => "All",
            ContinentFilter::Only(continent) => continent.label(),
        }
    }

    /// Whether a city tagged `continent` passes this filter.
    pub fn matches(self, continent: Continent) -> bool {
        match self {
            ContinentFilter::All => true,
            ContinentFilter::Only(wanted) => wanted == continent,
        }
    }
}

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContinentFilter {
    type Err = ParseContinentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(ContinentFilter::All);
        }
        s.parse().map(ContinentFilter::Only)
    }
}

/// A label that names neither a continent nor the "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContinentError(pub String);

impl fmt::Display for ParseContinentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown continent: {:?}", self.0)
    }
}

impl std::error::Error for ParseContinentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_label_round_trips_through_from_str() {
        for continent in Continent::ALL {
            assert_eq!(continent.label().parse::<Continent>(), Ok(continent));
        }
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<_> = ContinentFilter::OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            [
                "All",
                "North America",
                "Europe",
                "Asia",
                "Australia",
                "South America"
            ]
        );
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(ContinentFilter::default(), ContinentFilter::All);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for continent in Continent::ALL {
            assert!(ContinentFilter::All.matches(continent));
        }
    }

    #[test]
    fn test_filter_only_matches_single_continent() {
        let filter = ContinentFilter::Only(Continent::Asia);
        assert!(filter.matches(Continent::Asia));
        assert!(!filter.matches(Continent::Europe));
        assert!(!filter.matches(Continent::SouthAmerica));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("All".parse::<ContinentFilter>(), Ok(ContinentFilter::All));
        assert_eq!(
            "South America".parse::<ContinentFilter>(),
            Ok(ContinentFilter::Only(Continent::SouthAmerica))
        );
    }

    #[test]
    fn test_parse_unknown_label_is_error() {
        let err = "Antarctica".parse::<ContinentFilter>().unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Antarctica"), "got: {msg}");
        assert!(msg.contains("Unknown continent"), "got: {msg}");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("europe".parse::<Continent>().is_err());
    }

    #[test]
    fn test_parse_error_is_error_trait() {
        let err = ParseContinentError("x".to_string());
        assert!(std::error::Error::source(&err).is_none());
    }
}
