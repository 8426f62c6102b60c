//! Planner configuration.

use chrono::Duration;

/// How to choose "the first" among several candidates.
///
/// Applies wherever a station name resolves to more than one line, or two
/// lines are connected by more than one interchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lowest line number first; among interchanges, lowest position on
    /// the departure line first.
    #[default]
    LowestNumber,

    /// Whatever order the network source returned.
    SourceOrder,
}

/// A fare band: journeys of up to `max_stops` stops cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBand {
    pub max_stops: usize,
    pub fare: u32,
}

/// Fare and travel-time parameters for trip summaries.
#[derive(Debug, Clone)]
pub struct FareConfig {
    /// Bands in ascending `max_stops` order.
    pub bands: Vec<FareBand>,

    /// Fare when no band covers the stop count.
    pub max_fare: u32,

    /// Average time per stop (seconds).
    pub seconds_per_stop: i64,
}

impl FareConfig {
    /// Fare for a trip of `stops` stops.
    pub fn fare_for(&self, stops: usize) -> u32 {
        self.bands
            .iter()
            .find(|band| stops <= band.max_stops)
            .map_or(self.max_fare, |band| band.fare)
    }

    /// Estimated travel time for a trip of `stops` stops.
    pub fn travel_time(&self, stops: usize) -> Duration {
        Duration::seconds(self.seconds_per_stop * stops as i64)
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            bands: vec![
                FareBand {
                    max_stops: 9,
                    fare: 8,
                },
                FareBand {
                    max_stops: 16,
                    fare: 10,
                },
                FareBand {
                    max_stops: 23,
                    fare: 15,
                },
            ],
            max_fare: 20,
            seconds_per_stop: 210, // 3.5 minutes
        }
    }
}

/// Configuration for path planning.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Tie-break policy for candidate lines and interchanges.
    pub tie_break: TieBreak,

    /// Fare bands and timing used for trip summaries.
    pub fares: FareConfig,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(tie_break: TieBreak, fares: FareConfig) -> Self {
        Self { tie_break, fares }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.tie_break, TieBreak::LowestNumber);
        assert_eq!(config.fares.bands.len(), 3);
        assert_eq!(config.fares.max_fare, 20);
        assert_eq!(config.fares.seconds_per_stop, 210);
    }

    #[test]
    fn fare_bands() {
        let fares = FareConfig::default();

        assert_eq!(fares.fare_for(1), 8);
        assert_eq!(fares.fare_for(9), 8);
        assert_eq!(fares.fare_for(10), 10);
        assert_eq!(fares.fare_for(16), 10);
        assert_eq!(fares.fare_for(17), 15);
        assert_eq!(fares.fare_for(23), 15);
        assert_eq!(fares.fare_for(24), 20);
        assert_eq!(fares.fare_for(60), 20);
    }

    #[test]
    fn travel_time() {
        let fares = FareConfig::default();

        assert_eq!(fares.travel_time(0), Duration::zero());
        assert_eq!(fares.travel_time(2), Duration::minutes(7));
        assert_eq!(fares.travel_time(3), Duration::seconds(630));
    }

    #[test]
    fn custom_config() {
        let fares = FareConfig {
            bands: vec![FareBand {
                max_stops: 5,
                fare: 3,
            }],
            max_fare: 6,
            seconds_per_stop: 120,
        };
        let config = PlannerConfig::new(TieBreak::SourceOrder, fares);

        assert_eq!(config.tie_break, TieBreak::SourceOrder);
        assert_eq!(config.fares.fare_for(5), 3);
        assert_eq!(config.fares.fare_for(6), 6);
        assert_eq!(config.fares.travel_time(1), Duration::minutes(2));
    }
}
