//! Per-line station ordering and the directional slice.
//!
//! A directional slice is the contiguous run of stations between two
//! positions on one line, walking towards the destination. It is the one
//! primitive every path is assembled from.

use std::cmp::Ordering;

use crate::domain::{LineNo, Station};
use crate::network::NetworkSource;

use super::error::PlannerError;

/// Direction of travel along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing `StationNo`.
    Ascending,
    /// Decreasing `StationNo`.
    Descending,
}

impl Direction {
    /// Direction from `from` to `to`, or `None` if they are the same station.
    pub fn between(from: &Station, to: &Station) -> Option<Direction> {
        match from.station_no.cmp(&to.station_no) {
            Ordering::Less => Some(Direction::Ascending),
            Ordering::Greater => Some(Direction::Descending),
            Ordering::Equal => None,
        }
    }
}

/// Sort stations by position in the given direction.
pub fn order_stations(stations: &mut [Station], direction: Direction) {
    match direction {
        Direction::Ascending => stations.sort_by_key(|s| s.station_no),
        Direction::Descending => stations.sort_by_key(|s| std::cmp::Reverse(s.station_no)),
    }
}

/// Slice `line_stations` from `from` to `to`, both inclusive.
///
/// `line_stations` is every station on the line that owns `from` and `to`,
/// in any order. Walks in the direction of `to`, skipping up to `from` and
/// taking `|from − to| + 1` stations. Equal positions give `[from]`.
pub fn slice_between(mut line_stations: Vec<Station>, from: &Station, to: &Station) -> Vec<Station> {
    debug_assert_eq!(from.line, to.line, "slice endpoints must share a line");

    let Some(direction) = Direction::between(from, to) else {
        return vec![from.clone()];
    };

    order_stations(&mut line_stations, direction);
    line_stations
        .into_iter()
        .skip_while(|s| s.station_no != from.station_no)
        .take(from.station_no.span_to(to.station_no))
        .collect()
}

/// Line-level queries over a network source.
pub struct LineTopology<'a, S: NetworkSource> {
    source: &'a S,
}

impl<'a, S: NetworkSource> LineTopology<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// All stations on `line`, unordered. Empty for an unknown line.
    pub async fn stations_on_line(&self, line: LineNo) -> Result<Vec<Station>, PlannerError> {
        Ok(self.source.stations_for_line(line).await?)
    }

    /// All stations on `line`, sorted in `direction`.
    pub async fn ordered_stations(
        &self,
        line: LineNo,
        direction: Direction,
    ) -> Result<Vec<Station>, PlannerError> {
        let mut stations = self.stations_on_line(line).await?;
        order_stations(&mut stations, direction);
        Ok(stations)
    }

    /// Directional slice from `from` to `to` on their shared owning line.
    pub async fn directional_slice(
        &self,
        from: &Station,
        to: &Station,
    ) -> Result<Vec<Station>, PlannerError> {
        if Direction::between(from, to).is_none() {
            return Ok(vec![from.clone()]);
        }
        let stations = self.stations_on_line(from.line).await?;
        Ok(slice_between(stations, from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::fixtures::{ReversedSource, names, positions, station, two_lines};

    fn line_one() -> Vec<Station> {
        two_lines().stations_on(LineNo(1))
    }

    #[test]
    fn direction_between() {
        let a = station(1, 2, "A");
        let b = station(1, 5, "B");
        assert_eq!(Direction::between(&a, &b), Some(Direction::Ascending));
        assert_eq!(Direction::between(&b, &a), Some(Direction::Descending));
        assert_eq!(Direction::between(&a, &a), None);
    }

    #[test]
    fn slice_forward() {
        let stations = line_one();
        let from = stations[1].clone();
        let to = stations[3].clone();

        let slice = slice_between(stations, &from, &to);
        assert_eq!(positions(&slice), vec![2, 3, 4]);
        assert_eq!(names(&slice), vec!["Station 2", "Shared", "Station 4"]);
    }

    #[test]
    fn slice_backward() {
        let stations = line_one();
        let from = stations[4].clone();
        let to = stations[0].clone();

        let slice = slice_between(stations, &from, &to);
        assert_eq!(positions(&slice), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn slice_same_station_is_singleton() {
        let stations = line_one();
        let from = stations[2].clone();

        let slice = slice_between(stations, &from, &from);
        assert_eq!(slice, vec![from]);
    }

    #[test]
    fn slice_ignores_input_order() {
        let mut stations = line_one();
        stations.reverse();
        stations.swap(0, 2);
        let from = station(1, 1, "Station 1");
        let to = station(1, 3, "Shared");

        let slice = slice_between(stations, &from, &to);
        assert_eq!(positions(&slice), vec![1, 2, 3]);
    }

    #[test]
    fn slice_missing_start_is_empty() {
        let stations = line_one();
        let from = station(1, 9, "Ghost");
        let to = station(1, 10, "Ghost 2");

        assert!(slice_between(stations, &from, &to).is_empty());
    }

    #[tokio::test]
    async fn ordered_stations_both_ways() {
        let source = ReversedSource(two_lines());
        let topology = LineTopology::new(&source);

        let up = topology
            .ordered_stations(LineNo(2), Direction::Ascending)
            .await
            .unwrap();
        assert_eq!(positions(&up), vec![1, 2, 3, 4, 5]);

        let down = topology
            .ordered_stations(LineNo(2), Direction::Descending)
            .await
            .unwrap();
        assert_eq!(positions(&down), vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn unknown_line_is_empty() {
        let network = two_lines();
        let topology = LineTopology::new(&network);
        assert!(topology.stations_on_line(LineNo(42)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn directional_slice_fetches_owning_line() {
        let network = two_lines();
        let topology = LineTopology::new(&network);
        let from = station(2, 5, "Station 10");
        let to = station(2, 2, "Station 7");

        let slice = topology.directional_slice(&from, &to).await.unwrap();
        assert_eq!(
            names(&slice),
            vec!["Station 10", "Station 9", "Shared", "Station 7"]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::planner::fixtures::station;
    use proptest::prelude::*;

    fn shuffled_line(len: u32, seed: u64) -> Vec<Station> {
        let mut stations: Vec<_> = (1..=len)
            .map(|no| station(1, no, &format!("S{no}")))
            .collect();
        // deterministic permutation
        let n = stations.len();
        for i in 0..n {
            let j = ((seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64)) % n as u64) as usize;
            stations.swap(i, j);
        }
        stations
    }

    proptest! {
        /// Slices are monotonic and exactly |from - to| + 1 long
        #[test]
        fn slice_is_monotonic_and_sized(
            len in 1u32..30,
            a in 0u32..30,
            b in 0u32..30,
            seed in any::<u64>(),
        ) {
            let from_no = a % len + 1;
            let to_no = b % len + 1;
            let stations = shuffled_line(len, seed);
            let from = station(1, from_no, &format!("S{from_no}"));
            let to = station(1, to_no, &format!("S{to_no}"));

            let slice = slice_between(stations, &from, &to);
            prop_assert_eq!(slice.len(), from_no.abs_diff(to_no) as usize + 1);
            prop_assert_eq!(slice.first().map(|s| s.station_no), Some(from.station_no));
            prop_assert_eq!(slice.last().map(|s| s.station_no), Some(to.station_no));

            let ascending = slice.windows(2).all(|w| w[0].station_no < w[1].station_no);
            let descending = slice.windows(2).all(|w| w[0].station_no > w[1].station_no);
            prop_assert!(ascending || descending);
        }
    }
}
