//! Greedy radius traversal over a built galaxy

use crate::error::Result;
use crate::galaxy::Galaxy;
use crate::star::{Star, StarId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of a radius walk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusWalk {
    /// Star the walk started from
    pub start: StarId,

    /// Stars reached after the start, in visiting order
    pub stops: Vec<StarId>,

    /// Statistics
    pub stats: TraversalStats,
}

impl RadiusWalk {
    /// The full route: start first, then every stop
    pub fn stars(&self) -> impl Iterator<Item = StarId> + '_ {
        std::iter::once(self.start).chain(self.stops.iter().copied())
    }

    /// Number of stars on the route, start included
    pub fn route_len(&self) -> usize {
        self.stops.len() + 1
    }

    /// True when the start star had nowhere to go
    pub fn is_dead_end(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Traversal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub stars_visited: usize,
    pub paths_considered: usize,
}

impl Galaxy {
    /// Walk from `start`, always moving to the unvisited neighbour with the
    /// smallest radius, until no unvisited neighbour is left
    ///
    /// The returned stops never include `start`. `visited` is shared state:
    /// it gains every star the walk touches, so independent queries need a
    /// fresh set (see [`Galaxy::radius_walk`]). Equal radii go to the
    /// neighbour that comes first in adjacency order.
    pub fn radius_path(&self, start: StarId, visited: &mut HashSet<StarId>) -> Result<Vec<StarId>> {
        let mut stats = TraversalStats::default();
        self.walk_by_radius(start, visited, &mut stats)
    }

    /// Run a radius walk from `start` with its own visited set
    pub fn radius_walk(&self, start: StarId) -> Result<RadiusWalk> {
        let mut visited = HashSet::new();
        let mut stats = TraversalStats::default();
        let stops = self.walk_by_radius(start, &mut visited, &mut stats)?;

        Ok(RadiusWalk {
            start,
            stops,
            stats,
        })
    }

    fn walk_by_radius(
        &self,
        start: StarId,
        visited: &mut HashSet<StarId>,
        stats: &mut TraversalStats,
    ) -> Result<Vec<StarId>> {
        let mut current = self.star(start)?;
        visited.insert(current.id);
        stats.stars_visited += 1;

        let mut stops = Vec::new();

        loop {
            let mut next: Option<&Star> = None;

            for candidate in self.neighbors(current.id)? {
                stats.paths_considered += 1;

                if visited.contains(&candidate.id) {
                    continue;
                }

                match next {
                    Some(best) if best.radius <= candidate.radius => {}
                    _ => next = Some(candidate),
                }
            }

            let Some(star) = next else {
                break;
            };

            visited.insert(star.id);
            stats.stars_visited += 1;
            stops.push(star.id);
            current = star;
        }

        tracing::debug!(
            "Radius walk from {} reached {} stars, considered {} paths",
            start,
            stops.len(),
            stats.paths_considered
        );

        Ok(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Stars named by (name, distance, radius)
    fn create_test_galaxy(stars: &[(&str, f64, f64)]) -> Galaxy {
        let mut galaxy = Galaxy::new();
        for (name, distance, radius) in stars {
            galaxy.add_star(*name, *distance, 1.0, *radius).unwrap();
        }
        galaxy.create_paths().unwrap();
        galaxy
    }

    fn names(galaxy: &Galaxy, ids: &[StarId]) -> Vec<String> {
        ids.iter()
            .map(|id| galaxy.star(*id).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn test_picks_smallest_radius_neighbor() {
        let mut galaxy = Galaxy::new();
        let hub = galaxy.add_star("Hub", 1.0, 1.0, 0.5).unwrap().id;
        let a = galaxy.add_star("A", 2.0, 1.0, 5.0).unwrap().id;
        let b = galaxy.add_star("B", 3.0, 1.0, 2.0).unwrap().id;
        let c = galaxy.add_star("C", 4.0, 1.0, 8.0).unwrap().id;
        galaxy.connect(hub, a).unwrap();
        galaxy.connect(hub, b).unwrap();
        galaxy.connect(hub, c).unwrap();

        let path = galaxy.radius_path(hub, &mut HashSet::new()).unwrap();

        assert_eq!(path.first(), Some(&b));
        // B is a dead end, so the walk stops there
        assert_eq!(path, vec![b]);
    }

    #[test]
    fn test_walk_follows_radius_order() {
        // Distance order A B C D E, paths A-B A-C B-C B-D C-D C-E D-E
        let galaxy = create_test_galaxy(&[
            ("A", 1.0, 3.0),
            ("B", 2.0, 4.0),
            ("C", 3.0, 1.0),
            ("D", 4.0, 9.0),
            ("E", 5.0, 2.0),
        ]);
        let start = galaxy.id_of("A").unwrap();

        let path = galaxy.radius_path(start, &mut HashSet::new()).unwrap();

        // A -> C (1.0) -> E (2.0) -> D (9.0) -> B (4.0)
        assert_eq!(names(&galaxy, &path), vec!["C", "E", "D", "B"]);
    }

    #[test]
    fn test_path_has_no_duplicates_and_excludes_start() {
        let stars: Vec<(String, f64, f64)> = (0..20)
            .map(|i| (format!("S{}", i), (i * 3 % 20) as f64 + 1.0, ((i * 11) % 7) as f64))
            .collect();
        let mut galaxy = Galaxy::new();
        for (name, distance, radius) in &stars {
            galaxy.add_star(name.as_str(), *distance, 1.0, *radius).unwrap();
        }
        galaxy.create_paths().unwrap();

        for start in galaxy.stars().map(|s| s.id).collect::<Vec<_>>() {
            let path = galaxy.radius_path(start, &mut HashSet::new()).unwrap();
            let unique: HashSet<StarId> = path.iter().copied().collect();

            assert_eq!(unique.len(), path.len());
            assert!(!path.contains(&start));
            assert!(path.len() < galaxy.len());
        }
    }

    #[test]
    fn test_fully_visited_returns_empty() {
        let galaxy = create_test_galaxy(&[("A", 1.0, 1.0), ("B", 2.0, 2.0), ("C", 3.0, 3.0)]);
        let start = galaxy.id_of("A").unwrap();

        let mut visited = HashSet::new();
        galaxy.radius_path(start, &mut visited).unwrap();

        let mut everything: HashSet<StarId> = galaxy.stars().map(|s| s.id).collect();
        assert!(galaxy.radius_path(start, &mut everything).unwrap().is_empty());
    }

    #[test]
    fn test_stale_visited_set_shortens_walk() {
        let galaxy = create_test_galaxy(&[("A", 1.0, 1.0), ("B", 2.0, 2.0), ("C", 3.0, 3.0)]);
        let start = galaxy.id_of("A").unwrap();

        let mut visited = HashSet::new();
        let first = galaxy.radius_path(start, &mut visited).unwrap();
        let second = galaxy.radius_path(start, &mut visited).unwrap();

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_equal_radius_prefers_adjacency_order() {
        let mut galaxy = Galaxy::new();
        let hub = galaxy.add_star("Hub", 1.0, 1.0, 1.0).unwrap().id;
        let first = galaxy.add_star("First", 2.0, 1.0, 2.0).unwrap().id;
        let second = galaxy.add_star("Second", 3.0, 1.0, 2.0).unwrap().id;
        // Connect in reverse so adjacency order, not creation order, decides
        galaxy.connect(hub, second).unwrap();
        galaxy.connect(hub, first).unwrap();

        let path = galaxy.radius_path(hub, &mut HashSet::new()).unwrap();

        assert_eq!(path, vec![first]);
    }

    #[test]
    fn test_radius_walk_includes_start() {
        let galaxy = create_test_galaxy(&[("A", 1.0, 5.0), ("B", 2.0, 1.0), ("C", 3.0, 2.0)]);
        let start = galaxy.id_of("A").unwrap();

        let walk = galaxy.radius_walk(start).unwrap();
        let route: Vec<StarId> = walk.stars().collect();

        assert_eq!(names(&galaxy, &route), vec!["A", "B", "C"]);
        assert_eq!(walk.route_len(), 3);
        assert!(!walk.is_dead_end());
        assert_eq!(walk.stats.stars_visited, 3);
        // A sees B and C, B sees A and C, C sees A and B
        assert_eq!(walk.stats.paths_considered, 6);
    }

    #[test]
    fn test_walk_serializes() {
        let galaxy = create_test_galaxy(&[("A", 1.0, 5.0), ("B", 2.0, 1.0), ("C", 3.0, 2.0)]);
        let walk = galaxy.radius_walk(StarId(0)).unwrap();

        let json = serde_json::to_value(&walk).unwrap();

        assert_eq!(json["start"], 0);
        assert_eq!(json["stops"], serde_json::json!([1, 2]));
        assert_eq!(json["stats"]["stars_visited"], 3);
    }

    #[test]
    fn test_unbuilt_galaxy_is_dead_end() {
        let mut galaxy = Galaxy::new();
        let lonely = galaxy.add_star("Lonely", 1.0, 1.0, 1.0).unwrap().id;

        let walk = galaxy.radius_walk(lonely).unwrap();

        assert!(walk.is_dead_end());
        assert_eq!(walk.stars().collect::<Vec<_>>(), vec![lonely]);
    }

    #[test]
    fn test_unknown_start() {
        let galaxy = create_test_galaxy(&[("A", 1.0, 1.0), ("B", 2.0, 2.0), ("C", 3.0, 3.0)]);

        assert!(matches!(
            galaxy.radius_path(StarId(99), &mut HashSet::new()),
            Err(Error::StarNotFound(_))
        ));
    }
}
