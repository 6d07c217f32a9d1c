//! Star (node) types and operations

use crate::error::Result;
use crate::limits::{validate_star_attributes, validate_star_name};
use crate::path::PathId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a star
///
/// Ids are handed out densely by the galaxy, so their order is the order
/// in which stars were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StarId(pub usize);

impl StarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for StarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A star in the galaxy (a node)
#[derive(Debug, Clone)]
pub struct Star {
    /// Unique identifier
    pub id: StarId,

    /// Star name (unique within the galaxy)
    pub name: String,

    /// Distance from the reference point
    pub distance: f64,

    /// Stellar mass
    pub mass: f64,

    /// Stellar radius, only used to order the radius walk
    pub radius: f64,

    /// Marked by the user
    pub pinned: bool,

    /// Neighbour id -> path connecting the two
    pub(crate) closest_stars: BTreeMap<StarId, PathId>,
}

impl Star {
    /// Create a new star with no connections
    pub fn new(
        id: StarId,
        name: impl Into<String>,
        distance: f64,
        mass: f64,
        radius: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate_star_name(&name)?;
        validate_star_attributes(&name, distance, mass, radius)?;

        Ok(Self {
            id,
            name,
            distance,
            mass,
            radius,
            pinned: false,
            closest_stars: BTreeMap::new(),
        })
    }

    /// Neighbouring stars, in ascending id order
    pub fn neighbors(&self) -> impl Iterator<Item = StarId> + '_ {
        self.closest_stars.keys().copied()
    }

    /// Path leading to `other`, if the two are connected
    pub fn path_to(&self, other: StarId) -> Option<PathId> {
        self.closest_stars.get(&other).copied()
    }

    /// Number of paths touching this star
    pub fn degree(&self) -> usize {
        self.closest_stars.len()
    }

    pub(crate) fn link(&mut self, other: StarId, path: PathId) {
        debug_assert_ne!(other, self.id, "a star cannot neighbour itself");
        self.closest_stars.insert(other, path);
    }

    pub(crate) fn clear_links(&mut self) {
        self.closest_stars.clear();
    }
}

/// One row handed over by the catalogue loader
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    pub name: String,
    pub distance: f64,
    pub mass: f64,
    pub radius: f64,
}

impl StarRecord {
    pub fn new(name: impl Into<String>, distance: f64, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            distance,
            mass,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::limits::ValidationError;

    #[test]
    fn test_star_creation() {
        let star = Star::new(StarId(0), "Sirius", 8.6, 2.06, 1.71).unwrap();

        assert_eq!(star.name, "Sirius");
        assert_eq!(star.id, StarId(0));
        assert!(!star.pinned);
        assert_eq!(star.degree(), 0);
        assert_eq!(star.neighbors().count(), 0);
    }

    #[test]
    fn test_star_rejects_bad_attributes() {
        assert_eq!(
            Star::new(StarId(0), "", 8.6, 2.06, 1.71).unwrap_err(),
            Error::InvalidAttribute(ValidationError::EmptyStarName)
        );
        assert!(matches!(
            Star::new(StarId(0), "Sirius", 0.0, 2.06, 1.71),
            Err(Error::InvalidAttribute(ValidationError::NonPositiveDistance { .. }))
        ));
        assert!(matches!(
            Star::new(StarId(0), "Sirius", 8.6, -2.0, 1.71),
            Err(Error::InvalidAttribute(ValidationError::NonPositiveMass { .. }))
        ));
    }

    #[test]
    fn test_links_are_ordered_by_id() {
        let mut star = Star::new(StarId(1), "Vega", 25.0, 2.1, 2.36).unwrap();
        star.link(StarId(7), PathId(0));
        star.link(StarId(0), PathId(1));
        star.link(StarId(3), PathId(2));

        let ids: Vec<StarId> = star.neighbors().collect();
        assert_eq!(ids, vec![StarId(0), StarId(3), StarId(7)]);
        assert_eq!(star.path_to(StarId(3)), Some(PathId(2)));
        assert_eq!(star.path_to(StarId(4)), None);

        star.clear_links();
        assert_eq!(star.degree(), 0);
    }
}
