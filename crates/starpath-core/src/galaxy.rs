//! Galaxy: the graph container owning every star and path

use crate::error::{Error, Result};
use crate::limits::MIN_STARS_FOR_PATHS;
use crate::path::{Path, PathId};
use crate::star::{Star, StarId, StarRecord};
use std::collections::HashMap;

/// Graph of stars connected by distance-ordered paths
///
/// Stars and paths live in two arenas indexed by `StarId` and `PathId`.
/// A star only records which path leads to which neighbour.
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    stars: Vec<Star>,
    names: HashMap<String, StarId>,
    paths: Vec<Path>,
}

impl Galaxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a galaxy from loader records, in order
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = StarRecord>,
    {
        let mut galaxy = Self::new();
        for record in records {
            galaxy.add_record(&record)?;
        }
        Ok(galaxy)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stars
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a new star and return it
    ///
    /// A name that is already present replaces the stored star in place,
    /// keeping its id. Adding anything after `create_paths` discards the
    /// built paths.
    pub fn add_star(
        &mut self,
        name: impl Into<String>,
        distance: f64,
        mass: f64,
        radius: f64,
    ) -> Result<&Star> {
        let name = name.into();
        let existing = self.names.get(&name).copied();
        let id = existing.unwrap_or(StarId(self.stars.len()));
        let star = Star::new(id, name, distance, mass, radius)?;

        if !self.paths.is_empty() {
            tracing::warn!(
                "Star '{}' added after paths were built, discarding {} paths",
                star.name,
                self.paths.len()
            );
            self.clear_paths();
        }

        match existing {
            Some(id) => {
                tracing::warn!("Star '{}' added twice, replacing {}", star.name, id);
                self.stars[id.index()] = star;
            }
            None => {
                self.names.insert(star.name.clone(), id);
                self.stars.push(star);
            }
        }

        Ok(&self.stars[id.index()])
    }

    /// Add a star from a loader record
    pub fn add_record(&mut self, record: &StarRecord) -> Result<&Star> {
        self.add_star(
            record.name.as_str(),
            record.distance,
            record.mass,
            record.radius,
        )
    }

    /// Get a star by id
    pub fn star(&self, id: StarId) -> Result<&Star> {
        self.stars
            .get(id.index())
            .ok_or_else(|| Error::StarNotFound(id.to_string()))
    }

    /// Get a star by name
    pub fn star_by_name(&self, name: &str) -> Result<&Star> {
        let id = self.id_of(name)?;
        self.star(id)
    }

    /// Resolve a star name to its id
    pub fn id_of(&self, name: &str) -> Result<StarId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| Error::StarNotFound(name.to_string()))
    }

    /// All stars in insertion order
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    /// All stars, nearest first. Equal distances keep insertion order.
    pub fn stars_by_distance(&self) -> Vec<&Star> {
        let mut ordered: Vec<&Star> = self.stars.iter().collect();
        ordered.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ordered
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paths
    // ─────────────────────────────────────────────────────────────────────────

    /// Connect two stars and return the path between them
    ///
    /// Connecting an already connected pair returns the existing path.
    pub fn connect(&mut self, a: StarId, b: StarId) -> Result<PathId> {
        self.star(a)?;
        self.star(b)?;

        if let Some(existing) = self.stars[a.index()].path_to(b) {
            return Ok(existing);
        }

        let id = PathId(self.paths.len());
        let path = Path::new(id, a, b)?;
        self.paths.push(path);
        self.stars[a.index()].link(b, id);
        self.stars[b.index()].link(a, id);

        Ok(id)
    }

    /// Build the distance-ordered path graph with skip-edges
    ///
    /// Stars sorted by distance are each joined to the next two; the last
    /// pair is joined at the end. Any previously built paths are dropped
    /// first, so calling this again gives the same graph. Returns the
    /// number of paths created.
    pub fn create_paths(&mut self) -> Result<usize> {
        let found = self.stars.len();
        if found < MIN_STARS_FOR_PATHS {
            return Err(Error::InsufficientStars {
                found,
                required: MIN_STARS_FOR_PATHS,
            });
        }

        if !self.paths.is_empty() {
            tracing::debug!("Rebuilding {} existing paths", self.paths.len());
            self.clear_paths();
        }

        let ordered: Vec<StarId> = self.stars_by_distance().iter().map(|s| s.id).collect();

        for i in 0..ordered.len() - 2 {
            self.connect(ordered[i], ordered[i + 1])?;
            self.connect(ordered[i], ordered[i + 2])?;
        }

        let last = ordered.len() - 1;
        self.connect(ordered[last], ordered[last - 1])?;

        tracing::debug!(
            "Created {} paths between {} stars",
            self.paths.len(),
            self.stars.len()
        );

        Ok(self.paths.len())
    }

    /// Get a path by id
    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.get(id.index())
    }

    /// All paths in creation order
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Stars directly connected to `id`, in adjacency order
    pub fn neighbors(&self, id: StarId) -> Result<Vec<&Star>> {
        let star = self.star(id)?;
        let mut neighbors = Vec::with_capacity(star.degree());
        for path_id in star.closest_stars.values() {
            let other = self.paths[path_id.index()].other_endpoint(id)?;
            neighbors.push(self.star(other)?);
        }
        Ok(neighbors)
    }

    fn clear_paths(&mut self) {
        self.paths.clear();
        for star in &mut self.stars {
            star.clear_links();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pins
    // ─────────────────────────────────────────────────────────────────────────

    /// Pin a star by name
    pub fn pin_by_name(&mut self, name: &str) -> Result<&Star> {
        let id = self.id_of(name)?;
        pin_star(self, id)
    }

    /// Stars the user has pinned, in insertion order
    pub fn pinned_stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|s| s.pinned)
    }
}

/// Pin the star at `location` and return it
///
/// Pinning an already pinned star is a no-op.
pub fn pin_star(galaxy: &mut Galaxy, location: StarId) -> Result<&Star> {
    let star = galaxy
        .stars
        .iter_mut()
        .find(|s| s.id == location)
        .ok_or_else(|| Error::StarNotFound(location.to_string()))?;

    if !star.pinned {
        tracing::debug!("Pinned star '{}'", star.name);
    }
    star.pinned = true;

    Ok(&*star)
}
