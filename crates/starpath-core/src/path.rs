//! Path (edge) types and operations

use crate::error::{Error, Result};
use crate::star::StarId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathId(pub usize);

impl PathId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// An undirected connection between two distinct stars
///
/// Paths are owned by the galaxy; stars only keep `StarId -> PathId`
/// lookups. Construct them through `Galaxy::connect` so both endpoints
/// get registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Unique identifier
    pub id: PathId,

    endpoints: (StarId, StarId),
}

impl Path {
    pub(crate) fn new(id: PathId, a: StarId, b: StarId) -> Result<Self> {
        if a == b {
            return Err(Error::InvalidEdge(a));
        }
        Ok(Self {
            id,
            endpoints: (a, b),
        })
    }

    pub fn endpoints(&self) -> (StarId, StarId) {
        self.endpoints
    }

    /// Check whether `star` is one of the two ends
    pub fn contains(&self, star: StarId) -> bool {
        self.endpoints.0 == star || self.endpoints.1 == star
    }

    /// Given one end of the path, return the other one
    pub fn other_endpoint(&self, star: StarId) -> Result<StarId> {
        match self.endpoints {
            (a, b) if a == star => Ok(b),
            (a, b) if b == star => Ok(a),
            _ => Err(Error::NotAnEndpoint {
                star,
                path: self.id,
            }),
        }
    }
}
