//! Starpath Core - Star graph engine
//!
//! This crate builds a graph over a catalogue of stars, linking each star
//! to its neighbours by distance, and walks it greedily by radius.

pub mod catalog;
pub mod error;
pub mod galaxy;
pub mod limits;
pub mod path;
pub mod star;
pub mod traversal;

pub use catalog::{load_catalog, parse_catalog, CatalogLayout};
pub use error::{Error, Result};
pub use galaxy::{pin_star, Galaxy};
pub use limits::ValidationError;
pub use path::{Path, PathId};
pub use star::{Star, StarId, StarRecord};
pub use traversal::{RadiusWalk, TraversalStats};
