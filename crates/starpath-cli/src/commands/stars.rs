//! Star listing command

use serde::Serialize;

use crate::output::{format_output, OutputFormat, Tabular};
use crate::{AppContext, Cli};
use starpath_core::limits::MIN_STARS_FOR_PATHS;
use starpath_core::{Galaxy, Star};

/// One star as printed by `stars` and `pin`
#[derive(Debug, Serialize)]
pub struct StarRow {
    pub name: String,
    pub distance: f64,
    pub mass: f64,
    pub radius: f64,
    pub neighbors: usize,
    pub pinned: bool,
}

impl From<&Star> for StarRow {
    fn from(star: &Star) -> Self {
        Self {
            name: star.name.clone(),
            distance: star.distance,
            mass: star.mass,
            radius: star.radius,
            neighbors: star.degree(),
            pinned: star.pinned,
        }
    }
}

impl Tabular for StarRow {
    fn headers() -> &'static [&'static str] {
        &["name", "distance", "mass", "radius", "neighbors", "pinned"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.distance.to_string(),
            self.mass.to_string(),
            self.radius.to_string(),
            self.neighbors.to_string(),
            self.pinned.to_string(),
        ]
    }
}

/// Build paths when the catalogue is large enough, so neighbour counts mean something
pub fn build_if_possible(galaxy: &mut Galaxy) -> anyhow::Result<()> {
    if galaxy.len() < MIN_STARS_FOR_PATHS {
        tracing::warn!(
            "Only {} stars loaded, paths need at least {}",
            galaxy.len(),
            MIN_STARS_FOR_PATHS
        );
        return Ok(());
    }
    galaxy.create_paths()?;
    Ok(())
}

pub fn run(cli: &Cli, ctx: &mut AppContext) -> anyhow::Result<()> {
    build_if_possible(&mut ctx.galaxy)?;

    let rows: Vec<StarRow> = ctx
        .galaxy
        .stars_by_distance()
        .into_iter()
        .map(StarRow::from)
        .collect();

    println!("{}", format_output(&rows, ctx.format)?);
    if ctx.format == OutputFormat::Table && !cli.quiet {
        println!("\n{} stars", rows.len());
    }

    Ok(())
}
