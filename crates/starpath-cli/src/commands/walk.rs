//! Radius walk command

use clap::Args;
use serde::Serialize;

use crate::output::{format_output, OutputFormat, Tabular};
use crate::{AppContext, Cli};
use starpath_core::{pin_star, Star};

#[derive(Args)]
pub struct WalkArgs {
    /// Star to start from
    pub start: String,

    /// Pin the starting star
    #[arg(long)]
    pub pin: bool,
}

/// One stop of the route; step 0 is the start
#[derive(Debug, Serialize)]
pub struct WalkRow {
    pub step: usize,
    pub name: String,
    pub distance: f64,
    pub radius: f64,
    pub pinned: bool,
}

impl WalkRow {
    fn new(step: usize, star: &Star) -> Self {
        Self {
            step,
            name: star.name.clone(),
            distance: star.distance,
            radius: star.radius,
            pinned: star.pinned,
        }
    }
}

impl Tabular for WalkRow {
    fn headers() -> &'static [&'static str] {
        &["step", "name", "distance", "radius", "pinned"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.step.to_string(),
            self.name.clone(),
            self.distance.to_string(),
            self.radius.to_string(),
            self.pinned.to_string(),
        ]
    }
}

pub fn run(args: &WalkArgs, cli: &Cli, ctx: &mut AppContext) -> anyhow::Result<()> {
    tracing::debug!("Walking from '{}'", args.start);

    ctx.galaxy.create_paths()?;
    let start = ctx.galaxy.id_of(&args.start)?;

    if args.pin {
        let star = pin_star(&mut ctx.galaxy, start)?;
        tracing::info!("Pinned star: {}", star.name);
    }

    let walk = ctx.galaxy.radius_walk(start)?;
    let rows = walk
        .stars()
        .enumerate()
        .map(|(step, id)| ctx.galaxy.star(id).map(|star| WalkRow::new(step, star)))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", format_output(&rows, ctx.format)?);
    if ctx.format == OutputFormat::Table && !cli.quiet {
        println!(
            "\n{} stars on route, {} paths considered",
            walk.route_len(),
            walk.stats.paths_considered
        );
    }

    Ok(())
}
