//! Pin command

use clap::Args;

use crate::commands::stars::{build_if_possible, StarRow};
use crate::output::{format_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct PinArgs {
    /// Names of the stars to pin
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn run(args: &PinArgs, cli: &Cli, ctx: &mut AppContext) -> anyhow::Result<()> {
    build_if_possible(&mut ctx.galaxy)?;

    for name in &args.names {
        let star = ctx.galaxy.pin_by_name(name)?;
        tracing::info!("Pinned star: {}", star.name);
    }

    let rows: Vec<StarRow> = ctx.galaxy.pinned_stars().map(StarRow::from).collect();

    println!("{}", format_output(&rows, ctx.format)?);
    if ctx.format == OutputFormat::Table && !cli.quiet {
        println!("\n{} pinned", rows.len());
    }

    Ok(())
}
