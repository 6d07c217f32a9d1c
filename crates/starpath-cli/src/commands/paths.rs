//! Path listing command

use serde::Serialize;

use crate::output::{format_output, OutputFormat, Tabular};
use crate::{AppContext, Cli};

#[derive(Debug, Serialize)]
pub struct PathRow {
    pub path: usize,
    pub from: String,
    pub to: String,
}

impl Tabular for PathRow {
    fn headers() -> &'static [&'static str] {
        &["path", "from", "to"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.path.to_string(), self.from.clone(), self.to.clone()]
    }
}

pub fn run(cli: &Cli, ctx: &mut AppContext) -> anyhow::Result<()> {
    let created = ctx.galaxy.create_paths()?;
    tracing::info!("Built {} paths", created);

    let mut rows = Vec::with_capacity(created);
    for path in ctx.galaxy.paths() {
        let (a, b) = path.endpoints();
        rows.push(PathRow {
            path: path.id.index(),
            from: ctx.galaxy.star(a)?.name.clone(),
            to: ctx.galaxy.star(b)?.name.clone(),
        });
    }

    println!("{}", format_output(&rows, ctx.format)?);
    if ctx.format == OutputFormat::Table && !cli.quiet {
        println!("\n{} paths between {} stars", rows.len(), ctx.galaxy.len());
    }

    Ok(())
}
