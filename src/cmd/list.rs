use crate::reports;
use clap::Args;
use dataviz_constants::config::OutputConfig;
use dataviz_constants::registry::{self, ConstantGroup};
use dataviz_constants::DvResult;
use std::io;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputConfig,

    /// Only list this group.
    #[arg(short, long, value_enum)]
    pub group: Option<ConstantGroup>,
}

pub fn run(args: ListArgs) -> DvResult<()> {
    registry::verify_distinct()?;

    let entries = registry::entries(args.group);
    info!("Listing {} constants", entries.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    reports::write_entries(&mut out, &entries, &args.output)
}
