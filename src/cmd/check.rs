use clap::Args;
use dataviz_constants::registry::{self, ConstantGroup};
use dataviz_constants::DvResult;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(short, long, value_enum)]
    pub group: ConstantGroup,

    /// Raw value to look up, e.g. `newLeaf` or `true`.
    pub value: String,
}

pub fn run(args: CheckArgs) -> DvResult<()> {
    let entry = registry::resolve(args.group, &args.value)?;
    println!("{}.{} = {}", entry.group, entry.name, entry.value);
    Ok(())
}
