use clap::Args;
use dataviz_constants::components::find_component;
use dataviz_constants::{DataVizError, DvResult};

#[derive(Args, Debug, Clone)]
pub struct ComponentArgs {
    pub key: String,
}

pub fn run(args: ComponentArgs) -> DvResult<()> {
    let found =
        find_component(&args.key).ok_or_else(|| DataVizError::UnknownComponent(args.key.clone()))?;
    println!("{} ({})", found.component, found.role);
    Ok(())
}
