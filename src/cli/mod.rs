//! Command line interface for the ainakan-tools packager.

mod args;

pub use args::Args;

use crate::builder::Packager;
use crate::error::{CliError, PackagerError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Execute already-parsed arguments
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| PackagerError::Cli(CliError::InvalidArguments { reason }))?;

    let packager = Packager::new(args.to_settings()?);

    if args.print_version {
        println!("{}", packager.resolve_version()?);
        return Ok(0);
    }

    let output = packager.run().await?;
    let format = args
        .output_format()
        .map_err(|reason| PackagerError::Cli(CliError::InvalidArguments { reason }))?;
    let rendered = output.spec.render(format)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, rendered).await?;
            log::info!("Wrote package descriptor to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(0)
}
