mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Converts raw texture files between linear and console GPU swizzled layouts
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Swizzle(commands::swizzle::SwizzleCmd),
    Deswizzle(commands::deswizzle::DeswizzleCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Swizzle(cmd) => {
            commands::swizzle::handle_swizzle_command(cmd)?;
        }
        Commands::Deswizzle(cmd) => {
            commands::deswizzle::handle_deswizzle_command(cmd)?;
        }
    }

    Ok(())
}
