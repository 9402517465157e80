use clap::Parser;
use larder_core::domain::common::RecipeConfig;

use crate::application::{logging::init_logging, terminal};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log);

    let config = RecipeConfig::new(&args.api.url)?;
    terminal::run(config).await
}
