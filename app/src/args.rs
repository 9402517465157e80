use clap::{Args as ClapArgs, Parser};
use larder_core::domain::common::DEFAULT_API_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "larder", version, about = "Generate a recipe from what is in your kitchen")]
pub struct Args {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ApiArgs {
    /// Base URL of the recipe generation service
    #[arg(long = "api-url", env = "RECIPE_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}
