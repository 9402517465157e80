use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Logs go to stderr so they never interleave with the rendered recipe.
pub fn init_logging(args: &LogArgs) {
    let env_filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if args.json {
        registry
            .with(fmt::layer().with_writer(io::stderr).with_target(true).json())
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .init();
    }
}
