use std::env::args;

use golrs_sparse::{run, Config, HashedSet};
use tracing_subscriber::EnvFilter;

pub fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("golrs_sparse=warn")),
        )
        .init();

    let config = Config::from_args(args().skip(1))?;
    run::<HashedSet>(&config)?;
    Ok(())
}
