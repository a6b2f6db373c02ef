mod arguments;
mod command;
mod settings;

/// Used when `RUST_LOG` is not set, matches `avatars_client` as well.
const DEFAULT_FILTER: &str = "avatars=warn";

fn enable_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // logs go to stderr, stdout only carries the address
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    enable_tracing();

    let args = arguments::Arguments::build();
    let url = args.execute()?;
    println!("{url}");

    Ok(())
}
