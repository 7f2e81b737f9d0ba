use color_eyre::Result;
use eliash::{config::Config, Shell};
use tracing_subscriber::prelude::*;

#[macro_use]
extern crate tracing;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    color_eyre::install()?;

    let config = Config::load()?;

    let (writer, _guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &config.log_dir,
        "eliash.log",
    ));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_error::ErrorLayer::default())
        .init();

    trace!(?config, "loaded config");

    let mut shell = Shell::new(config);
    shell.run(std::io::stdin().lock(), std::io::stdout())?;

    Ok(())
}
