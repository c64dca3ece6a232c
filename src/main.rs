use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitdither::cli::{self, ParseOutcome};
use bitdither::services::DitherPipeline;

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the usage text
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitdither=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match cli::parse_args(std::env::args_os()) {
        ParseOutcome::Run(config) => config,
        ParseOutcome::Usage => {
            print!("{}", cli::usage());
            return Ok(());
        }
        ParseOutcome::Clap(err) => err.exit(),
    };

    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        bits = config.bits.get(),
        "Starting"
    );

    let pipeline = DitherPipeline::new(config);
    if let Err(e) = pipeline.run() {
        // Failures are reported but do not change the exit status.
        eprintln!("{e}");
        tracing::debug!(path = %e.path().display(), "Run aborted");
    }

    Ok(())
}
