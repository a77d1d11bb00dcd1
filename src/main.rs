use blastomatic::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse_args();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("blastomatic=debug,info")
    } else {
        EnvFilter::new("blastomatic=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::annotate::run(cli)
}
