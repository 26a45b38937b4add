use assembly_solver::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("assembly_solver=debug,info")
    } else {
        EnvFilter::new("assembly_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Solve(args) => {
            cli::solve::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Gibson(args) => {
            cli::gibson::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::GoldenGate(args) => {
            cli::golden_gate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Enzymes => {
            cli::enzymes::run(cli.format)?;
        }
    }

    Ok(())
}
