use clap::Parser;
use codon_recoder::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("codon_recoder=debug,info")
    } else {
        EnvFilter::new("codon_recoder=warn")
    };

    // stdout carries the sequence output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Recode(args) => {
            cli::recode::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Translate(args) => {
            cli::translate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
