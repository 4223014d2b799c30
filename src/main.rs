use clap::Parser;
use pre_commit_init::GenerateOptions;

/// Generate a pre-commit hook configuration for the enclosing git project.
#[derive(Debug, Parser)]
#[command(name = "pre-commit-init", version, about)]
struct Cli {
    /// Language template to use: python, rust or go (case-insensitive)
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    lang: String,

    /// Overwrite an existing .pre-commit-config.yaml
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    pre_commit_init::logging::init(cli.verbose);

    let options = GenerateOptions {
        lang: cli.lang,
        force: cli.force,
    };
    pre_commit_init::run(&options)?;
    Ok(())
}
