use clap::{Parser, Subcommand};
use ifslang_cli::stats::run_stats_command;
use ifslang_cli::{GenerateOptions, run_generate_command, run_validate_command};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate validated .lng and .trs files from an XML export.
    Generate {
        /// The TranslatableResources XML export to read
        #[arg(short, long)]
        xml: String,

        /// Directory for generated files (defaults to the XML file's directory)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Target cultures, e.g. sv-SE,nb-NO
        #[arg(short, long, value_delimiter = ',')]
        languages: Vec<String>,

        /// Directory containing dictionary/<culture>.json term files
        #[arg(long)]
        dictionary_dir: Option<String>,

        /// Config file (defaults to ./ifslang.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Do not validate the generated files
        #[arg(long)]
        skip_validation: bool,
    },

    /// Validate existing .lng and .trs files.
    Validate {
        /// Files or glob patterns to validate
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics of an XML export.
    Stats {
        /// The TranslatableResources XML export to read
        #[arg(short, long)]
        xml: String,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.commands {
        Commands::Generate {
            xml,
            output_dir,
            languages,
            dictionary_dir,
            config,
            skip_validation,
        } => run_generate_command(GenerateOptions {
            xml,
            output_dir,
            languages,
            dictionary_dir,
            config,
            skip_validation,
        }),
        Commands::Validate { inputs, json } => run_validate_command(inputs, json),
        Commands::Stats { xml, json } => run_stats_command(xml, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
