mod commands;

use clap::{Parser, Subcommand};
use escapist::{EscapeLevel, ReferenceSet, ReferenceType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "escapist")]
#[command(about = "Escape and unescape HTML character references", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Escape {
        file: Option<PathBuf>,

        #[arg(long, short)]
        level: Option<EscapeLevel>,

        #[arg(long = "type", short)]
        reference_type: Option<ReferenceType>,

        #[arg(long)]
        set: Option<ReferenceSet>,

        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    Unescape {
        file: Option<PathBuf>,
    },
    Lookup {
        query: String,

        #[arg(long, default_value = "html5")]
        set: ReferenceSet,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Escape {
            file,
            level,
            reference_type,
            set,
            config,
        } => commands::escape_file(
            file.as_deref(),
            config.as_deref(),
            commands::Overrides {
                references: set,
                reference_type,
                level,
            },
        ),
        Commands::Unescape { file } => commands::unescape_file(file.as_deref()),
        Commands::Lookup { query, set } => commands::lookup(&query, set),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
