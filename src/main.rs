use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use jobsift::config::ExtractorConfig;
use jobsift::error::Result;
use jobsift::extractor::SkillMatcher;
use jobsift::logging;
use jobsift::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "jobsift")]
#[command(about = "Augments job-listing CSVs with extracted skills and salary midpoints")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the extraction pipeline over a CSV of job listings
    Extract {
        /// Path to the input CSV
        #[arg(long, short)]
        input: PathBuf,
        /// Path for the augmented output CSV
        #[arg(long, short)]
        output: PathBuf,
        /// Optional TOML config (vocabulary override, skills separator)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the active skill vocabulary
    Vocabulary {
        /// Optional TOML config (vocabulary override)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => ExtractorConfig::load(&path),
        None => Ok(ExtractorConfig::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            input,
            output,
            config,
        } => {
            let config = load_config(config)?;
            println!("🔄 Extracting skills and salary midpoints...");
            let result = Pipeline::run(&config, &input, &output)?;
            println!("\n📊 Extraction results:");
            println!("   Rows processed: {}", result.rows);
            println!("   Rows with skills: {}", result.rows_with_skills);
            println!("   Rows with salary midpoint: {}", result.rows_with_salary);
            println!("   Distinct skills seen: {}", result.distinct_skills);
            println!("   Output file: {}", result.output_file);
            println!("✅ Extraction completed successfully");
        }
        Commands::Vocabulary { config } => {
            let config = load_config(config)?;
            let matcher = SkillMatcher::new(config.vocabulary())?;
            for phrase in matcher.vocabulary() {
                println!("{}", phrase);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("extraction failed: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
