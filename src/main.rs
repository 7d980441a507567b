// ABOUTME: Main entry point for the slidegen program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use slidegen::{Config, GenerateOptions, ThemeSettings};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deck from a JSON array of slide records
    Generate(GenerateArgs),

    /// Serve generation requests over HTTP
    Serve(ServeArgs),

    /// List the built-in theme presets
    Presets,

    /// Print a sample record array covering every template
    Sample,
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the records JSON file ("-" reads stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to a settings JSON file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Presentation title (defaults to the leading title record)
    #[arg(long)]
    title: Option<String>,

    /// Directory the deck is written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme preset to start from
    #[arg(long)]
    preset: Option<String>,

    /// Footer text ("" disables the footer)
    #[arg(long)]
    footer: Option<String>,

    /// Generate in memory and print the report without writing files
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

fn read_input(path: &Path) -> slidegen::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        Ok(buffer)
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Ok(content)
    }
}

fn run_generate(args: &GenerateArgs, config: &mut Config) -> slidegen::Result<()> {
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }

    let mut store = slidegen::ThemeStore::new(config.theme());
    if let Some(preset) = &args.preset {
        store.apply_preset(preset)?;
    }

    let records = slidegen::parse_records(&read_input(&args.input)?)?;
    let mut settings = match &args.settings {
        Some(path) => serde_json::from_str::<ThemeSettings>(&read_input(path)?)?,
        None => ThemeSettings::default(),
    };
    if args.footer.is_some() {
        settings.footer_text = args.footer.clone();
    }

    let options = GenerateOptions {
        title: args.title.clone(),
        settings: Some(settings),
    };

    let report = if args.dry_run {
        let mut backend = config.memory_backend();
        slidegen::generate(&mut backend, store.get(), &records, &options)?
    } else {
        let mut backend = config.pptx_backend();
        slidegen::generate(&mut backend, store.get(), &records, &options)?
    };

    for warning in &report.warnings {
        eprintln!("Warning: {:?}", warning);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    let result = match &cli.command {
        Some(Commands::Generate(args)) => {
            info!("Executing generate command...");
            run_generate(args, &mut config)
        }
        Some(Commands::Serve(args)) => {
            let port = args.port.unwrap_or(config.port);
            let mut backend = config.pptx_backend();
            slidegen::serve(&mut backend, &config.theme(), port)
        }
        Some(Commands::Presets) => {
            for preset in slidegen::PRESETS {
                println!("{:<10} {}  {}", preset.name, preset.color, preset.font);
            }
            Ok(())
        }
        Some(Commands::Sample) => serde_json::to_string_pretty(&slidegen::sample_records())
            .map(|json| println!("{}", json))
            .map_err(slidegen::SlideError::from),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
