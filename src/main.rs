use chart_import::{import_chart, ChartError, ImportOptions, SlideDeck};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Place the chords and notes of a chord chart onto a song's slide lines.
#[derive(Parser, Debug)]
#[command(name = "chart-import")]
#[command(version, about, long_about = None)]
struct Args {
    /// Chord chart, already extracted to plain text
    chart: PathBuf,

    /// Slide deck (YAML or JSON)
    slides: PathBuf,

    /// Import options (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave notes out of the result
    #[arg(long)]
    no_notes: bool,

    /// Pretty-print the JSON result
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read(path: &Path) -> Result<String, ChartError> {
    fs::read_to_string(path).map_err(|e| {
        ChartError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

fn run(args: &Args) -> Result<String, ChartError> {
    let mut options = match &args.config {
        Some(path) => ImportOptions::from_yaml(&read(path)?)?,
        None => ImportOptions::default(),
    };
    if args.no_notes {
        options.aligner.include_notes = false;
    }

    let chart = read(&args.chart)?;
    let deck = SlideDeck::from_yaml(&read(&args.slides)?)?;
    let slide_lines = deck.slide_lines();
    log::debug!(
        "{} slide(s), {} slide line(s)",
        deck.slides.len(),
        slide_lines.len()
    );

    let result = import_chart(&chart, &slide_lines, &options)?;
    for warning in &result.warnings {
        log::info!("{}", warning);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    json.map_err(|e| ChartError::Serialization(e.to_string()))
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Import error: {}", e);
            process::exit(1);
        }
    }
}
