use clap::Parser;
use image_timestamp::TimestampExtractor;
use std::path::PathBuf;
use tracing::Level;

/// Print the day-of-month ordering timestamp of a photo.
#[derive(Parser, Debug)]
#[command(name = "image-timestamp", version, about)]
struct Cli {
    /// Photo to read.
    path: PathBuf,

    /// Path to the exiftool executable (defaults to the one on PATH).
    #[arg(long)]
    exiftool: Option<PathBuf>,

    /// Never fall back to the file modification time.
    #[arg(long)]
    no_file_time: bool,

    /// Print the full result as JSON instead of just the seconds.
    #[arg(long)]
    json: bool,

    /// Log how the timestamp was chosen.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut extractor = TimestampExtractor::builder()
        .maybe_exiftool_path(cli.exiftool)
        .file_time_fallback(!cli.no_file_time)
        .build()?;
    let timestamp = extractor.extract(&cli.path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&timestamp)?);
    } else {
        println!("{}", timestamp.seconds);
    }

    Ok(())
}
