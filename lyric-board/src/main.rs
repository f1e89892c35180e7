use clap::Parser;
use lyric_board::{config, pipeline};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{LevelFilter, SimpleLogger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Opt {
    /// Optional text to display. A random lyric is picked if not specified.
    #[arg()]
    lyric: Option<String>,
    /// Read/write key of the board
    #[arg(
        long,
        env = "VESTABOARD_API_KEY",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    api_key: String,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Spreadsheet range to pick lyrics from
    #[arg(long, env = "LYRICS_SHEET_URL")]
    sheet_url: Option<String>,
    /// Spreadsheet column holding the lyrics
    #[arg(long)]
    column: Option<String>,
    /// Seed for picking the lyric
    #[arg(long)]
    seed: Option<u64>,
    /// Format the lyric without sending it to the board
    #[arg(long)]
    dry_run: bool,
    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let Opt {
        lyric,
        api_key,
        config,
        sheet_url,
        column,
        seed,
        dry_run,
        verbose,
    } = Parser::parse();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, Default::default())?;

    let mut config = match config {
        Some(path) => config::load(path)?,
        None => Default::default(),
    };
    if sheet_url.is_some() {
        config.sheet_url = sheet_url;
    }
    if let Some(column) = column {
        config.column = column;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let client = pipeline::client(&api_key, &config);
    let settings = pipeline::Settings {
        config,
        lyric,
        dry_run,
    };
    pipeline::run(&settings, &client, &mut rng).await?;
    Ok(())
}
