use crate::{config::Config, lyrics};
use anyhow::Context;
use log::info;
use rand::Rng;
use vestaboard::{Board, Client};

pub struct Settings {
    pub config: Config,
    /// Shown instead of a randomly picked lyric.
    pub lyric: Option<String>,
    pub dry_run: bool,
}

/// What was shown, or would have been on a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub lyric: String,
    pub board: Board,
    pub written: bool,
}

pub fn client(key: &str, config: &Config) -> Client {
    Client::new(key)
        .with_endpoints(&config.compose_url, &config.rw_url)
        .with_timeout(config.timeout)
}

pub async fn pick(config: &Config, rng: &mut impl Rng) -> anyhow::Result<String> {
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;
    let candidates = lyrics::candidates(&http, config.sheet_url.as_deref(), &config.column).await;
    lyrics::choose(&candidates, rng)
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("no lyrics to choose from"))
}

pub async fn run(settings: &Settings, client: &Client, rng: &mut impl Rng) -> anyhow::Result<Outcome> {
    let lyric = match &settings.lyric {
        Some(lyric) => lyric.clone(),
        None => pick(&settings.config, rng).await?,
    };
    info!("Selected lyric: {}", lyric);

    let board = client
        .format(&lyric, &settings.config.style)
        .await
        .context("failed to format lyric")?;

    if settings.dry_run {
        for row in board.rows() {
            info!("{:?}", row);
        }
        return Ok(Outcome {
            lyric,
            board,
            written: false,
        });
    }

    client
        .write(&board)
        .await
        .context("failed to send message to the board")?;
    info!("Lyric sent to the board");
    Ok(Outcome {
        lyric,
        board,
        written: true,
    })
}
