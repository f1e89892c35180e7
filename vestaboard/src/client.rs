use crate::{
    board::Board,
    error::{ApiError, Result},
    vbml::{Compose, Style},
};
use log::{debug, info, warn};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const COMPOSE_URL: &str = "https://vbml.vestaboard.com/compose";
pub const RW_URL: &str = "https://rw.vestaboard.com/";
pub const KEY_HEADER: &str = "X-Vestaboard-Read-Write-Key";

const TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a single board, authenticated with its read/write key.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    key: String,
    compose_url: String,
    rw_url: String,
    timeout: Duration,
}

impl Client {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            key: key.into(),
            compose_url: COMPOSE_URL.into(),
            rw_url: RW_URL.into(),
            timeout: TIMEOUT,
        }
    }

    pub fn with_endpoints(mut self, compose_url: impl Into<String>, rw_url: impl Into<String>) -> Self {
        self.compose_url = compose_url.into();
        self.rw_url = rw_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Lay out the components on the board's grid.
    pub async fn compose(&self, body: &Compose) -> Result<Board> {
        let response = self.post(&self.compose_url).json(body).send().await?;
        let board: Board = decode(response).await?;
        let (rows, columns) = board.dimensions();
        debug!("Composed {} rows x {} columns", rows, columns);
        if !board.fits_flagship() {
            warn!("Composed grid is {}x{}, not a full board", rows, columns);
        }
        Ok(board)
    }

    pub async fn format(&self, text: &str, style: &Style) -> Result<Board> {
        info!("Formatting {:?}", text);
        self.compose(&Compose::single(text, style.clone())).await
    }

    /// Replace the message shown on the board.
    pub async fn write(&self, board: &Board) -> Result<()> {
        info!("Sending message to the board");
        let response = self.post(&self.rw_url).json(board).send().await?;
        check(response).await?;
        Ok(())
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .header(KEY_HEADER, &self.key)
            .timeout(self.timeout)
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    Ok(check(response).await?.json().await?)
}
