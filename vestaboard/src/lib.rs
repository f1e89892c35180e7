pub mod board;
mod client;
mod error;
pub mod vbml;

pub use crate::board::Board;
pub use crate::client::{Client, COMPOSE_URL, KEY_HEADER, RW_URL};
pub use crate::error::{ApiError as Error, Result};
