pub mod config;
pub mod lyrics;
pub mod pipeline;
pub mod sheet;
