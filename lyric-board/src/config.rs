use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use vestaboard::vbml::{Align, Justify, Style};

pub const DEFAULT_COLUMN: &str = "Lyric";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub compose_url: String,
    pub rw_url: String,
    pub timeout: Duration,
    pub style: Style,
    /// Remote spreadsheet range used instead of the built-in lyrics.
    pub sheet_url: Option<String>,
    pub column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compose_url: vestaboard::COMPOSE_URL.into(),
            rw_url: vestaboard::RW_URL.into(),
            timeout: Duration::from_secs(10),
            style: Style::default(),
            sheet_url: None,
            column: DEFAULT_COLUMN.into(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    vestaboard: RawVestaboard,
    style: RawStyle,
    sheet: RawSheet,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawVestaboard {
    compose_url: Option<String>,
    rw_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawStyle {
    justify: Justify,
    align: Align,
    height: Option<u8>,
    width: Option<u8>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawSheet {
    url: Option<String>,
    column: Option<String>,
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let s = fs::read_to_string(path)?;
    from_str(&s)
}

pub fn from_str(s: &str) -> anyhow::Result<Config> {
    let raw: RawConfig = toml::from_str(s)?;
    let defaults = Config::default();
    let timeout = match raw.vestaboard.timeout_secs {
        Some(0) => anyhow::bail!("timeout_secs must be positive"),
        Some(secs) => Duration::from_secs(secs),
        None => defaults.timeout,
    };
    let column = match raw.sheet.column {
        Some(column) if column.trim().is_empty() => anyhow::bail!("sheet column must not be empty"),
        Some(column) => column,
        None => defaults.column,
    };
    Ok(Config {
        compose_url: raw.vestaboard.compose_url.unwrap_or(defaults.compose_url),
        rw_url: raw.vestaboard.rw_url.unwrap_or(defaults.rw_url),
        timeout,
        style: Style {
            justify: raw.style.justify,
            align: raw.style.align,
            height: raw.style.height,
            width: raw.style.width,
        },
        sheet_url: raw.sheet.url,
        column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn empty() {
        assert_eq!(assert_ok!(from_str("")), Config::default());
    }

    #[test]
    fn full() {
        let config = assert_ok!(from_str(
            r#"
[vestaboard]
compose_url = "http://localhost:8080/compose"
rw_url = "http://localhost:8080/"
timeout_secs = 3

[style]
justify = "left"
align = "top"
height = 3
width = 15

[sheet]
url = "https://sheets.example/values/A:B"
column = "Quote"
"#
        ));
        assert_eq!(
            config,
            Config {
                compose_url: "http://localhost:8080/compose".into(),
                rw_url: "http://localhost:8080/".into(),
                timeout: Duration::from_secs(3),
                style: Style {
                    justify: Justify::Left,
                    align: Align::Top,
                    height: Some(3),
                    width: Some(15),
                },
                sheet_url: Some("https://sheets.example/values/A:B".into()),
                column: "Quote".into(),
            }
        );
    }

    #[test]
    fn invalid() {
        assert_err!(from_str("[style]\njustify = \"middle\"\n"));
        assert_err!(from_str("[vestaboard]\ntimeout_secs = 0\n"));
        assert_err!(from_str("[sheet]\ncolumn = \" \"\n"));
        assert_err!(from_str("[printer]\nport = 1\n"));
    }
}
