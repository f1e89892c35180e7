use crate::sheet;
use log::{info, warn};
use rand::{seq::SliceRandom, Rng};

pub const SONG_LYRICS: [&str; 10] = [
    r#"The Beatles - "All you need is love""#,
    r#"Bob Dylan - "The answer is blowin' in the wind""#,
    r#"Queen - "Is this the real life? Is this just fantasy?""#,
    r#"John Lennon - "Imagine all the people living life in peace""#,
    r#"Simon & Garfunkel - "Hello darkness, my old friend""#,
    r#"David Bowie - "We can be heroes, just for one day""#,
    r#"Louis Armstrong - "What a wonderful world""#,
    r#"Bill Withers - "Lean on me, when you're not strong""#,
    r#"Bob Marley - "Don't worry about a thing""#,
    r#"Stevie Wonder - "I just called to say I love you""#,
];

pub fn choose<'a, S: AsRef<str>>(candidates: &'a [S], rng: &mut impl Rng) -> Option<&'a str> {
    candidates.choose(rng).map(AsRef::as_ref)
}

pub fn builtin() -> Vec<String> {
    SONG_LYRICS.iter().copied().map(String::from).collect()
}

/// Lyrics from the spreadsheet column, or the built-in list if it can't be read.
pub async fn candidates(http: &reqwest::Client, sheet_url: Option<&str>, column: &str) -> Vec<String> {
    let Some(url) = sheet_url else {
        return builtin();
    };
    match sheet::fetch_column(http, url, column).await {
        Ok(lyrics) => {
            info!("Loaded {} lyrics from the spreadsheet", lyrics.len());
            lyrics
        }
        Err(e) => {
            warn!("Falling back to built-in lyrics: {}", e);
            builtin()
        }
    }
}
