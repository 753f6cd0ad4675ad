//! Display formatting
//!
//! Number abbreviation, stream ranges, and the handful of strings the label
//! and artist views render.

use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::{Label, StreamsRange};

const UNITS: [&str; 4] = ["", "k", "M", "B"];

/// Values at or above this are printed as a whole number of billions
const WHOLE_BILLIONS_FROM: u64 = 1_000_000_000_000;

/// Abbreviate a count with a `k`/`M`/`B` suffix.
///
/// The scaled value is rounded half-up to hundredths. Three integer digits
/// print no decimals, two print one decimal, one prints up to two; zero
/// decimals are dropped.
///
/// ```
/// use lofi_stats::format::to_kmb;
///
/// assert_eq!(to_kmb(999), "999");
/// assert_eq!(to_kmb(1_500), "1.5k");
/// assert_eq!(to_kmb(1_250_000), "1.25M");
/// ```
pub fn to_kmb(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    if n >= WHOLE_BILLIONS_FROM {
        let billions = (n as u128 + 500_000_000) / 1_000_000_000;
        return format!("{}B", billions);
    }

    let magnitude = match n {
        0..=999 => 0,
        1_000..=999_999 => 1,
        1_000_000..=999_999_999 => 2,
        _ => 3,
    };
    let divisor = 1000u128.pow(magnitude as u32);
    let hundredths = (n as u128 * 100 + divisor / 2) / divisor;

    let integer = hundredths / 100;
    let tenths = (hundredths / 10) % 10;
    let last = hundredths % 10;
    let integer_digits = integer.to_string().len();

    let fraction = if integer_digits >= 3 {
        String::new()
    } else if integer_digits == 2 || last == 0 {
        if tenths == 0 {
            String::new()
        } else {
            tenths.to_string()
        }
    } else {
        format!("{}{}", tenths, last)
    };

    if fraction.is_empty() {
        format!("{}{}", integer, UNITS[magnitude])
    } else {
        format!("{}.{}{}", integer, fraction, UNITS[magnitude])
    }
}

/// `"{min} – {max}"` with both ends abbreviated
pub fn streams_range_text(streams: &StreamsRange) -> String {
    format!("{} \u{2013} {}", to_kmb(streams.min), to_kmb(streams.max))
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"(?-u:\w)\S*").expect("word pattern is valid"))
}

/// Uppercase the first character of each word and lowercase the rest.
///
/// A word starts at an ASCII word character, so a leading accented letter
/// is left alone and the next letter is capitalized.
pub fn title_case(s: &str) -> String {
    word_regex()
        .replace_all(s, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Share of a label's recent tracks that made it into editorial playlists,
/// as a percentage with one decimal (`"33.3%"`). `None` when there is
/// nothing to show.
pub fn editorial_share(label: &Label) -> Option<String> {
    if label.tracks == 0 || label.tracks_in_editorials == 0 {
        return None;
    }

    let tracks = u64::from(label.tracks);
    let permille = (u64::from(label.tracks_in_editorials) * 1000 + tracks / 2) / tracks;
    Some(format!("{}.{}%", permille / 10, permille % 10))
}

const SPOTIFY_BASE: &str = "https://open.spotify.com";

pub fn spotify_artist_url(artist_id: &str) -> String {
    format!("{}/artist/{}", SPOTIFY_BASE, artist_id)
}

pub fn spotify_album_url(album_id: &str) -> String {
    format!("{}/album/{}", SPOTIFY_BASE, album_id)
}

pub fn spotify_playlist_url(playlist_id: &str) -> String {
    format!("{}/playlist/{}", SPOTIFY_BASE, playlist_id)
}
