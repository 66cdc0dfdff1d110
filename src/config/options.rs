//! Attach options and lenient value parsing.
//!
//! Offsets arrive from loosely-typed sources (config files, query
//! strings, JSON). Anything that cannot be read as a number becomes 0
//! rather than an error.

use serde::{Deserialize, Deserializer, Serialize};

/// Options given when attaching a clip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Clip start in media seconds
    #[serde(deserialize_with = "lenient_seconds")]
    pub start: f64,
    /// Clip end in media seconds, 0 for "until the media ends"
    #[serde(deserialize_with = "lenient_seconds")]
    pub end: f64,
    /// Loop back to the clip start instead of pausing at its end
    #[serde(deserialize_with = "lenient_flag")]
    pub restart_beginning: bool,
}

impl OverlayOptions {
    pub fn new(start: f64, end: f64, restart_beginning: bool) -> Self {
        Self {
            start,
            end,
            restart_beginning,
        }
    }

    /// Build options from raw text, as typed by a user.
    pub fn parse(start: &str, end: &str, restart_beginning: bool) -> Self {
        Self::new(parse_seconds(start), parse_seconds(end), restart_beginning)
    }
}

/// Offsets accepted at runtime, read with the same leniency as attach
/// options: non-finite numbers and unreadable text become 0.
pub trait IntoSeconds {
    fn into_seconds(self) -> f64;
}

impl IntoSeconds for f64 {
    fn into_seconds(self) -> f64 {
        if self.is_finite() {
            self
        } else {
            0.0
        }
    }
}

impl IntoSeconds for &str {
    fn into_seconds(self) -> f64 {
        parse_seconds(self)
    }
}

impl IntoSeconds for String {
    fn into_seconds(self) -> f64 {
        parse_seconds(&self)
    }
}

/// Read the leading number of `text` as seconds.
///
/// Leading whitespace is skipped and trailing garbage ignored, so
/// `"12.5s"` reads as 12.5. Text that does not start with a number, or
/// whose number is not finite, reads as 0.
pub fn parse_seconds(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Number(f64),
    Flag(bool),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LenientValue {
    fn seconds(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Text(text) => parse_seconds(text),
            _ => 0.0,
        }
    }

    fn truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(text) => {
                let text = text.trim();
                !text.is_empty() && text != "false" && text != "0"
            }
            Self::Other(_) => false,
        }
    }
}

/// Deserialize a number or numeric string as seconds, defaulting to 0.
pub fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LenientValue::deserialize(deserializer)?.seconds())
}

/// Deserialize a boolean-ish value.
pub fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LenientValue::deserialize(deserializer)?.truthy())
}
