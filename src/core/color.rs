use crate::domain::ports::LineRule;
use crate::utils::error::{MigrateError, Result};
use regex::Regex;
use std::borrow::Cow;
use std::num::ParseIntError;

/// A quoted string whose content ends in `rgb_(R,G,B)`.
const LEGACY_COLOR_PATTERN: &str = r#""[^"]*rgb_\(([0-9]+),([0-9]+),([0-9]+)\)""#;

/// Rewrites the legacy `rgb_(R,G,B)` color literal into `rrggbb`.
///
/// Only the first quoted literal on a line is considered, and only the
/// first textual occurrence of its `rgb_(...)` text is replaced.
#[derive(Debug, Clone)]
pub struct ColorRule {
    pattern: Regex,
}

impl ColorRule {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(LEGACY_COLOR_PATTERN)?;
        Ok(Self { pattern })
    }
}

impl LineRule for ColorRule {
    fn name(&self) -> &str {
        "color"
    }

    fn apply<'a>(&self, line: &'a str) -> Result<Cow<'a, str>> {
        let Some(caps) = self.pattern.captures(line) else {
            return Ok(Cow::Borrowed(line));
        };

        let channels = [&caps[1], &caps[2], &caps[3]];
        let literal = format!("rgb_({},{},{})", channels[0], channels[1], channels[2]);

        let hex_color = channels
            .iter()
            .map(|digits| {
                to_hex_channel(digits).map_err(|source| MigrateError::ChannelOutOfRange {
                    literal: literal.clone(),
                    value: digits.to_string(),
                    source,
                })
            })
            .collect::<Result<String>>()?;

        tracing::trace!("Replacing {} with {}", literal, hex_color);
        Ok(Cow::Owned(line.replacen(&literal, &hex_color, 1)))
    }
}

/// Renders a decimal channel as lowercase hex, padded to at least two digits.
///
/// Values above 255 are not clamped: `256` becomes `100`.
pub fn to_hex_channel(digits: &str) -> std::result::Result<String, ParseIntError> {
    let value: u64 = digits.parse()?;
    Ok(format!("{:02x}", value))
}
