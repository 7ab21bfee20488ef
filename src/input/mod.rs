//! Parsing user input into simulation inputs.
//!
//! A reference string is a delimited list of integers. Each token is read
//! for its leading integer; tokens without one are dropped and reported as
//! [`ParseWarning`]s. Parsing itself never fails.

use std::fmt;

use tracing::{debug, warn};

use crate::common::config::REFERENCE_DELIMITER;
use crate::common::PageId;

/// A token that was dropped while parsing a reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Zero-based token position in the input (counting every delimiter).
    pub position: usize,

    /// The offending token, trimmed.
    pub token: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignored non-numeric token {:?} at position {}",
            self.token, self.position
        )
    }
}

/// Result of parsing a reference string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReferences {
    /// Page references in input order.
    pub pages: Vec<PageId>,

    /// Tokens that were dropped.
    pub warnings: Vec<ParseWarning>,
}

impl ParsedReferences {
    /// True if any token was dropped.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Parse a comma-separated reference string.
///
/// Whitespace around tokens is ignored. Each token contributes its leading
/// integer, so `"3.5"` reads as 3 and `"12abc"` as 12. Blank tokens
/// (`"1,,2"`, trailing commas) are skipped silently; a token with no leading
/// integer is skipped with a warning.
///
/// # Example
/// ```
/// use lrutrace::input::parse_references;
/// use lrutrace::PageId;
///
/// let parsed = parse_references("7, 0.5, x, 1");
/// assert_eq!(parsed.pages, vec![PageId(7), PageId(0), PageId(1)]);
/// assert_eq!(parsed.warnings.len(), 1);
/// ```
pub fn parse_references(input: &str) -> ParsedReferences {
    let mut parsed = ParsedReferences::default();

    for (position, raw) in input.split(REFERENCE_DELIMITER).enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        match leading_integer(token) {
            Some(page) => {
                if token.parse::<i64>().is_err() {
                    debug!(position, token, page, "using leading integer of page reference");
                }
                parsed.pages.push(PageId::new(page));
            }
            None => {
                warn!(position, token, "dropping non-numeric page reference");
                parsed.warnings.push(ParseWarning {
                    position,
                    token: token.to_string(),
                });
            }
        }
    }

    parsed
}

/// Parse a frame count as typed by the user.
///
/// Reads the leading integer like [`parse_references`] does (`"2.5"` is 2).
/// Returns `None` if there is none; range correction is left to
/// [`crate::common::config::SimulationConfig::from_user`].
pub fn parse_capacity(input: &str) -> Option<i64> {
    leading_integer(input.trim())
}

/// Integer at the start of `token`: optional sign, then decimal digits, or
/// `0x`-prefixed hex digits. Anything after the digits is ignored.
///
/// Returns `None` if there are no digits or the value does not fit in `i64`.
fn leading_integer(token: &str) -> Option<i64> {
    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = i128::from_str_radix(&body[..digits_end], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
