use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use tracing::trace;

use crate::bytes::{size::ByteSize, unit::Unit};

/// Lowercase CLI suffix to multiplier, e.g. `"k" => 1024`, `"kb" => 1000`.
static CLI_SUFFIXES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    Unit::ALL
        .iter()
        .filter_map(|unit| unit.cli_suffix().map(|suffix| (suffix, unit.multiplier())))
        .collect()
});

/// Display symbol to unit, e.g. `"KiB" => Unit::Kibibyte`.
static DISPLAY_SYMBOLS: Lazy<HashMap<&'static str, Unit>> =
    Lazy::new(|| Unit::ALL.iter().map(|&unit| (unit.symbol(), unit)).collect());

const MAX_CLI_SUFFIX_LEN: usize = 2;

// 2^63; `i64::MAX as f64` rounds up to this value.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    Empty,
    InvalidNumber,
    NonFinite,
    OutOfRange,
    UnknownUnit,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty number",
            Self::InvalidNumber => "invalid number",
            Self::NonFinite => "number is not finite",
            Self::OutOfRange => "size does not fit in 64 bits",
            Self::UnknownUnit => "unknown unit",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("cannot parse {input:?}: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// The substring that was rejected. For suffixed input this is the
    /// numeric part with the suffix stripped.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Parses a size as typed on a command line: a decimal number followed by an
/// optional unit suffix, with no whitespace anywhere.
///
/// `k`, `m`, `g`, `t`, `p`, `e` are powers of 1024; `kb`, `mb`, ... `eb` are
/// powers of 1000. Matching is case-insensitive. Fractional results are
/// truncated toward zero, so `"1.5"` is 1 byte and `"-1.5"` is -1.
///
/// The number is read as an `f64` and multiplied before truncating, so a
/// product that is not exactly representable can land one byte low:
/// `"1.001kb"` is 1000.9999999999999 before truncation and parses as 1000.
///
/// ```
/// assert_eq!(bytefmt::parse_size("2.5k").unwrap().bytes(), 2560);
/// assert_eq!(bytefmt::parse_size("1GB").unwrap().bytes(), 1_000_000_000);
/// assert_eq!(bytefmt::parse_size("1.001kb").unwrap().bytes(), 1000);
/// ```
pub fn parse_size(s: &str) -> Result<ByteSize, ParseError> {
    let s = s.to_lowercase();

    match split_cli_suffix(&s) {
        Some((number, suffix, multiplier)) => {
            trace!(input = %s, suffix, multiplier, "matched size suffix");
            let x = parse_float(number)?;
            to_byte_size(x * multiplier as f64, &s)
        }
        None => {
            let x = parse_float(&s)?;
            to_byte_size(x, &s)
        }
    }
}

/// Parses the output of the formatter back into a byte count, e.g.
/// `"1.5 KiB"` or `"2.0 MB"`. Exactly one space separates the number from a
/// case-sensitive unit symbol.
pub fn parse_display(s: &str) -> Result<ByteSize, ParseError> {
    let (number, symbol) = s
        .split_once(' ')
        .ok_or_else(|| ParseError::new(s, ParseErrorKind::UnknownUnit))?;
    let unit = DISPLAY_SYMBOLS
        .get(symbol)
        .ok_or_else(|| ParseError::new(symbol, ParseErrorKind::UnknownUnit))?;

    let x = parse_float(number)?;
    to_byte_size(x * unit.multiplier() as f64, s)
}

/// Longest suffix wins so that `"5eb"` is read as exabytes, not `"5e"` + `b`.
fn split_cli_suffix(s: &str) -> Option<(&str, &'static str, i64)> {
    (1..=MAX_CLI_SUFFIX_LEN).rev().find_map(|len| {
        let at = s.len().checked_sub(len)?;
        if !s.is_char_boundary(at) {
            return None;
        }
        let (number, tail) = s.split_at(at);
        CLI_SUFFIXES
            .get_key_value(tail)
            .map(|(&suffix, &multiplier)| (number, suffix, multiplier))
    })
}

fn parse_float(s: &str) -> Result<f64, ParseError> {
    if s.is_empty() {
        return Err(ParseError::new(s, ParseErrorKind::Empty));
    }

    let x: f64 = s.parse().map_err(|_| {
        trace!(input = s, "rejected size literal");
        ParseError::new(s, ParseErrorKind::InvalidNumber)
    })?;

    // The float parser accepts "inf" and "nan".
    if !x.is_finite() {
        return Err(ParseError::new(s, ParseErrorKind::NonFinite));
    }

    Ok(x)
}

fn to_byte_size(x: f64, input: &str) -> Result<ByteSize, ParseError> {
    if !(-I64_BOUND..I64_BOUND).contains(&x) {
        return Err(ParseError::new(input, ParseErrorKind::OutOfRange));
    }
    Ok(ByteSize(x as i64))
}
