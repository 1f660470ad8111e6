//! Convert between byte counts and human-readable sizes.
//!
//! Formatting picks the largest binary (`KiB`, `MiB`, ...) or decimal (`KB`,
//! `MB`, ...) unit that keeps the value at or above one:
//!
//! ```
//! use bytefmt::{to_binary_string, to_decimal_string, ByteSize};
//!
//! assert_eq!(to_binary_string(1536), "1.5 KiB");
//! assert_eq!(to_decimal_string(1500), "1.5 KB");
//! assert_eq!(format!("{:.2}", ByteSize(2560).decimal()), "2.56 KB");
//! ```
//!
//! Parsing reads sizes the way they are typed on a command line:
//!
//! ```
//! use bytefmt::{parse_size, ByteSize};
//!
//! assert_eq!(parse_size("2.5k"), Ok(ByteSize(2560)));
//! assert_eq!(parse_size("1GB"), Ok(ByteSize(1_000_000_000)));
//! assert!(parse_size("inf").is_err());
//! ```

pub mod bytes;
pub mod parse;

pub use bytes::{
    size::{to_binary_string, to_decimal_string, ByteSize},
    unit::Unit,
    units::{ByteUnitSystem, FormattedSize},
    BYTE, EXABYTE, EXBIBYTE, GIBIBYTE, GIGABYTE, KIBIBYTE, KILOBYTE, MEBIBYTE, MEGABYTE, PEBIBYTE,
    PETABYTE, TEBIBYTE, TERABYTE,
};
pub use parse::{parse_display, parse_size, ParseError, ParseErrorKind};
