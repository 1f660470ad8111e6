use std::str::FromStr;

use crate::{
    bytes::units::{ByteUnitSystem, FormattedSize},
    parse::{parse_size, ParseError},
};

/// A signed quantity of bytes. Negative values are valid quantities.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteSize(pub i64);

impl ByteSize {
    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> i64 {
        self.0
    }

    pub fn binary(&self) -> FormattedSize {
        ByteUnitSystem::Binary.scale(self.0)
    }

    pub fn decimal(&self) -> FormattedSize {
        ByteUnitSystem::Decimal.scale(self.0)
    }

    pub fn to_binary_string(&self) -> String {
        self.binary().to_string()
    }

    pub fn to_decimal_string(&self) -> String {
        self.decimal().to_string()
    }
}

impl From<i64> for ByteSize {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for i64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s)
    }
}

/// Formats `bytes` in binary steps: `"1.5 KiB"`.
pub fn to_binary_string(bytes: i64) -> String {
    ByteSize(bytes).to_binary_string()
}

/// Formats `bytes` in decimal steps: `"1.5 KB"`.
pub fn to_decimal_string(bytes: i64) -> String {
    ByteSize(bytes).to_decimal_string()
}
