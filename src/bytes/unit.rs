use crate::bytes::{units::ByteUnitSystem, *};

/// A named byte multiplier from either the binary or the decimal family.
///
/// `Byte` is shared by both families and is the first step of each.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Unit {
    Byte,

    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
    Exbibyte,

    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Byte,
        Unit::Kibibyte,
        Unit::Mebibyte,
        Unit::Gibibyte,
        Unit::Tebibyte,
        Unit::Pebibyte,
        Unit::Exbibyte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
    ];

    pub const fn multiplier(&self) -> i64 {
        match self {
            Self::Byte => BYTE,
            Self::Kibibyte => KIBIBYTE,
            Self::Mebibyte => MEBIBYTE,
            Self::Gibibyte => GIBIBYTE,
            Self::Tebibyte => TEBIBYTE,
            Self::Pebibyte => PEBIBYTE,
            Self::Exbibyte => EXBIBYTE,
            Self::Kilobyte => KILOBYTE,
            Self::Megabyte => MEGABYTE,
            Self::Gigabyte => GIGABYTE,
            Self::Terabyte => TERABYTE,
            Self::Petabyte => PETABYTE,
            Self::Exabyte => EXABYTE,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Byte => B,
            Self::Kibibyte => KIB,
            Self::Mebibyte => MIB,
            Self::Gibibyte => GIB,
            Self::Tebibyte => TIB,
            Self::Pebibyte => PIB,
            Self::Exbibyte => EIB,
            Self::Kilobyte => KB,
            Self::Megabyte => MB,
            Self::Gigabyte => GB,
            Self::Terabyte => TB,
            Self::Petabyte => PB,
            Self::Exabyte => EB,
        }
    }

    /// Lowercase suffix accepted by [`crate::parse_size`]. Binary units take a
    /// single letter, decimal units the same letter followed by `b`.
    pub const fn cli_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Byte => None,
            Self::Kibibyte => Some("k"),
            Self::Mebibyte => Some("m"),
            Self::Gibibyte => Some("g"),
            Self::Tebibyte => Some("t"),
            Self::Pebibyte => Some("p"),
            Self::Exbibyte => Some("e"),
            Self::Kilobyte => Some("kb"),
            Self::Megabyte => Some("mb"),
            Self::Gigabyte => Some("gb"),
            Self::Terabyte => Some("tb"),
            Self::Petabyte => Some("pb"),
            Self::Exabyte => Some("eb"),
        }
    }

    /// The family this unit belongs to. `Byte` is reported as binary.
    pub const fn system(&self) -> ByteUnitSystem {
        match self {
            Self::Byte
            | Self::Kibibyte
            | Self::Mebibyte
            | Self::Gibibyte
            | Self::Tebibyte
            | Self::Pebibyte
            | Self::Exbibyte => ByteUnitSystem::Binary,
            _ => ByteUnitSystem::Decimal,
        }
    }
}
