use std::fmt::{self, Write};

use crate::bytes::unit::Unit;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ByteUnitSystem {
    Binary,
    Decimal,
}

impl ByteUnitSystem {
    const BINARY_UNITS: [Unit; 7] = [
        Unit::Byte,
        Unit::Kibibyte,
        Unit::Mebibyte,
        Unit::Gibibyte,
        Unit::Tebibyte,
        Unit::Pebibyte,
        Unit::Exbibyte,
    ];
    const DECIMAL_UNITS: [Unit; 7] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
    ];

    pub const fn base(&self) -> i64 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }

    pub const fn units(&self) -> &'static [Unit; 7] {
        match self {
            Self::Binary => &Self::BINARY_UNITS,
            Self::Decimal => &Self::DECIMAL_UNITS,
        }
    }

    /// Scales `bytes` to the largest unit of this system that keeps the value
    /// at or above one. The top unit is a ceiling.
    ///
    /// The comparison is on the signed value, so negative counts stay in `B`.
    pub fn scale(&self, bytes: i64) -> FormattedSize {
        let units = self.units();
        let base = self.base() as f64;
        let mut value = bytes as f64;
        let mut unit = units[0];

        for &next_unit in &units[1..] {
            if value < base {
                break;
            }
            value /= base;
            unit = next_unit;
        }

        FormattedSize { value, unit }
    }

    /// Renders `bytes` with one decimal place, e.g. `"1.5 KiB"`.
    pub fn format(&self, bytes: i64) -> String {
        self.scale(bytes).to_string()
    }
}

/// A byte count scaled to a display unit.
///
/// `Display` prints `"<value> <symbol>"` with one decimal place unless the
/// formatter asks for another precision: `format!("{:.2}", size)`. Width,
/// fill and alignment are honoured, so `format!("{:>12}", size)` lines up
/// size columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormattedSize {
    value: f64,
    unit: Unit,
}

impl FormattedSize {
    pub const DEFAULT_PRECISION: usize = 1;

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(Self::DEFAULT_PRECISION);
        let s = format!("{:.*} {}", precision, self.value, self.unit.symbol());

        // `Formatter::pad` would cut the text at the precision, so width,
        // fill and alignment are applied here.
        let len = s.chars().count();
        let Some(width) = f.width().filter(|&width| width > len) else {
            return f.write_str(&s);
        };
        let padding = width - len;
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };

        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&s)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::*;

    #[test]
    fn binary_table() {
        let cases = [
            (1, "1.0 B"),
            (1000, "1000.0 B"),
            (1023, "1023.0 B"),
            (1024, "1.0 KiB"),
            (1536, "1.5 KiB"),
            (1_048_576, "1.0 MiB"),
            (GIBIBYTE, "1.0 GiB"),
            (TEBIBYTE, "1.0 TiB"),
            (PEBIBYTE, "1.0 PiB"),
            (EXBIBYTE, "1.0 EiB"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(ByteUnitSystem::Binary.format(bytes), expected, "{bytes}");
        }
    }

    #[test]
    fn decimal_table() {
        let cases = [
            (1, "1.0 B"),
            (KILOBYTE, "1.0 KB"),
            (1500, "1.5 KB"),
            (MEGABYTE, "1.0 MB"),
            (GIGABYTE, "1.0 GB"),
            (TERABYTE, "1.0 TB"),
            (PETABYTE, "1.0 PB"),
            (EXABYTE, "1.0 EB"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(ByteUnitSystem::Decimal.format(bytes), expected, "{bytes}");
        }
    }

    #[test]
    fn top_unit_is_a_ceiling() {
        assert_eq!(ByteUnitSystem::Binary.format(i64::MAX), "8.0 EiB");
        assert_eq!(ByteUnitSystem::Decimal.format(i64::MAX), "9.2 EB");
        assert_eq!(ByteUnitSystem::Binary.scale(i64::MAX).unit(), Unit::Exbibyte);
    }

    #[test]
    fn negative_counts_stay_in_bytes() {
        assert_eq!(ByteUnitSystem::Binary.format(-1), "-1.0 B");
        assert_eq!(ByteUnitSystem::Binary.format(-2048), "-2048.0 B");
        assert_eq!(ByteUnitSystem::Decimal.format(i64::MIN).split(' ').nth(1), Some("B"));
    }

    #[test]
    fn zero() {
        assert_eq!(ByteUnitSystem::Binary.format(0), "0.0 B");
        assert_eq!(ByteUnitSystem::Decimal.format(0), "0.0 B");
    }

    #[test]
    fn precision_comes_from_the_formatter() {
        let size = ByteUnitSystem::Decimal.scale(2560);
        assert_eq!(format!("{size:.2}"), "2.56 KB");
        assert_eq!(format!("{size:.0}"), "3 KB");
        assert_eq!(format!("{size}"), "2.6 KB");
        assert_eq!(size.value(), 2.56);
        assert_eq!(size.unit(), Unit::Kilobyte);
    }

    #[test]
    fn width_and_alignment_pad_the_whole_size() {
        let size = ByteUnitSystem::Binary.scale(1536);
        assert_eq!(format!("{size:>12}"), "     1.5 KiB");
        assert_eq!(format!("{size:<12}|"), "1.5 KiB     |");
        assert_eq!(format!("{size:12}|"), "1.5 KiB     |");
        assert_eq!(format!("{size:^11}"), "  1.5 KiB  ");
        assert_eq!(format!("{size:*>9}"), "**1.5 KiB");
        assert_eq!(format!("{size:>3}"), "1.5 KiB");

        let size = ByteUnitSystem::Decimal.scale(2560);
        assert_eq!(format!("{size:>12.2}"), "     2.56 KB");
        assert_eq!(format!("{size:>w$.p$}", w = 10, p = 0), "      3 KB");
    }
}
