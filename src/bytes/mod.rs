pub mod size;
pub mod unit;
pub mod units;

pub const BYTE: i64 = 1;

pub const KIBIBYTE: i64 = 1 << 10;
pub const MEBIBYTE: i64 = 1 << 20;
pub const GIBIBYTE: i64 = 1 << 30;
pub const TEBIBYTE: i64 = 1 << 40;
pub const PEBIBYTE: i64 = 1 << 50;
pub const EXBIBYTE: i64 = 1 << 60;

pub const KILOBYTE: i64 = 1_000;
pub const MEGABYTE: i64 = 1_000_000;
pub const GIGABYTE: i64 = 1_000_000_000;
pub const TERABYTE: i64 = 1_000_000_000_000;
pub const PETABYTE: i64 = 1_000_000_000_000_000;
pub const EXABYTE: i64 = 1_000_000_000_000_000_000;

const B: &str = "B";

const KB: &str = "KB";
const MB: &str = "MB";
const GB: &str = "GB";
const TB: &str = "TB";
const PB: &str = "PB";
const EB: &str = "EB";

const KIB: &str = "KiB";
const MIB: &str = "MiB";
const GIB: &str = "GiB";
const TIB: &str = "TiB";
const PIB: &str = "PiB";
const EIB: &str = "EiB";
