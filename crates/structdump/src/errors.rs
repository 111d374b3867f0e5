//! Error types for layout compilation, traversal planning and memory reads.

use std::fmt;

/// Errors produced when a layout or traversal plan is rejected before any byte is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field was declared with a negative byte width.
    NegativeFieldSize { name: String, size: i64 },
    /// A data field was declared with zero width. Only skip fields may be empty.
    EmptyDataField { name: String },
    /// `y_end` lies past the declared row length, so the row gap would be negative.
    RowGapNegative { y_end: u64, inner_length: u64 },
    /// A value that must be non-negative was declared negative.
    NegativeValue { name: String, value: i64 },
    /// A traversal index does not fit the signed display range.
    IndexOutOfRange { index: u64 },
    /// The traversal would address memory past `u64::MAX`.
    AddressOverflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeFieldSize { name, size } => {
                write!(f, "field `{name}` has negative size {size}")
            }
            ConfigError::EmptyDataField { name } => {
                write!(f, "data field `{name}` has size 0")
            }
            ConfigError::RowGapNegative { y_end, inner_length } => write!(
                f,
                "y_end ({y_end}) exceeds inner_length ({inner_length}); row gap would be negative"
            ),
            ConfigError::NegativeValue { name, value } => {
                write!(f, "`{name}` must not be negative (got {value})")
            }
            ConfigError::IndexOutOfRange { index } => write!(f, "index {index} is out of range"),
            ConfigError::AddressOverflow => {
                f.write_str("traversal runs past the end of the address space")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors reported by a [crate::memory::MemoryRead] source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The address is not backed by readable memory.
    Unmapped { address: u64 },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Unmapped { address } => write!(f, "address {address:#010x} is not mapped"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Any error that aborts a dump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpError {
    Config(ConfigError),
    Read(ReadError),
}

impl From<ConfigError> for DumpError {
    fn from(value: ConfigError) -> Self {
        DumpError::Config(value)
    }
}

impl From<ReadError> for DumpError {
    fn from(value: ReadError) -> Self {
        DumpError::Read(value)
    }
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::Config(err) => write!(f, "invalid configuration: {err}"),
            DumpError::Read(err) => write!(f, "memory read failed: {err}"),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Config(err) => Some(err),
            DumpError::Read(err) => Some(err),
        }
    }
}

/// Errors produced when parsing a rendered hex string back into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The string does not contain a whole number of two-digit groups.
    OddLength,
    /// A character is not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::OddLength => f.write_str("hex string has an odd number of digits"),
            HexError::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for HexError {}
