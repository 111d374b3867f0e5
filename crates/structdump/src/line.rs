//! Rendered output lines.

use std::fmt;

/// Display coordinates of a struct instance, after the index style offset was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coord {
    Linear(i64),
    Grid(i64, i64),
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Linear(i) => write!(f, "struct_{i}"),
            Coord::Grid(x, y) => write!(f, "struct_{x}_{y}"),
        }
    }
}

/// One line of a dump report.
///
/// `Display` yields the exact report text:
/// `struct_<i> @ 0x<addr>` for headers and `  <name>: <hex>` for fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    Header { coord: Coord, address: u64 },
    Field { name: String, hex: String },
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedLine::Header { coord, address } => write!(f, "{coord} @ {address:#010x}"),
            RenderedLine::Field { name, hex } => write!(f, "  {name}: {hex}"),
        }
    }
}
