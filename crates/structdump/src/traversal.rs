//! Traversal: enumerates struct instances of a 1D or 2D array and dumps each one.
//!
//! Both geometries reduce to a stream of [Visit]s (display coordinate plus base
//! address). [Dumper::run] reads one struct per visit, so the struct reader is
//! shared by both modes.
//!
//! ## Geometry
//!
//! - **Linear**: instances `index_start..=index_end` are contiguous, the first
//!   one at `base_address`.
//! - **Grid**: for every `x` in `x_start..=x_end`, instances `y_start..=y_end`
//!   are contiguous. After each row, `inner_length - y_end` struct slots are
//!   skipped to reach the next row. The first visited instance of every row
//!   sits right after the previous row's gap.
//!
//! Indices only label output: the address of the first visit is always
//! `base_address`, whatever `index_start`, `x_start` or `y_start` are.

use crate::{
    decode::FieldDecoder,
    errors::{ConfigError, DumpError},
    layout::StructLayout,
    line::{Coord, RenderedLine},
    memory::MemoryRead,
    order::RenderOptions,
    reader::StructReader,
};

/// How indices are displayed in struct headers. Never affects addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexStyle {
    /// Displayed index is the declared index minus one.
    ZeroBased,
    /// Displayed index is the declared index.
    #[default]
    OneBased,
}

impl IndexStyle {
    /// Amount subtracted from a declared index before display.
    pub fn offset(self) -> i64 {
        match self {
            IndexStyle::ZeroBased => 1,
            IndexStyle::OneBased => 0,
        }
    }
}

/// A linear array of structs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearPlan {
    pub base_address: u64,
    pub index_start: u64,
    pub index_end: u64,
}

/// Rows of `inner_length` struct slots, of which `y_start..=y_end` are read per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    pub base_address: u64,
    pub inner_length: u64,
    pub x_start: u64,
    pub x_end: u64,
    pub y_start: u64,
    pub y_end: u64,
}

impl GridPlan {
    /// Struct slots skipped after each row.
    pub fn row_gap(&self) -> Result<u64, ConfigError> {
        self.inner_length
            .checked_sub(self.y_end)
            .ok_or(ConfigError::RowGapNegative {
                y_end: self.y_end,
                inner_length: self.inner_length,
            })
    }
}

/// Which struct instances to visit and where they live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalPlan {
    Linear(LinearPlan),
    Grid(GridPlan),
}

/// Number of indices in `start..=end`, zero when the range is empty.
fn span(start: u64, end: u64) -> u64 {
    if end < start { 0 } else { end - start + 1 }
}

fn check_index(index: u64) -> Result<(), ConfigError> {
    if index > i64::MAX as u64 {
        return Err(ConfigError::IndexOutOfRange { index });
    }

    Ok(())
}

impl TraversalPlan {
    pub fn base_address(&self) -> u64 {
        match self {
            TraversalPlan::Linear(plan) => plan.base_address,
            TraversalPlan::Grid(plan) => plan.base_address,
        }
    }

    /// Number of struct instances the plan visits.
    pub fn struct_count(&self) -> u64 {
        match self {
            TraversalPlan::Linear(plan) => span(plan.index_start, plan.index_end),
            TraversalPlan::Grid(plan) => span(plan.x_start, plan.x_end)
                .saturating_mul(span(plan.y_start, plan.y_end)),
        }
    }

    /// Checks the plan against a struct size without reading memory.
    ///
    /// Returns the first address past everything the traversal covers.
    pub fn validate(&self, struct_size: u64) -> Result<u64, ConfigError> {
        match self {
            TraversalPlan::Linear(plan) => {
                check_index(plan.index_start)?;
                check_index(plan.index_end)?;

                span(plan.index_start, plan.index_end)
                    .checked_mul(struct_size)
                    .and_then(|len| plan.base_address.checked_add(len))
                    .ok_or(ConfigError::AddressOverflow)
            }
            TraversalPlan::Grid(plan) => {
                let row_gap = plan.row_gap()?;
                for index in [plan.x_start, plan.x_end, plan.y_start, plan.y_end] {
                    check_index(index)?;
                }

                let rows = span(plan.x_start, plan.x_end);
                let slots_per_row = span(plan.y_start, plan.y_end)
                    .checked_add(row_gap)
                    .ok_or(ConfigError::AddressOverflow)?;

                rows.checked_mul(slots_per_row)
                    .and_then(|slots| slots.checked_mul(struct_size))
                    .and_then(|len| plan.base_address.checked_add(len))
                    .ok_or(ConfigError::AddressOverflow)
            }
        }
    }

    /// Enumerates the visits of this plan for structs of `struct_size` bytes.
    pub fn visits(&self, struct_size: u64, style: IndexStyle) -> Result<Visits, ConfigError> {
        self.validate(struct_size)?;

        let visits = match self {
            TraversalPlan::Linear(plan) => Visits {
                geometry: Geometry::Linear {
                    end: plan.index_end,
                },
                stride: struct_size,
                offset: style.offset(),
                address: plan.base_address,
                x: plan.index_start,
                y: 0,
                done: plan.index_end < plan.index_start,
            },
            TraversalPlan::Grid(plan) => Visits {
                geometry: Geometry::Grid {
                    x_end: plan.x_end,
                    y_start: plan.y_start,
                    y_end: plan.y_end,
                    gap_bytes: plan.row_gap()?.saturating_mul(struct_size),
                },
                stride: struct_size,
                offset: style.offset(),
                address: plan.base_address,
                x: plan.x_start,
                y: plan.y_start,
                done: plan.x_end < plan.x_start || plan.y_end < plan.y_start,
            },
        };

        Ok(visits)
    }
}

/// One struct instance to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub coord: Coord,
    pub address: u64,
}

#[derive(Debug, Clone, Copy)]
enum Geometry {
    Linear {
        end: u64,
    },
    Grid {
        x_end: u64,
        y_start: u64,
        y_end: u64,
        gap_bytes: u64,
    },
}

/// Iterator over the [Visit]s of a validated [TraversalPlan].
#[derive(Debug, Clone)]
pub struct Visits {
    geometry: Geometry,
    stride: u64,
    offset: i64,
    address: u64,
    x: u64,
    y: u64,
    done: bool,
}

impl Iterator for Visits {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        if self.done {
            return None;
        }

        // Indices were checked to fit in i64 by `validate`.
        let x = self.x as i64 - self.offset;
        let address = self.address;
        self.address += self.stride;

        let coord = match self.geometry {
            Geometry::Linear { end } => {
                if self.x == end {
                    self.done = true;
                } else {
                    self.x += 1;
                }
                Coord::Linear(x)
            }
            Geometry::Grid {
                x_end,
                y_start,
                y_end,
                gap_bytes,
            } => {
                let y = self.y as i64 - self.offset;
                if self.y == y_end {
                    self.address += gap_bytes;
                    if self.x == x_end {
                        self.done = true;
                    } else {
                        self.x += 1;
                        self.y = y_start;
                    }
                } else {
                    self.y += 1;
                }
                Coord::Grid(x, y)
            }
        };

        Some(Visit { coord, address })
    }
}

/// Options for a dump run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpOptions {
    pub render: RenderOptions,
    pub index_style: IndexStyle,
}

/// Output of a dump run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Header and field lines in traversal order.
    pub lines: Vec<RenderedLine>,
    /// Number of struct instances read.
    pub structs: u64,
}

impl Report {
    /// Text of every non-empty line.
    pub fn text_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines
            .iter()
            .map(ToString::to_string)
            .filter(|line| !line.is_empty())
    }
}

/// Drives the struct reader over a traversal plan.
#[derive(Debug)]
pub struct Dumper<'a, M: ?Sized> {
    layout: &'a StructLayout,
    reader: StructReader<'a, M>,
    index_style: IndexStyle,
}

impl<'a, M: MemoryRead + ?Sized> Dumper<'a, M> {
    pub fn new(memory: &'a M, layout: &'a StructLayout, options: DumpOptions) -> Self {
        Self {
            layout,
            reader: StructReader::new(FieldDecoder::new(memory, options.render)),
            index_style: options.index_style,
        }
    }

    /// Reads every struct instance of `plan`.
    ///
    /// The plan is validated before the first read; any read failure aborts the
    /// run and no partial report is returned.
    pub fn run(&self, plan: &TraversalPlan) -> Result<Report, DumpError> {
        let visits = plan.visits(self.layout.total_size(), self.index_style)?;
        let mut report = Report::default();

        for visit in visits {
            log::trace!("reading {} at {:#010x}", visit.coord, visit.address);

            report.lines.push(RenderedLine::Header {
                coord: visit.coord,
                address: visit.address,
            });

            let (_, lines) = self.reader.read_struct(visit.address, self.layout)?;
            report.lines.extend(lines);
            report.structs += 1;
        }

        log::debug!(
            "read {} structs of {} bytes from {:#010x}",
            report.structs,
            self.layout.total_size(),
            plan.base_address()
        );

        Ok(report)
    }
}

/// Dumps every struct instance of `plan` from `memory`.
pub fn dump<M: MemoryRead + ?Sized>(
    memory: &M,
    layout: &StructLayout,
    plan: &TraversalPlan,
    options: DumpOptions,
) -> Result<Report, DumpError> {
    Dumper::new(memory, layout, options).run(plan)
}
