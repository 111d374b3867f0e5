//! # structdump
//!
//! Renders arrays of fixed-layout structs found in a byte-addressable memory
//! as hex, one line per field.
//!
//! Declare the fields of a struct in memory order (spacers included), compile
//! them into a [layout::StructLayout], then walk a linear array or a grid of
//! instances with a [traversal::TraversalPlan]. Bytes are pulled one at a time
//! through a [memory::MemoryRead] source, such as a debugger binding or a
//! [memory::MemoryImage].
//!
//! ## Example
//!
//! ```
//! use structdump::field::FieldSpec;
//! use structdump::layout::StructLayout;
//! use structdump::memory::MemoryImage;
//! use structdump::order::{ByteOrder, RenderOptions};
//! use structdump::traversal::{dump, DumpOptions, IndexStyle, LinearPlan, TraversalPlan};
//!
//! let layout = StructLayout::compile(&[
//!     FieldSpec::data("id", 2),
//!     FieldSpec::skip(2),
//! ])
//! .unwrap();
//! let memory = MemoryImage::new(0x100, vec![0x12, 0x34, 0, 0, 0x56, 0x78, 0, 0]);
//! let plan = TraversalPlan::Linear(LinearPlan {
//!     base_address: 0x100,
//!     index_start: 1,
//!     index_end: 2,
//! });
//! let options = DumpOptions {
//!     render: RenderOptions::new(ByteOrder::Little),
//!     index_style: IndexStyle::OneBased,
//! };
//!
//! let report = dump(&memory, &layout, &plan, options).unwrap();
//! let text: Vec<String> = report.text_lines().collect();
//! assert_eq!(text, [
//!     "struct_1 @ 0x00000100",
//!     "  id: 3412",
//!     "struct_2 @ 0x00000104",
//!     "  id: 7856",
//! ]);
//! ```

pub mod decode;
pub mod errors;
pub mod field;
pub mod hex;
pub mod layout;
pub mod line;
pub mod memory;
pub mod order;
pub mod reader;
#[cfg(feature = "serde")]
pub mod serde;
pub mod traversal;
