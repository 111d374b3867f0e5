//! Rendering options: byte order of multi-byte fields and how their bytes are combined.

/// Byte order used when rendering a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Lowest address first.
    #[default]
    Big,
    /// Highest address first.
    Little,
}

/// How the bytes of a data field are combined into its hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexRender {
    /// Every byte, two digits each: `2 * size` digits in total.
    #[default]
    Full,
    /// Only the last byte visited in rendering order. Matches the output of
    /// the older tool, which overwrote its accumulator on every byte.
    LastByte,
}

/// Options shared by every field decoded during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub byte_order: ByteOrder,
    pub render: HexRender,
}

impl RenderOptions {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            render: HexRender::Full,
        }
    }

    pub fn with_render(mut self, render: HexRender) -> Self {
        self.render = render;
        self
    }
}
