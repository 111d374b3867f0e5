//! Struct reader: applies the field decoder across a whole [StructLayout].

use crate::{
    decode::FieldDecoder, errors::DumpError, layout::StructLayout, line::RenderedLine,
    memory::MemoryRead,
};

/// Reads whole struct instances. Holds no state between calls.
#[derive(Debug)]
pub struct StructReader<'m, M: ?Sized> {
    decoder: FieldDecoder<'m, M>,
}

impl<'m, M: MemoryRead + ?Sized> StructReader<'m, M> {
    pub fn new(decoder: FieldDecoder<'m, M>) -> Self {
        Self { decoder }
    }

    /// Reads one instance of `layout` starting at `address`.
    ///
    /// Returns the address immediately past the instance
    /// (`address + layout.total_size()`) and the field lines in declaration order.
    pub fn read_struct(
        &self,
        address: u64,
        layout: &StructLayout,
    ) -> Result<(u64, Vec<RenderedLine>), DumpError> {
        let mut lines = Vec::with_capacity(layout.data_field_count());
        let mut cursor = address;

        for field in layout.fields() {
            let (next, line) = self.decoder.decode_field(cursor, &field.spec)?;
            if let Some(line) = line {
                lines.push(line);
            }
            cursor = next;
        }

        Ok((cursor, lines))
    }
}
