//! Field decoder: turns one [FieldSpec] at an address into a rendered line.

use crate::{
    errors::{ConfigError, DumpError},
    field::FieldSpec,
    hex::render_hex,
    line::RenderedLine,
    memory::MemoryRead,
    order::{ByteOrder, RenderOptions},
};

/// Reads fields from a [MemoryRead] source and renders them with fixed [RenderOptions].
#[derive(Debug)]
pub struct FieldDecoder<'m, M: ?Sized> {
    memory: &'m M,
    options: RenderOptions,
}

impl<'m, M: MemoryRead + ?Sized> FieldDecoder<'m, M> {
    pub fn new(memory: &'m M, options: RenderOptions) -> Self {
        Self { memory, options }
    }

    /// Decodes `field` at `address`.
    ///
    /// Returns the address just past the field and, for data fields, the rendered
    /// line. Skip fields read nothing. Data fields issue one `read_byte` per
    /// address: ascending for big-endian, descending for little-endian.
    pub fn decode_field(
        &self,
        address: u64,
        field: &FieldSpec,
    ) -> Result<(u64, Option<RenderedLine>), DumpError> {
        let next = address
            .checked_add(field.size())
            .ok_or(ConfigError::AddressOverflow)?;

        match field {
            FieldSpec::Skip { .. } => Ok((next, None)),
            FieldSpec::Data { name, .. } => {
                let mut bytes = Vec::with_capacity(field.size().min(4096) as usize);
                match self.options.byte_order {
                    ByteOrder::Big => {
                        for addr in address..next {
                            bytes.push(self.memory.read_byte(addr)?);
                        }
                    }
                    ByteOrder::Little => {
                        for addr in (address..next).rev() {
                            bytes.push(self.memory.read_byte(addr)?);
                        }
                        bytes.reverse();
                    }
                }

                let line = RenderedLine::Field {
                    name: name.clone(),
                    hex: render_hex(&bytes, self.options),
                };

                Ok((next, Some(line)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use proptest::prelude::*;

    use super::*;
    use crate::{errors::ReadError, memory::MemoryImage, order::HexRender};

    fn image() -> MemoryImage {
        MemoryImage::new(0x100, vec![0x01, 0x02, 0x03, 0x04, 0xa0, 0xb0])
    }

    #[test]
    fn test_skip_reads_nothing() {
        let reads = RefCell::new(Vec::new());
        let source = |address: u64| {
            reads.borrow_mut().push(address);
            Ok::<u8, ReadError>(0)
        };

        let decoder = FieldDecoder::new(&source, RenderOptions::default());
        let (next, line) = decoder.decode_field(0x100, &FieldSpec::skip(6)).unwrap();

        assert_eq!(next, 0x106);
        assert_eq!(line, None);
        assert!(reads.borrow().is_empty());
    }

    fn read_order(byte_order: ByteOrder) -> Vec<u64> {
        let reads = RefCell::new(Vec::new());
        let source = |address: u64| {
            reads.borrow_mut().push(address);
            Ok::<u8, ReadError>(0)
        };

        let decoder = FieldDecoder::new(&source, RenderOptions::new(byte_order));
        decoder.decode_field(0x10, &FieldSpec::data("v", 3)).unwrap();

        reads.into_inner()
    }

    #[test]
    fn test_big_endian_reads_ascending() {
        assert_eq!(read_order(ByteOrder::Big), vec![0x10, 0x11, 0x12]);
    }

    #[test]
    fn test_little_endian_reads_descending() {
        assert_eq!(read_order(ByteOrder::Little), vec![0x12, 0x11, 0x10]);
    }

    #[test]
    fn test_little_endian_unmapped_reports_highest_address() {
        let image = MemoryImage::new(0x100, vec![0x01, 0x02]);
        let decoder = FieldDecoder::new(&image, RenderOptions::new(ByteOrder::Little));

        assert_eq!(
            decoder.decode_field(0x100, &FieldSpec::data("w", 4)).unwrap_err(),
            DumpError::Read(ReadError::Unmapped { address: 0x103 })
        );
    }

    #[test]
    fn test_big_endian_field() {
        let image = image();
        let decoder = FieldDecoder::new(&image, RenderOptions::new(ByteOrder::Big));
        let (next, line) = decoder.decode_field(0x100, &FieldSpec::data("id", 4)).unwrap();

        assert_eq!(next, 0x104);
        assert_eq!(line.unwrap().to_string(), "  id: 01020304");
    }

    #[test]
    fn test_little_endian_field() {
        let image = image();
        let decoder = FieldDecoder::new(&image, RenderOptions::new(ByteOrder::Little));
        let (_, line) = decoder.decode_field(0x100, &FieldSpec::data("id", 4)).unwrap();

        assert_eq!(line.unwrap().to_string(), "  id: 04030201");
    }

    #[test]
    fn test_multi_byte_field_renders_every_byte() {
        let image = image();
        let decoder = FieldDecoder::new(&image, RenderOptions::default());
        let (_, line) = decoder.decode_field(0x102, &FieldSpec::data("w", 4)).unwrap();

        let Some(RenderedLine::Field { hex, .. }) = line else {
            panic!("expected a field line");
        };
        assert_eq!(hex.len(), 8);
        assert_eq!(hex, "0304a0b0");
    }

    #[test]
    fn test_last_byte_render_matches_legacy_output() {
        let image = image();
        let options = RenderOptions::new(ByteOrder::Big).with_render(HexRender::LastByte);
        let decoder = FieldDecoder::new(&image, options);
        let (next, line) = decoder.decode_field(0x102, &FieldSpec::data("w", 4)).unwrap();

        assert_eq!(next, 0x106);
        assert_eq!(line.unwrap().to_string(), "  w: b0");
    }

    #[test]
    fn test_unmapped_read_propagates() {
        let image = image();
        let decoder = FieldDecoder::new(&image, RenderOptions::default());

        assert_eq!(
            decoder.decode_field(0x104, &FieldSpec::data("w", 4)).unwrap_err(),
            DumpError::Read(ReadError::Unmapped { address: 0x106 })
        );
    }

    #[test]
    fn test_address_overflow() {
        let image = image();
        let decoder = FieldDecoder::new(&image, RenderOptions::default());

        assert_eq!(
            decoder.decode_field(u64::MAX, &FieldSpec::skip(2)).unwrap_err(),
            DumpError::Config(ConfigError::AddressOverflow)
        );
    }

    proptest! {
        #[test]
        fn skip_advances_by_size(address in 0u64..1 << 48, size in 0u64..4096) {
            let source = |_: u64| Err::<u8, ReadError>(ReadError::Unmapped { address: 0 });
            let decoder = FieldDecoder::new(&source, RenderOptions::default());
            let (next, line) = decoder.decode_field(address, &FieldSpec::skip(size)).unwrap();
            prop_assert_eq!(next, address + size);
            prop_assert!(line.is_none());
        }
    }
}
