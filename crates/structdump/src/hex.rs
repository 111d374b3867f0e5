//! Hex rendering of field bytes and the inverse parse.
//!
//! Byte slices are always given in ascending address order; the [ByteOrder]
//! decides which end of the slice is written first.

use crate::{
    errors::HexError,
    order::{ByteOrder, HexRender, RenderOptions},
};

/// Renders `bytes` (ascending address order) as lowercase, zero-padded hex.
pub fn render_hex(bytes: &[u8], options: RenderOptions) -> String {
    let group = |byte: &u8| format!("{byte:02x}");

    match (options.render, options.byte_order) {
        (HexRender::Full, ByteOrder::Big) => bytes.iter().map(group).collect(),
        (HexRender::Full, ByteOrder::Little) => bytes.iter().rev().map(group).collect(),
        (HexRender::LastByte, ByteOrder::Big) => bytes.last().map(group).unwrap_or_default(),
        (HexRender::LastByte, ByteOrder::Little) => bytes.first().map(group).unwrap_or_default(),
    }
}

/// Parses a string produced by [render_hex] with [HexRender::Full] back into
/// bytes in ascending address order.
pub fn parse_hex(s: &str, byte_order: ByteOrder) -> Result<Vec<u8>, HexError> {
    let digits: Vec<char> = s.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let hi = pair[0].to_digit(16).ok_or(HexError::InvalidDigit(pair[0]))?;
        let lo = pair[1].to_digit(16).ok_or(HexError::InvalidDigit(pair[1]))?;
        bytes.push(((hi << 4) | lo) as u8);
    }

    if byte_order == ByteOrder::Little {
        bytes.reverse();
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_render_big_endian() {
        let s = render_hex(&[0x12, 0x34, 0x05], RenderOptions::new(ByteOrder::Big));
        assert_eq!(s, "123405");
    }

    #[test]
    fn test_render_little_endian() {
        let s = render_hex(&[0x12, 0x34, 0x05], RenderOptions::new(ByteOrder::Little));
        assert_eq!(s, "053412");
    }

    #[test]
    fn test_render_is_lowercase() {
        let s = render_hex(&[0xab, 0xcd], RenderOptions::new(ByteOrder::Big));
        assert_eq!(s, "abcd");
    }

    #[test]
    fn test_render_last_byte_keeps_only_final_group() {
        let big = RenderOptions::new(ByteOrder::Big).with_render(HexRender::LastByte);
        let little = RenderOptions::new(ByteOrder::Little).with_render(HexRender::LastByte);

        assert_eq!(render_hex(&[0x12, 0x34, 0x56], big), "56");
        assert_eq!(render_hex(&[0x12, 0x34, 0x56], little), "12");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_hex(&[], RenderOptions::default()), "");
    }

    #[test]
    fn test_parse_odd_length() {
        assert_eq!(parse_hex("abc", ByteOrder::Big).unwrap_err(), HexError::OddLength);
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            parse_hex("zz", ByteOrder::Big).unwrap_err(),
            HexError::InvalidDigit('z')
        );
    }

    proptest! {
        #[test]
        fn little_endian_is_reversed_big_endian(
            bytes in prop::collection::vec(any::<u8>(), 0..16)
        ) {
            let big = render_hex(&bytes, RenderOptions::new(ByteOrder::Big));
            let mut reversed = bytes.clone();
            reversed.reverse();
            prop_assert_eq!(render_hex(&reversed, RenderOptions::new(ByteOrder::Little)), big);
        }

        #[test]
        fn render_then_parse_recovers_bytes(
            bytes in prop::collection::vec(any::<u8>(), 0..16),
            little in any::<bool>()
        ) {
            let order = if little { ByteOrder::Little } else { ByteOrder::Big };
            let rendered = render_hex(&bytes, RenderOptions::new(order));
            prop_assert_eq!(rendered.len(), bytes.len() * 2);
            prop_assert_eq!(parse_hex(&rendered, order).unwrap(), bytes);
        }
    }
}
