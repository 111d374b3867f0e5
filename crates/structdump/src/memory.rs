//! Byte sources: the host read primitive the decoder pulls memory through.

use crate::errors::ReadError;

/// Read-only access to an address space, one byte at a time.
///
/// Implemented by debugger or emulator bindings. Any `Fn(u64) -> Result<u8, ReadError>`
/// closure is a source too.
pub trait MemoryRead {
    /// Reads the byte at `address`.
    fn read_byte(&self, address: u64) -> Result<u8, ReadError>;
}

impl<F> MemoryRead for F
where
    F: Fn(u64) -> Result<u8, ReadError>,
{
    fn read_byte(&self, address: u64) -> Result<u8, ReadError> {
        self(address)
    }
}

/// A contiguous block of memory captured at a known base address,
/// e.g. a raw dump taken from a paused target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    base: u64,
    bytes: Vec<u8>,
}

impl MemoryImage {
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// First address past the end of the image.
    pub fn end(&self) -> u64 {
        self.base.saturating_add(self.bytes.len() as u64)
    }
}

impl MemoryRead for MemoryImage {
    fn read_byte(&self, address: u64) -> Result<u8, ReadError> {
        address
            .checked_sub(self.base)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|offset| self.bytes.get(offset).copied())
            .ok_or(ReadError::Unmapped { address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reads_relative_to_base() {
        let image = MemoryImage::new(0x1000, vec![0xaa, 0xbb]);
        assert_eq!(image.read_byte(0x1000).unwrap(), 0xaa);
        assert_eq!(image.read_byte(0x1001).unwrap(), 0xbb);
        assert_eq!(image.end(), 0x1002);
    }

    #[test]
    fn test_image_below_base_is_unmapped() {
        let image = MemoryImage::new(0x1000, vec![0xaa]);
        assert_eq!(
            image.read_byte(0xfff).unwrap_err(),
            ReadError::Unmapped { address: 0xfff }
        );
    }

    #[test]
    fn test_image_past_end_is_unmapped() {
        let image = MemoryImage::new(0x1000, vec![0xaa]);
        assert_eq!(
            image.read_byte(0x1001).unwrap_err(),
            ReadError::Unmapped { address: 0x1001 }
        );
    }

    #[test]
    fn test_closure_source() {
        let source = |address: u64| Ok::<u8, ReadError>(address as u8);
        assert_eq!(source.read_byte(0x1234).unwrap(), 0x34);
    }
}
