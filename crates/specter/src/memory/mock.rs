//! In-memory stand-in for the target address space, used by tests.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::reader::ReadMemory;

/// Sparse byte image; reads succeed only where every requested byte was
/// laid out by the builder.
pub struct MockMemoryReader {
    bytes: HashMap<u64, u8>,
}

impl ReadMemory for MockMemoryReader {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        if address == 0 {
            return Err(Error::MemoryReadFailed {
                address,
                message: "null address".to_string(),
            });
        }

        let mut out = Vec::with_capacity(size);
        for offset in 0..size as u64 {
            match self.bytes.get(&(address + offset)) {
                Some(byte) => out.push(*byte),
                None => {
                    return Err(Error::MemoryReadFailed {
                        address,
                        message: format!("unmapped byte at {:#x}", address + offset),
                    });
                }
            }
        }
        Ok(out)
    }
}

/// Lays out typed values at absolute addresses.
#[derive(Default)]
pub struct MockMemoryBuilder {
    bytes: HashMap<u64, u8>,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(mut self, address: u64, data: &[u8]) -> Self {
        for (offset, byte) in data.iter().enumerate() {
            self.bytes.insert(address + offset as u64, *byte);
        }
        self
    }

    pub fn with_u32(self, address: u64, value: u32) -> Self {
        self.with_bytes(address, &value.to_le_bytes())
    }

    pub fn with_i32(self, address: u64, value: i32) -> Self {
        self.with_bytes(address, &value.to_le_bytes())
    }

    pub fn with_f32(self, address: u64, value: f32) -> Self {
        self.with_bytes(address, &value.to_le_bytes())
    }

    pub fn with_f32_slice(mut self, address: u64, values: &[f32]) -> Self {
        for (index, value) in values.iter().enumerate() {
            self = self.with_f32(address + index as u64 * 4, *value);
        }
        self
    }

    pub fn build(self) -> MockMemoryReader {
        MockMemoryReader { bytes: self.bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_bytes_read_back() {
        let reader = MockMemoryBuilder::new()
            .with_bytes(0x10, &[1, 2, 3])
            .build();
        assert_eq!(reader.read_bytes(0x10, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(reader.read_bytes(0x11, 2).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_unmapped_read_fails() {
        let reader = MockMemoryBuilder::new()
            .with_bytes(0x10, &[1, 2, 3])
            .build();
        assert!(reader.read_bytes(0x10, 4).is_err());
        assert!(reader.read_bytes(0x40, 1).is_err());
    }

    #[test]
    fn test_f32_slice_layout() {
        let reader = MockMemoryBuilder::new()
            .with_f32_slice(0x100, &[0.5, -1.0])
            .build();
        assert_eq!(reader.read_f32(0x100).unwrap(), 0.5);
        assert_eq!(reader.read_f32(0x104).unwrap(), -1.0);
    }
}
