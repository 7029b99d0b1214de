//! Byte-addressed non-volatile storage.

use crate::error::{Result, StorageError};

/// EEPROM-like byte storage.
pub trait NonVolatileStorage {
    /// Size of the device in bytes.
    fn capacity(&self) -> usize;

    /// Read one byte.
    fn read_byte(&mut self, address: usize) -> Result<u8>;

    /// Write one byte. Takes effect immediately; there is no transaction.
    fn write_byte(&mut self, address: usize, value: u8) -> Result<()>;
}

/// Value of an erased EEPROM or flash cell.
pub const ERASED_BYTE: u8 = 0xFF;

/// RAM-backed storage of `N` bytes, starting out erased.
///
/// Useful on hosts and for boards that persist the image elsewhere.
#[derive(Debug, Clone)]
pub struct MemoryStorage<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> MemoryStorage<N> {
    /// Create an erased device.
    pub const fn new() -> Self {
        Self {
            bytes: [ERASED_BYTE; N],
        }
    }

    /// Raw device image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> Default for MemoryStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NonVolatileStorage for MemoryStorage<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read_byte(&mut self, address: usize) -> Result<u8> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(StorageError::AddressOutOfRange(address).into())
    }

    fn write_byte(&mut self, address: usize, value: u8) -> Result<()> {
        let cell = self
            .bytes
            .get_mut(address)
            .ok_or(StorageError::AddressOutOfRange(address))?;
        *cell = value;
        Ok(())
    }
}
