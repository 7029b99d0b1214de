//! Keyed sequence storage on a byte device.

use crate::error::{Result, StorageError};
use crate::hal::NonVolatileStorage;

use super::slot::{Slot, SLOT_BYTES};
use super::{MAX_BLOCK_LIMIT, MAX_KEYS, MAX_TARGET};

/// Saved sequences laid out as fixed blocks of `block_limit` slots.
///
/// Key `k` owns slots `k * block_limit .. (k + 1) * block_limit`; slot `i`
/// lives at byte address `i * SLOT_BYTES`.
#[derive(Debug)]
pub struct SequenceStore<S> {
    storage: S,
    block_limit: u8,
}

impl<S: NonVolatileStorage> SequenceStore<S> {
    /// Wrap a storage device.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBlockLimit` if `block_limit` is zero or
    /// above [`MAX_BLOCK_LIMIT`].
    pub fn new(storage: S, block_limit: u8) -> Result<Self> {
        if block_limit == 0 || usize::from(block_limit) > MAX_BLOCK_LIMIT {
            return Err(crate::error::ConfigError::InvalidBlockLimit(block_limit).into());
        }
        Ok(Self {
            storage,
            block_limit,
        })
    }

    /// Slots per key.
    #[inline]
    pub fn block_limit(&self) -> u8 {
        self.block_limit
    }

    /// Number of keys the device can hold.
    pub fn max_keys(&self) -> u16 {
        let per_key = usize::from(self.block_limit) * SLOT_BYTES;
        let keys = self.storage.capacity() / per_key;
        keys.min(usize::from(MAX_KEYS)) as u16
    }

    /// Borrow the storage device.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the storage device.
    pub fn release(self) -> S {
        self.storage
    }

    fn check_key(&self, key: u16) -> Result<()> {
        let max_keys = self.max_keys();
        if key >= max_keys {
            return Err(StorageError::KeyOutOfRange { key, max_keys }.into());
        }
        Ok(())
    }

    fn slot_address(&self, key: u16, offset: u8) -> usize {
        (usize::from(key) * usize::from(self.block_limit) + usize::from(offset)) * SLOT_BYTES
    }

    /// Read one slot of a key's block.
    pub fn read_slot(&mut self, key: u16, offset: u8) -> Result<Slot> {
        self.check_key(key)?;
        let address = self.slot_address(key, offset);
        let mut bytes = [0u8; SLOT_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.storage.read_byte(address + i)?;
        }
        Ok(Slot::decode(bytes))
    }

    /// Overwrite one slot of a key's block.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::TargetOutOfRange` for a target above
    /// [`MAX_TARGET`]; nothing is written.
    pub fn write_slot(&mut self, key: u16, offset: u8, slot: Slot) -> Result<()> {
        self.check_key(key)?;
        check_slot(slot)?;
        let address = self.slot_address(key, offset);
        for (i, byte) in slot.encode().into_iter().enumerate() {
            self.storage.write_byte(address + i, byte)?;
        }
        Ok(())
    }

    /// Store a whole sequence under `key`.
    ///
    /// Slots past the end of `targets` are written empty; targets past the
    /// block limit are ignored. Every stored target is checked before the
    /// first write, so a rejected sequence leaves the block as it was.
    pub fn save(&mut self, key: u16, targets: &[u16]) -> Result<()> {
        let targets = &targets[..targets.len().min(usize::from(self.block_limit))];
        for &target in targets {
            check_slot(Slot::Target(target))?;
        }

        let mut writer = self.begin_save(key)?;
        for &target in targets {
            writer.push(Slot::Target(target))?;
        }
        writer.fill_empty()?;
        info!("saved {} targets on key {}", targets.len(), key);
        Ok(())
    }

    /// Start writing `key`'s block slot by slot.
    ///
    /// Each push takes effect immediately; abandoning the writer leaves the
    /// remaining slots holding whatever they held before.
    pub fn begin_save(&mut self, key: u16) -> Result<SaveWriter<'_, S>> {
        self.check_key(key)?;
        Ok(SaveWriter {
            store: self,
            key,
            next: 0,
        })
    }

    /// Open `key`'s block for replay.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NoStoredData` if the block's first slot is
    /// empty. Empty slots after the first are skipped during iteration.
    pub fn load(&mut self, key: u16) -> Result<LoadedSequence<'_, S>> {
        if self.read_slot(key, 0)? == Slot::Empty {
            return Err(StorageError::NoStoredData { key }.into());
        }
        Ok(LoadedSequence {
            store: self,
            key,
            next: 0,
        })
    }
}

fn check_slot(slot: Slot) -> Result<()> {
    match slot {
        Slot::Target(target) if target > MAX_TARGET => {
            Err(StorageError::TargetOutOfRange { target }.into())
        }
        _ => Ok(()),
    }
}

/// Incremental writer over one key's block.
pub struct SaveWriter<'a, S> {
    store: &'a mut SequenceStore<S>,
    key: u16,
    next: u8,
}

impl<S: NonVolatileStorage> SaveWriter<'_, S> {
    /// Key being written.
    #[inline]
    pub fn key(&self) -> u16 {
        self.key
    }

    /// Slots in the block.
    #[inline]
    pub fn block_limit(&self) -> u8 {
        self.store.block_limit
    }

    /// Offset the next push writes to.
    #[inline]
    pub fn offset(&self) -> u8 {
        self.next
    }

    /// Slots left to write.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.store.block_limit - self.next
    }

    /// Write the next slot. A push into a full block is ignored, and a
    /// rejected target leaves the offset where it was.
    pub fn push(&mut self, slot: Slot) -> Result<()> {
        if self.remaining() == 0 {
            warn!("block for key {} already full", self.key);
            return Ok(());
        }
        self.store.write_slot(self.key, self.next, slot)?;
        self.next += 1;
        Ok(())
    }

    /// Mark every remaining slot empty. Returns how many were written.
    pub fn fill_empty(&mut self) -> Result<u8> {
        let count = self.remaining();
        for _ in 0..count {
            self.push(Slot::Empty)?;
        }
        Ok(count)
    }
}

/// Lazy iterator over the targets stored under one key.
pub struct LoadedSequence<'a, S> {
    store: &'a mut SequenceStore<S>,
    key: u16,
    next: u8,
}

impl<S: NonVolatileStorage> LoadedSequence<'_, S> {
    /// Key being replayed.
    #[inline]
    pub fn key(&self) -> u16 {
        self.key
    }
}

impl<S: NonVolatileStorage> Iterator for LoadedSequence<'_, S> {
    type Item = Result<u16>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.store.block_limit {
            let offset = self.next;
            self.next += 1;
            match self.store.read_slot(self.key, offset) {
                Ok(Slot::Target(t)) => return Some(Ok(t)),
                Ok(Slot::Empty) => continue,
                Err(e) => {
                    self.next = self.store.block_limit;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
