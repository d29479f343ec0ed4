use super::LedgerSlot;
use anyhow::Result;
use std::sync::{Arc, RwLock};

/// In-memory slot. Clones share the same contents, which lets tests reopen
/// a ledger against the same slot.
#[derive(Clone, Default)]
pub struct MemorySlot {
    inner: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.inner.read().unwrap().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        *self.inner.write().unwrap() = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_round_trip() {
        let slot = MemorySlot::new();
        assert!(slot.read().unwrap().is_none());

        slot.write(b"payload").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some(b"payload".as_ref()));
    }

    #[test]
    fn test_clones_share_contents() {
        let slot = MemorySlot::new();
        let other = slot.clone();

        slot.write(b"shared").unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some(b"shared".as_ref()));
    }
}
