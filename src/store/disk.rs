use super::LedgerSlot;
use anyhow::{Context, Result};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const SLOT_KEY: &str = "expenses";

/// Ledger slot backed by a fjall keyspace on disk. The whole ledger lives
/// under one key and every write is flushed before it is reported done.
pub struct DiskSlot {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskSlot {
    pub fn open(data_path: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_path)
            .with_context(|| format!("Failed to create data directory: {}", data_path.display()))?;

        let keyspace = Config::new(data_path.join("ledger"))
            .open()
            .with_context(|| format!("Failed to open ledger store at {}", data_path.display()))?;
        let partition = keyspace
            .open_partition("ledger", PartitionCreateOptions::default())
            .context("Failed to open ledger partition")?;

        Ok(Self { keyspace, partition })
    }
}

impl LedgerSlot for DiskSlot {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        let value = self.partition.get(SLOT_KEY)?;
        debug!(found = value.is_some(), "Read ledger slot");
        Ok(value.map(|slice| slice.to_vec()))
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.partition.insert(SLOT_KEY, bytes)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(len = bytes.len(), "Wrote ledger slot");
        Ok(())
    }
}
