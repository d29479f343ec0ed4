pub mod disk;
pub mod memory;

use anyhow::Result;

/// A single named location in durable key-value storage holding the
/// serialized ledger. Reads and writes are synchronous; a write that
/// returns `Ok` is durable.
pub trait LedgerSlot {
    fn read(&self) -> Result<Option<Vec<u8>>>;
    fn write(&self, bytes: &[u8]) -> Result<()>;
}
