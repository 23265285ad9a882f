/*!
 * Payload Access
 * Bounds-checked reads and writes against a block's payload region
 */

use super::BlockManager;
use crate::core::limits::HEADER_SIZE;
use crate::core::types::Size;
use crate::types::{BlockError, BlockResult, Handle};
use log::info;

impl BlockManager {
    /// Write bytes into a block's payload at the given offset
    pub fn write_bytes(&mut self, handle: Handle, offset: Size, data: &[u8]) -> BlockResult<()> {
        let index = self.arena.resolve_live(handle)?;
        let block = self.arena.get(index);

        // checked_add: a wrapping offset must read as out of range, not bypass
        // the check
        if offset
            .checked_add(data.len())
            .map_or(true, |end| end > block.size)
        {
            return Err(BlockError::OutOfBounds {
                offset,
                len: data.len(),
                size: block.size,
            });
        }

        let start = block.offset + HEADER_SIZE + offset;
        self.pool[start..start + data.len()].copy_from_slice(data);

        info!(
            "Wrote {} bytes at offset {} of block 0x{:x}",
            data.len(),
            offset,
            block.offset
        );
        Ok(())
    }

    /// Read bytes from a block's payload at the given offset
    pub fn read_bytes(&self, handle: Handle, offset: Size, len: Size) -> BlockResult<Vec<u8>> {
        let index = self.arena.resolve_live(handle)?;
        let block = self.arena.get(index);

        if offset.checked_add(len).map_or(true, |end| end > block.size) {
            return Err(BlockError::OutOfBounds {
                offset,
                len,
                size: block.size,
            });
        }

        let start = block.offset + HEADER_SIZE + offset;
        Ok(self.pool[start..start + len].to_vec())
    }
}
