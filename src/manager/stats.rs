/*!
 * Pool Diagnostics
 * Read-only queries over the block list
 */

use super::BlockManager;
use crate::core::types::{Address, Size};
use crate::types::{BlockInfo, Handle, PoolStats};

impl BlockManager {
    /// Snapshot every block in list order
    pub fn blocks(&self) -> Vec<BlockInfo> {
        let mut out = Vec::new();
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let block = self.arena.get(index);
            out.push(BlockInfo {
                address: block.offset,
                size: block.size,
                is_free: block.is_free,
            });
            cursor = block.next;
        }

        out
    }

    /// Sum of payload sizes over allocated blocks
    pub fn total_allocated(&self) -> Size {
        let mut total = 0;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let block = self.arena.get(index);
            if !block.is_free {
                total += block.size;
            }
            cursor = block.next;
        }

        total
    }

    /// Aggregate pool statistics
    pub fn stats(&self) -> PoolStats {
        let mut allocated_bytes = 0;
        let mut allocated_blocks = 0;
        let mut free_blocks = 0;

        for block in self.blocks() {
            if block.is_free {
                free_blocks += 1;
            } else {
                allocated_blocks += 1;
                allocated_bytes += block.size;
            }
        }

        // Zero-capacity managers exist in tests; avoid a NaN percentage
        let usage_percentage = if self.capacity == 0 {
            0.0
        } else {
            (self.pool.len() as f64 / self.capacity as f64) * 100.0
        };

        PoolStats {
            total_capacity: self.capacity,
            pool_bytes: self.pool.len(),
            allocated_bytes,
            allocated_blocks,
            free_blocks,
            usage_percentage,
        }
    }

    /// Pool address of a live block's header
    pub fn block_address(&self, handle: Handle) -> Option<Address> {
        let index = self.arena.resolve_live(handle).ok()?;
        Some(self.arena.get(index).offset)
    }
}
