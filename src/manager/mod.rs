/*!
 * Block Manager
 *
 * First-fit allocator over a growable byte pool.
 *
 * ## Design
 *
 * - **Block list**: singly linked list of variable-size blocks, each either
 *   free or allocated, carved out of one byte pool. New blocks are appended
 *   where a failed first-fit scan ended and split remainders are linked right
 *   after their parent, so list adjacency tracks pool adjacency.
 * - **Splitting**: a free block larger than a request by at least one header
 *   plus one payload byte is divided into an allocated prefix and a free
 *   suffix.
 * - **Coalescing**: after every release, adjacent free blocks are merged to
 *   exhaustion in a single scan.
 * - **Handles**: callers hold opaque generation-checked handles instead of
 *   pool addresses; misuse surfaces as an error, never as corruption.
 *
 * The manager is single-threaded by contract: every mutating operation takes
 * `&mut self` and runs to completion. Wrap the whole manager in a lock if it
 * must be shared.
 */

mod allocator;
mod arena;
mod list;
mod stats;
mod storage;

use crate::core::limits::DEFAULT_POOL_CAPACITY;
use crate::core::types::{Address, Size};
use crate::traits::{BlockAllocator, PoolDiagnostics};
use crate::types::{BlockInfo, BlockResult, Handle, PoolStats};
use arena::{BlockArena, SlotIndex};
use log::info;

/// Block manager owning the pool, the slot arena and the list head
pub struct BlockManager {
    /// Backing storage; grows by appending, never shrinks
    pool: Vec<u8>,
    /// Hard ceiling on pool growth
    capacity: Size,
    /// Header storage; see [`arena::BlockArena`]
    arena: BlockArena,
    /// First block in list order
    head: Option<SlotIndex>,
}

impl BlockManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }

    /// Create a block manager with a custom pool capacity (useful for testing)
    pub fn with_capacity(total: Size) -> Self {
        info!(
            "Block manager initialized with {} bytes (first-fit, eager coalescing)",
            total
        );
        Self {
            pool: Vec::new(),
            capacity: total,
            arena: BlockArena::new(),
            head: None,
        }
    }

    /// Pool capacity in bytes
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Bytes obtained from the pool so far, headers included
    pub fn pool_bytes(&self) -> Size {
        self.pool.len()
    }
}

impl Default for BlockManager {
    fn default() -> Self {
        Self::new()
    }
}

// Implement trait interfaces
impl BlockAllocator for BlockManager {
    fn allocate(&mut self, size: Size) -> BlockResult<Handle> {
        BlockManager::allocate(self, size)
    }

    fn release(&mut self, handle: Option<Handle>) -> BlockResult<()> {
        BlockManager::release(self, handle)
    }

    fn resize(&mut self, handle: Option<Handle>, new_size: Size) -> BlockResult<Handle> {
        BlockManager::resize(self, handle, new_size)
    }

    fn is_valid(&self, handle: Handle) -> bool {
        BlockManager::is_valid(self, handle)
    }

    fn block_size(&self, handle: Handle) -> Option<Size> {
        BlockManager::block_size(self, handle)
    }
}

impl PoolDiagnostics for BlockManager {
    fn blocks(&self) -> Vec<BlockInfo> {
        BlockManager::blocks(self)
    }

    fn total_allocated(&self) -> Size {
        BlockManager::total_allocated(self)
    }

    fn stats(&self) -> PoolStats {
        BlockManager::stats(self)
    }

    fn block_address(&self, handle: Handle) -> Option<Address> {
        BlockManager::block_address(self, handle)
    }
}
