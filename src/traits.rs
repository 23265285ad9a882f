/*!
 * Allocator Traits
 * Public seams between the block manager and its consumers
 */

use crate::core::types::{Address, Size};
use crate::types::{BlockInfo, BlockResult, Handle, PoolStats};

/// Block allocation interface
///
/// `release` and `resize` take `Option<Handle>` because the classic
/// allocator contract accepts a null argument: releasing nothing is a no-op
/// and resizing nothing is a plain allocation.
pub trait BlockAllocator {
    /// Allocate `size` payload bytes and return a handle to them
    fn allocate(&mut self, size: Size) -> BlockResult<Handle>;

    /// Release a previously allocated block; `None` is an accepted no-op
    fn release(&mut self, handle: Option<Handle>) -> BlockResult<()>;

    /// Resize a block, preserving its content up to the smaller of the two
    /// sizes; `None` behaves as `allocate(new_size)`
    fn resize(&mut self, handle: Option<Handle>, new_size: Size) -> BlockResult<Handle>;

    /// Check if a handle refers to a live allocation
    fn is_valid(&self, handle: Handle) -> bool;

    /// Get the payload size of a live block
    fn block_size(&self, handle: Handle) -> Option<Size>;
}

/// Read-only pool diagnostics
///
/// Pure queries over the block list; implementations must not mutate it.
pub trait PoolDiagnostics {
    /// Snapshot every block in list order
    fn blocks(&self) -> Vec<BlockInfo>;

    /// Sum of payload sizes over allocated blocks
    fn total_allocated(&self) -> Size;

    /// Aggregate pool statistics
    fn stats(&self) -> PoolStats;

    /// Pool address of a live block's header
    fn block_address(&self, handle: Handle) -> Option<Address>;
}
