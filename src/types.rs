/*!
 * Allocator Types
 * Public vocabulary for the block manager
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allocator operation result
pub type BlockResult<T> = Result<T, BlockError>;

/// Allocator errors
///
/// `OutOfMemory` is the only condition the original allocator contract
/// considers recoverable. The handle faults exist because handles are
/// validated instead of trusted: forged, stale and double-released handles
/// are reported rather than left as undefined behavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("out of memory: requested {requested} bytes, available {available} bytes ({used} used / {total} total)")]
    OutOfMemory {
        requested: Size,
        available: Size,
        used: Size,
        total: Size,
    },

    #[error("invalid handle: slot {slot}, generation {generation}")]
    InvalidHandle { slot: u32, generation: u32 },

    #[error("block already released: slot {slot}, generation {generation}")]
    AlreadyReleased { slot: u32, generation: u32 },

    #[error("out of bounds access: offset {offset}, len {len} in block of {size} bytes")]
    OutOfBounds {
        offset: Size,
        len: Size,
        size: Size,
    },
}

/// Opaque block handle
///
/// Identifies a live allocation: an index into the manager's slot arena plus
/// the generation the slot had when the block was issued. The generation
/// moves whenever a slot is reissued or retired, so handles that outlive
/// their block stop resolving instead of aliasing a newer allocation.
///
/// Handles are only created by [`crate::BlockManager`]; the fields are
/// deliberately private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl Handle {
    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }
}

/// Diagnostic snapshot of one block, in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Pool offset of the block's header region
    pub address: Address,
    /// Usable payload size in bytes, header excluded
    pub size: Size,
    /// Whether the block is currently free
    pub is_free: bool,
}

/// Pool statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStats {
    pub total_capacity: Size,
    pub pool_bytes: Size,
    pub allocated_bytes: Size,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub usage_percentage: f64,
}
