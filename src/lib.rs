/*!
 * Blockpool Library
 * First-fit block allocator over a growable byte pool
 */

pub mod core;
pub mod manager;
pub mod traits;
pub mod types;

// Re-exports
pub use manager::BlockManager;
pub use traits::{BlockAllocator, PoolDiagnostics};
pub use types::{BlockError, BlockInfo, BlockResult, Handle, PoolStats};
