/*!
 * Core Types
 * Common aliases for pool addressing
 */

/// Address type for pool offsets
///
/// Blocks live at fixed offsets inside the byte pool. Offsets are stable for
/// the lifetime of a block because the pool only ever grows by appending.
pub type Address = usize;

/// Size type for payload and pool capacities
pub type Size = usize;
