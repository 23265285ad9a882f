/*!
 * Limits and Constants
 *
 * Centralized location for allocator-wide limits and thresholds.
 * Values include rationale comments explaining why they exist.
 */

use std::mem;

/// Default pool capacity (64MB)
/// Used by `BlockManager::new`; tests usually pick something smaller via
/// `with_capacity`
pub const DEFAULT_POOL_CAPACITY: usize = 64 * 1024 * 1024;

/// Bytes reserved in the pool ahead of every payload
///
/// Models the in-band header of a classic list allocator: size, state flag
/// and next link, each one word wide. The header metadata itself lives in
/// the slot arena, but the pool still sets these bytes aside so that block
/// addresses, split arithmetic and coalesced sizes match the header-in-band
/// layout exactly.
pub const HEADER_SIZE: usize = 3 * mem::size_of::<usize>();

/// Minimum usable payload a split remainder must have (1 byte)
///
/// A free block is only divided when the leftover can hold a header plus at
/// least this much payload; otherwise the whole block is handed over with
/// internal slack. Prevents headers that describe zero usable space.
pub const MIN_SPLIT_PAYLOAD: usize = 1;
