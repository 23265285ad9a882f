/*!
 * Core Types and Limits
 * Shared vocabulary used across the allocator
 */

pub mod limits;
pub mod types;

pub use types::{Address, Size};
