/*!
 * Block List Maintenance
 * Splitting and coalescing over the singly linked block list
 */

use super::arena::{BlockHeader, SlotIndex};
use super::BlockManager;
use crate::core::limits::HEADER_SIZE;
use crate::core::types::Size;
use log::info;

impl BlockManager {
    /// Divide a free block into an allocated prefix and a free suffix
    ///
    /// The remainder starts one header past the requested payload, covers
    /// whatever the parent had left, and is spliced into the list right
    /// after the parent. Caller guarantees
    /// `size >= requested + HEADER_SIZE + MIN_SPLIT_PAYLOAD`.
    pub(super) fn split_block(&mut self, index: SlotIndex, requested: Size) {
        let block = self.arena.get(index);
        let (offset, size, next) = (block.offset, block.size, block.next);

        let remainder = BlockHeader {
            offset: offset + HEADER_SIZE + requested,
            size: size - HEADER_SIZE - requested,
            is_free: true,
            next,
        };
        let remainder_size = remainder.size;
        let remainder_offset = remainder.offset;
        let (remainder_index, _) = self.arena.insert(remainder);

        let block = self.arena.get_mut(index);
        block.size = requested;
        block.is_free = false;
        block.next = Some(remainder_index);

        info!(
            "Split block at 0x{:x}: keeping {} bytes, remainder of {} bytes at 0x{:x}",
            offset, requested, remainder_size, remainder_offset
        );
    }

    /// Merge list-adjacent free blocks until none remain
    ///
    /// Single left-to-right scan. When the current and next block are both
    /// free, the next block's payload plus its header are folded into the
    /// current one and its slot is retired; the cursor is then re-examined
    /// rather than advanced, because the merge may expose a new adjacency
    /// with the block after it. One pass reaches the fixed point.
    pub(super) fn coalesce(&mut self) {
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let block = self.arena.get(index);
            let (is_free, next) = (block.is_free, block.next);

            let Some(next_index) = next else {
                break;
            };
            let next_block = self.arena.get(next_index);
            let (next_free, next_size, next_next) = (next_block.is_free, next_block.size, next_block.next);

            if is_free && next_free {
                let block = self.arena.get_mut(index);
                block.size += HEADER_SIZE + next_size;
                block.next = next_next;
                self.arena.retire(next_index);
                // Stay on this block; the new neighbor may be free too
            } else {
                cursor = Some(next_index);
            }
        }
    }
}
