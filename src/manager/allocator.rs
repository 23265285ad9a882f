/*!
 * Allocation Operations
 * Allocate, release and resize against the block list
 */

use super::arena::BlockHeader;
use super::BlockManager;
use crate::core::limits::{HEADER_SIZE, MIN_SPLIT_PAYLOAD};
use crate::core::types::{Address, Size};
use crate::types::{BlockError, BlockResult, Handle};
use log::{error, info, warn};

impl BlockManager {
    /// Allocate `size` payload bytes
    ///
    /// First-fit: the list is scanned from the head and the first free block
    /// large enough is reused, split when the leftover can still hold a
    /// header and at least [`MIN_SPLIT_PAYLOAD`] bytes. When nothing fits, a
    /// fresh block of exactly `HEADER_SIZE + size` bytes is obtained from
    /// the pool and linked where the scan ended.
    ///
    /// Zero-byte requests are served like any other; they yield a block with
    /// `size == 0`.
    pub fn allocate(&mut self, size: Size) -> BlockResult<Handle> {
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let block = self.arena.get(index);
            let (fits, block_size, next) = (block.is_free && block.size >= size, block.size, block.next);

            if fits {
                if block_size >= size + HEADER_SIZE + MIN_SPLIT_PAYLOAD {
                    self.split_block(index, size);
                } else {
                    // Too tight to split; hand over the whole block with slack
                    self.arena.get_mut(index).is_free = false;
                }
                let generation = self.arena.reissue(index);
                let block = self.arena.get(index);
                info!(
                    "Reused free block at 0x{:x} ({} bytes held, {} requested)",
                    block.offset, block.size, size
                );
                return Ok(Handle::new(index, generation));
            }

            prev = Some(index);
            cursor = next;
        }

        // No suitable block; obtain fresh storage from the pool
        let offset = self.obtain(size)?;
        let (index, generation) = self.arena.insert(BlockHeader {
            offset,
            size,
            is_free: false,
            next: None,
        });

        // Splice after the node the failed scan stopped at, or become the head
        match prev {
            Some(prev_index) => {
                let next = self.arena.get(prev_index).next;
                self.arena.get_mut(index).next = next;
                self.arena.get_mut(prev_index).next = Some(index);
            }
            None => {
                self.arena.get_mut(index).next = self.head;
                self.head = Some(index);
            }
        }

        info!("Allocated {} bytes at 0x{:x} from fresh storage", size, offset);
        Ok(Handle::new(index, generation))
    }

    /// Release a block and merge any free neighbors
    ///
    /// `None` is an accepted no-op, matching the classic contract for a null
    /// argument. A handle that is forged, stale, or already released is
    /// reported as an error with no state change.
    pub fn release(&mut self, handle: Option<Handle>) -> BlockResult<()> {
        let Some(handle) = handle else {
            return Ok(());
        };

        let index = match self.arena.resolve_live(handle) {
            Ok(index) => index,
            Err(err) => {
                warn!("Rejected release of {:?}: {}", handle, err);
                return Err(err);
            }
        };

        let block = self.arena.get_mut(index);
        block.is_free = true;
        let (offset, size) = (block.offset, block.size);

        self.coalesce();
        info!("Released {} bytes at 0x{:x}", size, offset);
        Ok(())
    }

    /// Resize a block to `new_size` payload bytes
    ///
    /// - `None` behaves exactly as [`Self::allocate`].
    /// - Shrink-or-equal is a no-op: the identical handle comes back and the
    ///   excess capacity stays with the block as internal slack.
    /// - Growth allocates a new block, copies the old content, then releases
    ///   the old block. The copy must precede the release: both blocks
    ///   coexist briefly so the content survives. On `OutOfMemory` the
    ///   original handle remains valid and untouched.
    pub fn resize(&mut self, handle: Option<Handle>, new_size: Size) -> BlockResult<Handle> {
        let Some(handle) = handle else {
            return self.allocate(new_size);
        };

        let index = self.arena.resolve_live(handle)?;
        let block = self.arena.get(index);
        let (old_offset, old_size) = (block.offset, block.size);

        if new_size <= old_size {
            return Ok(handle);
        }

        let new_handle = self.allocate(new_size)?;
        let new_index = self.arena.resolve_live(new_handle)?;
        let new_offset = self.arena.get(new_index).offset;

        let src = old_offset + HEADER_SIZE;
        let dst = new_offset + HEADER_SIZE;
        self.pool.copy_within(src..src + old_size, dst);

        self.release(Some(handle))?;

        info!(
            "Resized block 0x{:x} ({} bytes) into 0x{:x} ({} bytes)",
            old_offset, old_size, new_offset, new_size
        );
        Ok(new_handle)
    }

    /// Check if a handle refers to a live allocation
    pub fn is_valid(&self, handle: Handle) -> bool {
        self.arena.resolve_live(handle).is_ok()
    }

    /// Get the payload size of a live block
    pub fn block_size(&self, handle: Handle) -> Option<Size> {
        let index = self.arena.resolve_live(handle).ok()?;
        Some(self.arena.get(index).size)
    }

    /// Obtain `HEADER_SIZE + payload` fresh bytes from the pool
    ///
    /// Fails with `OutOfMemory` when growth would exceed the configured
    /// capacity; in that case no state changes at all.
    fn obtain(&mut self, payload: Size) -> BlockResult<Address> {
        let used = self.pool.len();

        // A request so large that the size arithmetic itself would wrap can
        // never fit either; both cases are the same out-of-memory condition
        let fits = HEADER_SIZE
            .checked_add(payload)
            .and_then(|total| used.checked_add(total))
            .is_some_and(|needed| needed <= self.capacity);

        if !fits {
            let available = self.capacity - used;
            error!(
                "OOM: requested {} bytes (+{} header), only {} bytes available ({} used / {} total)",
                payload, HEADER_SIZE, available, used, self.capacity
            );
            return Err(BlockError::OutOfMemory {
                requested: payload,
                available,
                used,
                total: self.capacity,
            });
        }

        let offset = used;
        self.pool.resize(used + HEADER_SIZE + payload, 0);
        Ok(offset)
    }
}
