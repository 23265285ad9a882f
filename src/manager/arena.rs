/*!
 * Block Slot Arena
 * Generation-checked storage for block headers
 */

use crate::core::types::{Address, Size};
use crate::types::{BlockError, BlockResult, Handle};

/// Index of a slot in the arena
pub(crate) type SlotIndex = u32;

/// Header of one block in the pool
///
/// The classic in-band header, lifted out of the pool into the arena: the
/// payload size, the free flag and the next link of the singly linked block
/// list. `offset` is where the header region starts in the pool; the payload
/// begins `HEADER_SIZE` bytes after it.
#[derive(Debug, Clone)]
pub(crate) struct BlockHeader {
    pub offset: Address,
    pub size: Size,
    pub is_free: bool,
    pub next: Option<SlotIndex>,
}

#[derive(Debug)]
struct Slot {
    /// `None` once the block was absorbed during coalescing
    header: Option<BlockHeader>,
    /// Bumped on reissue and retirement so stale handles stop resolving
    generation: u32,
}

/// Growable arena of block slots
///
/// Slots of coalesced-away blocks are recycled for later insertions; their
/// generation counter keeps handles issued against the old occupant invalid.
#[derive(Debug, Default)]
pub(crate) struct BlockArena {
    slots: Vec<Slot>,
    recycled: Vec<SlotIndex>,
}

impl BlockArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a header, reusing a retired slot when one is available.
    /// Returns the slot index and its current generation.
    pub fn insert(&mut self, header: BlockHeader) -> (SlotIndex, u32) {
        if let Some(index) = self.recycled.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.header.is_none());
            slot.header = Some(header);
            (index, slot.generation)
        } else {
            let index = self.slots.len() as SlotIndex;
            self.slots.push(Slot {
                header: Some(header),
                generation: 0,
            });
            (index, 0)
        }
    }

    /// Retire a slot after its block was absorbed into a neighbor
    pub fn retire(&mut self, index: SlotIndex) {
        let slot = &mut self.slots[index as usize];
        slot.header = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.recycled.push(index);
    }

    /// Bump the generation of an occupied slot and return the new value
    ///
    /// Called when a free block is handed out again, so handles from its
    /// previous life no longer match.
    pub fn reissue(&mut self, index: SlotIndex) -> u32 {
        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.generation
    }

    pub fn get(&self, index: SlotIndex) -> &BlockHeader {
        self.slots[index as usize]
            .header
            .as_ref()
            .unwrap_or_else(|| unreachable!("retired slot {} still linked", index))
    }

    pub fn get_mut(&mut self, index: SlotIndex) -> &mut BlockHeader {
        self.slots[index as usize]
            .header
            .as_mut()
            .unwrap_or_else(|| unreachable!("retired slot {} still linked", index))
    }

    /// Resolve a handle to its slot index, rejecting forged and stale values
    ///
    /// A handle resolves when its slot exists, is occupied, and still has the
    /// generation the handle was issued with. Whether the block behind it is
    /// free is the caller's concern; see [`Self::resolve_live`].
    pub fn resolve(&self, handle: Handle) -> BlockResult<SlotIndex> {
        let invalid = BlockError::InvalidHandle {
            slot: handle.slot,
            generation: handle.generation,
        };

        let slot = self.slots.get(handle.slot as usize).ok_or(invalid.clone())?;
        if slot.header.is_none() || slot.generation != handle.generation {
            return Err(invalid);
        }
        Ok(handle.slot)
    }

    /// Resolve a handle and require the block to be allocated
    ///
    /// A resolving handle whose block is free means the caller released it
    /// already and is now using it again.
    pub fn resolve_live(&self, handle: Handle) -> BlockResult<SlotIndex> {
        let index = self.resolve(handle)?;
        if self.get(index).is_free {
            return Err(BlockError::AlreadyReleased {
                slot: handle.slot,
                generation: handle.generation,
            });
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(offset: Address, size: Size) -> BlockHeader {
        BlockHeader {
            offset,
            size,
            is_free: false,
            next: None,
        }
    }

    #[test]
    fn insert_and_resolve() {
        let mut arena = BlockArena::new();
        let (slot, generation) = arena.insert(header(0, 32));
        let handle = Handle::new(slot, generation);

        assert_eq!(arena.resolve(handle).unwrap(), slot);
        assert_eq!(arena.get(slot).size, 32);
    }

    #[test]
    fn retired_slot_is_recycled_with_new_generation() {
        let mut arena = BlockArena::new();
        let (slot, generation) = arena.insert(header(0, 32));
        arena.retire(slot);

        let (reused, new_generation) = arena.insert(header(64, 16));
        assert_eq!(reused, slot);
        assert_ne!(new_generation, generation);

        // Handle from the first life must no longer resolve
        let stale = Handle::new(slot, generation);
        assert!(matches!(
            arena.resolve(stale),
            Err(BlockError::InvalidHandle { .. })
        ));
    }

    #[test]
    fn reissue_invalidates_previous_handle() {
        let mut arena = BlockArena::new();
        let (slot, generation) = arena.insert(header(0, 32));
        let old = Handle::new(slot, generation);

        let new_generation = arena.reissue(slot);
        assert!(arena.resolve(old).is_err());
        assert!(arena.resolve(Handle::new(slot, new_generation)).is_ok());
    }

    #[test]
    fn resolve_live_rejects_free_block() {
        let mut arena = BlockArena::new();
        let (slot, generation) = arena.insert(header(0, 32));
        arena.get_mut(slot).is_free = true;

        let handle = Handle::new(slot, generation);
        assert!(matches!(
            arena.resolve_live(handle),
            Err(BlockError::AlreadyReleased { .. })
        ));
    }

    #[test]
    fn out_of_bounds_slot_is_invalid() {
        let arena = BlockArena::new();
        assert!(matches!(
            arena.resolve(Handle::new(7, 0)),
            Err(BlockError::InvalidHandle { .. })
        ));
    }
}
