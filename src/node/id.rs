//! Folder handles

/// Handle to a folder slot in a storage arena.
///
/// The generation distinguishes a live folder from a released one whose slot
/// has since been reused, so a stale handle never resolves to a stranger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId {
    index: usize,
    generation: u32,
}

impl FolderId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the arena
    pub fn index(self) -> usize {
        self.index
    }

    /// Generation of the slot at the time the folder was allocated
    pub fn generation(self) -> u32 {
        self.generation
    }
}
