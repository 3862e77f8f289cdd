//! In-memory disk
//!
//! Folders are kept in a generational slot arena owned by [`Storage`]. A
//! folder refers to its children and its parent by [`FolderId`]; ownership
//! runs strictly from the arena downwards, so releasing a folder walks its
//! child handles and never its parent handle.

use log::{debug, warn};
use std::sync::{Arc, RwLock};

use crate::config::StorageConfig;
use crate::node::{Folder, FolderId};
use crate::path::ROOT_PATH;
use crate::storage::results::ReleaseStats;

/// Thread-safe handle to a storage shared by several managers
pub type SharedStorage = Arc<RwLock<Storage>>;

#[derive(Debug)]
struct Slot {
    generation: u32,
    folder: Option<Folder>,
}

/// A simulated disk: the root folder and everything beneath it.
///
/// Dropping the storage drops the whole tree.
#[derive(Debug)]
pub struct Storage {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: FolderId,
    config: StorageConfig,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    /// Creates an empty disk with default limits
    pub fn new() -> Self {
        Self::with_config(StorageConfig::default())
    }

    /// Creates an empty disk holding only the parentless root folder `/`.
    pub fn with_config(config: StorageConfig) -> Self {
        let root = FolderId::new(0, 0);
        debug!("Storage created with {:?}", config);

        Self {
            slots: vec![Slot {
                generation: 0,
                folder: Some(Folder::root(ROOT_PATH)),
            }],
            free: Vec::new(),
            root,
            config,
        }
    }

    /// Wraps the storage for use by one or more managers
    pub fn into_shared(self) -> SharedStorage {
        Arc::new(RwLock::new(self))
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn root_id(&self) -> FolderId {
        self.root
    }

    /// Read-only access to the root folder
    pub fn root(&self) -> &Folder {
        match self.folder(self.root) {
            Some(folder) => folder,
            None => unreachable!("root folder is never released"),
        }
    }

    /// Returns the folder behind `id` if it is still alive
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.folder.as_ref())
    }

    pub(crate) fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.folder.as_mut())
    }

    pub fn contains(&self, id: FolderId) -> bool {
        self.folder(id).is_some()
    }

    /// Number of live folders, root included
    pub fn live_folders(&self) -> usize {
        self.slots.iter().filter(|slot| slot.folder.is_some()).count()
    }

    /// Stores a new folder, reusing a released slot when one is available.
    pub(crate) fn allocate(&mut self, folder: Folder) -> FolderId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.folder = Some(folder);
            return FolderId::new(index, slot.generation);
        }

        self.slots.push(Slot {
            generation: 0,
            folder: Some(folder),
        });
        FolderId::new(self.slots.len() - 1, 0)
    }

    /// Releases a folder and every descendant folder and file exactly once.
    ///
    /// Only child handles are followed. The caller is responsible for
    /// unlinking `id` from its parent first.
    pub(crate) fn release(&mut self, id: FolderId) -> ReleaseStats {
        let mut stats = ReleaseStats::default();

        if id == self.root {
            warn!("Refusing to release the root folder");
            return stats;
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let Some(folder) = self.take(next) else {
                warn!("Folder slot {} was already released", next.index());
                continue;
            };

            stats.folders += 1;
            stats.files += folder.file_count();
            pending.extend(folder.child_folder_ids());
            debug!("Released folder {}", folder.full_path());
        }

        stats
    }

    fn take(&mut self, id: FolderId) -> Option<Folder> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation() {
            return None;
        }

        let folder = slot.folder.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        Some(folder)
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        debug!("Storage deleted ({} live folders)", self.live_folders());
    }
}
