//! Folder nodes

use std::collections::HashMap;

use crate::node::{File, FolderId};
use crate::path::{CURRENT_NAME, PARENT_NAME};

/// An internal node of the tree.
///
/// Child folders are owned through the storage arena and referenced here by
/// handle; files are owned by value. The parent handle is a back-reference
/// only: it takes part in `..` lookups and is never followed on teardown.
#[derive(Debug)]
pub struct Folder {
    full_path: String,
    depth: usize,
    parent: Option<FolderId>,
    folders: HashMap<String, FolderId>,
    files: HashMap<String, File>,
}

impl Folder {
    pub(crate) fn root(full_path: &str) -> Self {
        Self {
            full_path: full_path.to_string(),
            depth: 0,
            parent: None,
            folders: HashMap::new(),
            files: HashMap::new(),
        }
    }

    pub(crate) fn child(full_path: String, parent: FolderId, depth: usize) -> Self {
        Self {
            full_path,
            depth,
            parent: Some(parent),
            folders: HashMap::new(),
            files: HashMap::new(),
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Number of folders between this one and the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parent handle, absent only for the root
    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn has_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    /// Handle of the owned child folder named `name`
    pub fn folder(&self, name: &str) -> Option<FolderId> {
        self.folders.get(name).copied()
    }

    /// Resolves one path segment, including the reserved `..` and `.` names.
    pub fn lookup(&self, segment: &str, this: FolderId) -> Option<FolderId> {
        match segment {
            PARENT_NAME => self.parent,
            CURRENT_NAME => Some(this),
            name => self.folder(name),
        }
    }

    /// Names of the child folders, sorted
    pub fn folder_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.folders.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of the files, sorted
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn child_folder_ids(&self) -> impl Iterator<Item = FolderId> + '_ {
        self.folders.values().copied()
    }

    // --------------------
    // Mutators
    // --------------------

    pub(crate) fn add_folder(&mut self, name: String, id: FolderId) {
        self.folders.insert(name, id);
    }

    pub(crate) fn add_file(&mut self, name: String, file: File) {
        self.files.insert(name, file);
    }

    pub(crate) fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.get_mut(name)
    }

    pub(crate) fn remove_folder(&mut self, name: &str) -> Option<FolderId> {
        self.folders.remove(name)
    }

    pub(crate) fn remove_file(&mut self, name: &str) -> Option<File> {
        self.files.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_children() {
        let root_id = FolderId::new(0, 0);
        let mut folder = Folder::root("/");
        folder.add_folder("aaa".into(), FolderId::new(1, 0));
        folder.add_file("aaa".into(), File::new("/aaa".into(), "aaa", String::new()));
        assert_eq!(folder.folder_count(), 1);
        assert_eq!(folder.file_count(), 1);

        assert!(folder.remove_file("aaa").is_some());
        assert_eq!(folder.file_count(), 0);
        assert_eq!(folder.lookup("aaa", root_id), Some(FolderId::new(1, 0)));
    }

    #[test]
    fn test_lookup_reserved_names() {
        let parent = FolderId::new(0, 0);
        let this = FolderId::new(1, 0);
        let folder = Folder::child("/aaa".into(), parent, 1);

        assert_eq!(folder.lookup("..", this), Some(parent));
        assert_eq!(folder.lookup(".", this), Some(this));
        assert_eq!(folder.lookup("missing", this), None);
    }

    #[test]
    fn test_root_has_no_parent() {
        let root = Folder::root("/");
        assert_eq!(root.lookup("..", FolderId::new(0, 0)), None);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_names_are_sorted() {
        let mut folder = Folder::root("/");
        folder.add_folder("zeta".into(), FolderId::new(1, 0));
        folder.add_folder("alpha".into(), FolderId::new(2, 0));
        assert_eq!(folder.folder_names(), vec!["alpha", "zeta"]);
    }
}
