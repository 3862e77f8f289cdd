//! File nodes

use crate::path::file_extension;

/// A leaf of the tree, owned by exactly one folder.
///
/// The size always matches the content, and the extension is fixed when the
/// file is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    full_path: String,
    extension: String,
    content: String,
}

impl File {
    pub(crate) fn new(full_path: String, name: &str, content: String) -> Self {
        Self {
            full_path,
            extension: file_extension(name).to_string(),
            content,
        }
    }

    /// Replaces the content; path and extension are unchanged.
    pub(crate) fn update_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Size of the content in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_metadata() {
        let file = File::new("/notes.txt".into(), "notes.txt", "huhu".into());
        assert_eq!(file.full_path(), "/notes.txt");
        assert_eq!(file.extension(), "txt");
        assert_eq!(file.size(), 4);
        assert_eq!(file.content(), "huhu");
    }

    #[test]
    fn test_update_content_recomputes_size() {
        let mut file = File::new("/yoyo".into(), "yoyo", "huhu".into());
        file.update_content("huuuuuuuuuuuuuuuuuuuuu".into());
        assert_eq!(file.size(), 22);
        assert_eq!(file.full_path(), "/yoyo");
        assert_eq!(file.extension(), "");
    }
}
