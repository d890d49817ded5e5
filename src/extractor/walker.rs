use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::Result;
use crate::languages::LanguageRegistry;

pub struct FileWalker {
    registry: LanguageRegistry,
}

impl FileWalker {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Collect supported files under `root`. The list is sorted so that
    /// catalog construction does not depend on the platform's walk order.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .ignore(true)
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if path.is_file() && self.is_supported(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        self.registry.get_for_file(path).is_some()
    }
}
