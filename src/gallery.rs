// SPDX-License-Identifier: MPL-2.0
//! Gallery scanning and navigation.
//!
//! A [`Gallery`] is the set of images found in a directory, captured once at
//! startup and sorted according to the configured [`SortOrder`]. The sorted
//! order is the adjacency used by next/previous navigation in the lightbox.
//! Files added to the directory after the scan are not observed.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Image file extensions included by the scan. Anything else is ignored.
const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// A single gallery entry: the image path plus the caption shown in the
/// lightbox. The path is handed to the image widget without validation; a
/// file that turns out to be unreadable simply renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub path: PathBuf,
    pub caption: String,
}

impl GalleryItem {
    fn from_path(path: PathBuf) -> Self {
        let caption = path
            .file_stem()
            .or_else(|| path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, caption }
    }
}

/// An ordered, immutable collection of gallery items with a current
/// position. Navigation wraps around at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    current_index: Option<usize>,
}

impl Gallery {
    /// Creates a new empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a directory for supported image files and sorts them.
    ///
    /// Unreadable directory entries are skipped with a diagnostic on stderr
    /// rather than failing the whole scan; one broken entry must not take
    /// the rest of the gallery down. Returns an error only when the
    /// directory itself cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let entries = std::fs::read_dir(directory).map_err(|e| {
            Error::Scan(format!("cannot read {}: {}", directory.display(), e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_supported_image(&path) {
                        paths.push(path);
                    }
                }
                Err(e) => {
                    eprintln!(
                        "Skipping unreadable entry in {}: {}",
                        directory.display(),
                        e
                    );
                }
            }
        }

        sort_paths(&mut paths, sort_order);

        Ok(Self {
            items: paths.into_iter().map(GalleryItem::from_path).collect(),
            current_index: None,
        })
    }

    /// Returns all items in presentation order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the current position, if any.
    pub fn current(&self) -> Option<&GalleryItem> {
        self.current_index.and_then(|idx| self.items.get(idx))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Moves the current position to `index` and returns the item there.
    /// An out-of-range index leaves the position untouched.
    pub fn select(&mut self, index: usize) -> Option<&GalleryItem> {
        if index < self.items.len() {
            self.current_index = Some(index);
            self.items.get(index)
        } else {
            None
        }
    }

    /// Advances to the next item, wrapping around to the first, and returns
    /// it. With no current position the first item is selected.
    pub fn advance_next(&mut self) -> Option<&GalleryItem> {
        if self.items.is_empty() {
            return None;
        }
        let next = match self.current_index {
            Some(idx) => (idx + 1) % self.items.len(),
            None => 0,
        };
        self.current_index = Some(next);
        self.items.get(next)
    }

    /// Steps back to the previous item, wrapping around to the last, and
    /// returns it. With no current position the last item is selected.
    pub fn advance_previous(&mut self) -> Option<&GalleryItem> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len();
        let previous = match self.current_index {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.current_index = Some(previous);
        self.items.get(previous)
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn sort_paths(paths: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            paths.sort_by_key(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().to_lowercase())
                    .unwrap_or_default()
            });
        }
        SortOrder::Newest => {
            paths.sort_by_key(|path| {
                let modified = path
                    .metadata()
                    .and_then(|meta| meta.modified())
                    .unwrap_or(UNIX_EPOCH);
                std::cmp::Reverse(modified)
            });
        }
    }
}
