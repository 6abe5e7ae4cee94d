//! Media group assembly with eager file checks.

use std::path::PathBuf;

use tgram_core::{Disk, MediaItem, MediaKind, Result, Storage, TgramError};

/// Ordered photo/video entries for `sendMediaGroup`. Paths are resolved on the public disk and
/// each file must exist when it is added.
#[derive(Debug, Clone)]
pub struct MediaGroup {
    disk: Disk,
    media: Vec<MediaItem>,
}

impl MediaGroup {
    /// Empty group resolving paths on `storage`'s public disk.
    pub fn make(storage: &Storage) -> Self {
        Self::on_disk(storage.public().clone())
    }

    pub fn on_disk(disk: Disk) -> Self {
        Self {
            disk,
            media: Vec::new(),
        }
    }

    pub fn add_photo(self, path: &str, caption: Option<&str>) -> Result<Self> {
        self.add(MediaKind::Photo, path, caption)
    }

    pub fn add_video(self, path: &str, caption: Option<&str>) -> Result<Self> {
        self.add(MediaKind::Video, path, caption)
    }

    fn add(mut self, kind: MediaKind, path: &str, caption: Option<&str>) -> Result<Self> {
        let full_path: PathBuf = self.disk.path(path);
        if !full_path.is_file() {
            return Err(TgramError::FileNotFound(full_path));
        }
        self.media.push(MediaItem {
            kind,
            media: full_path,
            caption: caption.map(str::to_string),
        });
        Ok(self)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn into_items(self) -> Vec<MediaItem> {
        self.media
    }
}
