//! Content Loader
//!
//! Reads markdown, JSON page descriptors and images from the content store.
//! Every page view goes through here, so the optional cache is keyed by path
//! and validated against the file's modification time: an edited file is
//! picked up on the next view without a restart.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use moka::sync::Cache;

use crate::content::image::EncodedImage;
use crate::content::types::PageDescriptor;
use crate::error::{ContentError, Result};

#[derive(Debug, Clone)]
struct CachedFile {
    modified: SystemTime,
    bytes: Arc<[u8]>,
}

#[derive(Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    image_dir: PathBuf,
    cache: Option<Cache<PathBuf, CachedFile>>,
}

impl ContentLoader {
    /// Uncached loader: every call re-reads from disk.
    pub fn new(content_dir: impl Into<PathBuf>, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            image_dir: image_dir.into(),
            cache: None,
        }
    }

    /// Enable the read-through cache.
    pub fn with_cache(mut self, max_capacity: u64) -> Self {
        self.cache = Some(Cache::builder().max_capacity(max_capacity).build());
        self
    }

    /// Load `<content_dir>/<name>.md` verbatim.
    pub fn load_markdown(&self, name: &str) -> Result<String> {
        let path = self.content_dir.join(format!("{}.md", name));
        let bytes = self.read(&path)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ContentError::Encoding { path })
    }

    /// Load and validate `<content_dir>/<name>.json`.
    pub fn load_json(&self, name: &str) -> Result<PageDescriptor> {
        let path = self.content_dir.join(format!("{}.json", name));
        let bytes = self.read(&path)?;
        PageDescriptor::from_slice(name, &path, &bytes)
    }

    /// Load `<image_dir>/[<folder>/]<name>.<extension>` as base64.
    pub fn load_image(&self, name: &str, folder: Option<&str>, extension: &str) -> Result<EncodedImage> {
        let mut path = self.image_dir.clone();
        if let Some(folder) = folder {
            path.push(folder);
        }
        path.push(format!("{}.{}", name, extension));

        let bytes = self.read(&path)?;
        Ok(EncodedImage::encode(&bytes, extension))
    }

    fn read(&self, path: &Path) -> Result<Arc<[u8]>> {
        let Some(cache) = &self.cache else {
            return read_file(path);
        };

        let modified = std::fs::metadata(path)
            .map_err(|e| ContentError::from_io(path.to_path_buf(), e))?
            .modified()
            .ok();

        if let (Some(modified), Some(cached)) = (modified, cache.get(path)) {
            if cached.modified == modified {
                tracing::debug!("Cache hit for {}", path.display());
                return Ok(cached.bytes);
            }
        }

        let bytes = read_file(path)?;
        // Filesystems without mtime support are never cached.
        if let Some(modified) = modified {
            cache.insert(
                path.to_path_buf(),
                CachedFile {
                    modified,
                    bytes: bytes.clone(),
                },
            );
        }
        Ok(bytes)
    }
}

fn read_file(path: &Path) -> Result<Arc<[u8]>> {
    tracing::debug!("Reading {}", path.display());
    std::fs::read(path)
        .map(Arc::from)
        .map_err(|e| ContentError::from_io(path.to_path_buf(), e))
}
