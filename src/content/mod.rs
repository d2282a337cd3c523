//! Content store access
//!
//! - `types`: validated page descriptors, sections and items
//! - `loader`: markdown/JSON/image reads with an optional mtime-keyed cache
//! - `image`: base64 payloads for inline images

pub mod image;
pub mod loader;
pub mod types;

pub use image::EncodedImage;
pub use loader::ContentLoader;
pub use types::{ContentItem, ContentSection, PageDescriptor};
