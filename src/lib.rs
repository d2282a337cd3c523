//! Portfolio Site
//!
//! Renders a sidebar-navigated portfolio from static JSON, Markdown and image
//! files. Control flow per request:
//! navigation shell → page module → content loader → section renderer.
//!
//! - `content/`: content store access (descriptors, markdown, images, cache)
//! - `render/`: section grid layout and markdown rendering
//! - `pages/`: one renderer per navigation destination
//! - `navigation`: sidebar entries and selection
//! - `server`, `web/`: axum router and askama templates (feature `server`)

pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod render;

#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use content::{ContentItem, ContentLoader, ContentSection, PageDescriptor};
pub use error::ContentError;
pub use navigation::{NavEntry, NavShell};
pub use pages::{PageModule, RenderedPage, SessionContext};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};
