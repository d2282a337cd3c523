//! Site constants and deployment configuration
//!
//! Page chrome (title, icon, layout, sidebar state, owner) is fixed at compile
//! time. Only the deployment knobs (where content lives, which port, whether
//! file reads are cached) come from the environment.

use std::path::PathBuf;

/// Width of a page's content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Centered,
    Wide,
}

impl PageLayout {
    pub fn css_class(&self) -> &'static str {
        match self {
            PageLayout::Centered => "layout-centered",
            PageLayout::Wide => "layout-wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Expanded,
    Collapsed,
}

impl SidebarState {
    pub fn is_expanded(&self) -> bool {
        matches!(self, SidebarState::Expanded)
    }
}

/// Fixed page configuration.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub layout: PageLayout,
    pub sidebar: SidebarState,
    /// Menu title shown above the navigation entries, also used in the footer.
    pub owner: &'static str,
    /// Image name (under the image directory) of the sidebar avatar.
    pub profile_image: &'static str,
    pub profile_image_extension: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    page_title: "Michael Petrou - Portfolio",
    page_icon: "💻",
    layout: PageLayout::Wide,
    sidebar: SidebarState::Expanded,
    owner: "Michael Petrou",
    profile_image: "profile",
    profile_image_extension: "jpeg",
};

/// Extension used when a page does not override it.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpeg";

/// Image width in pixels when a descriptor does not set `image_width`.
pub const DEFAULT_IMAGE_WIDTH: u32 = 150;

/// Upper bound on cached files (markdown, JSON and images together).
pub const CONTENT_CACHE_CAPACITY: u64 = 512;

/// Deployment configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub content_dir: PathBuf,
    pub image_dir: PathBuf,
    pub port: u16,
    pub cache_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            image_dir: PathBuf::from("images"),
            port: 8501,
            cache_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Read `CONTENT_DIR`, `IMAGE_DIR`, `PORT` and `CONTENT_CACHE`, falling
    /// back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let content_dir = lookup("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.content_dir);

        let image_dir = lookup("IMAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.image_dir);

        let port: u16 = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cache_enabled = lookup("CONTENT_CACHE")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.cache_enabled);

        Self {
            content_dir,
            image_dir,
            port,
            cache_enabled,
        }
    }
}
