//! Page Modules
//!
//! One renderer per navigation destination. Every page reloads its content
//! through the [`ContentLoader`] and produces a [`RenderedPage`]: a heading,
//! then either markdown, one or more section grids, or both.
//!
//! Pages take no ambient state. The only per-visitor input, which project was
//! launched, arrives as an explicit [`SessionContext`].

mod about;
mod portfolio;
mod projects;
mod section_page;
mod work_history;

use crate::config::DEFAULT_IMAGE_WIDTH;
use crate::content::{ContentLoader, PageDescriptor};
use crate::error::Result;
use crate::render::{markdown, ImagePlacement, ImageSettings, SectionGrid};

/// Per-request session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Title of the project picked with "Launch Project", if any.
    pub launched_project: Option<String>,
}

impl SessionContext {
    pub fn with_launched_project(name: impl Into<String>) -> Self {
        Self {
            launched_project: Some(name.into()),
        }
    }

    /// Query string that carries this session to the next request: empty,
    /// or `?project=<urlencoded name>`.
    pub fn query_string(&self) -> String {
        match &self.launched_project {
            Some(project) => format!("?project={}", urlencoding::encode(project)),
            None => String::new(),
        }
    }
}

/// Markdown as loaded, plus its HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownBlock {
    pub source: String,
    pub html: String,
}

impl MarkdownBlock {
    pub fn new(source: String) -> Self {
        let html = markdown::to_html(&source);
        Self { source, html }
    }
}

/// A titled grid. Pages with several panels show them side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub heading: Option<String>,
    pub grid: SectionGrid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub heading: String,
    /// Banner above the content, e.g. the launched project.
    pub notice: Option<String>,
    pub markdown: Option<MarkdownBlock>,
    pub panels: Vec<Panel>,
}

impl RenderedPage {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            notice: None,
            markdown: None,
            panels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageModule {
    AboutMe,
    WorkHistory,
    Projects,
    Certification,
    Education,
    /// Image-beside-text showcase driven by one JSON document.
    Portfolio { document: &'static str },
}

pub const GAMES: PageModule = PageModule::Portfolio { document: "games" };
pub const SIMULATION: PageModule = PageModule::Portfolio { document: "simulation" };

impl PageModule {
    pub fn render(&self, loader: &ContentLoader, session: &SessionContext) -> Result<RenderedPage> {
        tracing::debug!("Rendering page {:?}", self);
        match self {
            PageModule::AboutMe => about::render(loader),
            PageModule::WorkHistory => work_history::render(loader),
            PageModule::Projects => projects::render(loader, session),
            PageModule::Certification => section_page::render(loader, "certification"),
            PageModule::Education => section_page::render(loader, "education"),
            PageModule::Portfolio { document } => portfolio::render(loader, document),
        }
    }
}

/// Image settings from a descriptor, or `None` when it names no folder.
fn optional_images(descriptor: &PageDescriptor, extension: &str, placement: ImagePlacement) -> Option<ImageSettings> {
    descriptor
        .image_folder
        .as_deref()
        .map(|folder| image_settings(descriptor, folder, extension, placement))
}

/// Image settings for pages whose descriptor must name a folder.
fn required_images(descriptor: &PageDescriptor, extension: &str, placement: ImagePlacement) -> Result<ImageSettings> {
    let folder = descriptor.require_image_folder()?;
    Ok(image_settings(descriptor, folder, extension, placement))
}

fn image_settings(descriptor: &PageDescriptor, folder: &str, extension: &str, placement: ImagePlacement) -> ImageSettings {
    ImageSettings {
        folder: Some(folder.to_string()),
        width: descriptor.image_width.unwrap_or(DEFAULT_IMAGE_WIDTH),
        extension: descriptor
            .image_extension
            .clone()
            .unwrap_or_else(|| extension.to_string()),
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_has_no_query() {
        assert_eq!(SessionContext::default().query_string(), "");
    }

    #[test]
    fn test_launched_project_is_urlencoded() {
        let session = SessionContext::with_launched_project("PDF Search & RAG");
        assert_eq!(session.query_string(), "?project=PDF%20Search%20%26%20RAG");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::content::ContentLoader;
    use std::fs;
    use tempfile::TempDir;

    /// Temp content store with `content/` and `images/`.
    pub struct Store {
        pub dir: TempDir,
    }

    impl Store {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::create_dir_all(dir.path().join("content")).unwrap();
            fs::create_dir_all(dir.path().join("images")).unwrap();
            Self { dir }
        }

        pub fn content(&self, file: &str, text: &str) -> &Self {
            fs::write(self.dir.path().join("content").join(file), text).unwrap();
            self
        }

        pub fn image(&self, relative: &str) -> &Self {
            let path = self.dir.path().join("images").join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"img").unwrap();
            self
        }

        pub fn loader(&self) -> ContentLoader {
            ContentLoader::new(self.dir.path().join("content"), self.dir.path().join("images"))
        }
    }
}
