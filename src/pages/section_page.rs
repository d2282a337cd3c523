//! Single two-column section pages (education, certification).

use super::{optional_images, Panel, RenderedPage};
use crate::config::DEFAULT_IMAGE_EXTENSION;
use crate::content::ContentLoader;
use crate::error::Result;
use crate::render::{render_section, ImagePlacement, SectionLayout};

pub(super) fn render(loader: &ContentLoader, document: &str) -> Result<RenderedPage> {
    let descriptor = loader.load_json(document)?;
    let mut page = RenderedPage::new(descriptor.require_title()?);

    let mut layout = SectionLayout::default();
    if let Some(images) = optional_images(&descriptor, DEFAULT_IMAGE_EXTENSION, ImagePlacement::Below) {
        layout = layout.with_images(images);
    }

    page.panels.push(Panel {
        heading: None,
        grid: render_section(&descriptor.items, &layout, loader)?,
    });
    Ok(page)
}
