//! Work history: markdown intro over two side-by-side panels.

use super::{optional_images, MarkdownBlock, Panel, RenderedPage};
use crate::config::DEFAULT_IMAGE_EXTENSION;
use crate::content::ContentLoader;
use crate::error::Result;
use crate::render::{render_section, ImagePlacement, SectionLayout};

pub(super) fn render(loader: &ContentLoader) -> Result<RenderedPage> {
    let intro = loader.load_markdown("work_history")?;
    let descriptor = loader.load_json("work_history")?;

    let mut layout = SectionLayout::default().with_columns(1);
    if let Some(images) = optional_images(&descriptor, DEFAULT_IMAGE_EXTENSION, ImagePlacement::Below) {
        layout = layout.with_images(images);
    }

    let main = Panel {
        heading: Some(descriptor.require_main_title()?.to_string()),
        grid: render_section(&descriptor.main, &layout, loader)?,
    };
    let other = Panel {
        heading: Some(descriptor.require_other_title()?.to_string()),
        grid: render_section(&descriptor.other, &layout, loader)?,
    };

    let heading = descriptor.title.as_deref().unwrap_or("Work History");
    let mut page = RenderedPage::new(heading);
    page.markdown = Some(MarkdownBlock::new(intro));
    page.panels = vec![main, other];
    Ok(page)
}
