//! Projects page: a three-column launcher grid.
//!
//! Each item gets a "Launch Project" action that links back to this page with
//! `?project=<title>`. The launched project, if any, is announced above the
//! grid.

use super::{required_images, Panel, RenderedPage, SessionContext};
use crate::content::ContentLoader;
use crate::error::Result;
use crate::render::{render_section, ImagePlacement, ItemAction, SectionLayout};

const PROJECTS_DOCUMENT: &str = "genai_projects";
const PROJECT_COLUMNS: usize = 3;
const PROJECT_IMAGE_EXTENSION: &str = "jpg";

pub(super) fn render(loader: &ContentLoader, session: &SessionContext) -> Result<RenderedPage> {
    let descriptor = loader.load_json(PROJECTS_DOCUMENT)?;
    let mut page = RenderedPage::new(descriptor.require_title()?);

    let images = required_images(&descriptor, PROJECT_IMAGE_EXTENSION, ImagePlacement::Below)?;
    let layout = SectionLayout::default()
        .with_columns(PROJECT_COLUMNS)
        .with_images(images);

    let mut grid = render_section(&descriptor.items, &layout, loader)?;
    for item in grid.items_mut() {
        item.action = Some(ItemAction {
            label: "Launch Project".to_string(),
            href: SessionContext::with_launched_project(item.title.as_str()).query_string(),
        });
    }

    page.notice = session
        .launched_project
        .as_ref()
        .map(|project| format!("Current Project: {}", project));
    page.panels.push(Panel { heading: None, grid });
    Ok(page)
}
