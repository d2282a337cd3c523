//! Section Renderer
//!
//! Lays out a section's items into rows. With two columns, items 0 and 1
//! share row 0, items 2 and 3 share row 1, and so on; an odd trailing item
//! gets a row of its own with the right cell left empty.
//!
//! Each rendered cell carries, in display order: the title, an optional
//! subtitle, the detail lines as bullets, and an optional image sized to the
//! configured width (wrapped in the item's link when it has one).

use crate::content::{ContentItem, ContentLoader, ContentSection};
use crate::error::Result;
use crate::render::markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePlacement {
    /// Under the detail lines.
    #[default]
    Below,
    /// In a narrow column to the left of the text.
    Beside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    /// Sub-directory of the image directory, if any.
    pub folder: Option<String>,
    pub width: u32,
    pub extension: String,
    pub placement: ImagePlacement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub columns: usize,
    /// `None` renders text only.
    pub images: Option<ImageSettings>,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            images: None,
        }
    }
}

impl SectionLayout {
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn with_images(mut self, images: ImageSettings) -> Self {
        self.images = Some(images);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub data_uri: String,
    pub width: u32,
    pub link: Option<String>,
    pub beside: bool,
}

/// A per-item button, e.g. "Launch Project".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub key: String,
    pub title: String,
    pub subtitle_html: Option<String>,
    pub lines_html: Vec<String>,
    pub image: Option<RenderedImage>,
    pub action: Option<ItemAction>,
}

impl RenderedItem {
    pub fn image_beside(&self) -> bool {
        self.image.as_ref().is_some_and(|image| image.beside)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Always `columns` long; `None` is a blank cell.
    pub cells: Vec<Option<RenderedItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGrid {
    pub columns: usize,
    pub rows: Vec<Row>,
}

impl SectionGrid {
    pub fn items(&self) -> impl Iterator<Item = &RenderedItem> {
        self.rows.iter().flat_map(|row| row.cells.iter().flatten())
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut RenderedItem> {
        self.rows.iter_mut().flat_map(|row| row.cells.iter_mut().flatten())
    }
}

/// Group `items` into rows of `columns`, padding the last row with `None`.
///
/// Row `i` holds `items[i * columns .. (i + 1) * columns]`, which for two
/// columns is the same as zipping the even-indexed items with the
/// odd-indexed ones.
pub fn pair_rows<T>(items: &[T], columns: usize) -> Vec<Vec<Option<&T>>> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .map(|chunk| (0..columns).map(|i| chunk.get(i)).collect())
        .collect()
}

/// Render `section` into a grid, loading images as the layout requires.
pub fn render_section(section: &ContentSection, layout: &SectionLayout, loader: &ContentLoader) -> Result<SectionGrid> {
    let rows = pair_rows(section.items(), layout.columns)
        .into_iter()
        .map(|cells| {
            let cells = cells
                .into_iter()
                .map(|cell| cell.map(|item| render_item(item, layout, loader)).transpose())
                .collect::<Result<Vec<_>>>()?;
            Ok(Row { cells })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SectionGrid {
        columns: layout.columns,
        rows,
    })
}

fn render_item(item: &ContentItem, layout: &SectionLayout, loader: &ContentLoader) -> Result<RenderedItem> {
    let image = match &layout.images {
        Some(settings) => {
            let encoded = loader.load_image(item.image_key(), settings.folder.as_deref(), &settings.extension)?;
            Some(RenderedImage {
                data_uri: encoded.data_uri(),
                width: settings.width,
                link: item.link.clone(),
                beside: settings.placement == ImagePlacement::Beside,
            })
        }
        None => None,
    };

    Ok(RenderedItem {
        key: item.key.clone(),
        title: item.title.clone(),
        subtitle_html: item.subtitle.as_deref().map(markdown::inline_html),
        lines_html: item.detail_lines.iter().map(|line| markdown::inline_html(line)).collect(),
        image,
        action: None,
    })
}
