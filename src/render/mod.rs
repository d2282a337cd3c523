//! Rendering of loaded content into display-ready structures.

pub mod markdown;
pub mod section;

pub use section::{
    pair_rows, render_section, ImagePlacement, ImageSettings, ItemAction, RenderedImage, RenderedItem, Row,
    SectionGrid, SectionLayout,
};
