//! Portfolio showcase pages. `GAMES` and `SIMULATION` differ only in the
//! document they load.

use super::{required_images, Panel, RenderedPage};
use crate::content::ContentLoader;
use crate::error::Result;
use crate::render::{render_section, ImagePlacement, SectionLayout};

const PORTFOLIO_IMAGE_EXTENSION: &str = "jpg";

pub(super) fn render(loader: &ContentLoader, document: &str) -> Result<RenderedPage> {
    let descriptor = loader.load_json(document)?;
    let mut page = RenderedPage::new(descriptor.require_title()?);

    let images = required_images(&descriptor, PORTFOLIO_IMAGE_EXTENSION, ImagePlacement::Beside)?;
    let layout = SectionLayout::default().with_images(images);

    page.panels.push(Panel {
        heading: None,
        grid: render_section(&descriptor.items, &layout, loader)?,
    });
    Ok(page)
}

#[cfg(test)]
mod tests {
    use crate::error::ContentError;
    use crate::pages::test_support::Store;
    use crate::pages::{SessionContext, GAMES, SIMULATION};

    #[test]
    fn test_games_and_simulation_load_their_own_documents() {
        let store = Store::new();
        store
            .content(
                "games.json",
                r#"{"title": "Game Development", "image_folder": "games", "items": {"racer": {"title": "Racer", "line1": "Unity"}}}"#,
            )
            .content(
                "simulation.json",
                r#"{"title": "Simulator Development", "image_folder": "sims", "image_width": "220", "items": {"cockpit": {"title": "Cockpit"}}}"#,
            )
            .image("games/racer.jpg")
            .image("sims/cockpit.jpg");
        let loader = store.loader();

        let games = GAMES.render(&loader, &SessionContext::default()).unwrap();
        assert_eq!(games.heading, "Game Development");
        let racer = games.panels[0].grid.items().next().unwrap().clone();
        let image = racer.image.unwrap();
        assert!(image.beside);
        assert_eq!(image.width, 150);

        let sims = SIMULATION.render(&loader, &SessionContext::default()).unwrap();
        assert_eq!(sims.heading, "Simulator Development");
        let cockpit = sims.panels[0].grid.items().next().unwrap().clone();
        assert_eq!(cockpit.image.unwrap().width, 220);
    }

    #[test]
    fn test_requires_image_folder() {
        let store = Store::new();
        store.content("games.json", r#"{"title": "Game Development", "items": {}}"#);

        let err = GAMES.render(&store.loader(), &SessionContext::default()).unwrap_err();
        assert!(matches!(err, ContentError::MissingField { field: "image_folder", .. }));
    }

    #[test]
    fn test_missing_item_image_aborts() {
        let store = Store::new();
        store.content(
            "games.json",
            r#"{"title": "Game Development", "image_folder": "games", "items": {"racer": {"title": "Racer"}}}"#,
        );

        let err = GAMES.render(&store.loader(), &SessionContext::default()).unwrap_err();
        match err {
            ContentError::NotFound { path } => assert!(path.ends_with("games/racer.jpg")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
