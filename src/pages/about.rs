use super::{MarkdownBlock, RenderedPage};
use crate::content::ContentLoader;
use crate::error::Result;

pub(super) fn render(loader: &ContentLoader) -> Result<RenderedPage> {
    let mut page = RenderedPage::new("About Me");
    page.markdown = Some(MarkdownBlock::new(loader.load_markdown("about_me")?));
    Ok(page)
}

#[cfg(test)]
mod tests {
    use crate::error::ContentError;
    use crate::pages::test_support::Store;
    use crate::pages::{PageModule, SessionContext};

    #[test]
    fn test_markdown_source_is_unchanged() {
        let text = "I write **simulators** and games.\n\n- Unity\n- Unreal\n";
        let store = Store::new();
        store.content("about_me.md", text);

        let page = PageModule::AboutMe
            .render(&store.loader(), &SessionContext::default())
            .unwrap();

        assert_eq!(page.heading, "About Me");
        let markdown = page.markdown.unwrap();
        assert_eq!(markdown.source, text);
        assert!(markdown.html.contains("<strong>simulators</strong>"));
        assert!(markdown.html.contains("<li>Unity</li>"));
        assert!(page.panels.is_empty());
    }

    #[test]
    fn test_missing_markdown_fails() {
        let store = Store::new();
        let err = PageModule::AboutMe
            .render(&store.loader(), &SessionContext::default())
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }
}
