//! Navigation Shell
//!
//! The sidebar's entries and which one is active. States are "no selection"
//! plus one per entry; picking a known label moves to that entry, picking an
//! unknown one changes nothing. There is no way back to "no selection", and
//! the shell the server builds starts with the first entry already selected.

use crate::pages::{PageModule, GAMES, SIMULATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// Bootstrap icon name.
    pub icon: &'static str,
    /// URL segment under `/page/`.
    pub slug: &'static str,
    pub page: PageModule,
}

pub const NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry {
        label: "About me",
        icon: "person-fill",
        slug: "about",
        page: PageModule::AboutMe,
    },
    NavEntry {
        label: "Work History",
        icon: "briefcase",
        slug: "work-history",
        page: PageModule::WorkHistory,
    },
    NavEntry {
        label: "Projects",
        icon: "files",
        slug: "projects",
        page: PageModule::Projects,
    },
    NavEntry {
        label: "Certification",
        icon: "file-text",
        slug: "certification",
        page: PageModule::Certification,
    },
    NavEntry {
        label: "Game Development",
        icon: "controller",
        slug: "games",
        page: GAMES,
    },
    NavEntry {
        label: "Simulator Development",
        icon: "airplane-engines",
        slug: "simulation",
        page: SIMULATION,
    },
    NavEntry {
        label: "Education",
        icon: "mortarboard",
        slug: "education",
        page: PageModule::Education,
    },
];

#[derive(Debug, Clone)]
pub struct NavShell {
    entries: Vec<NavEntry>,
    active: Option<usize>,
}

impl NavShell {
    /// Shell with nothing selected yet.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries, active: None }
    }

    /// Shell with `default_index` pre-selected (ignored when out of range).
    pub fn with_default(entries: Vec<NavEntry>, default_index: usize) -> Self {
        let active = (default_index < entries.len()).then_some(default_index);
        Self { entries, active }
    }

    /// The site's sidebar, "About me" selected.
    pub fn portfolio() -> Self {
        Self::with_default(NAV_ENTRIES.to_vec(), 0)
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&NavEntry> {
        self.active.map(|i| &self.entries[i])
    }

    pub fn active_page(&self) -> Option<PageModule> {
        self.active().map(|entry| entry.page)
    }

    pub fn is_active(&self, entry: &NavEntry) -> bool {
        self.active().is_some_and(|active| active.slug == entry.slug)
    }

    /// Select by display label.
    pub fn select(&mut self, label: &str) -> Option<&NavEntry> {
        self.select_where(|entry| entry.label == label)
    }

    /// Select by URL slug.
    pub fn select_slug(&mut self, slug: &str) -> Option<&NavEntry> {
        self.select_where(|entry| entry.slug == slug)
    }

    fn select_where(&mut self, matches: impl Fn(&NavEntry) -> bool) -> Option<&NavEntry> {
        let index = self.entries.iter().position(matches)?;
        self.active = Some(index);
        Some(&self.entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_entry_preselected() {
        let shell = NavShell::portfolio();
        assert_eq!(shell.active().unwrap().label, "About me");
        assert_eq!(shell.active_page(), Some(PageModule::AboutMe));
    }

    #[test]
    fn test_new_shell_has_no_selection() {
        let shell = NavShell::new(NAV_ENTRIES.to_vec());
        assert!(shell.active().is_none());
    }

    #[test]
    fn test_education_then_certification() {
        let mut shell = NavShell::portfolio();
        let before = shell.entries().to_vec();

        shell.select("Education").unwrap();
        assert_eq!(shell.active_page(), Some(PageModule::Education));

        shell.select("Certification").unwrap();
        assert_eq!(shell.active_page(), Some(PageModule::Certification));

        // Selection never mutates the entries themselves.
        assert_eq!(shell.entries(), before.as_slice());
    }

    #[test]
    fn test_unknown_label_keeps_selection() {
        let mut shell = NavShell::portfolio();
        shell.select("Game Development").unwrap();

        assert!(shell.select("Blog").is_none());
        assert_eq!(shell.active_page(), Some(GAMES));
    }

    #[test]
    fn test_select_by_slug() {
        let mut shell = NavShell::portfolio();
        let entry = shell.select_slug("simulation").unwrap();
        assert_eq!(entry.label, "Simulator Development");
        assert_eq!(shell.active_page(), Some(SIMULATION));
    }

    #[test]
    fn test_is_active_marks_one_entry() {
        let mut shell = NavShell::portfolio();
        shell.select("Projects");
        let active: Vec<&str> = shell
            .entries()
            .iter()
            .filter(|e| shell.is_active(e))
            .map(|e| e.label)
            .collect();
        assert_eq!(active, vec!["Projects"]);
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), NAV_ENTRIES.len());
    }
}
