//! Sidebar state and the static navigation table.

use crate::components::icon::Icon;
use crate::routes::Route;

/// Pinned is sticky; hovered follows the pointer. Either one expands the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub pinned: bool,
    pub hovered: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            pinned: true,
            hovered: false,
        }
    }
}

impl SidebarState {
    pub fn expanded(self) -> bool {
        self.pinned || self.hovered
    }

    pub fn toggle_pin(self) -> Self {
        Self {
            pinned: !self.pinned,
            ..self
        }
    }

    pub fn with_hover(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub route: Route,
    pub icon: Icon,
    pub label: &'static str,
}

impl NavEntry {
    pub fn is_active(&self, current: Option<&Route>) -> bool {
        current == Some(&self.route)
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        route: Route::Home,
        icon: Icon::Home,
        label: "Home",
    },
    NavEntry {
        route: Route::Dashboard,
        icon: Icon::BarChart,
        label: "Dashboard",
    },
    NavEntry {
        route: Route::About,
        icon: Icon::Info,
        label: "About",
    },
];

/// Entries whose label contains `query`, case-insensitively. Blank query keeps all.
pub fn filter_entries(query: &str) -> Vec<&'static NavEntry> {
    let needle = query.trim().to_lowercase();
    NAV_ENTRIES
        .iter()
        .filter(|e| needle.is_empty() || e.label.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_is_pinned_or_hovered() {
        for pinned in [false, true] {
            for hovered in [false, true] {
                let s = SidebarState { pinned, hovered };
                assert_eq!(s.expanded(), pinned || hovered);
            }
        }
    }

    #[test]
    fn starts_pinned() {
        let s = SidebarState::default();
        assert!(s.pinned);
        assert!(s.expanded());
    }

    #[test]
    fn hover_expands_an_unpinned_bar_only_while_hovered() {
        let s = SidebarState::default().toggle_pin();
        assert!(!s.expanded());
        let s = s.with_hover(true);
        assert!(s.expanded());
        assert!(!s.pinned);
        let s = s.with_hover(false);
        assert!(!s.expanded());
        assert!(s.toggle_pin().expanded());
    }

    #[test]
    fn every_route_marks_exactly_one_entry() {
        for route in [Route::Home, Route::Dashboard, Route::About] {
            let active: Vec<_> = NAV_ENTRIES
                .iter()
                .filter(|e| e.is_active(Some(&route)))
                .collect();
            assert_eq!(active.len(), 1, "{route:?}");
            assert_eq!(active[0].route, route);
        }
    }

    #[test]
    fn nothing_active_off_the_map() {
        assert!(NAV_ENTRIES.iter().all(|e| !e.is_active(None)));
        assert!(NAV_ENTRIES
            .iter()
            .all(|e| !e.is_active(Some(&Route::NotFound))));
    }

    #[test]
    fn entries_keep_their_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Home", "Dashboard", "About"]);
    }

    #[test]
    fn search_filters_by_label() {
        assert_eq!(filter_entries("").len(), NAV_ENTRIES.len());
        assert_eq!(filter_entries("   ").len(), NAV_ENTRIES.len());

        let hits = filter_entries("DASH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].route, Route::Dashboard);

        let hits = filter_entries("o");
        let labels: Vec<_> = hits.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Home", "Dashboard", "About"]);

        assert!(filter_entries("settings").is_empty());
    }
}
