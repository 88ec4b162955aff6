//! Page selection
//!
//! The shell mounts exactly one page at a time. The selection is encoded
//! in the route path so it survives reloads and can be linked.

/// A top-level page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Ingredients,
    Recipes,
}

impl Page {
    /// Pages in navigation order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Ingredients, Page::Recipes];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Ingredients => "/ingredients",
            Page::Recipes => "/recipes",
        }
    }

    /// Navigation label
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Ingredients => "Ingredients",
            Page::Recipes => "Recipes",
        }
    }

    /// Resolve a route path. Unknown paths fall back to the dashboard.
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.path().trim_end_matches('/') == trimmed)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Page::from_path(""), Page::Dashboard);
        assert_eq!(Page::from_path("/settings"), Page::Dashboard);
        assert_eq!(Page::from_path("/recipes/"), Page::Recipes);
    }
}
