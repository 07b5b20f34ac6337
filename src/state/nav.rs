//! Sidebar navigation model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router owns the current URL; the sidebar derives the highlighted entry
//! from it with [`MenuItem::from_path`]. `NavState` only tracks whether the
//! sidebar is expanded.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Dashboard,
    Instructors,
    Cohorts,
    Students,
    TeachingSpaces,
}

impl MenuItem {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Instructors, Self::Cohorts, Self::Students, Self::TeachingSpaces];

    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Instructors => "formateur",
            Self::Cohorts => "promotion",
            Self::Students => "etudiant",
            Self::TeachingSpaces => "espace",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Instructors => "Formateur",
            Self::Cohorts => "Promotion",
            Self::Students => "Etudiant",
            Self::TeachingSpaces => "Espace pédagogique",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Instructors => "👤",
            Self::Cohorts => "🎓",
            Self::Students => "👥",
            Self::TeachingSpaces => "📚",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Instructors => "/formateur",
            Self::Cohorts => "/promotion",
            Self::Students => "/etudiant",
            Self::TeachingSpaces => "/espace",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }

    /// Entry whose path is the longest segment-aligned prefix of `path`.
    ///
    /// Unknown paths fall back to the dashboard.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .filter(|item| {
                let prefix = item.path();
                prefix == "/"
                    || path == prefix
                    || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|item| item.path().len())
            .unwrap_or(Self::Dashboard)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub sidebar_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl NavState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
