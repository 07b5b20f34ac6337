//! Dashboard counters and backend status.
//!
//! Each counter is filled independently as its list call completes. The
//! status badge turns online as soon as one call succeeds and offline only
//! once every call has failed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::Resource;

/// Shown in place of a count that is loading or failed to load.
pub const COUNT_PLACEHOLDER: &str = "—";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    Instructors,
    Cohorts,
    Students,
    TeachingSpaces,
}

impl Stat {
    pub const ALL: [Self; 4] = [Self::Instructors, Self::Cohorts, Self::Students, Self::TeachingSpaces];

    pub fn label(self) -> &'static str {
        match self {
            Self::Instructors => "Formateurs",
            Self::Cohorts => "Promotions",
            Self::Students => "Étudiants",
            Self::TeachingSpaces => "Espaces pédagogiques",
        }
    }

    pub fn resource(self) -> Resource {
        match self {
            Self::Instructors => Resource::Instructors,
            Self::Cohorts => Resource::Cohorts,
            Self::Students => Resource::Students,
            Self::TeachingSpaces => Resource::TeachingSpaces,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Instructors => 0,
            Self::Cohorts => 1,
            Self::Students => 2,
            Self::TeachingSpaces => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Vérification…",
            Self::Online => "En ligne",
            Self::Offline => "Hors ligne",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Pending,
    Loaded(usize),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    slots: [Slot; 4],
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { slots: [Slot::Pending; 4] }
    }
}

impl DashboardState {
    pub fn record(&mut self, stat: Stat, result: Result<usize, ()>) {
        self.slots[stat.index()] = match result {
            Ok(count) => Slot::Loaded(count),
            Err(()) => Slot::Failed,
        };
    }

    pub fn count(&self, stat: Stat) -> Option<usize> {
        match self.slots[stat.index()] {
            Slot::Loaded(count) => Some(count),
            Slot::Pending | Slot::Failed => None,
        }
    }

    /// Rendered counter value.
    pub fn display(&self, stat: Stat) -> String {
        self.count(stat).map_or_else(|| COUNT_PLACEHOLDER.to_owned(), |count| count.to_string())
    }

    pub fn api_status(&self) -> ApiStatus {
        if self.slots.iter().any(|slot| matches!(slot, Slot::Loaded(_))) {
            ApiStatus::Online
        } else if self.slots.iter().all(|slot| *slot == Slot::Failed) {
            ApiStatus::Offline
        } else {
            ApiStatus::Checking
        }
    }
}
