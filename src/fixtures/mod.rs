//! Bundled conference-planning datasets.
//!
//! Events, speakers, sponsors, venues, agents and tasks are embedded JSON
//! fixtures. The
//! registration list is generated and served page by page through
//! [`RegistrationSource`].

mod columns;
mod registrations;
mod types;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub use columns::{
    agent_columns, event_columns, registration_columns, speaker_columns, sponsor_columns,
    task_columns, venue_columns,
};
pub use registrations::{
    generate_registrations, RegistrationPage, RegistrationSource, REGISTRATION_COUNT,
};
pub use types::{Agent, Event, Registration, Speaker, Sponsor, Task, Venue};

const EVENTS_JSON: &str = include_str!("data/events.json");
const SPEAKERS_JSON: &str = include_str!("data/speakers.json");
const SPONSORS_JSON: &str = include_str!("data/sponsors.json");
const VENUES_JSON: &str = include_str!("data/venues.json");
const AGENTS_JSON: &str = include_str!("data/agents.json");
const TASKS_JSON: &str = include_str!("data/tasks.json");

/// Errors loading fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The embedded JSON for a dataset could not be parsed.
    #[error("failed to parse {dataset} fixture: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },

    /// No dataset has the given name.
    #[error("unknown dataset '{0}' (expected one of: events, speakers, sponsors, venues, registrations, agents, tasks)")]
    UnknownDataset(String),
}

/// Result type for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// The available datasets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dataset {
    #[default]
    Events,
    Speakers,
    Sponsors,
    Venues,
    Registrations,
    Agents,
    Tasks,
}

impl Dataset {
    /// All datasets in tab order.
    pub const ALL: [Dataset; 7] = [
        Dataset::Events,
        Dataset::Speakers,
        Dataset::Sponsors,
        Dataset::Venues,
        Dataset::Registrations,
        Dataset::Agents,
        Dataset::Tasks,
    ];

    /// Lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Events => "events",
            Dataset::Speakers => "speakers",
            Dataset::Sponsors => "sponsors",
            Dataset::Venues => "venues",
            Dataset::Registrations => "registrations",
            Dataset::Agents => "agents",
            Dataset::Tasks => "tasks",
        }
    }

    /// Title shown on the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Dataset::Events => "Events",
            Dataset::Speakers => "Speakers",
            Dataset::Sponsors => "Sponsors",
            Dataset::Venues => "Venues",
            Dataset::Registrations => "Registrations",
            Dataset::Agents => "Agents",
            Dataset::Tasks => "Tasks",
        }
    }

    /// Position in [`Dataset::ALL`].
    pub fn index(&self) -> usize {
        Dataset::ALL
            .iter()
            .position(|d| d == self)
            .unwrap_or_default()
    }

    /// The next dataset, wrapping around.
    pub fn next(&self) -> Dataset {
        Dataset::ALL[(self.index() + 1) % Dataset::ALL.len()]
    }

    /// The previous dataset, wrapping around.
    pub fn previous(&self) -> Dataset {
        let len = Dataset::ALL.len();
        Dataset::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Dataset::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| FixtureError::UnknownDataset(s.to_string()))
    }
}

fn parse<T: DeserializeOwned>(dataset: Dataset, json: &str) -> Result<Vec<T>> {
    let rows: Vec<T> =
        serde_json::from_str(json).map_err(|source| FixtureError::Parse { dataset, source })?;
    debug!(%dataset, rows = rows.len(), "Loaded fixture");
    Ok(rows)
}

/// Load the events fixture.
pub fn events() -> Result<Vec<Event>> {
    parse(Dataset::Events, EVENTS_JSON)
}

/// Load the speakers fixture.
pub fn speakers() -> Result<Vec<Speaker>> {
    parse(Dataset::Speakers, SPEAKERS_JSON)
}

/// Load the sponsors fixture.
pub fn sponsors() -> Result<Vec<Sponsor>> {
    parse(Dataset::Sponsors, SPONSORS_JSON)
}

/// Load the venues fixture.
pub fn venues() -> Result<Vec<Venue>> {
    parse(Dataset::Venues, VENUES_JSON)
}

/// Load the agents fixture.
pub fn agents() -> Result<Vec<Agent>> {
    parse(Dataset::Agents, AGENTS_JSON)
}

/// Load the tasks fixture.
pub fn tasks() -> Result<Vec<Task>> {
    parse(Dataset::Tasks, TASKS_JSON)
}

/// The full registration list.
pub fn registrations() -> Vec<Registration> {
    generate_registrations(REGISTRATION_COUNT)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::table::TableRow;

    fn assert_unique_ids<T: TableRow>(rows: &[T]) {
        let ids: HashSet<_> = rows.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), rows.len());
    }

    fn assert_not_empty<T>(rows: &[T]) {
        assert!(!rows.is_empty());
    }

    #[test]
    fn test_all_fixtures_parse_with_unique_ids() {
        let events = events().unwrap();
        let speakers = speakers().unwrap();
        let sponsors = sponsors().unwrap();
        let venues = venues().unwrap();
        let agents = agents().unwrap();
        let tasks = tasks().unwrap();
        let registrations = registrations();

        assert_not_empty(&events);
        assert_not_empty(&speakers);
        assert_not_empty(&sponsors);
        assert_not_empty(&venues);
        assert_not_empty(&agents);
        assert_not_empty(&tasks);
        assert_eq!(registrations.len(), REGISTRATION_COUNT);

        assert_unique_ids(&events);
        assert_unique_ids(&speakers);
        assert_unique_ids(&sponsors);
        assert_unique_ids(&venues);
        assert_unique_ids(&agents);
        assert_unique_ids(&tasks);
        assert_unique_ids(&registrations);
    }

    #[test]
    fn test_fixture_event_ids_exist() {
        let event_ids: HashSet<String> = events().unwrap().into_iter().map(|e| e.id).collect();

        let referenced: Vec<String> = speakers()
            .unwrap()
            .into_iter()
            .map(|s| s.event_id)
            .chain(sponsors().unwrap().into_iter().map(|s| s.event_id))
            .chain(venues().unwrap().into_iter().map(|v| v.event_id))
            .chain(agents().unwrap().into_iter().map(|a| a.event_id))
            .chain(tasks().unwrap().into_iter().map(|t| t.event_id))
            .collect();

        for id in referenced {
            assert!(event_ids.contains(&id), "unknown event id {}", id);
        }
    }

    #[test]
    fn test_dataset_from_str() {
        assert_eq!("events".parse::<Dataset>().unwrap(), Dataset::Events);
        assert_eq!(" Sponsors ".parse::<Dataset>().unwrap(), Dataset::Sponsors);
        let err = "budgets".parse::<Dataset>().unwrap_err();
        assert!(matches!(err, FixtureError::UnknownDataset(ref name) if name == "budgets"));
        assert!(err.to_string().contains("budgets"));
    }

    #[test]
    fn test_dataset_cycle() {
        assert_eq!(Dataset::Events.next(), Dataset::Speakers);
        assert_eq!(Dataset::Registrations.next(), Dataset::Agents);
        assert_eq!(Dataset::Tasks.next(), Dataset::Events);
        assert_eq!(Dataset::Events.previous(), Dataset::Tasks);
        for dataset in Dataset::ALL {
            assert_eq!(dataset.next().previous(), dataset);
        }
    }

    #[test]
    fn test_parse_error_names_dataset() {
        let result: Result<Vec<Event>> = parse(Dataset::Events, "[{]");
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("failed to parse events fixture"));
    }

    #[test]
    fn test_task_dependencies_exist() {
        let ids: HashSet<String> = tasks().unwrap().into_iter().map(|t| t.id).collect();
        for task in tasks().unwrap() {
            for dependency in &task.dependencies {
                assert!(ids.contains(dependency), "task {} depends on {}", task.id, dependency);
            }
        }
    }
}
