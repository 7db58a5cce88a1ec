//! Canned outlet questions.
//!
//! A query is lower-cased, trimmed and matched by substring against two
//! fixed intents. Anything else gets the help text.

use serde::Serialize;

use crate::hours::ClockTime;
use crate::outlet::Outlet;

pub const LATEST_TITLE: &str = "Outlets that close the latest:";
pub const NO_RESULTS: &str = "No results found.";
pub const HELP_TEXT: &str = "Sorry, I couldn't understand your query. Try asking something like:\n\
1. \"Which outlets close the latest?\"\n\
2. \"How many outlets are in Bangsar?\"";

/// Location matched by the count intent.
pub const BANGSAR: &str = "Bangsar";

/// What a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    LatestClosing,
    CountInLocation(&'static str),
    Unrecognized,
}

impl Intent {
    pub fn classify(query: &str) -> Self {
        let q = query.trim().to_lowercase();
        if q.contains("close the latest") {
            Intent::LatestClosing
        } else if q.contains("how many outlets") && q.contains("bangsar") {
            Intent::CountInLocation(BANGSAR)
        } else {
            Intent::Unrecognized
        }
    }
}

/// Result of answering a query against a fetched outlet list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Listing { title: String, outlets: Vec<Outlet> },
    Help { message: String },
}

impl Answer {
    pub fn outlets(&self) -> &[Outlet] {
        match self {
            Answer::Listing { outlets, .. } => outlets.as_slice(),
            Answer::Help { .. } => &[],
        }
    }

    /// Plain-text rendering: title, then one outlet name per line.
    pub fn render_text(&self) -> String {
        match self {
            Answer::Help { message } => message.clone(),
            Answer::Listing { title, outlets } => {
                let mut out = title.clone();
                if outlets.is_empty() {
                    out.push('\n');
                    out.push_str(NO_RESULTS);
                }
                for o in outlets {
                    out.push_str("\n- ");
                    out.push_str(&o.name);
                }
                out
            }
        }
    }
}

/// Answer `query` from `outlets`.
pub fn answer(query: &str, outlets: &[Outlet]) -> Answer {
    match Intent::classify(query) {
        Intent::LatestClosing => Answer::Listing {
            title: LATEST_TITLE.to_string(),
            outlets: find_outlets_that_close_latest(outlets)
                .into_iter()
                .cloned()
                .collect(),
        },
        Intent::CountInLocation(location) => {
            let found = count_outlets_in_location(outlets, location);
            Answer::Listing {
                title: format!("Number of outlets in {}: {}", location, found.len()),
                outlets: found.into_iter().cloned().collect(),
            }
        }
        Intent::Unrecognized => Answer::Help {
            message: HELP_TEXT.to_string(),
        },
    }
}

/// All outlets sharing the latest closing time.
///
/// The running maximum starts at midnight, so when every hours string is
/// malformed every outlet ties at `00:00`.
pub fn find_outlets_that_close_latest(outlets: &[Outlet]) -> Vec<&Outlet> {
    let closing: Vec<ClockTime> = outlets
        .iter()
        .map(|o| ClockTime::closing(&o.operating_hours))
        .collect();

    let latest = closing.iter().copied().max().unwrap_or_default();

    outlets
        .iter()
        .zip(&closing)
        .filter(|(_, t)| **t == latest)
        .map(|(o, _)| o)
        .collect()
}

/// Outlets whose address mentions `location`, ignoring case.
pub fn count_outlets_in_location<'a>(outlets: &'a [Outlet], location: &str) -> Vec<&'a Outlet> {
    let needle = location.to_lowercase();
    outlets
        .iter()
        .filter(|o| o.address.to_lowercase().contains(&needle))
        .collect()
}
