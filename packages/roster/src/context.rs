//! Cross-page team context tracking.
//!
//! Every page's text is scanned for a team header, a roster construction
//! model line, and the season's cap-availability line. Each field is
//! replaced only when its pattern matches; otherwise the previous value
//! carries forward.

use regex::Regex;
use roster_profile_models::PageContext;

/// Compiled patterns that pull context fields out of page text.
///
/// Each pattern captures its value in group 1. The tracker holds no
/// context of its own; callers thread the current [`PageContext`] through
/// [`ContextTracker::update`] and keep the value it returns.
#[derive(Debug, Clone)]
pub struct ContextTracker {
    team: Regex,
    roster_model: Regex,
    cap: Regex,
}

impl ContextTracker {
    /// Creates a pattern set from compiled regexes.
    #[must_use]
    pub const fn new(team: Regex, roster_model: Regex, cap: Regex) -> Self {
        Self {
            team,
            roster_model,
            cap,
        }
    }

    /// Returns the context that results from reading `text` under
    /// `context`.
    #[must_use]
    pub fn update(&self, context: PageContext, text: &str) -> PageContext {
        let mut next = context;

        if let Some(team) = capture(&self.team, text) {
            if next.team.as_deref() != Some(team.as_str()) {
                log::info!("Found team: {team}");
            }
            next = next.with_team(team);
        }

        if let Some(model) = capture(&self.roster_model, text) {
            next = next.with_roster_model(model);
        }

        if let Some(cap) = capture(&self.cap, text) {
            next = next.with_cap_available(cap.replace(',', ""));
        }

        next
    }
}

/// Trimmed group-1 capture of the first match, if non-empty.
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_owned())
}
