//! Home screen: tracking, suggestions and watched lists.

use super::card::{Card, CardBadges};
use showtracker_core::{ContentItem, TrackingState};
use std::fmt;

pub struct HomeView<'a> {
    pub state: &'a TrackingState,
    pub suggestions: &'a [ContentItem],
}

impl fmt::Display for HomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        writeln!(f, "== Currently Tracking ==")?;
        if state.tracking().is_empty() {
            writeln!(f, "  No shows or movies being tracked. Search to add some!")?;
        }
        for item in state.tracking() {
            let badges = CardBadges {
                watched: false,
                tracking: true,
            };
            write!(f, "{}", Card { item, badges })?;
        }

        writeln!(f, "\n== Suggested For You ==")?;
        for item in self.suggestions {
            let badges = CardBadges {
                watched: state.is_watched(&item.id),
                tracking: state.is_tracking(&item.id),
            };
            write!(f, "{}", Card { item, badges })?;
        }

        writeln!(f, "\n== Watched ==")?;
        if state.watched().is_empty() {
            writeln!(f, "  No watched content yet. Mark shows as watched!")?;
        }
        for item in state.watched() {
            let badges = CardBadges {
                watched: true,
                tracking: false,
            };
            write!(f, "{}", Card { item, badges })?;
        }
        Ok(())
    }
}

pub fn render_home(state: &TrackingState, suggestions: &[ContentItem]) -> String {
    HomeView { state, suggestions }.to_string()
}

#[cfg(test)]
mod tests {
    use super::render_home;
    use showtracker_core::{suggestions, TrackingState};

    #[test]
    fn empty_home_shows_prompts_and_suggestions() {
        let text = render_home(&TrackingState::default(), &suggestions());
        assert!(text.contains("No shows or movies being tracked"));
        assert!(text.contains("No watched content yet"));
        assert!(text.contains("Stranger Things"));
    }
}
