//! Search results screen.

use super::card::{Card, CardBadges};
use showtracker_core::{ContentItem, SearchQuery, TrackingState, TypeFilter};
use std::fmt;

pub struct SearchView<'a> {
    pub query: &'a SearchQuery,
    pub hits: &'a [&'a ContentItem],
    pub state: &'a TrackingState,
}

impl fmt::Display for SearchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = match self.query.filter {
            TypeFilter::All => "All",
            TypeFilter::Movie => "Movies",
            TypeFilter::Tv => "TV Shows",
        };
        writeln!(f, "== Search [{filter}] ==")?;

        if self.query.text.trim().is_empty() {
            return writeln!(f, "  Search for your favorite shows and movies");
        }
        if self.hits.is_empty() {
            return writeln!(f, "  No results found for \"{}\"", self.query.text);
        }

        for item in self.hits {
            let badges = CardBadges {
                watched: self.state.is_watched(&item.id),
                tracking: self.state.is_tracking(&item.id),
            };
            write!(f, "{}", Card { item, badges })?;
        }
        Ok(())
    }
}

pub fn render_search(query: &SearchQuery, hits: &[&ContentItem], state: &TrackingState) -> String {
    SearchView { query, hits, state }.to_string()
}

#[cfg(test)]
mod tests {
    use super::render_search;
    use showtracker_core::{search_titles, SearchQuery, StaticCatalog, TrackingState, TypeFilter};

    #[test]
    fn renders_hits_and_empty_states() {
        let catalog = StaticCatalog::embedded();
        let state = TrackingState::default();

        let query = SearchQuery::new("bad").with_filter(TypeFilter::Tv);
        let hits = search_titles(&catalog, &query);
        let text = render_search(&query, &hits, &state);
        assert!(text.contains("[TV Shows]"));
        assert!(text.contains("Breaking Bad"));

        let query = SearchQuery::new("nothing here");
        let text = render_search(&query, &[], &state);
        assert!(text.contains("No results found for \"nothing here\""));

        let text = render_search(&SearchQuery::default(), &[], &state);
        assert!(text.contains("Search for your favorite"));
    }
}
