//! Single content card.

use showtracker_core::ContentItem;
use std::fmt;

/// Membership badges shown on a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardBadges {
    pub watched: bool,
    pub tracking: bool,
}

/// One item rendered as an indented block.
///
/// Posters that cannot be shown degrade to `[no poster]`.
pub struct Card<'a> {
    pub item: &'a ContentItem,
    pub badges: CardBadges,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item;
        let year = item
            .release_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| "????".to_string());
        writeln!(
            f,
            "  {} ({}) [{}]  id={}",
            item.title,
            year,
            item.kind.label(),
            item.id
        )?;

        let mut status = Vec::new();
        if self.badges.watched {
            status.push("✓ watched");
        }
        if self.badges.tracking {
            status.push("+ tracking");
        }
        if !status.is_empty() {
            writeln!(f, "    {}", status.join("  "))?;
        }

        if item.has_poster() {
            writeln!(f, "    poster: {}", item.poster_url.trim())?;
        } else {
            writeln!(f, "    [no poster]")?;
        }
        if !item.overview.trim().is_empty() {
            writeln!(f, "    {}", item.overview.trim())?;
        }
        Ok(())
    }
}
