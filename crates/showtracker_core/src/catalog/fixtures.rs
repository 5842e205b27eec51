//! Embedded catalog data.

use crate::model::content::{ContentItem, ContentType};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

struct Fixture {
    id: &'static str,
    title: &'static str,
    kind: ContentType,
    release_date: &'static str,
    poster: &'static str,
    overview: &'static str,
}

const CATALOG: &[Fixture] = &[
    Fixture {
        id: "tt0944947",
        title: "Game of Thrones",
        kind: ContentType::Tv,
        release_date: "2011-04-17",
        poster: "1XS1oqL89opfnbLl8WnZY1O1uJx.jpg",
        overview: "Seven noble families fight for control of the mythical land of Westeros.",
    },
    Fixture {
        id: "tt0111161",
        title: "The Shawshank Redemption",
        kind: ContentType::Movie,
        release_date: "1994-09-23",
        poster: "q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption.",
    },
    Fixture {
        id: "tt0903747",
        title: "Breaking Bad",
        kind: ContentType::Tv,
        release_date: "2008-01-20",
        poster: "ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
        overview: "A high school chemistry teacher diagnosed with cancer turns to manufacturing meth.",
    },
    Fixture {
        id: "tt0468569",
        title: "The Dark Knight",
        kind: ContentType::Movie,
        release_date: "2008-07-18",
        poster: "qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        overview: "When the menace known as the Joker wreaks havoc on Gotham, Batman must accept one of the greatest tests.",
    },
    Fixture {
        id: "tt0417299",
        title: "Avatar",
        kind: ContentType::Movie,
        release_date: "2009-12-18",
        poster: "jRXYjXNq0Cs2TcJjLkki24MLp7u.jpg",
        overview: "A paraplegic Marine dispatched to the moon Pandora on a unique mission.",
    },
    Fixture {
        id: "tt2861424",
        title: "Rick and Morty",
        kind: ContentType::Tv,
        release_date: "2013-12-02",
        poster: "gdIrmf2DdY5mgN6ycVP0XlzKzbE.jpg",
        overview: "An animated series that follows the exploits of a super scientist and his not-so-bright grandson.",
    },
    Fixture {
        id: "tt1475582",
        title: "Sherlock",
        kind: ContentType::Tv,
        release_date: "2010-07-25",
        poster: "7WTsnHkbA0FaG6R9twfFde0I9hl.jpg",
        overview: "A modern update finds the famous sleuth and his doctor partner solving crime in 21st century London.",
    },
    Fixture {
        id: "tt1853728",
        title: "Django Unchained",
        kind: ContentType::Movie,
        release_date: "2012-12-25",
        poster: "7oWY8VDWW7thTzWh3OKYRkWUlD5.jpg",
        overview: "With the help of a German bounty hunter, a freed slave sets out to rescue his wife.",
    },
    Fixture {
        id: "tt2306299",
        title: "Vikings",
        kind: ContentType::Tv,
        release_date: "2013-03-03",
        poster: "bQLrHIRNEkE3PdIWQrZHynQZazu.jpg",
        overview: "The adventures of Ragnar Lothbrok: the greatest hero of his age.",
    },
    Fixture {
        id: "tt10919420",
        title: "Squid Game",
        kind: ContentType::Tv,
        release_date: "2021-09-17",
        poster: "dDlEmu3EZ0Pgg93K2SVNLCjCSvE.jpg",
        overview: "Hundreds of cash-strapped contestants accept an invitation to compete in deadly games.",
    },
    Fixture {
        id: "tt0816692",
        title: "Interstellar",
        kind: ContentType::Movie,
        release_date: "2014-11-07",
        poster: "gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        overview: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
    },
    Fixture {
        id: "tt5491994",
        title: "Planet Earth II",
        kind: ContentType::Tv,
        release_date: "2016-11-06",
        poster: "3lT7L4pv7waWxIkjjh2RXyN0ITu.jpg",
        overview: "David Attenborough returns with a new wildlife documentary.",
    },
];

const SUGGESTIONS: &[Fixture] = &[
    Fixture {
        id: "suggest-1",
        title: "Breaking Bad",
        kind: ContentType::Tv,
        release_date: "2008-01-20",
        poster: "ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
        overview: "A high school chemistry teacher turned meth manufacturer.",
    },
    Fixture {
        id: "suggest-2",
        title: "The Shawshank Redemption",
        kind: ContentType::Movie,
        release_date: "1994-09-23",
        poster: "q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        overview: "Two imprisoned men bond over a number of years.",
    },
    Fixture {
        id: "suggest-3",
        title: "Stranger Things",
        kind: ContentType::Tv,
        release_date: "2016-07-15",
        poster: "x2LSRK2Cm7MZhjluni1msVJ3wDF.jpg",
        overview: "When a young boy vanishes, a small town uncovers a mystery.",
    },
    Fixture {
        id: "suggest-4",
        title: "Inception",
        kind: ContentType::Movie,
        release_date: "2010-07-16",
        poster: "9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
        overview: "A thief who steals corporate secrets through dream-sharing technology.",
    },
];

pub(super) fn catalog_items() -> Vec<ContentItem> {
    CATALOG.iter().map(Fixture::to_item).collect()
}

pub(super) fn suggestion_items() -> Vec<ContentItem> {
    SUGGESTIONS.iter().map(Fixture::to_item).collect()
}

impl Fixture {
    fn to_item(&self) -> ContentItem {
        ContentItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            kind: self.kind,
            release_date: self.release_date.to_string(),
            poster_url: format!("{POSTER_BASE}/{}", self.poster),
            overview: self.overview.to_string(),
            status: None,
        }
    }
}
