use showtracker_core::{
    search_titles, CatalogError, CatalogSource, ContentItem, ContentType, JsonCatalog,
    SearchQuery, StaticCatalog, TypeFilter,
};

fn titles(hits: &[&ContentItem]) -> Vec<String> {
    hits.iter().map(|item| item.title.clone()).collect()
}

#[test]
fn query_with_type_filter_matches_case_insensitively() {
    let catalog = StaticCatalog::from_items(vec![
        ContentItem::new("tt0903747", "Breaking Bad", ContentType::Tv, "2008-01-20"),
        ContentItem::new("tt0468569", "The Dark Knight", ContentType::Movie, "2008-07-18"),
    ])
    .unwrap();

    let query = SearchQuery::new("bad").with_filter(TypeFilter::Tv);
    let hits = search_titles(&catalog, &query);

    assert_eq!(titles(&hits), vec!["Breaking Bad"]);
}

#[test]
fn results_preserve_catalog_order() {
    let catalog = StaticCatalog::embedded();

    let hits = search_titles(&catalog, &SearchQuery::new("THE"));

    assert_eq!(
        titles(&hits),
        vec!["The Shawshank Redemption", "The Dark Knight"]
    );
}

#[test]
fn movie_filter_excludes_tv() {
    let catalog = StaticCatalog::embedded();

    let query = SearchQuery::new("e").with_filter(TypeFilter::Movie);
    let hits = search_titles(&catalog, &query);

    assert!(!hits.is_empty());
    assert!(hits.iter().all(|item| item.kind == ContentType::Movie));
}

#[test]
fn blank_query_returns_nothing() {
    let catalog = StaticCatalog::embedded();
    assert!(search_titles(&catalog, &SearchQuery::new("   ")).is_empty());
    assert!(search_titles(&catalog, &SearchQuery::new("")).is_empty());
}

#[test]
fn no_match_returns_empty() {
    let catalog = StaticCatalog::embedded();
    assert!(search_titles(&catalog, &SearchQuery::new("zzz")).is_empty());
}

#[test]
fn json_catalog_loads_items_with_same_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "x1", "title": "Foundation", "type": "tv", "releaseDate": "2031-03-01",
             "posterUrl": "", "overview": "Psychohistory."},
            {"id": "x2", "title": "Dune: Part Three", "type": "movie", "releaseDate": "2026-12-18",
             "posterUrl": "https://example.org/dune.jpg", "overview": "Arrakis again."}
        ]"#,
    )
    .unwrap();

    let catalog = JsonCatalog::from_path(&path).unwrap();

    assert_eq!(catalog.items().len(), 2);
    assert_eq!(catalog.find("x2").unwrap().kind, ContentType::Movie);
    let hits = search_titles(&catalog, &SearchQuery::new("found"));
    assert_eq!(titles(&hits), vec!["Foundation"]);
}

#[test]
fn json_catalog_rejects_duplicates_and_bad_files() {
    let dir = tempfile::tempdir().unwrap();

    let duplicate = dir.path().join("dup.json");
    std::fs::write(
        &duplicate,
        r#"[
            {"id": "x1", "title": "A", "type": "tv", "releaseDate": "", "posterUrl": "", "overview": ""},
            {"id": "x1", "title": "B", "type": "tv", "releaseDate": "", "posterUrl": "", "overview": ""}
        ]"#,
    )
    .unwrap();
    assert!(matches!(
        JsonCatalog::from_path(&duplicate).unwrap_err(),
        CatalogError::DuplicateId(id) if id == "x1"
    ));

    let malformed = dir.path().join("bad.json");
    std::fs::write(&malformed, "{}").unwrap();
    assert!(matches!(
        JsonCatalog::from_path(&malformed).unwrap_err(),
        CatalogError::Parse { .. }
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        JsonCatalog::from_path(&missing).unwrap_err(),
        CatalogError::Io { .. }
    ));
}

#[test]
fn static_catalog_rejects_empty_titles() {
    let err = StaticCatalog::from_items(vec![ContentItem::new(
        "x1",
        " ",
        ContentType::Tv,
        "2030-01-01",
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}
