//! Unit tests for CardQuery construction.

use pokemontcg_catalog::pagination::total_pages;
use pokemontcg_catalog::{CardQuery, ClauseJoin, QueryState, TypeFilter};

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn new_is_first_page_without_filter() {
    let query = CardQuery::new();
    assert_eq!(query.to_query_string(), "page=1&pageSize=20");
    assert!(query.q().is_none());
}

#[test]
fn every_valid_page_is_carried_with_fixed_page_size() {
    let pages = total_pages(250, 20);
    assert_eq!(pages, 13);
    for p in 1..=pages {
        let query = CardQuery::new().page(p).clone();
        assert!(
            query
                .to_query_string()
                .starts_with(&format!("page={}&pageSize=20", p)),
            "page {}",
            p
        );
    }
}

#[test]
fn page_size_can_be_overridden() {
    let query = CardQuery::new().page_size(50).clone();
    assert_eq!(query.to_query_string(), "page=1&pageSize=50");
}

// ---------------------------------------------------------------------------
// q expression
// ---------------------------------------------------------------------------

#[test]
fn name_only_produces_name_clause() {
    let query = CardQuery::new().name("Pikachu").clone();
    assert_eq!(query.q().as_deref(), Some("name:Pikachu"));
    assert_eq!(query.to_query_string(), "page=1&pageSize=20&q=name:Pikachu");
}

#[test]
fn type_only_produces_types_clause() {
    let query = CardQuery::new().types("Fire").clone();
    assert_eq!(query.q().as_deref(), Some("types:Fire"));
}

#[test]
fn name_and_type_are_concatenated_without_separator_by_default() {
    let query = CardQuery::new().name("Charizard").types("Fire").clone();
    assert_eq!(query.q().as_deref(), Some("name:Charizardtypes:Fire"));
}

#[test]
fn space_join_separates_clauses() {
    let query = CardQuery::new()
        .name("Charizard")
        .types("Fire")
        .join(ClauseJoin::Space)
        .clone();
    assert_eq!(query.q().as_deref(), Some("name:Charizard types:Fire"));
}

#[test]
fn space_join_with_single_clause_adds_nothing() {
    let query = CardQuery::new().types("Water").join(ClauseJoin::Space).clone();
    assert_eq!(query.q().as_deref(), Some("types:Water"));
}

#[test]
fn empty_strings_clear_filters() {
    let query = CardQuery::new().name("Pikachu").name("").types("").clone();
    assert!(query.q().is_none());
    assert_eq!(query.to_pairs().len(), 2);
}

#[test]
fn pairs_are_in_request_order() {
    let query = CardQuery::new().name("Mew").page(3).clone();
    let keys: Vec<&str> = query.to_pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["page", "pageSize", "q"]);
}

// ---------------------------------------------------------------------------
// QueryState conversion
// ---------------------------------------------------------------------------

#[test]
fn query_state_with_all_filter_has_no_types_clause() {
    let state = QueryState {
        search: Some("Pikachu".into()),
        type_filter: TypeFilter::All,
        page: 4,
    };
    assert_eq!(
        state.to_card_query(ClauseJoin::Concatenate).to_query_string(),
        "page=4&pageSize=20&q=name:Pikachu"
    );
}

#[test]
fn query_state_combines_search_and_type() {
    let state = QueryState {
        search: Some("S".into()),
        type_filter: TypeFilter::Only("T".into()),
        page: 1,
    };
    assert_eq!(
        state.to_card_query(ClauseJoin::Concatenate).q().as_deref(),
        Some("name:Stypes:T")
    );
}

#[test]
fn type_filter_option_values() {
    assert_eq!(TypeFilter::from_option_value(""), TypeFilter::All);
    assert_eq!(
        TypeFilter::from_option_value("Grass"),
        TypeFilter::Only("Grass".into())
    );
    assert_eq!(TypeFilter::All.option_value(), "");
    assert_eq!(TypeFilter::Only("Grass".into()).as_type(), Some("Grass"));
}
