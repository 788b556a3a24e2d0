//! Plain-text rendering of the catalog screen.
//!
//! Layout only; there is no styling. The terminal browser prints these
//! strings as-is.

use crate::header::Header;
use crate::models::Card;
use crate::pagination::Pagination;
use crate::view::{CatalogView, LoadStatus};

const EMPTY: &str = "-";

/// Header, filters, count, card list (or loading indicator), pagination and,
/// when a card is selected, its detail panel.
pub fn screen(header: &Header, view: &CatalogView) -> String {
    let mut out = String::new();
    out.push_str(&header.render());
    out.push('\n');
    out.push_str(&filters(view));
    out.push('\n');
    out.push_str(&count(view));
    out.push('\n');
    out.push_str(&content(view));
    out.push_str(&pagination(&view.pagination()));
    out.push('\n');
    if let Some(card) = view.selected() {
        out.push('\n');
        out.push_str(&detail(card));
    }
    out
}

/// Search box and type filter line.
pub fn filters(view: &CatalogView) -> String {
    let filter = view.query().type_filter.as_type().unwrap_or("All");
    format!(
        "Search: [{}]  Filter by: [{}]",
        view.search_input(),
        filter
    )
}

pub fn count(view: &CatalogView) -> String {
    match view.total_count() {
        Some(total) => format!("Total: {} Pokémon", total),
        None => "Total: - Pokémon".to_string(),
    }
}

/// The card list, or a loading line while the latest request is outstanding.
pub fn content(view: &CatalogView) -> String {
    let mut out = String::new();
    match view.status() {
        LoadStatus::Loading => {
            out.push_str("Loading...\n");
            return out;
        }
        LoadStatus::Failed(reason) => {
            out.push_str(&format!("Could not load cards: {}\n", reason));
        }
        LoadStatus::Idle | LoadStatus::Loaded => {}
    }
    for card in view.cards() {
        out.push_str(&tile(card));
        out.push('\n');
    }
    out
}

/// One list entry: id, name, first type, rarity.
pub fn tile(card: &Card) -> String {
    format!(
        "[{}] {} | {} | {}",
        card.id,
        card.name,
        card.primary_type().unwrap_or(EMPTY),
        card.rarity.as_deref().unwrap_or(EMPTY)
    )
}

pub fn pagination(p: &Pagination) -> String {
    let prev = if p.prev().is_some() { "<" } else { " " };
    let next = if p.has_next() { ">" } else { " " };
    format!("{} page {} of {} {}", prev, p.page(), p.total_pages(), next)
}

/// The detail panel for a selected card.
pub fn detail(card: &Card) -> String {
    let mut lines = vec![
        format!("== {} ==", card.name),
        format!("Image: {}", card.images.small),
        format!(
            "Weakness: {}  Resistance: {}",
            card.first_weakness().unwrap_or(EMPTY),
            card.first_resistance().unwrap_or(EMPTY)
        ),
        format!("Ability: {}", card.first_ability().unwrap_or(EMPTY)),
        format!("Attack: {}", card.first_attack().unwrap_or(EMPTY)),
        format!("HP: {}", card.hp.as_deref().unwrap_or(EMPTY)),
    ];
    if let Some(flavor) = &card.flavor_text {
        lines.push(flavor.clone());
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
