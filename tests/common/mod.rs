//! Shared fixtures for the catalog integration tests.
//!
//! Provides sample API payloads and `ScriptedApi`, an in-memory
//! `CatalogApi` whose page responses can be held back behind oneshot gates
//! so tests decide the order in which fetches resolve.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use pokemontcg_catalog::{CardQuery, CatalogApi, CatalogError, PageResult, Result};
use tokio::sync::oneshot;

pub fn pikachu_json() -> serde_json::Value {
    serde_json::json!({
        "id": "base1-58",
        "name": "Pikachu",
        "supertype": "Pokémon",
        "subtypes": ["Basic"],
        "hp": "40",
        "types": ["Lightning"],
        "attacks": [
            {
                "name": "Gnaw",
                "cost": ["Colorless"],
                "convertedEnergyCost": 1,
                "damage": "10",
                "text": ""
            },
            {
                "name": "Thunder Jolt",
                "cost": ["Lightning", "Colorless"],
                "convertedEnergyCost": 2,
                "damage": "30",
                "text": "Flip a coin. If tails, Pikachu does 10 damage to itself."
            }
        ],
        "weaknesses": [{ "type": "Fighting", "value": "×2" }],
        "number": "58",
        "artist": "Mitsuhiro Arita",
        "rarity": "Common",
        "flavorText": "When several of these Pokémon gather, their electricity could build and cause lightning storms.",
        "images": {
            "small": "https://images.pokemontcg.io/base1/58.png",
            "large": "https://images.pokemontcg.io/base1/58_hires.png"
        }
    })
}

pub fn charizard_json() -> serde_json::Value {
    serde_json::json!({
        "id": "base1-4",
        "name": "Charizard",
        "supertype": "Pokémon",
        "subtypes": ["Stage 2"],
        "hp": "120",
        "types": ["Fire"],
        "abilities": [
            {
                "name": "Energy Burn",
                "text": "As often as you like during your turn, you may turn all Energy attached to Charizard into Fire Energy for the rest of the turn.",
                "type": "Pokémon Power"
            }
        ],
        "attacks": [
            {
                "name": "Fire Spin",
                "cost": ["Fire", "Fire", "Fire", "Fire"],
                "convertedEnergyCost": 4,
                "damage": "100",
                "text": "Discard 2 Energy cards attached to Charizard in order to use this attack."
            }
        ],
        "weaknesses": [{ "type": "Water", "value": "×2" }],
        "resistances": [{ "type": "Fighting", "value": "-30" }],
        "number": "4",
        "artist": "Mitsuhiro Arita",
        "rarity": "Rare Holo",
        "images": {
            "small": "https://images.pokemontcg.io/base1/4.png",
            "large": "https://images.pokemontcg.io/base1/4_hires.png"
        }
    })
}

/// A trainer card: no types, no hp, no attacks.
pub fn potion_json() -> serde_json::Value {
    serde_json::json!({
        "id": "base1-94",
        "name": "Potion",
        "supertype": "Trainer",
        "subtypes": ["Item"],
        "rules": ["Remove up to 2 damage counters from 1 of your Pokémon."],
        "number": "94",
        "rarity": "Common",
        "images": {
            "small": "https://images.pokemontcg.io/base1/94.png",
            "large": "https://images.pokemontcg.io/base1/94_hires.png"
        }
    })
}

pub fn page_json(cards: Vec<serde_json::Value>, page: u32, total_count: u64) -> serde_json::Value {
    let count = cards.len();
    serde_json::json!({
        "data": cards,
        "page": page,
        "pageSize": 20,
        "count": count,
        "totalCount": total_count
    })
}

pub fn page(cards: Vec<serde_json::Value>, page: u32, total_count: u64) -> PageResult {
    serde_json::from_value(page_json(cards, page, total_count)).unwrap()
}

/// A page holding a single card whose id and name are both `marker`.
pub fn marker_page(marker: &str, total_count: u64) -> PageResult {
    let mut card = pikachu_json();
    card["id"] = serde_json::json!(marker);
    card["name"] = serde_json::json!(marker);
    page(vec![card], 1, total_count)
}

pub fn sample_page() -> PageResult {
    page(vec![pikachu_json(), charizard_json(), potion_json()], 1, 250)
}

pub fn sample_types() -> Vec<String> {
    ["Colorless", "Fire", "Lightning", "Water"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// ScriptedApi
// ---------------------------------------------------------------------------

/// `CatalogApi` backed by canned responses.
///
/// Page responses are keyed by the canonical query string
/// (`CardQuery::to_query_string`). Unknown queries get `sample_page()`.
#[derive(Default)]
pub struct ScriptedApi {
    types: Mutex<Option<Vec<String>>>,
    pages: Mutex<HashMap<String, PageResult>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<PageResult>>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<Vec<String>>,
    types_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        let api = Self::default();
        *api.types.lock().unwrap() = Some(sample_types());
        api
    }

    /// Make `GET /types` fail.
    pub fn without_types(self) -> Self {
        *self.types.lock().unwrap() = None;
        self
    }

    pub fn respond(&self, query: &str, result: PageResult) {
        self.pages.lock().unwrap().insert(query.to_string(), result);
    }

    pub fn fail(&self, query: &str) {
        self.failing.lock().unwrap().insert(query.to_string());
    }

    /// Hold the response to `query` until the returned sender fires.
    pub fn gate(&self, query: &str) -> oneshot::Sender<PageResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn types_calls(&self) -> usize {
        self.types_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogApi for ScriptedApi {
    async fn types(&self) -> Result<Vec<String>> {
        self.types_calls.fetch_add(1, Ordering::SeqCst);
        self.types
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CatalogError::NotFound("types unavailable".into()))
    }

    async fn cards(&self, query: &CardQuery) -> Result<PageResult> {
        let key = query.to_query_string();
        self.requests.lock().unwrap().push(key.clone());

        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(rx) = gate {
            return rx
                .await
                .map_err(|_| CatalogError::NotFound(format!("gate for {} dropped", key)));
        }
        if self.failing.lock().unwrap().contains(&key) {
            return Err(CatalogError::InvalidArgument(format!("scripted failure for {}", key)));
        }
        let page = self.pages.lock().unwrap().get(&key).cloned();
        Ok(page.unwrap_or_else(sample_page))
    }
}
