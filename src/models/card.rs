use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card — one catalog entry as returned by the cards endpoint
// ---------------------------------------------------------------------------

/// A single trading card.
///
/// The list endpoint and the detail view share this shape. Fields the
/// payload omits come back as `None` or an empty list, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: CardImages,
    pub rarity: Option<String>,
    pub supertype: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub hp: Option<String>,
    pub flavor_text: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub weaknesses: Vec<TypeModifier>,
    #[serde(default)]
    pub resistances: Vec<TypeModifier>,
    pub number: Option<String>,
    pub artist: Option<String>,
}

impl Card {
    /// First type tag, as shown on a list tile.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn first_weakness(&self) -> Option<&str> {
        self.weaknesses.first().map(|w| w.type_field.as_str())
    }

    pub fn first_resistance(&self) -> Option<&str> {
        self.resistances.first().map(|r| r.type_field.as_str())
    }

    pub fn first_ability(&self) -> Option<&str> {
        self.abilities.first().map(|a| a.name.as_str())
    }

    pub fn first_attack(&self) -> Option<&str> {
        self.attacks.first().map(|a| a.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardImages {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ability {
    pub name: String,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    pub converted_energy_cost: Option<u32>,
    pub damage: Option<String>,
    pub text: Option<String>,
}

/// A weakness or resistance entry: the type it applies to and its modifier
/// (e.g. `"×2"`, `"-30"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub type_field: String,
    pub value: Option<String>,
}
