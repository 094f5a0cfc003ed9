//! # Menu Content Model
//!
//! This module defines the static content of a menu page: [`Menu`], [`Tab`],
//! [`MenuItem`], and [`ComboOption`]. These are loaded once from a menu
//! document and never mutated afterwards—all interactive state lives in
//! [`crate::state`].
//!
//! ## Dietary Tags
//!
//! Menu documents carry dietary tags the way the page markup did: as a
//! free-form comma-delimited string (`"dietary": "vegan, gluten-free"`).
//! Parsing trims each entry and discards empty or whitespace-only entries,
//! so `"vegan,, ,gluten-free"` yields exactly two tags. In memory the tags
//! are a set; filtering uses set intersection.
//!
//! ## Spice Levels
//!
//! Spice is a small fixed enumeration with kebab-case wire names. An item
//! without an explicit spice level has `spice: None` and matches only when
//! no spice filter is active—there is no implicit default level.
//!
//! ## Composite Items
//!
//! An item whose document carries a `combo_options` key is a *combo*: a
//! fixed-price entry bundling several selectable options. For filtering
//! purposes a combo's own dietary/spice attributes are irrelevant; only its
//! options matter (see [`crate::filter`]). A combo with an empty options
//! list is still a combo, and one that never matches anything.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{CartaError, Result};

/// Spice level of an item, exact-match only—no ordering or severity
/// comparison is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
    ExtraHot,
}

impl SpiceLevel {
    /// Every level, in menu order. This is the spice button universe.
    pub const ALL: [SpiceLevel; 4] = [
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Hot,
        SpiceLevel::ExtraHot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
            SpiceLevel::ExtraHot => "extra-hot",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mild" => Ok(SpiceLevel::Mild),
            "medium" => Ok(SpiceLevel::Medium),
            "hot" => Ok(SpiceLevel::Hot),
            "extra-hot" => Ok(SpiceLevel::ExtraHot),
            other => Err(format!("Unknown spice level: {}", other)),
        }
    }
}

/// Parses a free-form comma-delimited tag list, dropping empty and
/// whitespace-only entries.
pub fn parse_dietary_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn serialize_tags<S: Serializer>(
    tags: &BTreeSet<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let joined = tags.iter().cloned().collect::<Vec<_>>().join(", ");
    serializer.serialize_str(&joined)
}

/// A selectable option inside a combo item. Same filterable attributes as a
/// plain item, no further nesting.
#[derive(Debug, Clone, Serialize)]
pub struct ComboOption {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_tags")]
    pub dietary: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice: Option<SpiceLevel>,
}

// Custom deserializer: dietary arrives as a comma-delimited string (or is
// missing entirely), matching the page markup's data attributes.
impl<'de> Deserialize<'de> for ComboOption {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ComboOptionHelper::deserialize(deserializer)?;
        Ok(ComboOption {
            id: helper.id,
            name: helper.name,
            dietary: parse_dietary_tags(helper.dietary.as_deref().unwrap_or("")),
            spice: helper.spice,
        })
    }
}

#[derive(Deserialize)]
struct ComboOptionHelper {
    id: String,
    name: String,
    #[serde(default)]
    dietary: Option<String>,
    #[serde(default)]
    spice: Option<SpiceLevel>,
}

/// A single menu entry. Composite iff `combo_options` is present.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(serialize_with = "serialize_tags")]
    pub dietary: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice: Option<SpiceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_options: Option<Vec<ComboOption>>,
}

impl<'de> Deserialize<'de> for MenuItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = MenuItemHelper::deserialize(deserializer)?;
        Ok(MenuItem {
            id: helper.id,
            name: helper.name,
            price: helper.price,
            dietary: parse_dietary_tags(helper.dietary.as_deref().unwrap_or("")),
            spice: helper.spice,
            combo_options: helper.combo_options,
        })
    }
}

#[derive(Deserialize)]
struct MenuItemHelper {
    id: String,
    name: String,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    dietary: Option<String>,
    #[serde(default)]
    spice: Option<SpiceLevel>,
    #[serde(default)]
    combo_options: Option<Vec<ComboOption>>,
}

impl MenuItem {
    pub fn is_composite(&self) -> bool {
        self.combo_options.is_some()
    }
}

/// A named content pane. Exactly one tab is active at a time; which one is
/// session state, not content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Tab {
    /// Display title, falling back to the id when the document omits one.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// The whole menu: an ordered, non-empty list of tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub tabs: Vec<Tab>,
}

impl Menu {
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn first_tab(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    /// Union of every dietary tag used anywhere in the menu, including combo
    /// options. This is the dietary filter button universe.
    pub fn dietary_tags(&self) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();
        for tab in &self.tabs {
            for item in &tab.items {
                tags.extend(item.dietary.iter().cloned());
                for option in item.combo_options.iter().flatten() {
                    tags.extend(option.dietary.iter().cloned());
                }
            }
        }
        tags
    }

    /// Validates structural requirements: at least one tab, unique tab ids,
    /// unique item ids across the menu, unique option ids within each item.
    pub fn validate(&self) -> Result<()> {
        if self.tabs.is_empty() {
            return Err(CartaError::Menu("menu has no tabs".to_string()));
        }

        let mut tab_ids = BTreeSet::new();
        let mut item_ids = BTreeSet::new();
        for tab in &self.tabs {
            if !tab_ids.insert(tab.id.as_str()) {
                return Err(CartaError::Menu(format!("duplicate tab id: {}", tab.id)));
            }
            for item in &tab.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CartaError::Menu(format!("duplicate item id: {}", item.id)));
                }
                let mut option_ids = BTreeSet::new();
                for option in item.combo_options.iter().flatten() {
                    if !option_ids.insert(option.id.as_str()) {
                        return Err(CartaError::Menu(format!(
                            "duplicate combo option id in item {}: {}",
                            item.id, option.id
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            price: None,
            dietary: BTreeSet::new(),
            spice: None,
            combo_options: None,
        }
    }

    #[test]
    fn parse_tags_discards_empty_entries() {
        let tags = parse_dietary_tags("vegan,, ,gluten-free");
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("vegan"));
        assert!(tags.contains("gluten-free"));
    }

    #[test]
    fn parse_tags_trims_whitespace() {
        let tags = parse_dietary_tags("  vegan ,  dairy-free  ");
        assert!(tags.contains("vegan"));
        assert!(tags.contains("dairy-free"));
    }

    #[test]
    fn parse_tags_empty_string_is_empty_set() {
        assert!(parse_dietary_tags("").is_empty());
        assert!(parse_dietary_tags("   ").is_empty());
    }

    #[test]
    fn spice_level_roundtrip() {
        for level in SpiceLevel::ALL {
            assert_eq!(level.as_str().parse::<SpiceLevel>().unwrap(), level);
        }
    }

    #[test]
    fn spice_level_unknown_name() {
        assert!("volcanic".parse::<SpiceLevel>().is_err());
    }

    #[test]
    fn deserialize_item_with_string_dietary() {
        let json = r#"{
            "id": "green-curry",
            "name": "Green Curry",
            "price": "£12.50",
            "dietary": "vegan, gluten-free",
            "spice": "hot"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "green-curry");
        assert_eq!(item.dietary.len(), 2);
        assert_eq!(item.spice, Some(SpiceLevel::Hot));
        assert!(!item.is_composite());
    }

    #[test]
    fn deserialize_item_defaults() {
        let json = r#"{"id": "bread", "name": "Bread"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.dietary.is_empty());
        assert_eq!(item.spice, None);
        assert!(item.combo_options.is_none());
    }

    #[test]
    fn deserialize_combo_item() {
        let json = r#"{
            "id": "lunch-combo",
            "name": "Lunch Combo",
            "combo_options": [
                {"id": "opt-1", "name": "Tofu Pad Thai", "dietary": "vegan"},
                {"id": "opt-2", "name": "Beef Rendang", "spice": "extra-hot"}
            ]
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.is_composite());
        let options = item.combo_options.unwrap();
        assert_eq!(options.len(), 2);
        assert!(options[0].dietary.contains("vegan"));
        assert_eq!(options[1].spice, Some(SpiceLevel::ExtraHot));
    }

    #[test]
    fn explicit_empty_options_list_is_still_composite() {
        let json = r#"{"id": "combo", "name": "Combo", "combo_options": []}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.is_composite());
        assert!(item.combo_options.unwrap().is_empty());
    }

    #[test]
    fn deserialize_rejects_unknown_spice() {
        let json = r#"{"id": "x", "name": "X", "spice": "volcanic"}"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn validate_rejects_empty_menu() {
        let menu = Menu { tabs: Vec::new() };
        assert!(menu.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_tab_ids() {
        let menu = Menu {
            tabs: vec![
                Tab {
                    id: "mains".into(),
                    title: String::new(),
                    items: Vec::new(),
                },
                Tab {
                    id: "mains".into(),
                    title: String::new(),
                    items: Vec::new(),
                },
            ],
        };
        assert!(menu.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_item_ids_across_tabs() {
        let menu = Menu {
            tabs: vec![
                Tab {
                    id: "starters".into(),
                    title: String::new(),
                    items: vec![item("soup")],
                },
                Tab {
                    id: "mains".into(),
                    title: String::new(),
                    items: vec![item("soup")],
                },
            ],
        };
        assert!(menu.validate().is_err());
    }

    #[test]
    fn dietary_tags_union_includes_combo_options() {
        let mut combo = item("combo");
        combo.combo_options = Some(vec![ComboOption {
            id: "opt".into(),
            name: "Opt".into(),
            dietary: parse_dietary_tags("nut-free"),
            spice: None,
        }]);
        let mut plain = item("plain");
        plain.dietary = parse_dietary_tags("vegan");
        let menu = Menu {
            tabs: vec![Tab {
                id: "mains".into(),
                title: String::new(),
                items: vec![plain, combo],
            }],
        };
        let tags = menu.dietary_tags();
        assert!(tags.contains("vegan"));
        assert!(tags.contains("nut-free"));
    }

    #[test]
    fn tab_display_title_falls_back_to_id() {
        let tab = Tab {
            id: "happy-hour".into(),
            title: String::new(),
            items: Vec::new(),
        };
        assert_eq!(tab.display_title(), "happy-hour");
    }
}
