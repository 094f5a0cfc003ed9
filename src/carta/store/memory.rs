use super::MenuSource;
use crate::error::Result;
use crate::model::Menu;

/// In-memory menu source for testing and development.
pub struct InMemorySource {
    menu: Menu,
}

impl InMemorySource {
    pub fn new(menu: Menu) -> Self {
        Self { menu }
    }
}

impl MenuSource for InMemorySource {
    fn load(&self) -> Result<Menu> {
        self.menu.validate()?;
        Ok(self.menu.clone())
    }
}

// --- Test Fixtures ---

/// Canned menus used across unit and integration tests.
pub mod fixtures {
    use super::*;
    use crate::model::{ComboOption, MenuItem, SpiceLevel, Tab};
    use std::collections::BTreeSet;

    pub fn plain_item(id: &str, name: &str, dietary: &str, spice: Option<SpiceLevel>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: None,
            dietary: crate::model::parse_dietary_tags(dietary),
            spice,
            combo_options: None,
        }
    }

    pub fn combo_option(id: &str, name: &str, dietary: &str, spice: Option<SpiceLevel>) -> ComboOption {
        ComboOption {
            id: id.to_string(),
            name: name.to_string(),
            dietary: crate::model::parse_dietary_tags(dietary),
            spice,
        }
    }

    /// A representative menu: three tabs, one combo, one reserved tab
    /// (`drinks`) under the default config.
    pub fn sample_menu() -> Menu {
        Menu {
            tabs: vec![
                Tab {
                    id: "starters".to_string(),
                    title: "Starters".to_string(),
                    items: vec![
                        plain_item("soup", "Tom Yum Soup", "gluten-free", Some(SpiceLevel::Hot)),
                        plain_item("bread", "Flatbread", "", None),
                        plain_item("rolls", "Spring Rolls", "vegan", Some(SpiceLevel::Mild)),
                    ],
                },
                Tab {
                    id: "mains".to_string(),
                    title: "Mains".to_string(),
                    items: vec![
                        plain_item(
                            "green-curry",
                            "Green Curry",
                            "vegan, gluten-free",
                            Some(SpiceLevel::Hot),
                        ),
                        plain_item("pad-thai", "Pad Thai", "", None),
                        MenuItem {
                            id: "lunch-combo".to_string(),
                            name: "Lunch Combo".to_string(),
                            price: Some("£14".to_string()),
                            dietary: BTreeSet::new(),
                            spice: None,
                            combo_options: Some(vec![
                                combo_option("opt-tofu", "Tofu Stir Fry", "vegan", None),
                                combo_option(
                                    "opt-beef",
                                    "Beef Rendang",
                                    "",
                                    Some(SpiceLevel::ExtraHot),
                                ),
                                combo_option("opt-pie", "Chicken Pie", "", None),
                            ]),
                        },
                    ],
                },
                Tab {
                    id: "drinks".to_string(),
                    title: "Drinks".to_string(),
                    items: vec![plain_item("iced-tea", "Iced Tea", "", None)],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_fixture_menu() {
        let source = InMemorySource::new(fixtures::sample_menu());
        let menu = source.load().unwrap();
        assert_eq!(menu.first_tab().unwrap().id, "starters");
        assert!(menu.tab("mains").unwrap().items[2].is_composite());
    }

    #[test]
    fn rejects_invalid_menu() {
        let source = InMemorySource::new(Menu { tabs: Vec::new() });
        assert!(source.load().is_err());
    }
}
