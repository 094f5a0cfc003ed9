use std::fs;
use std::path::PathBuf;

use super::MenuSource;
use crate::error::Result;
use crate::model::Menu;

/// Loads a menu from a JSON document on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for FileSource {
    fn load(&self) -> Result<Menu> {
        let content = fs::read_to_string(&self.path)?;
        let menu: Menu = serde_json::from_str(&content)?;
        menu.validate()?;
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpiceLevel;

    const SAMPLE: &str = r#"{
        "tabs": [
            {
                "id": "starters",
                "title": "Starters",
                "items": [
                    {"id": "soup", "name": "Tom Yum Soup", "dietary": "gluten-free", "spice": "hot"},
                    {"id": "bread", "name": "Flatbread"}
                ]
            },
            {
                "id": "mains",
                "title": "Mains",
                "items": [
                    {
                        "id": "lunch-combo",
                        "name": "Lunch Combo",
                        "price": "£14",
                        "combo_options": [
                            {"id": "opt-curry", "name": "Green Curry", "dietary": "vegan", "spice": "medium"},
                            {"id": "opt-pie", "name": "Chicken Pie"}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn loads_and_validates_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        fs::write(&path, SAMPLE).unwrap();

        let menu = FileSource::new(&path).load().unwrap();
        assert_eq!(menu.tabs.len(), 2);
        let soup = &menu.tab("starters").unwrap().items[0];
        assert!(soup.dietary.contains("gluten-free"));
        assert_eq!(soup.spice, Some(SpiceLevel::Hot));
        assert!(menu.tab("mains").unwrap().items[0].is_composite());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.json"));
        assert!(source.load().is_err());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        fs::write(&path, "{not json").unwrap();
        assert!(FileSource::new(&path).load().is_err());
    }

    #[test]
    fn invalid_menu_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        fs::write(&path, r#"{"tabs": []}"#).unwrap();
        assert!(FileSource::new(&path).load().is_err());
    }
}
