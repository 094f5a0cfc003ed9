//! # UI Events
//!
//! The input half of the view-binder contract: the four events a
//! presentation layer can deliver. Events also have a one-line text form
//! (`tab mains`, `filter vegan`, `spice hot`, `hash #starters`) used by the
//! CLI's replay scripts.

use std::fmt;
use std::str::FromStr;

use crate::model::SpiceLevel;

/// An input event from the view binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A tab button was clicked.
    TabClicked(String),
    /// A dietary filter button was clicked (may be the `all` button).
    DietaryFilterClicked(String),
    /// A spice filter button was clicked.
    SpiceFilterClicked(SpiceLevel),
    /// The location's URL fragment changed (load, back/forward navigation).
    LocationHashChanged(String),
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::TabClicked(id) => write!(f, "tab {}", id),
            UiEvent::DietaryFilterClicked(tag) => write!(f, "filter {}", tag),
            UiEvent::SpiceFilterClicked(level) => write!(f, "spice {}", level),
            UiEvent::LocationHashChanged(fragment) => write!(f, "hash {}", fragment),
        }
    }
}

impl FromStr for UiEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };
        match keyword {
            "tab" if !rest.is_empty() => Ok(UiEvent::TabClicked(rest.to_string())),
            "filter" if !rest.is_empty() => Ok(UiEvent::DietaryFilterClicked(rest.to_string())),
            "spice" if !rest.is_empty() => Ok(UiEvent::SpiceFilterClicked(rest.parse()?)),
            // A hash event with no argument models clearing the fragment.
            "hash" => Ok(UiEvent::LocationHashChanged(rest.to_string())),
            _ => Err(format!("Invalid event line: {}", line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_event() {
        assert_eq!(
            "tab mains".parse::<UiEvent>().unwrap(),
            UiEvent::TabClicked("mains".into())
        );
    }

    #[test]
    fn parses_filter_event() {
        assert_eq!(
            "filter gluten-free".parse::<UiEvent>().unwrap(),
            UiEvent::DietaryFilterClicked("gluten-free".into())
        );
    }

    #[test]
    fn parses_spice_event() {
        assert_eq!(
            "spice extra-hot".parse::<UiEvent>().unwrap(),
            UiEvent::SpiceFilterClicked(SpiceLevel::ExtraHot)
        );
    }

    #[test]
    fn parses_hash_event_with_and_without_fragment() {
        assert_eq!(
            "hash #starters".parse::<UiEvent>().unwrap(),
            UiEvent::LocationHashChanged("#starters".into())
        );
        assert_eq!(
            "hash".parse::<UiEvent>().unwrap(),
            UiEvent::LocationHashChanged(String::new())
        );
    }

    #[test]
    fn rejects_unknown_keyword_and_bad_spice() {
        assert!("scroll down".parse::<UiEvent>().is_err());
        assert!("spice volcanic".parse::<UiEvent>().is_err());
        assert!("tab".parse::<UiEvent>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let events = [
            UiEvent::TabClicked("mains".into()),
            UiEvent::DietaryFilterClicked("vegan".into()),
            UiEvent::SpiceFilterClicked(SpiceLevel::Hot),
            UiEvent::LocationHashChanged("#starters".into()),
        ];
        for event in events {
            assert_eq!(event.to_string().parse::<UiEvent>().unwrap(), event);
        }
    }
}
