use std::fmt;
use std::str::FromStr;

/// Keys the navigator reacts to, named after `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Tab,
    Enter,
    Space,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "ArrowRight" => Self::ArrowRight,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowUp" => Self::ArrowUp,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::Enter => "Enter",
            Self::Space => "Space",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowUp => "ArrowUp",
            Self::Escape => "Escape",
            Self::Other => "Other",
        }
    }
}

/// A single key press as seen by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    pub shift: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: NavKey, shift: bool) -> Self {
        Self { key, shift }
    }

    #[must_use]
    pub const fn plain(key: NavKey) -> Self {
        Self::new(key, false)
    }

    /// Build from the `key` and `shiftKey` fields of a DOM keyboard event.
    #[must_use]
    pub fn from_dom(key: &str, shift: bool) -> Self {
        Self::new(NavKey::from_dom_key(key), shift)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "Shift+{}", self.key.name())
        } else {
            f.write_str(self.key.name())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key chord: {0:?}")]
pub struct ParseChordError(String);

/// Parses chords such as `"Tab"`, `"Shift+Tab"`, or `"Space"`.
impl FromStr for KeyPress {
    type Err = ParseChordError;

    fn from_str(chord: &str) -> Result<Self, Self::Err> {
        let trimmed = chord.trim();
        let (shift, name) = match trimmed.split_once('+') {
            Some((modifier, name)) if modifier.eq_ignore_ascii_case("shift") => (true, name),
            Some(_) => return Err(ParseChordError(chord.to_string())),
            None => (false, trimmed),
        };
        let key = match name {
            "Space" => NavKey::Space,
            other => NavKey::from_dom_key(other),
        };
        if key == NavKey::Other {
            return Err(ParseChordError(chord.to_string()));
        }
        Ok(Self::new(key, shift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_nav_keys() {
        assert_eq!(NavKey::from_dom_key(" "), NavKey::Space);
        assert_eq!(NavKey::from_dom_key("Spacebar"), NavKey::Space);
        assert_eq!(NavKey::from_dom_key("Esc"), NavKey::Escape);
        assert_eq!(NavKey::from_dom_key("ArrowUp"), NavKey::ArrowUp);
        assert_eq!(NavKey::from_dom_key("a"), NavKey::Other);
        assert_eq!(NavKey::from_dom_key("tab"), NavKey::Other);
    }

    #[test]
    fn chords_parse_with_optional_shift() {
        let press: KeyPress = "Shift+Tab".parse().unwrap();
        assert_eq!(press, KeyPress::new(NavKey::Tab, true));
        let press: KeyPress = "Space".parse().unwrap();
        assert_eq!(press, KeyPress::plain(NavKey::Space));
        assert!("Ctrl+Tab".parse::<KeyPress>().is_err());
        assert!("F5".parse::<KeyPress>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let press = KeyPress::new(NavKey::ArrowLeft, true);
        assert_eq!(press.to_string(), "Shift+ArrowLeft");
        assert_eq!(press.to_string().parse::<KeyPress>().unwrap(), press);
    }
}
