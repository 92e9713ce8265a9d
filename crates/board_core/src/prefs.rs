//! Theme preference, stored as a raw string in its own slot next to the
//! task slot. Not board data; it just shares the storage abstraction.

use crate::storage::Slot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Lenient: case and separator variants are accepted, anything else
    /// is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut cleaned = String::new();
        for ch in raw.trim().chars() {
            if ch.is_ascii_alphanumeric() {
                cleaned.push(ch.to_ascii_lowercase());
            }
        }

        match cleaned.as_str() {
            "light" | "lightmode" => Some(Self::Light),
            "dark" | "darkmode" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Read the preference, defaulting to light when the slot is absent,
/// unreadable, or holds an unknown value.
pub fn load_theme<S: Slot>(slot: &S) -> ThemePreference {
    match slot.read() {
        Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_default(),
        _ => ThemePreference::default(),
    }
}

/// Write the preference. Best-effort like every other save.
pub fn save_theme<S: Slot>(slot: &S, theme: ThemePreference) {
    if let Err(err) = slot.write(theme.as_str()) {
        eprintln!("failed to write theme preference: {err}");
    }
}
