use board_core::prefs::ThemePreference;

/// ANSI styling for board output. The light palette is plain text; dark
/// terminals get accented column headers.
#[derive(Debug, Clone)]
pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn accentize(&self, text: &str) -> String {
        if self.accent.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.accent, text, self.reset)
        }
    }

    pub fn mutedize(&self, text: &str) -> String {
        if self.muted.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.muted, text, self.reset)
        }
    }
}

pub fn palette_for_theme(theme: ThemePreference) -> Palette {
    match theme {
        ThemePreference::Light => Palette {
            accent: "",
            muted: "",
            reset: "",
        },
        ThemePreference::Dark => Palette {
            accent: "\x1b[38;5;81m",
            muted: "\x1b[38;5;245m",
            reset: "\x1b[0m",
        },
    }
}
