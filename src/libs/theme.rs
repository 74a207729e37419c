use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };
use strum::{ EnumIter, IntoEnumIterator };

/// daisyUI themes offered for the reference UI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Corporate,
    Dim,
    Nord,
}

impl ThemeMode {
    /// Convert to DaisyUI theme name
    pub fn to_daisy_theme(&self) -> String {
        format!("{:?}", self).to_lowercase()
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark | ThemeMode::Dim)
    }

    pub fn all() -> Vec<ThemeMode> {
        ThemeMode::iter().collect()
    }

    /// Next theme in the cycle, wrapping around
    pub fn next(&self) -> ThemeMode {
        let all = Self::all();
        let index = all
            .iter()
            .position(|theme| theme == self)
            .unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

// Global theme context
pub static THEME: GlobalSignal<ThemeMode> = Signal::global(ThemeMode::default);

pub fn use_theme() -> Signal<ThemeMode> {
    THEME.signal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daisy_names_are_lowercase() {
        assert_eq!(ThemeMode::Corporate.to_daisy_theme(), "corporate");
        assert_eq!(ThemeMode::Light.to_daisy_theme(), "light");
    }

    #[test]
    fn next_wraps_around() {
        let last = *ThemeMode::all().last().unwrap();
        assert_eq!(last.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
    }

    #[test]
    fn theme_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&ThemeMode::Nord).unwrap(), "\"Nord\"");
    }
}
