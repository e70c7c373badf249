use crate::models::Color;

/// Default accent color of the editor chrome.
pub const DEFAULT_THEME_COLOR: &str = "#4896d5";

/// Ephemeral editor flags. Not part of the document and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppPreferences {
    dark_mode: bool,
    theme_color: Color,
    preview_mode: bool,
    show_edit: bool,
    show_edit_style: bool,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            preview_mode: false,
            show_edit: false,
            show_edit_style: false,
        }
    }
}

impl AppPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    pub fn set_theme_color(&mut self, color: impl Into<Color>) {
        self.theme_color = color.into();
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn set_preview_mode(&mut self, preview_mode: bool) {
        self.preview_mode = preview_mode;
    }

    /// Whether the content edit panel is open.
    pub fn show_edit(&self) -> bool {
        self.show_edit
    }

    pub fn set_show_edit(&mut self, show_edit: bool) {
        self.show_edit = show_edit;
    }

    /// Whether the style edit panel is open.
    pub fn show_edit_style(&self) -> bool {
        self.show_edit_style
    }

    pub fn set_show_edit_style(&mut self, show_edit_style: bool) {
        self.show_edit_style = show_edit_style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = AppPreferences::new();
        assert!(!prefs.dark_mode());
        assert!(!prefs.preview_mode());
        assert!(!prefs.show_edit());
        assert!(!prefs.show_edit_style());
        assert_eq!(prefs.theme_color(), "#4896d5");
    }

    #[test]
    fn test_setters_are_independent() {
        let mut prefs = AppPreferences::new();
        prefs.set_dark_mode(true);
        prefs.set_show_edit(true);
        prefs.set_theme_color("#ff0000");

        assert!(prefs.dark_mode());
        assert!(prefs.show_edit());
        assert!(!prefs.show_edit_style());
        assert!(!prefs.preview_mode());
        assert_eq!(prefs.theme_color(), "#ff0000");

        prefs.set_preview_mode(true);
        prefs.set_show_edit_style(true);
        prefs.set_dark_mode(false);
        assert!(prefs.preview_mode());
        assert!(prefs.show_edit_style());
        assert!(!prefs.dark_mode());
    }
}
