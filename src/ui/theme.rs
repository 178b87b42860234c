use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette entries are stored as "#rrggbb" strings so themes stay plain
/// TOML; parsing to a terminal color happens at render time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub star: String,
}

fn user_theme_path(name: &str) -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join("deutschmeister")
            .join("themes")
            .join(format!("{name}.toml")),
    )
}

fn parse_theme(content: &str) -> Option<Theme> {
    toml::from_str(content).ok()
}

impl Theme {
    /// Resolve a theme by name: a file in the user themes directory wins
    /// over the bundled asset of the same name.
    pub fn load(name: &str) -> Option<Self> {
        if let Some(path) = user_theme_path(name) {
            if let Some(theme) = fs::read_to_string(&path).ok().and_then(|c| parse_theme(&c)) {
                return Some(theme);
            }
        }
        let asset = ThemeAssets::get(&format!("{name}.toml"))?;
        parse_theme(std::str::from_utf8(asset.data.as_ref()).ok()?)
    }

    #[allow(dead_code)] // exercised through the library target
    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(str::to_string))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("terminal-default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            muted: "#585b70".to_string(),
            accent: "#89b4fa".to_string(),
            accent_dim: "#45475a".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            bar_filled: "#89b4fa".to_string(),
            bar_empty: "#313244".to_string(),
            success: "#a6e3a1".to_string(),
            error: "#f38ba8".to_string(),
            warning: "#f9e2af".to_string(),
            star: "#f9e2af".to_string(),
        }
    }
}

/// "#rrggbb" to a terminal color; anything unparseable falls back to white
/// rather than failing the frame.
fn hex_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color::White;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        Err(_) => Color::White,
    }
}

macro_rules! color_accessors {
    ($($field:ident),* $(,)?) => {
        impl ThemeColors {
            $(pub fn $field(&self) -> Color {
                hex_color(&self.$field)
            })*
        }
    };
}

color_accessors!(
    bg, fg, muted, accent, accent_dim, border, header_bg, header_fg,
    bar_filled, bar_empty, success, error, warning, star,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_valid_and_invalid() {
        assert_eq!(hex_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(hex_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(hex_color("nope"), Color::White);
        assert_eq!(hex_color("#ffff"), Color::White);
    }

    #[test]
    fn bundled_themes_parse() {
        for name in Theme::available_themes() {
            assert!(Theme::load(&name).is_some(), "bundled theme {name} failed to parse");
        }
    }

    #[test]
    fn accessors_read_the_stored_hex() {
        let colors = ThemeColors::default();
        assert_eq!(colors.success(), hex_color("#a6e3a1"));
        assert_eq!(colors.error(), hex_color("#f38ba8"));
    }
}
