use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Configuration from quickdo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Starting categories; falls back to the built-in starter set when empty
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl AppConfig {
    /// The configured categories, with per-category color overrides from
    /// `[ui.category_colors]` applied, or the starter set if none are listed.
    pub fn starting_categories(&self) -> Vec<Category> {
        let mut categories = if self.categories.is_empty() {
            Category::starter_set()
        } else {
            self.categories.clone()
        };
        for category in &mut categories {
            if let Some(color) = self.ui.category_colors.get(&category.name) {
                category.color = Some(color.clone());
            }
        }
        categories
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Milliseconds of input quiescence before suggestion-mode evaluation runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, keyed by theme field name ("#RRGGBB" values)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-category colors, keyed by category name
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.input.debounce_ms, 300);
        assert!(config.ui.colors.is_empty());
        assert!(config.categories.is_empty());
        let categories = config.starting_categories();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].name, "Work");
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
[input]
debounce_ms = 150

[ui.colors]
highlight = "#FF00FF"

[ui.category_colors]
Deep = "#112233"

[[categories]]
name = "Deep"

[[categories]]
name = "Shallow"
color = "#AABBCC"
"##,
        )
        .unwrap();

        assert_eq!(config.input.debounce_ms, 150);
        assert_eq!(config.ui.colors["highlight"], "#FF00FF");

        let categories = config.starting_categories();
        assert_eq!(categories.len(), 2);
        // Color override from [ui.category_colors] wins over the inline color
        assert_eq!(categories[0].color.as_deref(), Some("#112233"));
        assert_eq!(categories[1].color.as_deref(), Some("#AABBCC"));
    }
}
