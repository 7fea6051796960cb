/// A single todo entry. Owned exclusively by the in-memory list; items are
/// created on submission and only ever mutated through the finished toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Opaque unique ID, assigned by the list state
    pub id: String,
    pub title: String,
    /// Name of the category the item was captured under (may be empty)
    pub category: String,
    /// Hex color of that category at capture time, e.g. "#FB4196"
    pub category_color: Option<String>,
    pub finished: bool,
}

impl TodoItem {
    pub fn new(
        id: String,
        title: String,
        category: String,
        category_color: Option<String>,
    ) -> Self {
        TodoItem {
            id,
            title,
            category,
            category_color,
            finished: false,
        }
    }
}

/// A category tag: a name plus an optional display color.
///
/// Categories live in an ordered list. Uniqueness is expected but not
/// enforced on insertion; both the config loader and the suggestion-accept
/// path append to the same list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub name: String,
    /// Hex color string like "#44DDFF", parsed by the theme at render time
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            color: None,
        }
    }

    /// The starting categories used when the config defines none.
    pub fn starter_set() -> Vec<Category> {
        ["Work", "Schools", "Home", "Gym", "Personal"]
            .into_iter()
            .map(Category::new)
            .collect()
    }
}
