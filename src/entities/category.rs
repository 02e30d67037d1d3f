// 🏷️ Category Entity - Top-level card groupings with their subcategories
//
// Categories are static configuration: built once at startup, never mutated.
// Ids are stable slugs used in routes (/collections/{id}) and form values.

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

/// A top-level grouping of cards (e.g. Sports, Pokémon)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable slug identity (e.g. "pokemon")
    pub id: String,

    /// Display name (e.g. "Pokémon")
    pub name: String,

    /// Ordered subcategory names
    pub subcategories: Vec<String>,

    /// Optional icon for UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: &str, name: &str, subcategories: &[&str]) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
            icon: None,
        }
    }

    /// Create category with an icon
    pub fn with_icon(id: &str, name: &str, subcategories: &[&str], icon: &str) -> Self {
        let mut category = Self::new(id, name, subcategories);
        category.icon = Some(icon.to_string());
        category
    }

    /// Check if a subcategory belongs to this category (exact match)
    pub fn has_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories.iter().any(|s| s == subcategory)
    }

    /// Name prefixed with the icon, if any
    pub fn display_name(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// CATEGORY REGISTRY
// ============================================================================

/// Registry of all configured categories
///
/// Read-only after construction: there is no `register` once the registry
/// has been handed to the application config.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry from an explicit list (order is preserved)
    pub fn from_categories(categories: Vec<Category>) -> Self {
        CategoryRegistry { categories }
    }

    /// Create registry with the three default categories
    ///
    /// Structure:
    /// - Sports: Baseball, Basketball, Football, Hockey, Soccer
    /// - Pokémon: Base Set, Jungle, Fossil, Team Rocket, Modern
    /// - Magic: The Gathering: Alpha, Beta, Unlimited, Revised, Modern
    pub fn with_defaults() -> Self {
        Self::from_categories(vec![
            Category::with_icon(
                "sports",
                "Sports",
                &["Baseball", "Basketball", "Football", "Hockey", "Soccer"],
                "🏆",
            ),
            Category::with_icon(
                "pokemon",
                "Pokémon",
                &["Base Set", "Jungle", "Fossil", "Team Rocket", "Modern"],
                "⚡",
            ),
            Category::with_icon(
                "mtg",
                "Magic: The Gathering",
                &["Alpha", "Beta", "Unlimited", "Revised", "Modern"],
                "🧙",
            ),
        ])
    }

    /// All categories in configured order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Find category by id (exact match)
    pub fn find_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        let lower_name = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == lower_name)
    }

    /// Subcategories of a category; empty for an unknown id
    pub fn subcategories_of(&self, id: &str) -> &[String] {
        self.find_by_id(id)
            .map(|c| c.subcategories.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self) -> usize {
        self.categories.len()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================
