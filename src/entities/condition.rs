// 💎 Condition Grade Entity - Physical condition tiers, Mint through Poor
//
// Order matters: grades are listed best to worst, and the UI keeps that order.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONDITION GRADE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGrade {
    /// Stable slug identity (e.g. "near-mint")
    pub id: String,

    /// Display name (e.g. "Near Mint")
    pub name: String,

    /// What the grade means physically
    pub description: String,
}

impl ConditionGrade {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        ConditionGrade {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

// ============================================================================
// CONDITION REGISTRY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConditionRegistry {
    grades: Vec<ConditionGrade>,
}

impl ConditionRegistry {
    pub fn from_grades(grades: Vec<ConditionGrade>) -> Self {
        ConditionRegistry { grades }
    }

    /// The six standard grades, best first
    pub fn with_defaults() -> Self {
        Self::from_grades(vec![
            ConditionGrade::new(
                "mint",
                "Mint",
                "Perfect condition with no visible flaws, sharp corners and centered print",
            ),
            ConditionGrade::new(
                "near-mint",
                "Near Mint",
                "Nearly perfect with only minor imperfections visible on close inspection",
            ),
            ConditionGrade::new(
                "excellent",
                "Excellent",
                "Light wear such as slight corner rounding or minor surface scratches",
            ),
            ConditionGrade::new(
                "good",
                "Good",
                "Noticeable wear including edge whitening, scuffing or light creases",
            ),
            ConditionGrade::new(
                "fair",
                "Fair",
                "Heavy wear with creases, staining or rounded corners",
            ),
            ConditionGrade::new(
                "poor",
                "Poor",
                "Severe damage such as tears, water damage or missing pieces",
            ),
        ])
    }

    pub fn all(&self) -> &[ConditionGrade] {
        &self.grades
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ConditionGrade> {
        self.grades.iter().find(|g| g.id == id)
    }

    pub fn count(&self) -> usize {
        self.grades.len()
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grades_mint_through_poor() {
        let registry = ConditionRegistry::with_defaults();

        assert_eq!(registry.count(), 6);

        let names: Vec<&str> = registry.all().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mint", "Near Mint", "Excellent", "Good", "Fair", "Poor"]
        );
    }

    #[test]
    fn test_every_grade_has_description() {
        let registry = ConditionRegistry::with_defaults();

        for grade in registry.all() {
            assert!(!grade.description.is_empty(), "{} has no description", grade.id);
        }
    }

    #[test]
    fn test_find_by_id() {
        let registry = ConditionRegistry::with_defaults();

        assert_eq!(registry.find_by_id("near-mint").unwrap().name, "Near Mint");
        assert!(registry.find_by_id("pristine").is_none());
    }
}
