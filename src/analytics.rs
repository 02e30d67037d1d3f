// 📊 Analytics - placeholder dashboard numbers
//
// The totals are fixed placeholders. Per-category and per-condition counts
// come from a MetricsProvider: RandomMetrics draws a fresh number on every
// call, FixedMetrics returns whatever it was given.

use crate::config::AppConfig;
use crate::entities::{Category, ConditionGrade};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

pub const TOTAL_CARDS: u32 = 150;
pub const TOTAL_VALUE: f64 = 2500.0;

/// Exclusive upper bound for random placeholder counts
pub const RANDOM_COUNT_BOUND: u32 = 50;

// ============================================================================
// METRICS PROVIDERS
// ============================================================================

pub trait MetricsProvider {
    fn category_count(&self, category: &Category) -> u32;
    fn condition_count(&self, condition: &ConditionGrade) -> u32;
}

/// Uniform random counts in `0..bound`, drawn on every call
#[derive(Debug, Clone, Copy)]
pub struct RandomMetrics {
    bound: u32,
}

impl RandomMetrics {
    pub fn new() -> Self {
        Self::with_bound(RANDOM_COUNT_BOUND)
    }

    /// A bound of 0 is treated as 1 (every count is 0)
    pub fn with_bound(bound: u32) -> Self {
        RandomMetrics {
            bound: bound.max(1),
        }
    }

    fn draw(&self) -> u32 {
        rand::rng().random_range(0..self.bound)
    }
}

impl Default for RandomMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for RandomMetrics {
    fn category_count(&self, _category: &Category) -> u32 {
        self.draw()
    }

    fn condition_count(&self, _condition: &ConditionGrade) -> u32 {
        self.draw()
    }
}

/// Deterministic counts keyed by entity id
#[derive(Debug, Clone, Default)]
pub struct FixedMetrics {
    categories: HashMap<String, u32>,
    conditions: HashMap<String, u32>,
    fallback: u32,
}

impl FixedMetrics {
    /// Every count is `value`
    pub fn uniform(value: u32) -> Self {
        FixedMetrics {
            fallback: value,
            ..Default::default()
        }
    }

    pub fn with_category(mut self, id: &str, count: u32) -> Self {
        self.categories.insert(id.to_string(), count);
        self
    }

    pub fn with_condition(mut self, id: &str, count: u32) -> Self {
        self.conditions.insert(id.to_string(), count);
        self
    }
}

impl MetricsProvider for FixedMetrics {
    fn category_count(&self, category: &Category) -> u32 {
        self.categories
            .get(&category.id)
            .copied()
            .unwrap_or(self.fallback)
    }

    fn condition_count(&self, condition: &ConditionGrade) -> u32 {
        self.conditions
            .get(&condition.id)
            .copied()
            .unwrap_or(self.fallback)
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_cards: u32,
    pub total_value: f64,
}

impl Summary {
    pub fn placeholder() -> Self {
        Summary {
            total_cards: TOTAL_CARDS,
            total_value: TOTAL_VALUE,
        }
    }

    /// Zero when there are no cards
    pub fn average_value(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            self.total_value / self.total_cards as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub label: String,
    pub count: u32,
    /// Bar width: count / total cards * 100
    pub percent: f64,
}

impl ProgressRow {
    pub fn new(label: impl Into<String>, count: u32, total_cards: u32) -> Self {
        let percent = if total_cards == 0 {
            0.0
        } else {
            count as f64 / total_cards as f64 * 100.0
        };

        ProgressRow {
            label: label.into(),
            count,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

/// The three fixed "recent activity" entries
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Added",
            detail: "Charizard - Base Set (Near Mint)",
            when: "2 hours ago",
        },
        ActivityEntry {
            action: "Updated",
            detail: "Michael Jordan 1986 Fleer rookie card value",
            when: "1 day ago",
        },
        ActivityEntry {
            action: "Added",
            detail: "Black Lotus - Unlimited (Excellent)",
            when: "3 days ago",
        },
    ]
}

/// Everything the analytics view shows for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub summary: Summary,
    pub by_category: Vec<ProgressRow>,
    pub by_condition: Vec<ProgressRow>,
    pub recent_activity: Vec<ActivityEntry>,
}

impl AnalyticsSnapshot {
    /// Build one snapshot; with RandomMetrics two calls give different bars
    pub fn collect(config: &AppConfig, metrics: &dyn MetricsProvider) -> Self {
        let summary = Summary::placeholder();

        let by_category = config
            .categories
            .all()
            .iter()
            .map(|c| ProgressRow::new(c.name.clone(), metrics.category_count(c), summary.total_cards))
            .collect();

        let by_condition = config
            .conditions
            .all()
            .iter()
            .map(|g| ProgressRow::new(g.name.clone(), metrics.condition_count(g), summary.total_cards))
            .collect();

        AnalyticsSnapshot {
            summary,
            by_category,
            by_condition,
            recent_activity: recent_activity(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
