use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mock weights shown when no real analysis is available.
pub const MOCK_ANALYSIS: &[(&str, f64)] = &[
    ("Take a walk", 0.85),
    ("Listen to calming music", 0.06),
    ("Deep breathing exercise", 0.03),
    ("Mindfulness meditation", 0.03),
    ("Progressive muscle relaxation", 0.02),
    ("White noise", 0.01),
];

/// Where an analysis came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Backend,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionScore {
    pub label: String,
    pub weight: f64,
}

/// Intervention recommendations, highest weight first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub source: AnalysisSource,
    pub scores: Vec<InterventionScore>,
}

impl Analysis {
    pub fn mock() -> Self {
        Self {
            source: AnalysisSource::Mock,
            scores: MOCK_ANALYSIS
                .iter()
                .map(|(label, weight)| InterventionScore {
                    label: (*label).to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    /// Build from the backend's `{label: weight}` mapping.
    pub fn from_weights(weights: HashMap<String, f64>) -> Self {
        let mut scores: Vec<InterventionScore> = weights
            .into_iter()
            .map(|(label, weight)| InterventionScore { label, weight })
            .collect();
        // Ties break alphabetically so output is stable
        scores.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.label.cmp(&b.label))
        });

        Self {
            source: AnalysisSource::Backend,
            scores,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.scores.iter().any(|s| s.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
