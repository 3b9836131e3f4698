use crate::{Analysis, AnalysisSource};

use std::collections::HashMap;

#[test]
fn test_mock_analysis_sums_to_one() {
    let mock = Analysis::mock();
    let total: f64 = mock.scores.iter().map(|s| s.weight).sum();

    assert_eq!(mock.source, AnalysisSource::Mock);
    assert_eq!(mock.scores.len(), 6);
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(mock.scores[0].label, "Take a walk");
}

#[test]
fn test_from_weights_orders_by_weight_descending() {
    let weights = HashMap::from([
        ("White noise".to_string(), 0.2),
        ("Take a walk".to_string(), 0.5),
        ("Deep breathing exercise".to_string(), 0.3),
    ]);

    let analysis = Analysis::from_weights(weights);
    let labels: Vec<&str> = analysis.scores.iter().map(|s| s.label.as_str()).collect();

    assert_eq!(analysis.source, AnalysisSource::Backend);
    assert_eq!(
        labels,
        vec!["Take a walk", "Deep breathing exercise", "White noise"]
    );
    assert!(analysis.contains("White noise"));
    assert!(!analysis.contains("Yoga"));
}
