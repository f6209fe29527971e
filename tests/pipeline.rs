//! End-to-end run: JSON workbook text → loader → pipeline → report.

use calibra::analysis::pipeline::{self, PipelineOptions, SampleOutcome};
use calibra::data::loader::parse_json_workbook;
use calibra::report;

const WORKBOOK: &str = r#"{
    "Amostra1": [
        ["concentracao", "absorbancia"],
        [1.0, 2.0],
        [2.0, 4.0],
        [3.0, 6.0],
        ["replicata", 1.0, 2.0]
    ],
    "Amostra2": [
        [1.0, 3.1],
        [2.0, 4.9],
        [3.0, 7.0],
        [4.0, 9.1]
    ],
    "Amostra3": [
        [1.0, 5.0],
        [2.0, 5.0],
        [3.0, 5.0]
    ]
}"#;

fn expected_ids() -> Vec<String> {
    ["Amostra1", "Amostra2", "Amostra3", "Amostra4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn full_run_over_a_json_workbook() {
    let workbook = parse_json_workbook(WORKBOOK).unwrap();
    let result = pipeline::run(&expected_ids(), &workbook, &PipelineOptions::default());

    // One record per expected sample, in the expected order.
    let order: Vec<&str> = result.records.iter().map(|r| r.sample_id.as_str()).collect();
    assert_eq!(order, vec!["Amostra1", "Amostra2", "Amostra3", "Amostra4"]);

    // Amostra1 is a perfect line; the header row and the three-cell row
    // must not have disturbed the fit.
    assert_eq!(result.records[0].equation(), "y = 2.00x + 0.00");
    assert_eq!(result.records[0].r_squared_display(), "1.0000");

    // Amostra2 is noisy but clearly linear.
    let r2_noisy = match result.records[1].outcome {
        SampleOutcome::Fitted { r_squared, .. } => r_squared,
        ref other => panic!("Amostra2 should fit, got {other:?}"),
    };
    assert!(r2_noisy > 0.99 && r2_noisy <= 1.0);

    // Amostra3 has constant y, Amostra4 is absent.
    assert!(matches!(
        result.records[2].outcome,
        SampleOutcome::Degenerate { .. }
    ));
    assert_eq!(result.records[2].equation(), "N/A");
    assert_eq!(result.records[3].outcome, SampleOutcome::Missing);
    assert_eq!(result.records[3].r_squared_display(), "N/A");

    // Default mean divides by all four expected samples, the two
    // non-fitted ones contributing nothing to the numerator.
    assert_eq!(result.mean_r_squared, (1.0 + r2_noisy) / 4.0);
}

#[test]
fn reports_render_the_full_run() {
    let workbook = parse_json_workbook(WORKBOOK).unwrap();
    let result = pipeline::run(&expected_ids(), &workbook, &PipelineOptions::default());

    let mut text = Vec::new();
    report::write_text(&mut text, &result).unwrap();
    let text = String::from_utf8(text).unwrap();

    assert!(text.contains("Amostra1"));
    assert!(text.contains("y = 2.00x + 0.00"));
    assert!(text.contains("N/A"));
    assert!(text.contains("Mean R²:"));

    let mut json = Vec::new();
    report::write_json(&mut json, &result).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

    assert_eq!(value["records"].as_array().unwrap().len(), 4);
    assert_eq!(value["records"][3]["outcome"]["status"], "missing");
}
