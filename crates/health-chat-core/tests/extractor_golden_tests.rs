//! Golden tests for the report extractor.
//!
//! These tests verify extraction against known report shapes.

use health_chat_core::extractor::ReportExtractor;

use proptest::prelude::*;

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    expected: &'static [(&'static str, &'static str)],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "hemoglobin-wbc-basic",
            input: "HEMOGLOBIN\nNormal range info\n13.5\nPage 1 of 2\nWBC COUNT\n7200",
            expected: &[("HEMOGLOBIN", "13.5"), ("WBC COUNT", "7200")],
        },
        GoldenCase {
            id: "name-cleanup",
            input: "TOTAL   CHOLESTEROL:  \n185",
            expected: &[("TOTAL CHOLESTEROL", "185")],
        },
        GoldenCase {
            id: "window-sixth-line-in",
            input: "HEMOGLOBIN\naaa bbb\nccc ddd\neee fff\nggg hhh\niii jjj\n13.5",
            expected: &[("HEMOGLOBIN", "13.5")],
        },
        GoldenCase {
            id: "window-seventh-line-out",
            input: "HEMOGLOBIN\naaa bbb\nccc ddd\neee fff\nggg hhh\niii jjj\nkkk lll\n13.5",
            expected: &[],
        },
        GoldenCase {
            id: "page-line-never-a-name",
            input: "Page\n13.5\nHEMOGLOBIN\n14.0",
            expected: &[("HEMOGLOBIN", "14.0")],
        },
        GoldenCase {
            id: "reference-range-any-case",
            input: "Reference Range\n12.0\nMCV\n88",
            expected: &[("MCV", "88")],
        },
        GoldenCase {
            id: "prose-not-a-name",
            input: "Please consult your doctor\n120",
            expected: &[],
        },
        GoldenCase {
            id: "order-preserved-across-noise",
            input: "ALPHA TEST\n10\n---\nPage 1\nBETA TEST\n20\nMethod: X\nGAMMA TEST\n30",
            expected: &[("ALPHA TEST", "10"), ("BETA TEST", "20"), ("GAMMA TEST", "30")],
        },
        GoldenCase {
            id: "dot-run-is-not-a-value",
            input: "CALCIUM\n...\n9.2",
            expected: &[("CALCIUM", "9.2")],
        },
        GoldenCase {
            id: "uppercase-ratio-exactly-half",
            input: "Hb:\n13.5",
            expected: &[("Hb", "13.5")],
        },
        GoldenCase {
            id: "no-lab-content",
            input: "Dear patient,\nyour appointment is confirmed.\nSee you soon.",
            expected: &[],
        },
        GoldenCase {
            id: "two-page-report-with-duplicate",
            input: "CITY HOSPITAL LABORATORY\n\
                    Lab ID: 2201\n\
                    Registered On: 01/08/2026 08:30\n\
                    Collected On: 01/08/2026 09:10\n\
                    Reported On: 02/08/2026 16:45\n\
                    Report Status: Final\n\
                    TEST PARAMETER RESULT UNIT REFERENCE RANGE\n\
                    HEMOGLOBIN\n\
                    13.5\n\
                    g/dL\n\
                    13.0 - 17.0\n\
                    PLATELET COUNT\n\
                    250000\n\
                    /cumm\n\
                    Page 1 of 2\n\
                    TEST PARAMETER RESULT UNIT REFERENCE RANGE\n\
                    HEMOGLOBIN\n\
                    13.5\n\
                    g/dL\n\
                    SERUM CREATININE:\n\
                    0.9\n\
                    mg/dL\n\
                    Page 2 of 2",
            expected: &[
                ("HEMOGLOBIN", "13.5"),
                ("PLATELET COUNT", "250000"),
                ("SERUM CREATININE", "0.9"),
            ],
        },
    ]
}

#[test]
fn test_golden_cases() {
    let extractor = ReportExtractor::new();

    for case in get_golden_cases() {
        let results: Vec<(String, String)> = extractor
            .extract(case.input)
            .into_iter()
            .map(|r| (r.test_name, r.value))
            .collect();

        let expected: Vec<(String, String)> = case
            .expected
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        assert_eq!(results, expected, "golden case failed: {}", case.id);
    }
}

#[test]
fn test_duplicate_report_yields_same_results_as_single() {
    let extractor = ReportExtractor::new();
    let report = "HEMOGLOBIN\n13.5\nWBC COUNT\n7200\nPage 1 of 1\n";
    let doubled = format!("{report}{report}");

    assert_eq!(extractor.extract(report), extractor.extract(&doubled));
}

proptest! {
    #[test]
    fn prop_extract_never_panics(input in any::<String>()) {
        let _ = ReportExtractor::new().extract(&input);
    }

    #[test]
    fn prop_results_keep_their_shape(
        lines in prop::collection::vec("[ -~]{0,14}", 0..40)
    ) {
        let input = lines.join("\n");

        for result in ReportExtractor::new().extract(&input) {
            // No partial records: names survive cleanup non-empty, values
            // keep the bare numeric shape they were matched with.
            prop_assert!(!result.test_name.is_empty());
            prop_assert!(result.value.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(result.value.chars().any(|c| c.is_ascii_digit()));
            prop_assert!(result.unit.is_empty());
            prop_assert!(result.reference_range.is_empty());
        }
    }

    #[test]
    fn prop_output_never_contains_duplicates(
        lines in prop::collection::vec("[ -~]{0,14}", 0..40)
    ) {
        let input = lines.join("\n");
        let results = ReportExtractor::new().extract(&input);

        let mut seen = std::collections::HashSet::new();
        for result in &results {
            prop_assert!(seen.insert(result.clone()), "duplicate record: {:?}", result);
        }
    }
}
