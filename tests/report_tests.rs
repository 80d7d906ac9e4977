//! Integration tests for report rendering.

use pagewatch::reports::{create_reporter, ReportMetadata, SummaryReporter};
use pagewatch::{GeneratorConfig, PageDiff, ReportFormat, ReportGenerator, SiteState};

fn sample_diff() -> PageDiff {
    PageDiff {
        appeared: vec![
            "https://dns-name/blog/new".to_string(),
            "https://dns-name/contact".to_string(),
        ],
        disappeared: vec!["https://dns-name/old-promo".to_string()],
        changed: vec!["https://dns-name/index".to_string()],
        unchanged: Vec::new(),
    }
}

#[test]
fn test_text_report_layout() {
    let report = SummaryReporter::new()
        .generate(&sample_diff(), &ReportMetadata::new("Site Owner"))
        .unwrap();

    insta::assert_snapshot!(report, @r"
    Hello, Site Owner

    Over the last day the following changes happened on your sites:

    Disappeared pages: {
    https://dns-name/old-promo
    }
    Appeared pages: {
    https://dns-name/blog/new
    https://dns-name/contact
    }
    Changed pages: {
    https://dns-name/index
    }

    Regards,
    automated monitoring system.
    ");
}

#[test]
fn test_json_report_from_live_state() {
    let state = SiteState::new(GeneratorConfig::compact().with_seed(21)).unwrap();
    let first = state.add_page().unwrap();
    state.add_page().unwrap();
    state.commit_snapshot();
    state.remove_page(&first);

    let snapshot = state.previous_snapshot().unwrap();
    let metadata = ReportMetadata::new("Ops").with_baseline(&snapshot);
    let output = create_reporter(ReportFormat::Json)
        .generate(&state.diff().unwrap(), &metadata)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["metadata"]["recipient"], "Ops");
    assert_eq!(value["metadata"]["baseline_sequence"], 1);
    assert!(value["metadata"]["baseline_committed_at"].is_string());
    assert_eq!(value["disappeared"][0], first.as_str());
    assert_eq!(value["summary"]["disappeared"], 1);
    assert_eq!(value["summary"]["appeared"], 0);
}

#[test]
fn test_text_report_has_no_trailing_newline() {
    let report = create_reporter(ReportFormat::Text)
        .generate(&PageDiff::default(), &ReportMetadata::new("Ops"))
        .unwrap();
    assert!(!report.ends_with('\n'));
}
