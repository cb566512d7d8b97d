// Tests for plain-text report generation and export

use chrono::NaiveDate;
use seolens_client::result::{AuditResult, CheckStatus};
use seolens_core::report::{generate_text_report, report_filename, save_report};
use seolens_core::view::AuditView;

fn sample_result() -> AuditResult {
    serde_json::from_value(serde_json::json!({
        "url": "https://example.com",
        "timestamp": "2026-08-06T14:30:00Z",
        "checks": {
            "title_tag": { "status": "passed", "details": "Title tag present with 45 characters" },
            "meta_description": {
                "status": "failed",
                "details": "Meta description missing",
                "issue": "No meta description tag found on the page",
                "recommendation": "Add a compelling meta description"
            },
            "h1_tag": { "status": "passed" },
            "keyword_density": { "status": "failed", "issue": "Primary keyword density is too low" },
            "broken_links": { "status": "passed", "details": "No broken links detected" }
        },
        "page_info": {
            "title_length": 45,
            "meta_description_length": 0,
            "word_count": 850,
            "images_count": 8,
            "load_time": 2.3
        }
    }))
    .expect("sample payload deserializes")
}

#[test]
fn test_report_banner_and_header_lines() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    let banner = "=".repeat(60);
    assert!(report.starts_with(&banner));
    assert!(report.contains("                    SEO AUDIT REPORT"));
    assert!(report.contains("URL: https://example.com"));
    assert!(report.contains("Date: Analyzed on August 6, 2026, 02:30 PM"));
    assert!(report.ends_with("Report generated by SEO Audit Tool\n"));
}

#[test]
fn test_report_score_line_uses_passed_over_total() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    // 3 passed, 2 failed out of the 5 recognized checks in the response.
    assert!(report.contains("Overall Score: 3/5"));
}

#[test]
fn test_report_glyphs_every_check_line() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    assert!(report.contains("✓ Title Tag: PASSED"));
    assert!(report.contains("✗ Meta Description: FAILED"));
    assert!(report.contains("✓ H1 Tag: PASSED"));
    assert!(report.contains("✗ Keyword Density: FAILED"));
    assert!(report.contains("✓ Broken Links: PASSED"));
}

#[test]
fn test_report_details_line_only_when_present() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    assert!(report.contains("   Details: Title tag present with 45 characters"));

    // h1_tag came back without details; its line has no Details follower.
    let after_h1 = report.split("✓ H1 Tag: PASSED\n").nth(1).unwrap();
    assert!(after_h1.starts_with('\n'));
}

#[test]
fn test_report_preserves_render_order() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    // One glyphed line per rendered tile, in the same order as rendered.
    let mut cursor = 0;
    for tile in &view.checks {
        let glyph = if tile.status == CheckStatus::Passed { '✓' } else { '✗' };
        let line = format!("{} {}:", glyph, tile.name);
        let position = report[cursor..]
            .find(&line)
            .unwrap_or_else(|| panic!("line not found in order: {}", line));
        cursor += position + line.len();
    }
}

#[test]
fn test_report_statistics_section() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    assert!(report.contains("PAGE STATISTICS:"));
    assert!(report.contains("Page Title Length: 45"));
    assert!(report.contains("Word Count: 850"));
    assert!(report.contains("Load Time: 2.3"));
    // Zero and absent values both export as N/A.
    assert!(report.contains("Meta Description Length: N/A"));
    assert!(report.contains("Internal Links: N/A"));
}

#[test]
fn test_report_filename_format() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    assert_eq!(report_filename(date), "seo-audit-2026-08-06.txt");

    let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    assert_eq!(report_filename(date), "seo-audit-2025-01-09.txt");
}

#[test]
fn test_save_report_writes_the_exact_content() {
    let view = AuditView::from_result(&sample_result());
    let report = generate_text_report(&view);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seo-audit-2026-08-06.txt");
    save_report(&report, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, report);
}
