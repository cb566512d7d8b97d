// Plain-text report generation from the retained view model. The export
// reads the same view the renderer was given, never the rendered output, so
// the two cannot drift apart.

use crate::view::AuditView;
use chrono::NaiveDate;
use seolens_client::result::CheckStatus;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PASSED_GLYPH: char = '✓';
const FAILED_GLYPH: char = '✗';

pub fn generate_text_report(view: &AuditView) -> String {
    let mut report = String::new();

    // Header
    report.push_str(&"=".repeat(60));
    report.push('\n');
    report.push_str("                    SEO AUDIT REPORT\n");
    report.push_str(&"=".repeat(60));
    report.push_str("\n\n");

    report.push_str(&format!("URL: {}\n", view.url));
    report.push_str(&format!("Date: Analyzed on {}\n", view.analyzed_at));
    report.push_str(&format!(
        "Overall Score: {}/{}\n\n",
        view.score.passed,
        view.score.total()
    ));

    report.push_str("SEO CHECK RESULTS:\n");
    report.push_str(&"-".repeat(30));
    report.push('\n');

    for tile in &view.checks {
        let (glyph, status) = match tile.status {
            CheckStatus::Passed => (PASSED_GLYPH, "PASSED"),
            CheckStatus::Failed => (FAILED_GLYPH, "FAILED"),
        };
        report.push_str(&format!("{} {}: {}\n", glyph, tile.name, status));
        if let Some(details) = &tile.details {
            report.push_str(&format!("   Details: {}\n", details));
        }
        report.push('\n');
    }

    report.push_str("PAGE STATISTICS:\n");
    report.push_str(&"-".repeat(30));
    report.push('\n');

    for stat in &view.stats {
        report.push_str(&format!("{}: {}\n", stat.label, stat.value));
    }

    // Footer
    report.push('\n');
    report.push_str(&"=".repeat(60));
    report.push('\n');
    report.push_str("Report generated by SEO Audit Tool\n");

    report
}

/// Default export filename for a given date: `seo-audit-YYYY-MM-DD.txt`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("seo-audit-{}.txt", date.format("%Y-%m-%d"))
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
