//! View model for one audit, plus its terminal rendering.
//!
//! The view is built once from the parsed response and passed by reference to
//! anything that needs to show it - the renderer here and the report exporter.
//! It is replaced wholesale by the next submission.

use crate::checks::CheckKey;
use colored::Colorize;
use seolens_client::result::{AuditResult, CheckStatus, PageInfo};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub passed: usize,
    pub failed: usize,
}

impl Score {
    pub fn total(self) -> usize {
        self.passed + self.failed
    }
}

/// One entry in the results grid.
#[derive(Debug, Clone)]
pub struct CheckTile {
    pub key: CheckKey,
    pub name: &'static str,
    pub description: &'static str,
    pub status: CheckStatus,
    pub details: Option<String>,
}

/// One entry in the failed-checks panel.
#[derive(Debug, Clone)]
pub struct FailedCheck {
    pub name: &'static str,
    pub issue: String,
    pub recommendation: Option<String>,
}

/// One line of the page statistics grid.
#[derive(Debug, Clone)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone)]
pub struct AuditView {
    pub url: String,
    pub analyzed_at: String,
    pub score: Score,
    pub checks: Vec<CheckTile>,
    pub failed: Vec<FailedCheck>,
    pub stats: Vec<StatLine>,
}

impl AuditView {
    /// Build the display model from a parsed response. Only catalog checks
    /// present in the response are counted and shown; the rest of the map is
    /// ignored.
    pub fn from_result(result: &AuditResult) -> Self {
        let mut score = Score::default();
        let mut checks = Vec::new();
        let mut failed = Vec::new();

        for key in CheckKey::ALL {
            let Some(check) = result.checks.get(key.as_str()) else {
                // Not evaluated this audit: omitted, not shown as failed.
                continue;
            };

            match check.status {
                CheckStatus::Passed => score.passed += 1,
                CheckStatus::Failed => {
                    score.failed += 1;
                    failed.push(FailedCheck {
                        name: key.name(),
                        issue: check
                            .issue
                            .clone()
                            .unwrap_or_else(|| key.description().to_string()),
                        recommendation: check.recommendation.clone(),
                    });
                }
            }

            checks.push(CheckTile {
                key,
                name: key.name(),
                description: key.description(),
                status: check.status,
                details: check.details.clone(),
            });
        }

        AuditView {
            url: result.url.clone(),
            analyzed_at: format_timestamp(&result.timestamp),
            score,
            checks,
            failed,
            stats: build_stats(&result.page_info),
        }
    }
}

/// The fixed, ordered list of eight page statistics. A value the server
/// omitted - or reported as zero - renders as "N/A", preserving the
/// original display behavior.
fn build_stats(info: &PageInfo) -> Vec<StatLine> {
    vec![
        StatLine {
            label: "Page Title Length",
            value: count_stat(info.title_length),
            unit: "chars",
        },
        StatLine {
            label: "Meta Description Length",
            value: count_stat(info.meta_description_length),
            unit: "chars",
        },
        StatLine {
            label: "Word Count",
            value: count_stat(info.word_count),
            unit: "words",
        },
        StatLine {
            label: "Images Found",
            value: count_stat(info.images_count),
            unit: "images",
        },
        StatLine {
            label: "Internal Links",
            value: count_stat(info.internal_links),
            unit: "links",
        },
        StatLine {
            label: "External Links",
            value: count_stat(info.external_links),
            unit: "links",
        },
        StatLine {
            label: "H1 Tags",
            value: count_stat(info.h1_count),
            unit: "tags",
        },
        StatLine {
            label: "Load Time",
            value: seconds_stat(info.load_time),
            unit: "seconds",
        },
    ]
}

fn count_stat(value: Option<u64>) -> String {
    match value {
        Some(n) if n != 0 => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn seconds_stat(value: Option<f64>) -> String {
    match value {
        Some(s) if s != 0.0 => s.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Long-form display timestamp ("August 6, 2026, 02:30 PM"). Anything that
/// does not parse as RFC 3339 is shown as-is.
fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%B %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Render the view for the terminal. Pure function of the view; printing is
/// the caller's job.
pub fn render(view: &AuditView) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n", "═".repeat(60).bright_blue().bold()));
    out.push_str(&format!("{}\n", "  AUDIT RESULTS".bright_white().bold()));
    out.push_str(&format!("{}\n\n", "═".repeat(60).bright_blue().bold()));

    out.push_str(&format!("{}\n", view.url.bright_white().bold()));
    out.push_str(&format!("Analyzed on {}\n\n", view.analyzed_at));

    out.push_str(&format!(
        "Overall Score: {}\n",
        view.score.passed.to_string().bright_cyan().bold()
    ));
    out.push_str(&format!(
        "{}   {}\n\n",
        format!("✓ {} passed", view.score.passed).green(),
        format!("✗ {} failed", view.score.failed).red()
    ));

    for tile in &view.checks {
        let glyph = match tile.status {
            CheckStatus::Passed => "✓".green().bold(),
            CheckStatus::Failed => "✗".red().bold(),
        };
        out.push_str(&format!("{} {}\n", glyph, tile.name.bright_white().bold()));
        out.push_str(&format!("  {}\n", tile.description.dimmed()));
        if let Some(details) = &tile.details {
            out.push_str(&format!("  {}\n", details));
        }
        out.push('\n');
    }

    if !view.failed.is_empty() {
        out.push_str(&format!("{}\n", "ISSUES TO FIX".yellow().bold()));
        out.push_str(&format!("{}\n\n", "─".repeat(60).yellow()));

        for item in &view.failed {
            out.push_str(&format!(
                "{} {}\n",
                "⚠".yellow().bold(),
                item.name.bright_white().bold()
            ));
            out.push_str(&format!("  {}\n", item.issue));
            if let Some(recommendation) = &item.recommendation {
                out.push_str(&format!(
                    "  {} {}\n",
                    "Recommendation:".bold(),
                    recommendation
                ));
            }
            out.push('\n');
        }
    }

    out.push_str(&format!("{}\n", "PAGE STATISTICS".bright_white().bold()));
    out.push_str(&format!("{}\n", "─".repeat(60).bright_blue()));
    for stat in &view.stats {
        if stat.value == NOT_AVAILABLE {
            out.push_str(&format!("  {:<26} {}\n", stat.label, stat.value.dimmed()));
        } else {
            out.push_str(&format!(
                "  {:<26} {} {}\n",
                stat.label,
                stat.value.bright_cyan().bold(),
                stat.unit.dimmed()
            ));
        }
    }
    out.push('\n');

    out
}
