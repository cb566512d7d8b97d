//! Cosmetic progress for the audit request.
//!
//! The bar advances on a fixed timer with a randomized step and conveys no
//! signal about the actual request. Ticker and request are two independent
//! activities, joined only when [`AuditTicker::stop`] runs at settle time.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::task::JoinHandle;

/// Status lines the ticker walks through while a request is in flight.
const PROGRESS_STEPS: [&str; 6] = [
    "Fetching page content...",
    "Analyzing HTML structure...",
    "Checking meta tags...",
    "Analyzing content...",
    "Checking links...",
    "Finalizing report...",
];

const TICK_INTERVAL: Duration = Duration::from_millis(500);

pub struct AuditTicker {
    bar: ProgressBar,
    ticker: JoinHandle<()>,
}

impl AuditTicker {
    pub fn start() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {percent:>3}% {msg}")
                .unwrap(),
        );
        bar.set_message(PROGRESS_STEPS[0]);

        let ticker = tokio::spawn({
            let bar = bar.clone();
            async move {
                let mut rng = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.subsec_nanos() as u64 | 1)
                    .unwrap_or(1);
                let mut interval = tokio::time::interval(TICK_INTERVAL);
                interval.tick().await; // the first tick completes immediately

                loop {
                    interval.tick().await;

                    // xorshift; plenty for a decorative 5-20 step
                    rng ^= rng << 13;
                    rng ^= rng >> 7;
                    rng ^= rng << 17;
                    let step = 5 + rng % 15;

                    let position = (bar.position() + step).min(100);
                    bar.set_position(position);

                    let step_index = (position as usize * PROGRESS_STEPS.len() / 101)
                        .min(PROGRESS_STEPS.len() - 1);
                    bar.set_message(PROGRESS_STEPS[step_index]);

                    if position >= 100 {
                        // Full bar; it stays on screen until the request settles.
                        break;
                    }
                }
            }
        });

        Self { bar, ticker }
    }

    /// Unconditional stop at settle time, whatever the request outcome.
    pub fn stop(self) {
        self.ticker.abort();
        self.bar.finish_and_clear();
    }
}
