//! `phishscope check <url>` — classify a single URL.

use crate::audit::AuditLogger;
use crate::cli::output::{self, Styled};
use crate::engine::{Classification, ScanEngine, Verdict};
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::warn;

/// Run the check command.
pub async fn run(engine: &ScanEngine, url: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let result = engine
        .classify(url)
        .await
        .context("classifier rejected the feature vector")?;
    let elapsed = start.elapsed();

    // Audit is best-effort; a broken log never fails a scan.
    match AuditLogger::default_logger() {
        Ok(mut logger) => {
            if let Err(e) = logger.log_scan(url, &result, elapsed.as_millis() as u64) {
                warn!("audit log write failed: {e}");
            }
        }
        Err(e) => warn!("audit log unavailable: {e}"),
    }

    if json {
        output::print_json(&serde_json::json!({
            "url": url,
            "result": result,
            "duration_ms": elapsed.as_millis(),
        }));
        return Ok(());
    }

    print_human(url, &result, elapsed.as_secs_f64());
    Ok(())
}

/// Print a single classification in human form.
pub fn print_human(url: &str, result: &Classification, elapsed_secs: f64) {
    let s = Styled::new();

    let label = match result.verdict {
        Verdict::Legitimate => s.green("legitimate"),
        Verdict::Suspicious => s.red("suspicious"),
    };
    eprintln!("  {} {}", s.bold(url), s.dim(&format!("({elapsed_secs:.1}s)")));
    eprintln!("  Verdict:   {label}");

    if let Some(reason) = result.reason {
        eprintln!("  Reason:    {reason} (classifier skipped)");
        return;
    }

    let Some(features) = &result.features else {
        return;
    };

    eprintln!();
    eprintln!("  {}", s.bold("Features"));
    for (name, code) in features.named() {
        let sym = match code {
            -1 => s.ok_sym(),
            1 => s.warn_sym(),
            _ => s.info_sym(),
        };
        eprintln!("    {sym} {name:<22} {code:>2}");
    }
}
