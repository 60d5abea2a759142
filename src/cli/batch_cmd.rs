//! `phishscope batch <file>` — classify every URL in a file, one per line.

use crate::cli::output::{self, Styled};
use crate::engine::{ScanEngine, Verdict};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

/// Run the batch command.
pub async fn run(engine: &ScanEngine, file: &Path, json: bool) -> Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read url list: {}", file.display()))?;
    let urls: Vec<&str> = data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();

    let s = Styled::new();
    let start = Instant::now();
    let mut suspicious = 0usize;
    let mut rows = Vec::with_capacity(urls.len());

    for url in &urls {
        let result = engine
            .classify(url)
            .await
            .context("classifier rejected the feature vector")?;
        if result.verdict == Verdict::Suspicious {
            suspicious += 1;
        }

        if json {
            rows.push(serde_json::json!({ "url": url, "result": result }));
        } else {
            let label = match result.verdict {
                Verdict::Legitimate => s.green("legitimate"),
                Verdict::Suspicious => s.red("suspicious"),
            };
            match result.reason {
                Some(reason) => eprintln!("  {label:<12} {url}  {}", s.dim(&reason.to_string())),
                None => eprintln!("  {label:<12} {url}"),
            }
        }
    }

    if json {
        output::print_json(&serde_json::json!({
            "total": urls.len(),
            "suspicious": suspicious,
            "legitimate": urls.len() - suspicious,
            "duration_ms": start.elapsed().as_millis(),
            "results": rows,
        }));
        return Ok(());
    }

    eprintln!();
    eprintln!(
        "  {} urls in {:.1}s — {} suspicious, {} legitimate",
        urls.len(),
        start.elapsed().as_secs_f64(),
        suspicious,
        urls.len() - suspicious
    );
    Ok(())
}
