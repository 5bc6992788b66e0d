//! Text renderings of scan and comparison results.

use crate::compare::ComparisonResult;
use crate::errors::format_error;
use crate::scan::ErrorScanResult;
use std::fmt::Write;

pub fn render_scan_text(result: &ErrorScanResult) -> String {
    let mut out = String::new();
    let _ = write_scan(&mut out, result);
    out
}

fn write_scan(out: &mut String, result: &ErrorScanResult) -> std::fmt::Result {
    writeln!(out, "\n=== Error Scan: {} ===", result.path)?;
    writeln!(out, "Scanned At:   {}", result.scanned_at)?;
    writeln!(out, "Max Height:   {}", result.max_height)?;
    writeln!(out, "Total Blocks: {}", result.total_blocks)?;
    writeln!(out, "Errors:       {}", result.error_count)?;

    if result.healthy {
        writeln!(out, "\n✅ No errors found - chain is healthy")?;
    } else {
        writeln!(out)?;
        for err in &result.errors {
            writeln!(out, "  {}", format_error(err))?;
        }
    }
    Ok(())
}

pub fn render_comparison_text(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let _ = write_comparison(&mut out, result);
    out
}

fn write_comparison(out: &mut String, result: &ComparisonResult) -> std::fmt::Result {
    let height = |h: Option<u64>| h.map_or_else(|| "empty".to_string(), |h| h.to_string());

    writeln!(out, "\n=== Node Comparison ===")?;
    writeln!(out, "Node 1:           {} (height {})", result.node1, height(result.node1_height))?;
    writeln!(out, "Node 2:           {} (height {})", result.node2, height(result.node2_height))?;
    writeln!(out, "Matching Blocks:  {}", result.matching_blocks)?;
    match result.first_divergence {
        Some(h) => writeln!(out, "First Divergence: {h}")?,
        None => writeln!(out, "First Divergence: none")?,
    }

    if result.in_sync {
        writeln!(out, "\n✅ Nodes are in sync")?;
    } else {
        writeln!(out, "\n⚠️  {} mismatch(es):", result.mismatches.len())?;
        for err in &result.mismatches {
            writeln!(out, "  {}", format_error(err))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{BlockError, ErrorCode};

    #[test]
    fn test_scan_text_lists_errors() {
        let result = ErrorScanResult {
            path: "./node1-data".to_string(),
            scanned_at: "2024-03-01 12:30:05".to_string(),
            max_height: 4,
            total_blocks: 4,
            error_count: 1,
            errors: vec![BlockError::new(2, ErrorCode::MissingBlock, "gone")],
            healthy: false,
        };
        let text = render_scan_text(&result);
        assert!(text.contains("=== Error Scan: ./node1-data ==="));
        assert!(text.contains("  ❌ [MISSING_BLOCK] height 2: gone\n"));
    }

    #[test]
    fn test_comparison_text_in_sync() {
        let result = ComparisonResult {
            node1: "a".to_string(),
            node2: "b".to_string(),
            node1_height: Some(3),
            node2_height: Some(3),
            matching_blocks: 4,
            first_divergence: None,
            mismatches: vec![],
            in_sync: true,
        };
        let text = render_comparison_text(&result);
        assert!(text.contains("Node 1:           a (height 3)"));
        assert!(text.contains("First Divergence: none"));
        assert!(text.contains("✅ Nodes are in sync"));
    }
}
