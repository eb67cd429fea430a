//! Formatting utilities for terminal output

use crate::solver::ProbePhase;

/// Describe what a probe asked, e.g. `symbol 3 in [0, 4)`
#[must_use]
pub fn describe_phase(phase: &ProbePhase) -> String {
    match phase {
        ProbePhase::Frequency { symbol } => format!("frequency of {symbol}"),
        ProbePhase::Range {
            range,
            symbol,
            depth,
        } => format!(
            "{}symbol {symbol} in [{}, {})",
            "  ".repeat(depth.saturating_sub(1)),
            range.start,
            range.end
        ),
        ProbePhase::Position { position, symbol } => {
            format!("symbol {symbol} at position {position}")
        }
        ProbePhase::Verify => "final submission".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar comparing a query count against the linear baseline
#[must_use]
pub fn cost_bar(queries: usize, baseline: usize, width: usize) -> String {
    create_progress_bar(queries as f64, baseline.max(queries) as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_frequency() {
        assert_eq!(
            describe_phase(&ProbePhase::Frequency { symbol: 4 }),
            "frequency of 4"
        );
    }

    #[test]
    fn describe_range_indents_by_depth() {
        let phase = ProbePhase::Range {
            range: 2..3,
            symbol: 5,
            depth: 3,
        };
        assert_eq!(describe_phase(&phase), "    symbol 5 in [2, 3)");
    }

    #[test]
    fn describe_verify() {
        assert_eq!(describe_phase(&ProbePhase::Verify), "final submission");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn cost_bar_half() {
        assert_eq!(cost_bar(5, 10, 10), "█████░░░░░");
    }
}
