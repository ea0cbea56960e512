//! Statistics reporting.

use console::style;

/// Totals across one `convert` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub converted: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunStats {
    pub fn mark_converted(&mut self) {
        self.converted += 1;
    }

    pub fn mark_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn mark_failed(&mut self) {
        self.failed += 1;
    }

    /// Number of subreddits attempted.
    pub fn total(&self) -> u64 {
        self.converted + self.skipped + self.failed
    }
}

/// Print statistics for a run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!("  Subreddits: {}", stats.total());
    println!("  Converted:  {}", style(stats.converted).green());
    println!("  Skipped:    {} (already on disk)", style(stats.skipped).yellow());
    if stats.failed > 0 {
        println!("  Failed:     {}", style(stats.failed).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut stats = RunStats::default();
        stats.mark_converted();
        stats.mark_converted();
        stats.mark_skipped();
        stats.mark_failed();
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.converted, 2);
    }
}
