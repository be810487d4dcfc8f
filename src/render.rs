//! Plain-text rendering of simulation results.
//!
//! Every renderer is a small [`Display`] wrapper around borrowed results,
//! so callers can `print!` them or `to_string()` them.
//!
//! ```text
//! LRU (3 frames, 6 faults)
//! step ref |  f0  f1  f2 | fault
//!    1   7 |   7   -   - | yes
//!    2   0 |   7   0   - | yes
//! ```
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use crate::engine::{Comparison, SimulationResult};

/// Placeholder for an empty frame slot.
const EMPTY_SLOT: &str = "-";

/// The one-line fault summary for a run, e.g. `FIFO Page Faults: 7`.
pub struct Summary<'a>(&'a SimulationResult);

/// One row per step, one column per frame slot.
pub struct HistoryTable<'a>(&'a SimulationResult);

/// Every policy of a [`Comparison`] side by side.
pub struct ComparisonTable<'a>(&'a Comparison);

pub fn summary_line(result: &SimulationResult) -> Summary<'_> {
    Summary(result)
}

pub fn history_table(result: &SimulationResult) -> HistoryTable<'_> {
    HistoryTable(result)
}

pub fn comparison_table(comparison: &Comparison) -> ComparisonTable<'_> {
    ComparisonTable(comparison)
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Page Faults: {}", self.0.policy(), self.0.fault_count())
    }
}

impl HistoryTable<'_> {
    /// Width of a page/slot column: wide enough for every id and label.
    fn cell_width(&self) -> usize {
        let result = self.0;
        let widest_page = result
            .history()
            .iter()
            .flat_map(|s| std::iter::once(&s.page).chain(s.frames.iter()))
            .map(|p| p.to_string().len())
            .max()
            .unwrap_or(1);
        let widest_label = format!("f{}", result.capacity().get() - 1).len();
        widest_page.max(widest_label).max(3)
    }
}

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let slots = result.capacity().get();
        let w = self.cell_width();

        writeln!(
            f,
            "{} ({}, {} faults)",
            result.policy(),
            result.capacity(),
            result.fault_count()
        )?;

        write!(f, "{:>4} {:>w$} |", "step", "ref", w = w)?;
        for slot in 0..slots {
            write!(f, " {:>w$}", format!("f{}", slot), w = w)?;
        }
        writeln!(f, " | fault")?;

        for snapshot in result.history() {
            write!(f, "{:>4} {:>w$} |", snapshot.step + 1, snapshot.page, w = w)?;
            for slot in 0..slots {
                match snapshot.frames.get(slot) {
                    Some(page) => write!(f, " {:>w$}", page, w = w)?,
                    None => write!(f, " {:>w$}", EMPTY_SLOT, w = w)?,
                }
            }
            match (snapshot.fault, snapshot.evicted) {
                (true, Some(victim)) => writeln!(f, " | yes, evicted {}", victim)?,
                (true, None) => writeln!(f, " | yes")?,
                (false, _) => writeln!(f, " |")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        writeln!(f, "{}", comparison.capacity())?;
        writeln!(
            f,
            "{:<8} {:>7} {:>7} {:>10} {:>9}",
            "policy", "faults", "hits", "evictions", "hit rate"
        )?;
        for result in comparison.results() {
            let stats = result.stats();
            writeln!(
                f,
                "{:<8} {:>7} {:>7} {:>10} {:>8.2}%",
                result.policy().name(),
                stats.faults,
                stats.hits,
                stats.evictions,
                stats.hit_rate() * 100.0
            )?;
        }
        if let Some(best) = comparison.best() {
            writeln!(f, "fewest faults: {}", best.policy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compare, simulate, Policy};
    use crate::PageId;

    #[test]
    fn test_summary_line() {
        let refs = PageId::sequence([1, 2, 3, 4, 1, 2, 5]);
        let result = simulate(&refs, 3, Policy::Fifo).unwrap();
        assert_eq!(summary_line(&result).to_string(), "FIFO Page Faults: 7");
    }

    #[test]
    fn test_history_table_rows() {
        let refs = PageId::sequence([7, 0, 7, 1]);
        let result = simulate(&refs, 2, Policy::Lru).unwrap();
        let table = history_table(&result).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "LRU (2 frames, 3 faults)");
        assert_eq!(lines[1], "step ref |  f0  f1 | fault");
        assert_eq!(lines[2], "   1   7 |   7   - | yes");
        assert_eq!(lines[3], "   2   0 |   7   0 | yes");
        assert_eq!(lines[4], "   3   7 |   0   7 |");
        assert_eq!(lines[5], "   4   1 |   7   1 | yes, evicted 0");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_history_table_widens_for_large_ids() {
        let refs = PageId::sequence([123456, 1]);
        let result = simulate(&refs, 1, Policy::Fifo).unwrap();
        let table = history_table(&result).to_string();

        assert!(table.contains("| 123456 |"));
        assert!(table.contains("|      1 | yes, evicted 123456"));
    }

    #[test]
    fn test_comparison_table() {
        let refs = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4]);
        let comparison = compare(&refs, 3).unwrap();
        let table = comparison_table(&comparison).to_string();

        assert!(table.starts_with("3 frames\n"));
        assert!(table.contains("FIFO"));
        assert!(table.contains("Optimal"));
        assert!(table.ends_with("fewest faults: LRU\n"));
    }
}
