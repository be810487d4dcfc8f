//! Simulation driver - runs a policy over a reference string.
//!
//! The [`Engine`] provides:
//! - Capacity validation before any work is done
//! - Dispatch to the selected [`Replacer`]
//! - Per-step history recording shared by every policy
//! - Side-by-side comparison of all policies

use log::debug;

use crate::common::{Capacity, PageId, Result};
use crate::engine::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
use crate::engine::{OptimalStrategy, Policy, SimulationResult, StepSnapshot};

/// Runs replacement policies over reference strings.
///
/// The engine carries no state between runs; its only setting is how the
/// Optimal policy looks ahead, which never changes results. Every call
/// builds a fresh frame set, so one engine can serve any number of
/// independent (or concurrent) runs.
///
/// # Usage
/// ```
/// use pagesim::{Engine, OptimalStrategy, PageId, Policy};
///
/// let refs = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4]);
/// let engine = Engine::new().with_optimal_strategy(OptimalStrategy::NextUseTable);
///
/// let result = engine.simulate(&refs, 3, Policy::Optimal).unwrap();
/// assert_eq!(result.fault_count(), 6);
///
/// for step in result.history() {
///     println!("{} -> {:?}", step.page, step.frames);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    optimal_strategy: OptimalStrategy,
}

impl Engine {
    /// Create an engine using [`OptimalStrategy::Scan`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `strategy` for Optimal runs.
    pub fn with_optimal_strategy(mut self, strategy: OptimalStrategy) -> Self {
        self.optimal_strategy = strategy;
        self
    }

    pub fn optimal_strategy(&self) -> OptimalStrategy {
        self.optimal_strategy
    }

    /// Run `policy` over `refs` with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0. Nothing is simulated.
    pub fn simulate(
        &self,
        refs: &[PageId],
        capacity: usize,
        policy: Policy,
    ) -> Result<SimulationResult> {
        let capacity = Capacity::new(capacity)?;
        Ok(self.run(refs, capacity, policy))
    }

    /// Run `policy` with an already validated capacity.
    pub fn run(&self, refs: &[PageId], capacity: Capacity, policy: Policy) -> SimulationResult {
        match policy {
            Policy::Fifo => run_fifo(refs, capacity),
            Policy::Lru => run_lru(refs, capacity),
            Policy::Optimal => {
                let replacer =
                    OptimalReplacer::with_strategy(capacity, self.optimal_strategy, refs);
                record(Policy::Optimal, replacer, refs)
            }
        }
    }

    /// Run every policy over the same input.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0.
    pub fn compare(&self, refs: &[PageId], capacity: usize) -> Result<Comparison> {
        let capacity = Capacity::new(capacity)?;
        let results = Policy::ALL
            .iter()
            .map(|&policy| self.run(refs, capacity, policy))
            .collect();
        Ok(Comparison::new(capacity, results))
    }
}

/// Run `policy` over `refs` with `capacity` frames using a default [`Engine`].
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0.
///
/// # Example
/// ```
/// use pagesim::{simulate, Error, PageId, Policy};
///
/// let refs = PageId::sequence([1, 2, 3, 4, 1, 2, 5]);
/// let result = simulate(&refs, 3, Policy::Fifo).unwrap();
/// assert_eq!(result.fault_count(), 7);
///
/// assert!(matches!(
///     simulate(&refs, 0, Policy::Fifo),
///     Err(Error::InvalidCapacity(0))
/// ));
/// ```
pub fn simulate(refs: &[PageId], capacity: usize, policy: Policy) -> Result<SimulationResult> {
    Engine::new().simulate(refs, capacity, policy)
}

/// Run every policy over `refs` using a default [`Engine`].
pub fn compare(refs: &[PageId], capacity: usize) -> Result<Comparison> {
    Engine::new().compare(refs, capacity)
}

/// Run the FIFO policy.
pub fn run_fifo(refs: &[PageId], capacity: Capacity) -> SimulationResult {
    record(Policy::Fifo, FifoReplacer::new(capacity), refs)
}

/// Run the LRU policy.
pub fn run_lru(refs: &[PageId], capacity: Capacity) -> SimulationResult {
    record(Policy::Lru, LruReplacer::new(capacity), refs)
}

/// Run the Optimal policy with the reference suffix scan.
pub fn run_optimal(refs: &[PageId], capacity: Capacity) -> SimulationResult {
    record(Policy::Optimal, OptimalReplacer::new(capacity), refs)
}

/// Drive `replacer` over every reference, snapshotting after each one.
fn record<R: Replacer>(policy: Policy, mut replacer: R, refs: &[PageId]) -> SimulationResult {
    let capacity = replacer.frames().capacity();
    debug!(
        "{}: simulating {} references with {}",
        policy,
        refs.len(),
        capacity
    );

    let mut history = Vec::with_capacity(refs.len());
    for (step, &page) in refs.iter().enumerate() {
        let access = replacer.access(refs, step);
        history.push(StepSnapshot {
            step,
            page,
            fault: access.is_fault(),
            evicted: access.evicted(),
            frames: replacer.frames().to_vec(),
        });
    }

    let result = SimulationResult::new(policy, capacity, history);
    debug!("{}: {}", policy, result.stats());
    result
}

/// Results of every policy run over the same input.
#[derive(Debug, Clone)]
pub struct Comparison {
    capacity: Capacity,

    /// One result per policy.
    results: Vec<SimulationResult>,
}

impl Comparison {
    /// Group results that were run over the same input with `capacity`.
    pub fn new(capacity: Capacity, results: Vec<SimulationResult>) -> Self {
        debug_assert!(results.iter().all(|r| r.capacity() == capacity));
        Self { capacity, results }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// All results, in run order.
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    /// Result for `policy`.
    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy() == policy)
    }

    /// Fault count per policy, in run order.
    pub fn fault_counts(&self) -> Vec<(Policy, usize)> {
        self.results
            .iter()
            .map(|r| (r.policy(), r.fault_count()))
            .collect()
    }

    /// Result with the fewest faults; the earliest policy wins ties.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.results.iter().min_by_key(|r| r.fault_count())
    }

    /// True when Optimal faulted no more than any other policy.
    ///
    /// Belady's algorithm is a lower bound, so this holds for every input
    /// as long as an Optimal result is present.
    pub fn optimal_dominates(&self) -> bool {
        match self.get(Policy::Optimal) {
            Some(optimal) => self
                .results
                .iter()
                .all(|r| optimal.fault_count() <= r.fault_count()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn belady_refs() -> Vec<PageId> {
        PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4])
    }

    #[test]
    fn test_simulate_rejects_zero_capacity() {
        for policy in Policy::ALL {
            let err = simulate(&belady_refs(), 0, policy).unwrap_err();
            assert!(matches!(err, Error::InvalidCapacity(0)));
        }
    }

    #[test]
    fn test_simulate_empty_refs() {
        for policy in Policy::ALL {
            let result = simulate(&[], 3, policy).unwrap();
            assert_eq!(result.fault_count(), 0);
            assert!(result.history().is_empty());
            assert_eq!(result.policy(), policy);
        }
    }

    #[test]
    fn test_history_one_snapshot_per_reference() {
        let refs = belady_refs();
        for policy in Policy::ALL {
            let result = simulate(&refs, 3, policy).unwrap();
            assert_eq!(result.history().len(), refs.len());
            for (i, step) in result.history().iter().enumerate() {
                assert_eq!(step.step, i);
                assert_eq!(step.page, refs[i]);
                assert!(step.frames.contains(&step.page));
            }
        }
    }

    #[test]
    fn test_run_matches_simulate() {
        let refs = belady_refs();
        let capacity = Capacity::new(3).unwrap();

        assert_eq!(run_fifo(&refs, capacity), simulate(&refs, 3, Policy::Fifo).unwrap());
        assert_eq!(run_lru(&refs, capacity), simulate(&refs, 3, Policy::Lru).unwrap());
        assert_eq!(
            run_optimal(&refs, capacity),
            simulate(&refs, 3, Policy::Optimal).unwrap()
        );
    }

    #[test]
    fn test_optimal_strategies_agree() {
        let refs = PageId::sequence([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let scan = Engine::new();
        let table = Engine::new().with_optimal_strategy(OptimalStrategy::NextUseTable);

        for capacity in 1..=5 {
            let a = scan.simulate(&refs, capacity, Policy::Optimal).unwrap();
            let b = table.simulate(&refs, capacity, Policy::Optimal).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.fingerprint(), b.fingerprint());
        }
    }

    #[test]
    fn test_compare() {
        let comparison = compare(&belady_refs(), 3).unwrap();

        assert_eq!(comparison.capacity().get(), 3);
        assert_eq!(
            comparison.fault_counts(),
            vec![(Policy::Fifo, 7), (Policy::Lru, 6), (Policy::Optimal, 6)]
        );
        // LRU ties Optimal and comes first
        assert_eq!(comparison.best().map(|r| r.policy()), Some(Policy::Lru));
        assert!(comparison.optimal_dominates());
    }

    #[test]
    fn test_compare_rejects_zero_capacity() {
        assert!(matches!(
            compare(&belady_refs(), 0),
            Err(Error::InvalidCapacity(0))
        ));
    }
}
