use log::{debug, info};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::expression::Expression;
use crate::operator::OPERATORS;
use crate::solver::constants::DEFAULT_MAX_SOURCES;
use crate::solver::errors::SolverError;
use crate::store::SolutionStore;
use crate::utils::validate_sources;

/// Numbers still available in one search branch
type Operands = Vec<Arc<Expression>>;

/// Enumerate every value reachable from `sources` and all distinct ways to reach it
///
/// Operand multisets are explored breadth-first from a FIFO worklist. For
/// each pair of operands, ordered so the larger value is on the left, every
/// operator whose guard holds produces a new expression; it is stored under
/// its value and, while other operands remain, pushed back with them as a new
/// branch.
///
/// Source numbers on their own are not solutions, so fewer than two sources
/// yield an empty store.
pub fn search(sources: &[i64]) -> SolutionStore {
    info!("Searching all combinations of {:?}", sources);

    let mut store = SolutionStore::new();
    let mut worklist: VecDeque<Operands> = VecDeque::new();
    worklist.push_back(
        sources
            .iter()
            .map(|&n| Arc::new(Expression::leaf(n)))
            .collect(),
    );

    let mut frontier = sources.len();
    let mut branches = 0usize;

    while let Some(operands) = worklist.pop_front() {
        let n = operands.len();
        if n < 2 {
            continue;
        }

        if n < frontier {
            debug!(
                "Moving to multisets of {} operands ({} queued, {} values so far)",
                n,
                worklist.len() + 1,
                store.len()
            );
            frontier = n;
        }
        branches += 1;

        for i in 0..n {
            for j in i + 1..n {
                combine_pair(&operands, i, j, &mut store, &mut worklist);
            }
        }
    }

    info!(
        "Explored {} branches: {} values, {} solutions",
        branches,
        store.len(),
        store.total_solutions()
    );
    store
}

/// Apply every applicable operator to `operands[i]` and `operands[j]`
fn combine_pair(
    operands: &[Arc<Expression>],
    i: usize,
    j: usize,
    store: &mut SolutionStore,
    worklist: &mut VecDeque<Operands>,
) {
    let (Some(first), Some(second)) = (operands.get(i), operands.get(j)) else {
        return;
    };

    // Larger value on the left; ties keep multiset order
    let (left, right) = if first.value() < second.value() {
        (second, first)
    } else {
        (first, second)
    };

    let n = operands.len();
    for op in OPERATORS {
        if !op.applies(left.value(), right.value()) {
            continue;
        }

        let expr = Arc::new(Expression::node(Arc::clone(left), op, Arc::clone(right)));
        store.insert(Arc::clone(&expr));

        if n > 2 {
            let mut next = Vec::with_capacity(n - 1);
            next.extend(
                operands
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, operand)| Arc::clone(operand)),
            );
            next.push(expr);
            worklist.push_back(next);
        }
    }
}

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_sources: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_sources: DEFAULT_MAX_SOURCES,
        }
    }
}

/// Validating front end to [`search`]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Check the sources against the configuration, then search them
    ///
    /// # Errors
    ///
    /// Returns an error if `sources` is empty or longer than `max_sources`.
    pub fn solve(&self, sources: &[i64]) -> Result<SolutionStore, SolverError> {
        validate_sources(sources, self.config.max_sources)?;
        Ok(search(sources))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
