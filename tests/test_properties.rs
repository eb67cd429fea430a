//! Property-based tests for reconstruction and feedback.

use proptest::prelude::*;

use mastermind_solver::core::{Code, Evaluation, Symbol};
use mastermind_solver::oracle::LocalOracle;
use mastermind_solver::solver::cardinality::discover_frequencies;
use mastermind_solver::solver::partition::resolve;
use mastermind_solver::solver::{
    DivideAndConquerStrategy, LinearStrategy, PartialSolution, Session, Solver,
};

/// Strategy: a valid secret of length 1-12 over the alphabet 1..=N.
fn secret_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    (1usize..=12).prop_flat_map(|n| prop::collection::vec(1..=n as Symbol, n))
}

/// Strategy: a secret together with an arbitrary guess of the same length.
fn secret_and_guess() -> impl Strategy<Value = (Vec<Symbol>, Vec<Symbol>)> {
    (1usize..=12).prop_flat_map(|n| {
        (
            prop::collection::vec(1..=n as Symbol, n),
            prop::collection::vec(0..=n as Symbol, n),
        )
    })
}

fn ceil_log2(n: usize) -> usize {
    n.next_power_of_two().trailing_zeros() as usize
}

proptest! {
    // 1. Divide-and-conquer recovers every secret
    #[test]
    fn divide_recovers_secret(symbols in secret_strategy()) {
        let secret = Code::secret(symbols).unwrap();
        let result = Solver::new(DivideAndConquerStrategy)
            .solve(LocalOracle::new(secret.clone()))
            .unwrap();
        prop_assert_eq!(&result.code, &secret);
        prop_assert_eq!(result.evaluation.black, secret.len());
    }

    // 2. The linear baseline recovers every secret
    #[test]
    fn linear_recovers_secret(symbols in secret_strategy()) {
        let secret = Code::secret(symbols).unwrap();
        let result = Solver::new(LinearStrategy)
            .solve(LocalOracle::new(secret.clone()))
            .unwrap();
        prop_assert_eq!(result.code, secret);
    }

    // 3. Global discovery matches the true frequencies within N-1 queries
    #[test]
    fn discovery_matches_frequencies(symbols in secret_strategy()) {
        let secret = Code::secret(symbols).unwrap();
        let n = secret.len();
        let mut session = Session::new(LocalOracle::new(secret.clone())).unwrap();

        let table = discover_frequencies(&mut session).unwrap();
        prop_assert_eq!(table.as_slice(), &secret.frequencies()[1..]);
        prop_assert_eq!(table.total(), n);
        prop_assert!(session.queries() < n.max(1), "queries={}", session.queries());
    }

    // 4. Each recursion level costs at most N queries
    #[test]
    fn divide_query_bound(symbols in secret_strategy()) {
        let secret = Code::secret(symbols).unwrap();
        let n = secret.len();
        let result = Solver::new(DivideAndConquerStrategy)
            .solve(LocalOracle::new(secret))
            .unwrap();
        let bound = (n - 1) + n * ceil_log2(n) + 1;
        prop_assert!(result.queries <= bound, "queries={} bound={bound}", result.queries);
    }

    // 5. Resolve writes every position exactly once
    #[test]
    fn resolve_fills_every_position(symbols in secret_strategy()) {
        let secret = Code::secret(symbols).unwrap();
        let n = secret.len();
        let mut session = Session::new(LocalOracle::new(secret.clone())).unwrap();
        let table = discover_frequencies(&mut session).unwrap();

        let mut solution = PartialSolution::new(n);
        resolve(&mut session, &mut solution, 0..n, &table, 0).unwrap();
        prop_assert_eq!(solution.unresolved(), 0);
        prop_assert_eq!(solution.into_code().unwrap(), secret);
    }

    // 6. Feedback never exceeds the code length
    #[test]
    fn feedback_bounded((secret, guess) in secret_and_guess()) {
        let n = secret.len();
        let secret = Code::secret(secret).unwrap();
        let guess = Code::guess(guess, n).unwrap();
        let eval = Evaluation::calculate(&guess, &secret);
        prop_assert!(eval.black + eval.white <= n, "eval={eval}");
    }

    // 7. A uniform guess scores the symbol's frequency
    #[test]
    fn uniform_guess_counts_symbol(symbols in secret_strategy(), pick in 0usize..12) {
        let secret = Code::secret(symbols).unwrap();
        let n = secret.len();
        let symbol = (pick % n + 1) as Symbol;
        let eval = Evaluation::calculate(&Code::filled(n, symbol), &secret);
        prop_assert_eq!(eval.black, secret.frequencies()[symbol as usize]);
        prop_assert_eq!(eval.white, 0);
    }
}
