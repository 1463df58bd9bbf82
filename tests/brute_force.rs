//! 小さい行列で全探索の最適値と一致することを確かめる

mod common;

use common::{assert_valid_solution, brute_force};
use proptest::prelude::*;
use study_hungarian_method::solve;

/// 1x1から5x5までの小さな整数値の行列
fn arb_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1..=5usize, 1..=5usize).prop_flat_map(|(row_count, column_count)| {
        prop::collection::vec(
            prop::collection::vec((0..20i32).prop_map(f64::from), column_count),
            row_count,
        )
    })
}

proptest! {
    #[test]
    fn minimum_matches_brute_force(rows in arb_matrix()) {
        let solution = solve(rows.clone(), false).unwrap();
        assert_valid_solution(&rows, &solution);
        prop_assert_eq!(solution.value, brute_force(&rows, false));
    }

    #[test]
    fn maximum_matches_brute_force(rows in arb_matrix()) {
        let solution = solve(rows.clone(), true).unwrap();
        assert_valid_solution(&rows, &solution);
        prop_assert_eq!(solution.value, brute_force(&rows, true));
    }

    #[test]
    fn negative_values_are_handled(rows in arb_matrix(), shift in -30i32..0) {
        let shifted: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| row.iter().map(|v| v + f64::from(shift)).collect())
            .collect();
        let solution = solve(shifted.clone(), false).unwrap();
        prop_assert_eq!(solution.value, brute_force(&shifted, false));
    }
}

#[test]
fn ties_everywhere() {
    for size in 1..=5 {
        let rows = vec![vec![3.0; size]; size];
        let solution = solve(rows.clone(), false).unwrap();
        assert_valid_solution(&rows, &solution);
        assert_eq!(solution.value, 3.0 * size as f64);
    }
}
