//! 結合テスト用のヘルパー

use study_hungarian_method::Solution;

/// 全探索で求めた最適値
///
/// 行と列のうち少ないほうのすべての要素を、もう一方の異なる要素に割り当てる組合せを総当たりする。
pub fn brute_force(rows: &[Vec<f64>], maximize: bool) -> f64 {
    let row_count = rows.len();
    let column_count = rows[0].len();
    let matrix: Vec<Vec<f64>> = if row_count <= column_count {
        rows.to_vec()
    } else {
        (0..column_count)
            .map(|c| (0..row_count).map(|r| rows[r][c]).collect())
            .collect()
    };

    let mut used = vec![false; matrix[0].len()];
    search(&matrix, 0, &mut used, maximize).unwrap_or(0.0)
}

fn search(matrix: &[Vec<f64>], row: usize, used: &mut [bool], maximize: bool) -> Option<f64> {
    if row == matrix.len() {
        return Some(0.0);
    }
    let mut best: Option<f64> = None;
    for column in 0..used.len() {
        if used[column] {
            continue;
        }
        used[column] = true;
        if let Some(rest) = search(matrix, row + 1, used, maximize) {
            let total = matrix[row][column] + rest;
            best = Some(match best {
                None => total,
                Some(b) if maximize => b.max(total),
                Some(b) => b.min(total),
            });
        }
        used[column] = false;
    }
    best
}

/// 割当が N x N の全単射になっていて、範囲内フラグと合計が元の行列と整合していること
pub fn assert_valid_solution(rows: &[Vec<f64>], solution: &Solution) {
    let row_count = rows.len();
    let column_count = rows[0].len();
    let dimension = row_count.max(column_count);
    assert_eq!(solution.dimension, dimension);
    assert_eq!(solution.pairs.len(), dimension);

    let mut seen_rows = vec![false; dimension];
    let mut seen_columns = vec![false; dimension];
    let mut total = 0.0;
    for pair in solution.pairs.iter() {
        assert!(!seen_rows[pair.row], "row {} assigned twice", pair.row);
        assert!(!seen_columns[pair.column], "column {} assigned twice", pair.column);
        seen_rows[pair.row] = true;
        seen_columns[pair.column] = true;

        let within = pair.row < row_count && pair.column < column_count;
        assert_eq!(pair.within_original_bounds, within);
        if within {
            total += rows[pair.row][pair.column];
        }
    }
    assert_eq!(solution.value, total);
}
