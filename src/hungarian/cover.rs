//! 最小本数の被覆線と、その時点での最大マッチング（スター付きの0）を求める
//!
//! スター付きの0とプライム付きの0を交互にたどる増加道でマッチングを一つずつ増やしていき、
//! 増やせなくなった時点の被覆線を返す。被覆線の本数はスター付きの0の個数と一致する。

use crate::error::AssignmentError;
use crate::hungarian::matrix::WorkingMatrix;
use tracing::trace;

/// スター付きの0。行→列と列→行の両方向を持つ部分的な単射。
///
/// 一回の求解の間は被覆の探索と調整をまたいで保持される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarredZeros {
    column_of_row: Vec<Option<usize>>,
    row_of_column: Vec<Option<usize>>,
}

impl StarredZeros {
    pub fn new(dimension: usize) -> Self {
        Self {
            column_of_row: vec![None; dimension],
            row_of_column: vec![None; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.column_of_row.len()
    }

    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.column_of_row[row]
    }

    pub fn row_of(&self, column: usize) -> Option<usize> {
        self.row_of_column[column]
    }

    pub fn len(&self) -> usize {
        self.column_of_row.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// すべての行にスターがついている
    pub fn is_complete(&self) -> bool {
        self.column_of_row.iter().all(Option::is_some)
    }

    /// (row, column)にスターをつける
    ///
    /// rowが持っていたスターとcolumnが持っていたスターは外れるので、単射のまま保たれる。
    pub fn star(&mut self, row: usize, column: usize) {
        if let Some(old_column) = self.column_of_row[row].take() {
            self.row_of_column[old_column] = None;
        }
        if let Some(old_row) = self.row_of_column[column].take() {
            self.column_of_row[old_row] = None;
        }
        self.column_of_row[row] = Some(column);
        self.row_of_column[column] = Some(row);
    }

    /// 行番号の昇順に (row, column) を返す
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.column_of_row
            .iter()
            .enumerate()
            .filter_map(|(row, column)| column.map(|c| (row, c)))
    }
}

/// 被覆された行と列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Covering {
    pub rows: Vec<bool>,
    pub columns: Vec<bool>,
}

impl Covering {
    /// スターのある列だけを被覆した状態
    fn from_stars(stars: &StarredZeros) -> Self {
        let dimension = stars.dimension();
        let mut columns = vec![false; dimension];
        for (_, column) in stars.pairs() {
            columns[column] = true;
        }
        Self {
            rows: vec![false; dimension],
            columns,
        }
    }

    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    pub fn is_column_covered(&self, column: usize) -> bool {
        self.columns[column]
    }

    /// 被覆線の本数
    pub fn line_count(&self) -> usize {
        self.rows.iter().filter(|&&c| c).count() + self.columns.iter().filter(|&&c| c).count()
    }
}

/// まだスターのない行について、上から順に使われていない列の最初の0にスターをつける
fn star_greedily(matrix: &WorkingMatrix, stars: &mut StarredZeros) {
    let dimension = matrix.dimension();
    for row in 0..dimension {
        if stars.column_of(row).is_some() {
            continue;
        }
        let free_zero =
            (0..dimension).find(|&column| matrix.is_zero(row, column) && stars.row_of(column).is_none());
        if let Some(column) = free_zero {
            stars.star(row, column);
        }
    }
}

/// 被覆されていない0を行優先（上から、左から）で探す
fn find_uncovered_zero(matrix: &WorkingMatrix, covering: &Covering) -> Option<(usize, usize)> {
    let dimension = matrix.dimension();
    (0..dimension)
        .filter(|&row| !covering.is_row_covered(row))
        .find_map(|row| {
            (0..dimension)
                .find(|&column| !covering.is_column_covered(column) && matrix.is_zero(row, column))
                .map(|column| (row, column))
        })
}

/// プライム付きの(row, column)から増加道をたどり、道上のプライムをすべてスターにする
///
/// 道の長さを返す。マッチングはちょうど一つ増える。
fn augment(
    stars: &mut StarredZeros,
    primes: &[Option<usize>],
    row: usize,
    column: usize,
) -> Result<usize, AssignmentError> {
    let mut path = vec![(row, column)];
    let mut current_column = column;
    while let Some(star_row) = stars.row_of(current_column) {
        // スターの行は一度しか通らないので、次元を超えたら道が壊れている
        if path.len() > stars.dimension() {
            return Err(AssignmentError::BrokenAugmentingPath { row: star_row });
        }
        let primed_column =
            primes[star_row].ok_or(AssignmentError::BrokenAugmentingPath { row: star_row })?;
        path.push((star_row, primed_column));
        current_column = primed_column;
    }

    for &(r, c) in path.iter() {
        stars.star(r, c);
    }
    Ok(path.len())
}

/// 現在の行列に対して被覆線を求める。starsは更新される。
///
/// 戻り値の被覆線の本数はstarsの個数と等しく、次元に達していれば最適な割当が見つかっている。
/// スターのない行への貪欲な割当は初回だけでなく毎回行う（既存のスターはそのまま使う）。
pub fn find_cover(
    matrix: &WorkingMatrix,
    stars: &mut StarredZeros,
) -> Result<Covering, AssignmentError> {
    let dimension = matrix.dimension();
    star_greedily(matrix, stars);

    let mut covering = Covering::from_stars(stars);
    if stars.is_complete() {
        return Ok(covering);
    }

    // 一回の探索の間だけ使うプライム付きの0。行→列。
    let mut primes: Vec<Option<usize>> = vec![None; dimension];
    while let Some((row, column)) = find_uncovered_zero(matrix, &covering) {
        primes[row] = Some(column);
        match stars.column_of(row) {
            Some(star_column) => {
                covering.rows[row] = true;
                covering.columns[star_column] = false;
            }
            None => {
                let length = augment(stars, &primes, row, column)?;
                trace!(row, column, length, stars = stars.len(), "augmented matching");
                primes.fill(None);
                covering = Covering::from_stars(stars);
                if stars.is_complete() {
                    break;
                }
            }
        }
    }

    Ok(covering)
}

#[cfg(test)]
mod test {
    use super::*;

    fn matrix(cells: Vec<Vec<f64>>) -> WorkingMatrix {
        WorkingMatrix::from_square(cells)
    }

    fn assert_injective(stars: &StarredZeros) {
        let mut used = vec![false; stars.dimension()];
        for (row, column) in stars.pairs() {
            assert!(!used[column], "column {column} starred twice");
            used[column] = true;
            assert_eq!(stars.row_of(column), Some(row));
        }
    }

    #[test]
    fn star_replaces_old_marks() {
        let mut stars = StarredZeros::new(3);
        stars.star(0, 1);
        stars.star(2, 1);
        assert_eq!(stars.column_of(0), None);
        assert_eq!(stars.row_of(1), Some(2));
        stars.star(2, 0);
        assert_eq!(stars.row_of(1), None);
        assert_eq!(stars.len(), 1);
        assert_injective(&stars);
    }

    #[test]
    fn greedy_matching_is_enough() {
        let m = matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let mut stars = StarredZeros::new(2);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), 2);
        assert_eq!(covering.rows, vec![false, false]);
        assert_eq!(stars.pairs().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn augmenting_path_fixes_greedy_choice() {
        // 貪欲法だと行0が列0を取ってしまい行1が割り当てられない
        let m = matrix(vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
        let mut stars = StarredZeros::new(2);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), 2);
        assert_eq!(stars.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_injective(&stars);
    }

    #[test]
    fn returns_minimum_cover_when_matching_is_not_perfect() {
        let m = matrix(vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 1.0],
            vec![0.0, 1.0, 1.0],
        ]);
        let mut stars = StarredZeros::new(3);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), 2);
        assert_eq!(covering.rows, vec![true, false, false]);
        assert_eq!(covering.columns, vec![true, false, false]);
        assert_eq!(stars.len(), 2);
        assert_eq!(stars.column_of(0), Some(1));
        assert_eq!(stars.column_of(1), Some(0));
        assert_injective(&stars);
    }

    #[test]
    fn existing_stars_are_kept() {
        let m = matrix(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ]);
        let mut stars = StarredZeros::new(3);
        stars.star(0, 1);
        stars.star(1, 0);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), 3);
        assert_eq!(
            stars.pairs().collect::<Vec<_>>(),
            vec![(0, 1), (1, 0), (2, 2)]
        );
    }

    #[test]
    fn all_zero_matrix_is_covered_immediately() {
        let m = matrix(vec![vec![0.0; 4]; 4]);
        let mut stars = StarredZeros::new(4);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), 4);
        assert!(stars.is_complete());
        assert_injective(&stars);
    }

    #[test]
    fn cover_hits_every_zero() {
        let m = matrix(vec![
            vec![0.0, 2.0, 0.0, 3.0],
            vec![0.0, 4.0, 5.0, 0.0],
            vec![0.0, 1.0, 7.0, 2.0],
            vec![0.0, 3.0, 6.0, 8.0],
        ]);
        let mut stars = StarredZeros::new(4);
        let covering = find_cover(&m, &mut stars).unwrap();
        assert_eq!(covering.line_count(), stars.len());
        for row in 0..4 {
            for column in 0..4 {
                if m.is_zero(row, column) {
                    assert!(covering.is_row_covered(row) || covering.is_column_covered(column));
                }
            }
        }
        assert_eq!(stars.len(), 3);
        assert_injective(&stars);
    }
}
