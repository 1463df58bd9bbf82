use study_hungarian_method::{CostMatrix, HungarianSolver, Objective, Solution};
use tracing_subscriber::EnvFilter;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    example_1();
    example_2();
    example_3();
    example_4();
}

fn run(description: &str, rows: Vec<Vec<f64>>, objective: Objective) -> Solution {
    println!("\n--- Example : {description} ---");
    let matrix = CostMatrix::new(rows).expect("example matrix is well formed");
    let solution = HungarianSolver::new(matrix, objective)
        .solve()
        .expect("example matrix is solvable");
    println!("{}", solution.trace);
    solution
}

fn example_1() {
    let solution = run(
        "Square Minimization",
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        Objective::Minimize,
    );
    // (0,0) cost 1 + (1,1) cost 1 = 2
    assert_eq!(solution.value, 2.0);
}

fn example_2() {
    let solution = run(
        "Square Maximization",
        vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        Objective::Maximize,
    );
    // (0,1) profit 2 + (1,0) profit 2 = 4
    assert_eq!(solution.value, 4.0);
}

fn example_3() {
    let solution = run(
        "Unbalanced (2 vs 3) with a dummy row",
        vec![vec![4.0, 2.0, 8.0], vec![4.0, 3.0, 7.0]],
        Objective::Minimize,
    );
    assert_eq!(solution.value, 6.0);
}

fn example_4() {
    let solution = run(
        "Needs matrix adjustment",
        vec![
            vec![10.0, 19.0, 8.0, 15.0, 19.0],
            vec![10.0, 18.0, 7.0, 17.0, 19.0],
            vec![13.0, 16.0, 9.0, 14.0, 19.0],
            vec![12.0, 19.0, 8.0, 18.0, 19.0],
            vec![14.0, 17.0, 10.0, 19.0, 19.0],
        ],
        Objective::Minimize,
    );
    // 結果をJSONで出力する（画面側はこれを受け取って表示する）
    println!(
        "{}",
        serde_json::to_string_pretty(&solution.pairs).expect("pairs serialize")
    );
    assert_eq!(solution.value, 67.0);
}
