use std::fmt::Display;
use study_hungarian_method::Objective;
use study_hungarian_method::labeled::LabeledCostMatrix;

fn main() {
    example_1();
    example_2();
}

fn example<A: Ord + Clone + Display, T: Ord + Clone + Display>(
    description: &str,
    candidates: Vec<(A, T, f64)>,
    objective: Objective,
    expect_value: f64,
) {
    println!("\n--- Example : {description} ---");

    let matrix = LabeledCostMatrix::from_triples(candidates);
    let result = matrix
        .solve(objective)
        .expect("Invalid candidates. Expect every agent to have a cost for every task");

    println!("\n--- Solved with following result ---");
    println!("Objective value : {}", result.solution.value);
    println!("Assignment:");
    for (agent, task) in result.assignments.iter() {
        match task {
            None => println!(" {agent} -- None"),
            Some(task) => println!(" {agent} --- {task}"),
        }
    }
    println!();

    assert_eq!(expect_value, result.solution.value);
}

fn example_1() {
    let description = "Workers and jobs";
    let candidates = vec![
        ("alice", "wash", 3.0),
        ("alice", "cook", 1.0),
        ("alice", "shop", 4.0),
        ("bob", "wash", 3.0),
        ("bob", "cook", 2.0),
        ("bob", "shop", 5.0),
        ("carol", "wash", 4.0),
        ("carol", "cook", 2.0),
        ("carol", "shop", 3.0),
    ];
    example(description, candidates, Objective::Minimize, 7.0);
}

fn example_2() {
    let description = "More machines than operators (maximize output)";
    let candidates = vec![
        ("op-1", "lathe", 8.0),
        ("op-1", "mill", 6.0),
        ("op-1", "press", 3.0),
        ("op-2", "lathe", 7.0),
        ("op-2", "mill", 9.0),
        ("op-2", "press", 4.0),
    ];
    example(description, candidates, Objective::Maximize, 17.0);
}
