use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2033, day = 24, tags = ["test", "combined"])]
struct CombinedMacroSolver;

impl AocParser for CombinedMacroSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2033, day = 25)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_combined_solver_auto_registers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2033, 24, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");
}

#[test]
fn test_plugin_metadata() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.storage().get_info(2033, 24).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "combined"]);

    let info = registry.storage().get_info(2033, 25).unwrap();
    assert_eq!(info.parts, 1);
    assert!(info.tags.is_empty());
}

#[test]
fn test_tag_filtering() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2033, 24));
    assert!(!registry.storage().contains(2033, 25));
}
