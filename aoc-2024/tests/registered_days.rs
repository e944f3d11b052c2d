//! Every 2024 day is discovered through plugin registration

use aoc_2024 as _;
use aoc_solver::SolverRegistryBuilder;

#[test]
fn test_all_days_registered_with_year_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2024)
        .unwrap()
        .build();

    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, (1..=9).collect::<Vec<_>>());
    for info in registry.storage().iter_info() {
        assert_eq!(info.parts, 2);
        assert!(info.tags.contains(&"2024"), "day {} lacks the year tag", info.day);
    }
}

#[test]
fn test_tag_filter_selects_parallel_days() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"parallel"))
        .unwrap()
        .build();

    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![6, 7]);
}

#[test]
fn test_bridge_repair_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let input = "190: 10 19\n3267: 81 40 27\n83: 17 5\n156: 15 6\n7290: 6 8 6 15\n\
                 161011: 16 10 13\n192: 17 8 14\n21037: 9 7 18 13\n292: 11 6 16 20\n";
    let mut solver = registry.create_solver(2024, 7, input).unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 7);
    assert_eq!(solver.solve(1).unwrap().answer, "3749");
    assert_eq!(solver.solve(2).unwrap().answer, "11387");
    assert!(solver.solve(3).is_err());
}

#[test]
fn test_parse_error_surfaces_from_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2024, 7, "190 10 19\n"),
        Err(aoc_solver::SolverError::ParseError(_))
    ));
}
