#[cfg(test)]
mod tests {
    use binfit::entities::{BinFitInstance, Combination, Solution};
    use binfit::enumerate::Enumerator;
    use binfit::eval::Objective;
    use binfit::factory::{AnySolver, create_solvers};
    use binfit::strategies::{Solver, StrategyKind};
    use binfit::util::assertions;
    use binfit::{BinFitError, SolverConfig, TieBreak};
    use itertools::Itertools;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn combos(expected: &[&[u64]]) -> Vec<Combination> {
        expected
            .iter()
            .map(|sizes| Combination::new(sizes.to_vec()))
            .collect_vec()
    }

    fn solve_all(load: i64, bins: &[i64]) -> Vec<Solution> {
        create_solvers("all", load, bins, SolverConfig::default())
            .unwrap()
            .iter()
            .map(|solver| solver.solve().unwrap())
            .collect_vec()
    }

    #[test_case(6, &[2, 3, 5], &[&[3, 3]], &[&[3, 3]], &[&[3, 3]]; "load 6")]
    #[test_case(9, &[2, 3, 5], &[&[5, 5]], &[&[2, 2, 5], &[3, 3, 3]], &[&[2, 2, 5], &[3, 3, 3]]; "load 9")]
    #[test_case(11, &[2, 3, 5], &[&[3, 3, 5]], &[&[3, 3, 5]], &[&[3, 3, 5]]; "load 11")]
    #[test_case(0, &[2, 3, 5], &[&[]], &[&[]], &[&[]]; "load 0")]
    fn reference_scenarios(
        load: i64,
        bins: &[i64],
        length: &[&[u64]],
        capacity: &[&[u64]],
        combo: &[&[u64]],
    ) {
        init_logger();
        let solutions = solve_all(load, bins);
        let strategies = solutions.iter().map(|s| s.strategy).collect_vec();
        assert_eq!(strategies, StrategyKind::ALL.to_vec());

        assert_eq!(solutions[0].combinations, combos(length));
        assert_eq!(solutions[1].combinations, combos(capacity));
        assert_eq!(solutions[2].combinations, combos(combo));
    }

    #[test_case(0, &[2, 3, 5])]
    #[test_case(6, &[2, 3, 5])]
    #[test_case(9, &[2, 3, 5])]
    #[test_case(17, &[3, 7, 11])]
    #[test_case(23, &[4, 9, 10])]
    #[test_case(13, &[6])]
    #[test_case(31, &[5, 8, 12, 13])]
    fn winners_are_optimal_over_the_candidate_space(load: i64, bins: &[i64]) {
        let instance = BinFitInstance::new(load, bins).unwrap();
        let objectives = Enumerator::new(&instance, None)
            .candidates()
            .map(|c| Objective::evaluate(&c, instance.load()).unwrap())
            .collect_vec();
        let shortest = objectives.iter().map(|o| o.length).min().unwrap();
        let tightest = objectives.iter().map(|o| o.overcapacity).min().unwrap();

        for solution in solve_all(load, bins) {
            assert!(assertions::solution_is_consistent(&instance, &solution));
            let objective = solution.objective.unwrap();
            match solution.strategy {
                StrategyKind::LengthFirst => {
                    assert_eq!(objective.length, shortest);
                    let tightest_at_shortest = objectives
                        .iter()
                        .filter(|o| o.length == shortest)
                        .map(|o| o.overcapacity)
                        .min()
                        .unwrap();
                    assert_eq!(objective.overcapacity, tightest_at_shortest);
                }
                StrategyKind::CapacityFirst | StrategyKind::Combo => {
                    assert_eq!(objective, *objectives.iter().min().unwrap());
                    assert_eq!(objective.overcapacity, tightest);
                }
            }
        }
    }

    #[test_case(7, &[7, 2])]
    #[test_case(12, &[5, 12, 30])]
    fn bin_equal_to_load_is_an_exact_single_bin(load: i64, bins: &[i64]) {
        for solution in solve_all(load, bins) {
            assert_eq!(solution.combinations, vec![Combination::new(vec![load as u64])]);
            assert_eq!(
                solution.objective,
                Some(Objective {
                    overcapacity: 0,
                    length: 1
                })
            );
        }
    }

    #[test]
    fn solve_is_idempotent() {
        let solvers = create_solvers("all", 23, &[4, 9, 10], SolverConfig::default()).unwrap();
        for solver in &solvers {
            assert_eq!(solver.solve().unwrap(), solver.solve().unwrap());
        }
    }

    #[test]
    fn duplicate_bins_collapse() {
        let with_duplicates = solve_all(9, &[5, 2, 3, 3, 2, 5]);
        let without = solve_all(9, &[2, 3, 5]);
        assert_eq!(with_duplicates, without);
    }

    #[test_case("length", -1, &[2, 3, 5]; "negative load")]
    #[test_case("capacity", 6, &[]; "no bins")]
    #[test_case("combo", 6, &[2, 0]; "zero bin")]
    fn invalid_input(strategy: &str, load: i64, bins: &[i64]) {
        let err = create_solvers(strategy, load, bins, SolverConfig::default()).unwrap_err();
        assert!(matches!(err, BinFitError::InvalidInput(_)));
    }

    #[test]
    fn unknown_strategy() {
        let err = create_solvers("bogus", 6, &[2, 3, 5], SolverConfig::default()).unwrap_err();
        assert!(matches!(err, BinFitError::UnknownStrategy(s) if s == "bogus"));
    }

    #[test]
    fn length_cap_can_leave_nothing_feasible() {
        let config = SolverConfig {
            max_len: Some(1),
            tie_break: TieBreak::All,
        };
        for solver in create_solvers("all", 9, &[2, 3, 5], config).unwrap() {
            let solution = solver.solve().unwrap();
            assert!(solution.is_empty());
            assert_eq!(solution.to_string(), "[]");
        }
    }

    #[test]
    fn length_cap_restricts_capacity_first() {
        let config = SolverConfig {
            max_len: Some(2),
            ..SolverConfig::default()
        };
        let instance = BinFitInstance::new(9, &[2, 3, 5]).unwrap();
        let solution = AnySolver::new(StrategyKind::CapacityFirst, instance, config)
            .solve()
            .unwrap();
        assert_eq!(solution.combinations, combos(&[&[5, 5]]));
    }

    #[test]
    fn display() {
        let solutions = solve_all(9, &[2, 3, 5]);
        assert_eq!(solutions[0].to_string(), "[(5, 5)]");
        assert_eq!(solutions[1].to_string(), "[(2, 2, 5), (3, 3, 3)]");
        assert_eq!(solve_all(0, &[2])[0].to_string(), "[()]");
    }

    #[test]
    fn solution_serializes() {
        let solution = &solve_all(9, &[2, 3, 5])[1];
        let json = serde_json::to_value(solution).unwrap();
        assert_eq!(json["strategy"], "capacity");
        assert_eq!(json["combinations"], serde_json::json!([[2, 2, 5], [3, 3, 3]]));
        assert_eq!(json["objective"]["overcapacity"], 0);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
        let config: SolverConfig =
            serde_json::from_str(r#"{"max_len": 4, "tie_break": "first"}"#).unwrap();
        assert_eq!(config.max_len, Some(4));
        assert_eq!(config.tie_break, TieBreak::First);
    }
}
