use super::*;
use proptest::prelude::*;

fn operands(values: &[u64]) -> Vec<Operand> {
    values.iter().copied().map(Operand::new).collect()
}

/// Applies `operator` in `u128` without any overflow handling.
fn apply_exact(operator: BasicOperator, acc: u128, operand: &Operand) -> u128 {
    let value = u128::from(operand.value());
    match operator {
        BasicOperator::Add => acc.checked_add(value),
        BasicOperator::Multiply => acc.checked_mul(value),
        BasicOperator::Concatenate => 10u128
            .checked_pow(operand.digits())
            .and_then(|shift| acc.checked_mul(shift))
            .and_then(|shifted| shifted.checked_add(value)),
    }
    .expect("test rows stay within u128")
}

/// Every value reachable from `values`, computed exactly without pruning.
fn outcomes(values: &[Operand], operators: &[BasicOperator]) -> Vec<u128> {
    fn evaluate(acc: u128, rest: &[Operand], operators: &[BasicOperator], out: &mut Vec<u128>) {
        match rest.split_first() {
            None => out.push(acc),
            Some((next, rest)) => {
                for &op in operators {
                    evaluate(apply_exact(op, acc, next), rest, operators, out);
                }
            }
        }
    }

    let mut results = Vec::new();
    if let Some((first, rest)) = values.split_first() {
        evaluate(u128::from(first.value()), rest, operators, &mut results);
    }
    results
}

fn brute_force(target: u64, values: &[Operand], operators: &[BasicOperator]) -> bool {
    outcomes(values, operators).contains(&u128::from(target))
}

// ----------------------------------------------------------------------------
// Operands and concatenation
// ----------------------------------------------------------------------------

#[test]
fn test_powers_of_ten_table() {
    assert_eq!(POWERS_OF_TEN[0], 1);
    assert_eq!(POWERS_OF_TEN[1], 10);
    assert_eq!(POWERS_OF_TEN[19], 10_000_000_000_000_000_000);
    for pair in POWERS_OF_TEN.windows(2) {
        assert_eq!(pair[1], pair[0] * 10);
    }
}

#[test]
fn test_digit_count() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(99), 2);
    assert_eq!(digit_count(100), 3);
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn test_operand_parse_and_shift() {
    let operand: Operand = "486".parse().unwrap();
    assert_eq!(operand.value(), 486);
    assert_eq!(operand.digits(), 3);
    assert_eq!(operand.shift(), Some(1000));
    assert_eq!(Operand::new(u64::MAX).shift(), None);
    assert!("-4".parse::<Operand>().is_err());
}

#[test]
fn test_concatenate_examples() {
    assert_eq!(concatenate(12, &Operand::new(34)), Some(1234));
    assert_eq!(concatenate(1, &Operand::new(0)), Some(10));
    assert_eq!(concatenate(0, &Operand::new(0)), Some(0));
    assert_eq!(concatenate(9, &Operand::new(99)), Some(999));
    assert_eq!(concatenate(48, &Operand::new(6)), Some(486));
}

#[test]
fn test_concatenate_overflow() {
    assert_eq!(concatenate(u64::MAX, &Operand::new(1)), None);
    assert_eq!(concatenate(2, &Operand::new(10_000_000_000_000_000_000)), None);
    assert_eq!(concatenate(0, &Operand::new(u64::MAX)), Some(u64::MAX));
    assert_eq!(concatenate(1, &Operand::new(u64::MAX)), None);
}

#[test]
fn test_basic_operators() {
    let five = Operand::new(5);
    assert_eq!(BasicOperator::Add.apply(7, &five), Some(12));
    assert_eq!(BasicOperator::Multiply.apply(7, &five), Some(35));
    assert_eq!(BasicOperator::Concatenate.apply(7, &five), Some(75));
    assert_eq!(BasicOperator::Add.apply(u64::MAX, &five), None);
    assert_eq!(BasicOperator::Multiply.apply(u64::MAX, &five), None);
}

#[test]
fn test_apply_after_overflow() {
    let zero = Operand::new(0);
    let five = Operand::new(5);
    assert_eq!(BasicOperator::Multiply.apply_overflowed(&zero), Some(0));
    assert_eq!(BasicOperator::Multiply.apply_overflowed(&five), None);
    assert_eq!(BasicOperator::Add.apply_overflowed(&zero), None);
    assert_eq!(BasicOperator::Concatenate.apply_overflowed(&zero), None);
}

// ----------------------------------------------------------------------------
// Search
// ----------------------------------------------------------------------------

#[test]
fn test_puzzle_rows() {
    let arithmetic = &BasicOperator::ARITHMETIC;
    let all = &BasicOperator::ALL;

    assert!(is_possible(190, &operands(&[10, 19]), arithmetic).unwrap());
    assert!(is_possible(3267, &operands(&[81, 40, 27]), arithmetic).unwrap());
    assert!(is_possible(292, &operands(&[11, 6, 16, 20]), arithmetic).unwrap());
    assert!(!is_possible(7290, &operands(&[6, 8, 6, 15]), arithmetic).unwrap());
    assert!(is_possible(7290, &operands(&[6, 8, 6, 15]), all).unwrap());
    assert!(is_possible(156, &operands(&[15, 6]), all).unwrap());
    assert!(is_possible(192, &operands(&[17, 8, 14]), all).unwrap());
    assert!(!is_possible(161011, &operands(&[16, 10, 13]), all).unwrap());
}

#[test]
fn test_add_only_cannot_reach_larger_target() {
    let add_only = [BasicOperator::Add];
    assert!(!is_possible(21, &operands(&[1, 2, 3]), &add_only).unwrap());
    assert!(is_possible(6, &operands(&[1, 2, 3]), &add_only).unwrap());
}

#[test]
fn test_single_operand() {
    let single = operands(&[42]);
    assert!(is_possible(42, &single, &BasicOperator::ALL).unwrap());
    assert!(!is_possible(41, &single, &BasicOperator::ALL).unwrap());
    assert!(is_possible(42, &single, &[BasicOperator::Add]).unwrap());
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        is_possible(0, &[], &BasicOperator::ALL),
        Err(SearchError::EmptyOperands)
    );
    let empty: [BasicOperator; 0] = [];
    assert_eq!(
        is_possible(1, &operands(&[1]), &empty),
        Err(SearchError::EmptyOperators)
    );
}

#[test]
fn test_zero_operands() {
    let arithmetic = &BasicOperator::ARITHMETIC;
    assert!(is_possible(0, &operands(&[0, 0, 0]), arithmetic).unwrap());
    assert!(is_possible(0, &operands(&[5, 0]), arithmetic).unwrap());
    assert!(is_possible(50, &operands(&[5, 0]), &BasicOperator::ALL).unwrap());
    // 5 * 0 + 3 passes through an accumulator above the target
    assert!(is_possible(3, &operands(&[5, 0, 3]), arithmetic).unwrap());
    assert!(!is_possible(3, &operands(&[5, 3, 0]), &[BasicOperator::Add]).unwrap());
}

#[test]
fn test_multiply_by_zero_is_not_monotone() {
    let zero = Operand::new(0);
    let one = Operand::new(1);
    assert!(!BasicOperator::Multiply.never_decreases_with(&zero));
    assert!(BasicOperator::Multiply.never_decreases_with(&one));
    assert!(BasicOperator::Add.never_decreases_with(&zero));
    assert!(BasicOperator::Concatenate.never_decreases_with(&zero));
}

#[test]
fn test_overflow_is_pruned_not_wrapped() {
    // 2^32 * 2^32 wraps to 0 in unchecked arithmetic
    let big = operands(&[1 << 32, 1 << 32]);
    assert!(!is_possible(0, &big, &[BasicOperator::Multiply]).unwrap());
    assert!(is_possible(1 << 33, &big, &BasicOperator::ARITHMETIC).unwrap());
}

#[test]
fn test_zero_multiplicand_recovers_from_overflow() {
    // 9999999999 || 9999999999 exceeds u64::MAX, then * 0 == 0
    let row = operands(&[9_999_999_999, 9_999_999_999, 0]);
    let concat_mul = [BasicOperator::Concatenate, BasicOperator::Multiply];
    assert!(is_possible(0, &row, &concat_mul).unwrap());
    assert!(brute_force(0, &row, &concat_mul));

    // both u64::MAX + 2 and u64::MAX * 2 overflow before the zero
    let row = operands(&[u64::MAX, 2, 0]);
    assert!(is_possible(0, &row, &BasicOperator::ARITHMETIC).unwrap());
    assert!(!is_possible(0, &row, &[BasicOperator::Add]).unwrap());
    assert!(!is_possible(0, &operands(&[u64::MAX, 2]), &BasicOperator::ARITHMETIC).unwrap());
}

#[test]
fn test_overflow_then_zero_then_more_operands() {
    // (huge * 0) + 7
    let row = operands(&[u64::MAX, 10, 0, 7]);
    assert!(is_possible(7, &row, &BasicOperator::ARITHMETIC).unwrap());
    // (huge * 0) || 7
    assert!(is_possible(7, &row, &[BasicOperator::Multiply, BasicOperator::Concatenate]).unwrap());
    assert!(!is_possible(8, &row, &BasicOperator::ALL).unwrap());
}

#[test]
fn test_closure_operators() {
    let subtract_free_max: [fn(u64, &Operand) -> Option<u64>; 2] = [
        |acc, op| acc.checked_add(op.value()),
        |acc, op| Some(acc.max(op.value())),
    ];
    assert!(is_possible(9, &operands(&[2, 9]), &subtract_free_max).unwrap());
    assert!(is_possible(11, &operands(&[2, 9]), &subtract_free_max).unwrap());
    assert!(!is_possible(10, &operands(&[2, 9]), &subtract_free_max).unwrap());
}

#[test]
fn test_operator_order_does_not_change_result() {
    let reversed = [
        BasicOperator::Concatenate,
        BasicOperator::Multiply,
        BasicOperator::Add,
    ];
    let row = operands(&[6, 8, 6, 15]);
    assert_eq!(
        is_possible(7290, &row, &reversed).unwrap(),
        is_possible(7290, &row, &BasicOperator::ALL).unwrap()
    );
}

fn operator_set() -> impl Strategy<Value = Vec<BasicOperator>> {
    prop::sample::select(vec![
        BasicOperator::ARITHMETIC.to_vec(),
        BasicOperator::ALL.to_vec(),
        vec![BasicOperator::Concatenate, BasicOperator::Multiply],
    ])
}

/// Zeros and values wide enough that two of them overflow `u64`. Three of
/// them still fit in `u128` under any operators.
fn wide_operand() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(0u64),
        0u64..100,
        1_000_000_000u64..=10_000_000_000,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sum_always_reachable(values in prop::collection::vec(0u64..1000, 1..8)) {
        let sum = values.iter().sum();
        prop_assert!(is_possible(sum, &operands(&values), &BasicOperator::ARITHMETIC).unwrap());
    }

    #[test]
    fn prop_product_always_reachable(values in prop::collection::vec(0u64..50, 1..6)) {
        let product = values.iter().product();
        prop_assert!(is_possible(product, &operands(&values), &BasicOperator::ALL).unwrap());
    }

    #[test]
    fn prop_single_operand_matches_only_itself(value in 0u64..1_000_000, target in 0u64..1_000_000) {
        let result = is_possible(target, &operands(&[value]), &BasicOperator::ALL).unwrap();
        prop_assert_eq!(result, target == value);
    }

    #[test]
    fn prop_concatenate_matches_string_concat(lhs in 0u64..1_000_000, rhs in 0u64..1_000_000) {
        let expected: u64 = format!("{lhs}{rhs}").parse().unwrap();
        prop_assert_eq!(concatenate(lhs, &Operand::new(rhs)), Some(expected));
    }

    #[test]
    fn prop_pruning_matches_brute_force(
        values in prop::collection::vec(0u64..20, 1..6),
        target in 0u64..5000,
        with_concat in any::<bool>(),
    ) {
        let operators: &[BasicOperator] = if with_concat {
            &BasicOperator::ALL
        } else {
            &BasicOperator::ARITHMETIC
        };
        let row = operands(&values);
        prop_assert_eq!(
            is_possible(target, &row, operators).unwrap(),
            brute_force(target, &row, operators)
        );
    }

    #[test]
    fn prop_wide_operands_match_exact_evaluation(
        values in prop::collection::vec(wide_operand(), 1..=3),
        operators in operator_set(),
        pick in any::<prop::sample::Index>(),
        reachable in any::<bool>(),
        fallback in prop_oneof![Just(0u64), any::<u64>()],
    ) {
        let row = operands(&values);
        let in_range: Vec<u64> = outcomes(&row, &operators)
            .into_iter()
            .filter_map(|value| u64::try_from(value).ok())
            .collect();
        let target = if reachable && !in_range.is_empty() {
            in_range[pick.index(in_range.len())]
        } else {
            fallback
        };
        prop_assert_eq!(
            is_possible(target, &row, &operators).unwrap(),
            brute_force(target, &row, &operators)
        );
    }
}
