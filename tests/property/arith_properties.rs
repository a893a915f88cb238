use arith_suite::{add, checked_add, checked_subtract, subtract, Case, Operation, Outcome};
use proptest::prelude::*;

// A quarter of the i64 range, so sums and differences never overflow.
const BOUND: i64 = i64::MAX / 4;

fn operand() -> impl Strategy<Value = i64> {
    -BOUND..=BOUND
}

proptest! {
    #[test]
    fn test_add_matches_operator(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b), a + b);
    }

    #[test]
    fn test_subtract_matches_operator(a in operand(), b in operand()) {
        prop_assert_eq!(subtract(a, b), a - b);
    }

    #[test]
    fn test_add_is_commutative(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn test_subtract_inverts_add(a in operand(), b in operand()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }

    #[test]
    fn test_checked_agrees_with_std(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(checked_add(a, b).ok(), a.checked_add(b));
        prop_assert_eq!(checked_subtract(a, b).ok(), a.checked_sub(b));
    }

    #[test]
    fn test_subtract_case_passes_iff_expectation_holds(
        a in operand(),
        b in operand(),
        offset in -3i64..=3,
    ) {
        let case = Case::new("generated", Operation::Subtract, a, b, a - b + offset, "generated");
        let outcome = case.evaluate();
        if offset == 0 {
            prop_assert_eq!(outcome, Outcome::Pass);
        } else {
            prop_assert_eq!(outcome, Outcome::Fail { actual: a - b });
        }
    }

    #[test]
    fn test_add_case_passes_iff_expectation_holds(
        a in operand(),
        b in operand(),
        offset in -3i64..=3,
    ) {
        let case = Case::new("generated", Operation::Add, a, b, a + b + offset, "generated");
        let outcome = case.evaluate();
        if offset == 0 {
            prop_assert_eq!(outcome, Outcome::Pass);
        } else {
            prop_assert_eq!(outcome, Outcome::Fail { actual: a + b });
        }
    }
}
