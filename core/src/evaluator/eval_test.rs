//! Unit tests for the evaluator.

use super::*;
use crate::{
    ToString, Vec,
    parser::{IntegerParser, NumberParser, ParseError},
    test_utils::init_test_logging,
    vec,
};
use core::cell::RefCell;
use pretty_assertions::assert_eq;

/// Parser double that returns canned values and records every token it sees.
#[derive(Default)]
struct ScriptedParser {
    answers: Vec<(&'static str, i64)>,
    calls: RefCell<Vec<crate::String>>,
}

impl ScriptedParser {
    fn with(answers: &[(&'static str, i64)]) -> Self {
        Self {
            answers: answers.to_vec(),
            calls: RefCell::default(),
        }
    }

    fn calls(&self) -> Vec<crate::String> {
        self.calls.borrow().clone()
    }
}

impl NumberParser for ScriptedParser {
    fn parse(&self, token: &str) -> Result<i64, ParseError> {
        self.calls.borrow_mut().push(token.to_string());
        self.answers
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, value)| value)
            .ok_or_else(|| ParseError::InvalidDigit {
                token: token.to_string(),
            })
    }
}

fn run(tokens: &[&str]) -> Evaluator {
    let mut rpn = Evaluator::default();
    for token in tokens {
        rpn.enter(token)
            .unwrap_or_else(|e| panic!("token {token:?} failed: {e}"));
    }
    rpn
}

fn top_first(rpn: &Evaluator<impl NumberParser>) -> Vec<i64> {
    rpn.stack().iter_top_first().copied().collect()
}

#[test]
fn test_single_number_is_pushed() {
    let rpn = run(&["42"]);
    assert_eq!(rpn.stack().len(), 1);
    assert_eq!(rpn.stack().peek(), Some(&42));
}

#[test]
fn test_multiple_numbers_are_pushed_in_order() {
    let values = [7, -3, 1_000_000, 0, i64::MAX, i64::MIN];
    let mut rpn = Evaluator::default();

    for (count, value) in values.iter().enumerate() {
        rpn.enter(&value.to_string()).unwrap();
        assert_eq!(rpn.stack().len(), count + 1);
        assert_eq!(rpn.stack().peek(), Some(value));
    }
}

#[test]
fn test_number_goes_through_injected_parser_once() {
    let parser = ScriptedParser::with(&[("seven", 7)]);
    let mut rpn = Evaluator::new(&parser);

    rpn.enter("seven").unwrap();

    assert_eq!(rpn.stack().peek(), Some(&7));
    assert_eq!(parser.calls(), vec!["seven".to_string()]);
}

#[test]
fn test_parser_result_is_pushed_not_token_text() {
    let parser = ScriptedParser::with(&[("1", 100), ("2", 200), ("3", 300)]);
    let mut rpn = Evaluator::new(&parser);

    for token in ["1", "2", "3"] {
        rpn.enter(token).unwrap();
    }

    assert_eq!(top_first(&rpn), vec![300, 200, 100]);
    assert_eq!(parser.calls(), vec!["1", "2", "3"]);
}

#[test]
fn test_operators_never_reach_parser() {
    let parser = ScriptedParser::with(&[("a", 2), ("b", 5)]);
    let mut rpn = Evaluator::new(&parser);

    rpn.enter("a").unwrap();
    rpn.enter("b").unwrap();
    rpn.enter("*").unwrap();
    rpn.enter("a").unwrap();
    rpn.enter("+").unwrap();

    assert_eq!(top_first(&rpn), vec![12]);
    assert_eq!(parser.calls(), vec!["a", "b", "a"]);
}

#[test]
fn test_parse_failure_becomes_unknown_operation() {
    init_test_logging();
    let parser = ScriptedParser::with(&[]);
    let mut rpn = Evaluator::new(&parser);

    let err = rpn.enter("ABC").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownOperation);
    assert_eq!(err.token(), "ABC");
    assert_eq!(err.to_string(), "Unknown operation.");
    assert!(rpn.stack().is_empty());
}

#[test]
fn test_unknown_tokens() {
    let mut rpn = run(&["1", "2"]);
    for token in ["ABC", "DEFG", "", " ", "-", "/", "++", " +", "*2", "1.5"] {
        let err = rpn.enter(token).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOperation, "token {token:?}");
        assert_eq!(top_first(&rpn), vec![2, 1]);
    }
}

#[test]
fn test_addition_on_empty_stack() {
    let mut rpn = Evaluator::default();
    let err = rpn.enter("+").unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InsufficientOperands {
            required: 2,
            available: 0
        }
    );
    assert_eq!(err.to_string(), "Too few elements on stack.");
    assert!(rpn.stack().is_empty());
}

#[test]
fn test_addition_with_one_element() {
    let mut rpn = run(&["5"]);
    let err = rpn.enter("+").unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::InsufficientOperands {
            required: 2,
            available: 1
        }
    );
    assert_eq!(top_first(&rpn), vec![5]);
}

#[test]
fn test_multiplication_on_empty_stack() {
    let mut rpn = Evaluator::default();
    let err = rpn.enter("*").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InsufficientOperands { .. }));
    assert!(rpn.stack().is_empty());
}

#[test]
fn test_multiplication_with_one_element() {
    let mut rpn = run(&["-8"]);
    let err = rpn.enter("*").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InsufficientOperands { .. }));
    assert_eq!(top_first(&rpn), vec![-8]);
}

#[test]
fn test_addition() {
    let cases = [(3, 4), (-100_000, 9_999), (0, 0), (-1, 1), (12_345, -54_321)];
    for (a, b) in cases {
        let rpn = run(&[a.to_string().as_str(), b.to_string().as_str(), "+"]);
        assert_eq!(top_first(&rpn), vec![a + b], "{a} {b} +");
    }
}

#[test]
fn test_multiplication() {
    let cases = [(3, 4), (-100_000, 9_999), (0, 7), (-1, -1), (12_345, -543)];
    for (a, b) in cases {
        let rpn = run(&[a.to_string().as_str(), b.to_string().as_str(), "*"]);
        assert_eq!(top_first(&rpn), vec![a * b], "{a} {b} *");
    }
}

#[test]
fn test_operators_only_touch_top_two() {
    let rpn = run(&["1", "2", "3", "+"]);
    assert_eq!(top_first(&rpn), vec![5, 1]);

    let rpn = run(&["10", "2", "3", "*"]);
    assert_eq!(top_first(&rpn), vec![6, 10]);
}

#[test]
fn test_end_to_end_session() {
    let mut rpn = run(&["3", "4", "+"]);
    assert_eq!(top_first(&rpn), vec![7]);

    rpn.enter("2").unwrap();
    rpn.enter("*").unwrap();
    assert_eq!(top_first(&rpn), vec![14]);
}

#[test]
fn test_repeated_failure_is_idempotent() {
    let mut rpn = run(&["9"]);

    let first = rpn.enter("+").unwrap_err();
    let after_first = top_first(&rpn);
    let second = rpn.enter("+").unwrap_err();

    assert_eq!(first.kind(), second.kind());
    assert_eq!(after_first, top_first(&rpn));

    let first = rpn.enter("XYZ").unwrap_err();
    let second = rpn.enter("XYZ").unwrap_err();
    assert_eq!(first, second);
    assert_eq!(top_first(&rpn), vec![9]);
}

#[test]
fn test_wrapping_overflow_by_default() {
    let max = i64::MAX.to_string();
    let rpn = run(&[max.as_str(), "1", "+"]);
    assert_eq!(top_first(&rpn), vec![i64::MIN]);

    let rpn = run(&[max.as_str(), "2", "*"]);
    assert_eq!(top_first(&rpn), vec![-2]);
}

#[test]
fn test_checked_overflow_leaves_stack_unchanged() {
    let options = EvaluatorOptions {
        overflow: OverflowMode::Checked,
        ..EvaluatorOptions::default()
    };
    let mut rpn = Evaluator::with_options(IntegerParser, options);
    rpn.enter(&i64::MAX.to_string()).unwrap();
    rpn.enter("2").unwrap();

    let err = rpn.enter("+").unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::ArithmeticOverflow {
            operator: Operator::Add
        }
    );
    assert_eq!(err.to_string(), "Arithmetic overflow in '+'.");
    assert_eq!(top_first(&rpn), vec![2, i64::MAX]);

    let err = rpn.enter("*").unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::ArithmeticOverflow {
            operator: Operator::Mul
        }
    );
    assert_eq!(top_first(&rpn), vec![2, i64::MAX]);
}

#[test]
fn test_checked_mode_allows_in_range_results() {
    let options = EvaluatorOptions {
        overflow: OverflowMode::Checked,
        ..EvaluatorOptions::default()
    };
    let mut rpn = Evaluator::with_options(IntegerParser, options);
    for token in ["-4", "6", "*", "30", "+"] {
        rpn.enter(token).unwrap();
    }
    assert_eq!(top_first(&rpn), vec![6]);
}

#[test]
fn test_full_stack_rejects_push() {
    let options = EvaluatorOptions {
        max_depth: 2,
        ..EvaluatorOptions::default()
    };
    let mut rpn = Evaluator::with_options(IntegerParser, options);
    rpn.enter("1").unwrap();
    rpn.enter("2").unwrap();

    let err = rpn.enter("3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StackOverflow { max_depth: 2 });
    assert_eq!(top_first(&rpn), vec![2, 1]);

    // Operators still work on a full stack and free a slot.
    rpn.enter("+").unwrap();
    rpn.enter("3").unwrap();
    assert_eq!(top_first(&rpn), vec![3, 3]);
}

#[test]
fn test_boxed_parser() {
    let parser: crate::Box<dyn NumberParser> = crate::Box::new(crate::parser::LiteralParser);
    let mut rpn = Evaluator::new(parser);
    rpn.enter("0x10").unwrap();
    rpn.enter("0b11").unwrap();
    rpn.enter("*").unwrap();
    assert_eq!(rpn.stack().peek(), Some(&48));
}

#[test]
fn test_accessors() {
    let rpn = Evaluator::default();
    assert_eq!(rpn.options(), &EvaluatorOptions::default());
    assert_eq!(rpn.parser(), &IntegerParser);
    assert_eq!(rpn.stack().max_size(), rpn.options().max_depth);
}
