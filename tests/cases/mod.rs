use once_cell::sync::Lazy;
use rpncalc::ErrorKind;

/// What a single token is expected to do.
pub enum Step {
    /// The token is accepted and the stack (top first) becomes this.
    Ok(&'static str, &'static [i64]),
    /// The token is rejected with this kind; the stack must not change.
    Err(&'static str, ErrorKind),
}

pub struct SessionCase {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

const TOO_FEW_0: ErrorKind = ErrorKind::InsufficientOperands {
    required: 2,
    available: 0,
};
const TOO_FEW_1: ErrorKind = ErrorKind::InsufficientOperands {
    required: 2,
    available: 1,
};

pub static SESSION_CASES: Lazy<Vec<SessionCase>> = Lazy::new(|| {
    use Step::*;
    vec![
        SessionCase {
            name: "add_then_multiply",
            steps: vec![
                Ok("3", &[3]),
                Ok("4", &[4, 3]),
                Ok("+", &[7]),
                Ok("2", &[2, 7]),
                Ok("*", &[14]),
            ],
        },
        SessionCase {
            name: "operators_on_empty_stack",
            steps: vec![Err("+", TOO_FEW_0), Err("*", TOO_FEW_0)],
        },
        SessionCase {
            name: "operators_on_single_value",
            steps: vec![Ok("11", &[11]), Err("+", TOO_FEW_1), Err("*", TOO_FEW_1)],
        },
        SessionCase {
            name: "unknown_tokens_leave_stack_alone",
            steps: vec![
                Ok("1", &[1]),
                Err("ABC", ErrorKind::UnknownOperation),
                Err("CDEFGH", ErrorKind::UnknownOperation),
                Err("-", ErrorKind::UnknownOperation),
                Err("", ErrorKind::UnknownOperation),
                Ok("2", &[2, 1]),
            ],
        },
        SessionCase {
            name: "negative_numbers",
            steps: vec![
                Ok("-100000", &[-100000]),
                Ok("9999", &[9999, -100000]),
                Ok("+", &[-90001]),
                Ok("-2", &[-2, -90001]),
                Ok("*", &[180002]),
            ],
        },
        SessionCase {
            name: "padded_number",
            steps: vec![Ok(" 12 ", &[12]), Err(" +", ErrorKind::UnknownOperation)],
        },
        SessionCase {
            name: "deep_stack_reduces_from_top",
            steps: vec![
                Ok("2", &[2]),
                Ok("3", &[3, 2]),
                Ok("4", &[4, 3, 2]),
                Ok("*", &[12, 2]),
                Ok("+", &[14]),
                Err("+", TOO_FEW_1),
            ],
        },
    ]
});
