//! Operation variants and request-shape validation.
//!
//! A request body is a JSON object with exactly one key. The key selects an
//! [`OperationKind`]; the value is validated into a typed [`Operation`].
//! Key strings are matched here and nowhere else.

use std::fmt;

use serde_json::{json, Value};

use crate::error::{messages, DispatchError};

/// Largest accepted `fibonacci` input. `F(93)` is the last term below 2^64.
pub const MAX_FIBONACCI_TERMS: usize = 94;

/// Lower bound of the `i64` range as an exact `f64` (-2^63).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
/// Upper bound of the `i64` range as an exact `f64` (2^63, exclusive).
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// The five recognized request keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `fibonacci`: first n terms of the sequence.
    Fibonacci,
    /// `prime`: keep the primes of a list.
    Prime,
    /// `lcm`: least common multiple of a list.
    Lcm,
    /// `hcf`: highest common factor of a list.
    Hcf,
    /// `AI`: one-word answer to a question.
    Ai,
}

impl OperationKind {
    /// Every kind, in wire-documentation order.
    pub const ALL: [OperationKind; 5] = [
        Self::Fibonacci,
        Self::Prime,
        Self::Lcm,
        Self::Hcf,
        Self::Ai,
    ];

    /// Looks up a kind by its request key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fibonacci" => Some(Self::Fibonacci),
            "prime" => Some(Self::Prime),
            "lcm" => Some(Self::Lcm),
            "hcf" => Some(Self::Hcf),
            "AI" => Some(Self::Ai),
            _ => None,
        }
    }

    /// Returns the request key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Prime => "prime",
            Self::Lcm => "lcm",
            Self::Hcf => "hcf",
            Self::Ai => "AI",
        }
    }

    /// The validation error reported when the value has the wrong shape.
    pub fn input_error(self) -> DispatchError {
        DispatchError::validation(match self {
            Self::Fibonacci => messages::FIBONACCI_INPUT,
            Self::Prime => messages::PRIME_INPUT,
            Self::Lcm => messages::LCM_INPUT,
            Self::Hcf => messages::HCF_INPUT,
            Self::Ai => messages::AI_INPUT,
        })
    }

    /// Validates `value` against this kind's input constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] of kind `Validation` carrying the
    /// operation-specific message.
    pub fn parse(self, value: &Value) -> Result<Operation, DispatchError> {
        match self {
            Self::Fibonacci => {
                let n = as_integer(value)
                    .filter(|n| *n >= 0)
                    .ok_or_else(|| self.input_error())?;
                let n = usize::try_from(n)
                    .ok()
                    .filter(|n| *n <= MAX_FIBONACCI_TERMS)
                    .ok_or_else(|| {
                        DispatchError::validation(format!(
                            "{} no greater than {MAX_FIBONACCI_TERMS}",
                            messages::FIBONACCI_INPUT
                        ))
                    })?;
                Ok(Operation::Fibonacci(n))
            }
            // Non-integer elements are dropped, not rejected.
            Self::Prime => {
                let items = value.as_array().ok_or_else(|| self.input_error())?;
                Ok(Operation::Prime(items.iter().filter_map(as_integer).collect()))
            }
            Self::Lcm => integer_list(value)
                .map(Operation::Lcm)
                .ok_or_else(|| self.input_error()),
            Self::Hcf => integer_list(value)
                .map(Operation::Hcf)
                .ok_or_else(|| self.input_error()),
            Self::Ai => value
                .as_str()
                .filter(|s| !s.trim().is_empty())
                .map(|s| Operation::Ai(s.to_string()))
                .ok_or_else(|| self.input_error()),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated request, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Number of terms to produce.
    Fibonacci(usize),
    /// Integer elements of the input, in input order.
    Prime(Vec<i64>),
    /// At least two integers.
    Lcm(Vec<i64>),
    /// At least two integers.
    Hcf(Vec<i64>),
    /// The question, as submitted.
    Ai(String),
}

impl Operation {
    /// Validates a request body into an operation.
    ///
    /// Walks the checks in order and stops at the first failure:
    /// key count, key name, then the value's shape.
    ///
    /// # Errors
    ///
    /// Returns a `Shape` error for a body that is not a single-key object or
    /// whose key is unknown, and a `Validation` error for a bad value.
    pub fn from_request(body: &Value) -> Result<Self, DispatchError> {
        let (key, value) = single_entry(body)?;
        let kind =
            OperationKind::from_key(key).ok_or_else(|| DispatchError::shape(messages::INVALID_KEY))?;
        kind.parse(value)
    }

    /// Returns the kind of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Fibonacci(_) => OperationKind::Fibonacci,
            Self::Prime(_) => OperationKind::Prime,
            Self::Lcm(_) => OperationKind::Lcm,
            Self::Hcf(_) => OperationKind::Hcf,
            Self::Ai(_) => OperationKind::Ai,
        }
    }
}

/// The result of a successful operation, placed in the `data` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    /// Fibonacci terms.
    Sequence(Vec<u64>),
    /// Filtered integers (primes).
    Integers(Vec<i64>),
    /// A single non-negative integer (lcm, hcf).
    Integer(u64),
    /// A one-word answer.
    Word(String),
}

impl From<OperationOutput> for Value {
    fn from(output: OperationOutput) -> Self {
        match output {
            OperationOutput::Sequence(terms) => json!(terms),
            OperationOutput::Integers(values) => json!(values),
            OperationOutput::Integer(n) => json!(n),
            OperationOutput::Word(word) => Value::String(word),
        }
    }
}

/// Reads a JSON number as an integer.
///
/// Accepts floats with no fractional part (`5.0`), mirroring how JSON
/// clients commonly treat numbers. Returns `None` for anything else,
/// including integers outside the `i64` range.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(f))
        .map(|f| f as i64)
}

/// Returns the only `(key, value)` pair of an object.
fn single_entry(body: &Value) -> Result<(&str, &Value), DispatchError> {
    let mut entries = body.as_object().into_iter().flat_map(|map| map.iter());
    match (entries.next(), entries.next()) {
        (Some((key, value)), None) => Ok((key.as_str(), value)),
        _ => Err(DispatchError::shape(messages::EXACTLY_ONE_KEY)),
    }
}

/// An array of at least two elements, every one an integer.
fn integer_list(value: &Value) -> Option<Vec<i64>> {
    let items = value.as_array().filter(|items| items.len() >= 2)?;
    items.iter().map(as_integer).collect()
}
