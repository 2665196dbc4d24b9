// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Arithmetic expressions over codes and group values, from which the value
//! of every group is computed.

use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number { value: f64 },
    /// A code, looked up in the value table as it was before the current
    /// level was aggregated.
    Code { code: String },
    /// A group of the current level, that has already been computed.
    Group { id: String },
    Add { params: Vec<Expr> },
    Sub { params: Vec<Expr> },
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            // (a + b) + (c + d) = a + b + c + d
            (Self::Add { params: mut lhs }, Self::Add { params: mut rhs }) => {
                lhs.append(&mut rhs);
                Self::Add { params: lhs }
            }
            // (a + b) + c = a + b + c
            (Self::Add { mut params }, rhs) => {
                params.push(rhs);
                Self::Add { params }
            }
            // a + (b + c) = a + b + c
            (lhs, Self::Add { mut params }) => {
                params.insert(0, lhs);
                Self::Add { params }
            }
            // Catch all other cases
            (lhs, rhs) => Self::Add {
                params: vec![lhs, rhs],
            },
        }
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            // (a - b) - c = a - b - c
            (Self::Sub { mut params }, rhs) => {
                params.push(rhs);
                Self::Sub { params }
            }
            // Catch all other cases
            (lhs, rhs) => Self::Sub {
                params: vec![lhs, rhs],
            },
        }
    }
}

/// Constructors for `Expr`.
impl Expr {
    pub(crate) fn number(value: f64) -> Self {
        Self::Number { value }
    }

    pub(crate) fn code(code: impl Into<String>) -> Self {
        Self::Code { code: code.into() }
    }

    pub(crate) fn group(id: impl Into<String>) -> Self {
        Self::Group { id: id.into() }
    }

    /// Returns the sum of the given expressions, or `0.0` if there are none.
    pub(crate) fn sum(exprs: impl IntoIterator<Item = Expr>) -> Self {
        exprs
            .into_iter()
            .reduce(|a, b| a + b)
            .unwrap_or_else(|| Self::number(0.0))
    }
}

/// Resolves the operands of an `Expr` to values.
pub(crate) trait Resolver {
    fn code(&mut self, code: &str) -> Result<f64, Error>;
    fn group(&mut self, id: &str) -> Result<f64, Error>;
}

/// Evaluation of `Expr`s.
impl Expr {
    /// Evaluates the expression, left to right.
    pub(crate) fn evaluate(&self, resolver: &mut impl Resolver) -> Result<f64, Error> {
        match self {
            Self::Number { value } => Ok(*value),
            Self::Code { code } => resolver.code(code),
            Self::Group { id } => resolver.group(id),
            Self::Add { params } => {
                let mut total = 0.0;
                for param in params {
                    total += param.evaluate(resolver)?;
                }
                Ok(total)
            }
            Self::Sub { params } => {
                let mut params = params.iter();
                let Some(first) = params.next() else {
                    return Err(Error::internal("Can't evaluate an empty subtraction."));
                };
                let mut total = first.evaluate(resolver)?;
                for param in params {
                    total -= param.evaluate(resolver)?;
                }
                Ok(total)
            }
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.generate_string(false))
    }
}

#[derive(PartialEq)]
enum BracketComponents {
    Rest,
    None,
}

/// Display helpers for `Expr`.
impl Expr {
    fn join_params(
        params: &[Expr],
        separator: &str,
        bracket_components: BracketComponents,
        bracket_whole: bool,
    ) -> String {
        let mut result = String::new();
        for (num_components, expression) in params.iter().enumerate() {
            if num_components > 0 {
                result.push_str(separator);
            }
            let bracket = bracket_components == BracketComponents::Rest && num_components > 0;
            result.push_str(&expression.generate_string(bracket));
        }
        if bracket_whole && params.len() > 1 {
            format!("({result})")
        } else {
            result
        }
    }

    fn generate_string(&self, bracket_whole: bool) -> String {
        match self {
            Self::Number { value } => {
                if value.fract() == 0.0 {
                    // For whole numbers, format with one decimal place.
                    format!("{value:.1}")
                } else {
                    format!("{value}")
                }
            }
            Self::Code { code } => format!("#{code}"),
            Self::Group { id } => format!("{{{id}}}"),
            Self::Add { params } => {
                Self::join_params(params, " + ", BracketComponents::None, bracket_whole)
            }
            Self::Sub { params } => {
                Self::join_params(params, " - ", BracketComponents::Rest, bracket_whole)
            }
        }
    }
}
