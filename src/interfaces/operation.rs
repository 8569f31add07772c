// ============================================================================
// Operation Selector
// Names the binary operation an external caller wants applied
// ============================================================================

use super::arithmetic::Arithmetic;
use crate::numeric::{NumericError, NumericResult, SciNumber};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Apply this operation on the given backend
    pub fn apply<A>(self, backend: &A, a: SciNumber, b: SciNumber) -> NumericResult<SciNumber>
    where
        A: Arithmetic + ?Sized,
    {
        let result = match self {
            Operation::Add => backend.add(a, b),
            Operation::Sub => backend.sub(a, b),
            Operation::Mul => backend.mul(a, b),
            Operation::Div => backend.div(a, b),
        };

        if let Err(err) = &result {
            tracing::debug!("{} {} {} on {} failed: {}", a, self, b, backend.name(), err);
        }

        result
    }

    /// Operator symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operation {
    type Err = NumericError;

    /// Parse a name (`add`, `sub`, `mul`, `div`, case-insensitive) or a symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "-" => Ok(Operation::Sub),
            "mul" | "*" | "x" => Ok(Operation::Mul),
            "div" | "/" => Ok(Operation::Div),
            _ => Err(NumericError::InvalidInput),
        }
    }
}
