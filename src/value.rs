use std::cmp::Ordering;
use std::fmt;

/// Numeric quantity carried by number literals and produced by arithmetic.
///
/// The integral/floating split is decided when a literal is parsed (a `.`
/// in the literal text selects `Float`); comparisons and equality are
/// numeric across the two representations, so `Int(1)` equals `Float(1.0)`.
#[derive(Clone, Copy)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn as_f64(&self) -> f64 {
        match self {
            Num::Int(value) => *value as f64,
            Num::Float(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Num::Int(value) => *value == 0,
            Num::Float(value) => *value == 0.0,
        }
    }

    pub fn add(self, other: Num) -> Num {
        match (self, other) {
            (Num::Int(left), Num::Int(right)) => Num::Int(left + right),
            _ => Num::Float(self.as_f64() + other.as_f64()),
        }
    }

    pub fn sub(self, other: Num) -> Num {
        match (self, other) {
            (Num::Int(left), Num::Int(right)) => Num::Int(left - right),
            _ => Num::Float(self.as_f64() - other.as_f64()),
        }
    }

    pub fn mul(self, other: Num) -> Num {
        match (self, other) {
            (Num::Int(left), Num::Int(right)) => Num::Int(left * right),
            _ => Num::Float(self.as_f64() * other.as_f64()),
        }
    }

    /// True division: the quotient is always a `Float`, whatever the
    /// operand representations. Callers check the divisor for zero first.
    pub fn div(self, other: Num) -> Num {
        Num::Float(self.as_f64() / other.as_f64())
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Num::Int(left), Num::Int(right)) => left == right,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Num::Int(left), Num::Int(right)) => Some(left.cmp(right)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(value) => write!(f, "{value}"),
            // A float keeps its decimal point even when integral, so the
            // rendering stays distinguishable from an integer's.
            Num::Float(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
        }
    }
}

impl fmt::Debug for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«{self}»")
    }
}

/// Result of evaluating an expression: a number or a boolean.
#[derive(Clone, PartialEq)]
pub enum Value {
    Number(Num),
    Boolean(bool),
}

impl Value {
    /// Numeric coercion used uniformly by the arithmetic and comparison
    /// operators: booleans count as 1 and 0.
    pub fn as_num(&self) -> Num {
        match self {
            Value::Number(value) => *value,
            Value::Boolean(true) => Num::Int(1),
            Value::Boolean(false) => Num::Int(0),
        }
    }

    /// Logical coercion used uniformly by the logical operators: a number
    /// is truthy exactly when it is nonzero.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Number(value) => !value.is_zero(),
            Value::Boolean(value) => *value,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{value}"),
            Value::Boolean(true) => write!(f, "true"),
            Value::Boolean(false) => write!(f, "false"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«{self}»")
    }
}
