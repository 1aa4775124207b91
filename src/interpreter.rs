use crate::ast::{Expression, Statement};
use crate::value::Value;

pub mod environment;
pub mod error;

pub use environment::Environment;
pub use error::RuntimeError;

impl Expression {
    /// Evaluate against an environment, producing a value. Pure: the
    /// environment is only read.
    pub fn evaluate(&self, environment: &Environment) -> Result<Value, RuntimeError> {
        match self {
            Expression::Number(value) => Ok(Value::Number(*value)),
            Expression::Boolean(value) => Ok(Value::Boolean(*value)),
            Expression::Variable(name) => environment
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() }),
            Expression::Add { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                Ok(Value::Number(left.add(right)))
            }
            Expression::Subtract { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                Ok(Value::Number(left.sub(right)))
            }
            Expression::Multiply { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                Ok(Value::Number(left.mul(right)))
            }
            Expression::Divide { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Number(left.div(right)))
            }
            // Both operands are evaluated before the logical operator
            // applies: there is no short-circuiting.
            Expression::And { left, right } => {
                let left = left.evaluate(environment)?.as_bool();
                let right = right.evaluate(environment)?.as_bool();
                Ok(Value::Boolean(left && right))
            }
            Expression::Or { left, right } => {
                let left = left.evaluate(environment)?.as_bool();
                let right = right.evaluate(environment)?.as_bool();
                Ok(Value::Boolean(left || right))
            }
            Expression::GreaterThan { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                Ok(Value::Boolean(left > right))
            }
            Expression::LessThan { left, right } => {
                let left = left.evaluate(environment)?.as_num();
                let right = right.evaluate(environment)?.as_num();
                Ok(Value::Boolean(left < right))
            }
            Expression::Not(value) => {
                let value = value.evaluate(environment)?.as_bool();
                Ok(Value::Boolean(!value))
            }
        }
    }
}

impl Statement {
    /// Evaluate against an environment, producing the environment that
    /// results from the statement's effects. The input environment is
    /// never mutated.
    pub fn evaluate(&self, environment: &Environment) -> Result<Environment, RuntimeError> {
        match self {
            Statement::Assign { name, expression } => {
                let value = expression.evaluate(environment)?;
                Ok(environment.with(name.clone(), value))
            }
            Statement::Sequence { first, second } => {
                second.evaluate(&first.evaluate(environment)?)
            }
            // The branch test is exact equality against boolean true: a
            // number-valued condition, even a nonzero one, takes the
            // alternative.
            Statement::If {
                condition,
                consequence,
                alternative,
            } => {
                if condition.evaluate(environment)? == Value::Boolean(true) {
                    consequence.evaluate(environment)
                } else {
                    alternative.evaluate(environment)
                }
            }
            // A host-level loop instead of recursion on the resulting
            // environment, so iteration count does not grow the stack.
            // An always-true condition loops forever.
            Statement::While { condition, body } => {
                let mut environment = environment.clone();
                while condition.evaluate(&environment)? == Value::Boolean(true) {
                    environment = body.evaluate(&environment)?;
                }
                Ok(environment)
            }
            Statement::DoNothing => Ok(environment.clone()),
        }
    }
}
