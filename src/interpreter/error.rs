use thiserror::Error;

/// Typed errors produced by the tree-walking evaluator. Nothing here is
/// recoverable: any failure aborts the whole evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },
    #[error("Division by zero")]
    DivisionByZero,
}
