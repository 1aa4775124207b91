use std::fmt;

use crate::value::Num;

/// Evaluable expression tree. Structural equality is type-tagged: two
/// expressions are equal only when they are the same variant with
/// recursively equal children.
#[derive(Clone, PartialEq)]
pub enum Expression {
    Number(Num),
    Boolean(bool),
    Variable(String),
    Add {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Subtract {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Multiply {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Divide {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    GreaterThan {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    LessThan {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Not(Box<Expression>),
}

/// Evaluable statement tree. `Sequence` is strictly binary; blocks of
/// arbitrary length arrive here as right-nested chains.
#[derive(Clone, PartialEq)]
pub enum Statement {
    Assign {
        name: String,
        expression: Expression,
    },
    Sequence {
        first: Box<Statement>,
        second: Box<Statement>,
    },
    If {
        condition: Expression,
        consequence: Box<Statement>,
        alternative: Box<Statement>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    DoNothing,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{value}"),
            Expression::Boolean(true) => write!(f, "true"),
            Expression::Boolean(false) => write!(f, "false"),
            Expression::Variable(name) => write!(f, "{name}"),
            Expression::Add { left, right } => write!(f, "{left} + {right}"),
            Expression::Subtract { left, right } => write!(f, "{left} - {right}"),
            Expression::Multiply { left, right } => write!(f, "{left} * {right}"),
            Expression::Divide { left, right } => write!(f, "{left} / {right}"),
            Expression::And { left, right } => write!(f, "{left} && {right}"),
            Expression::Or { left, right } => write!(f, "{left} || {right}"),
            Expression::GreaterThan { left, right } => write!(f, "{left} > {right}"),
            Expression::LessThan { left, right } => write!(f, "{left} < {right}"),
            Expression::Not(value) => write!(f, "!{value}"),
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«{self}»")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, expression } => write!(f, "{name} = {expression}"),
            Statement::Sequence { first, second } => write!(f, "{first}; {second}"),
            Statement::If {
                condition,
                consequence,
                alternative,
            } => write!(f, "if ({condition}) {{ {consequence} }} else {{ {alternative} }}"),
            Statement::While { condition, body } => write!(f, "while ({condition}) {{ {body} }}"),
            Statement::DoNothing => write!(f, "do-nothing"),
        }
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«{self}»")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str) -> Expression {
        Expression::Variable(name.to_string())
    }

    fn int(value: i64) -> Expression {
        Expression::Number(Num::Int(value))
    }

    fn add(left: Expression, right: Expression) -> Expression {
        Expression::Add {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn equal_shapes_compare_equal() {
        assert_eq!(add(variable("x"), int(1)), add(variable("x"), int(1)));
    }

    #[test]
    fn differing_operands_compare_unequal() {
        assert_ne!(add(variable("x"), int(1)), add(variable("y"), int(1)));
        assert_ne!(add(variable("x"), int(1)), add(variable("x"), int(2)));
    }

    #[test]
    fn differing_operators_compare_unequal_with_matching_fields() {
        let subtract = Expression::Subtract {
            left: Box::new(variable("x")),
            right: Box::new(int(1)),
        };
        assert_ne!(add(variable("x"), int(1)), subtract);
    }

    #[test]
    fn nesting_participates_in_equality() {
        let flat = add(add(int(1), int(2)), int(3));
        let nested = add(int(1), add(int(2), int(3)));
        assert_ne!(flat, nested);
    }

    #[test]
    fn renders_flat_infix_text() {
        let expression = Expression::And {
            left: Box::new(Expression::Not(Box::new(variable("done")))),
            right: Box::new(Expression::LessThan {
                left: Box::new(variable("i")),
                right: Box::new(int(10)),
            }),
        };
        assert_eq!(expression.to_string(), "!done && i < 10");
    }

    #[test]
    fn renders_statements_in_single_line_form() {
        let statement = Statement::While {
            condition: Expression::GreaterThan {
                left: Box::new(variable("x")),
                right: Box::new(int(0)),
            },
            body: Box::new(Statement::Assign {
                name: "x".to_string(),
                expression: Expression::Subtract {
                    left: Box::new(variable("x")),
                    right: Box::new(int(1)),
                },
            }),
        };
        assert_eq!(statement.to_string(), "while (x > 0) { x = x - 1 }");
        assert_eq!(Statement::DoNothing.to_string(), "do-nothing");
    }

    #[test]
    fn sequences_render_with_semicolon_separator() {
        let sequence = Statement::Sequence {
            first: Box::new(Statement::Assign {
                name: "x".to_string(),
                expression: int(1),
            }),
            second: Box::new(Statement::DoNothing),
        };
        assert_eq!(sequence.to_string(), "x = 1; do-nothing");
    }

    #[test]
    fn debug_wraps_display_in_guillemets() {
        assert_eq!(format!("{:?}", add(variable("x"), int(1))), "«x + 1»");
        assert_eq!(format!("{:?}", Statement::DoNothing), "«do-nothing»");
    }
}
