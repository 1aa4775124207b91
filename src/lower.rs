use crate::ast::{Expression, Statement};
use crate::syntax::{Block, Expr, Program, Stmt};

impl Expr {
    /// Produce the evaluable counterpart of this parse node, lowering each
    /// child first.
    pub fn lower(&self) -> Expression {
        match self {
            Expr::Number { value, .. } => Expression::Number(*value),
            Expr::Boolean(value) => Expression::Boolean(*value),
            Expr::Variable(name) => Expression::Variable(name.clone()),
            Expr::Add { left, right } => Expression::Add {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::Subtract { left, right } => Expression::Subtract {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::Multiply { left, right } => Expression::Multiply {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::Divide { left, right } => Expression::Divide {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::And { left, right } => Expression::And {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::Or { left, right } => Expression::Or {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::GreaterThan { left, right } => Expression::GreaterThan {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::LessThan { left, right } => Expression::LessThan {
                left: Box::new(left.lower()),
                right: Box::new(right.lower()),
            },
            Expr::Not(value) => Expression::Not(Box::new(value.lower())),
        }
    }
}

impl Stmt {
    pub fn lower(&self) -> Statement {
        match self {
            Stmt::Assign { name, value } => Statement::Assign {
                name: name.clone(),
                expression: value.lower(),
            },
            Stmt::If {
                condition,
                consequence,
                alternative,
            } => Statement::If {
                condition: condition.lower(),
                consequence: Box::new(consequence.lower()),
                alternative: Box::new(alternative.lower()),
            },
            Stmt::While { condition, body } => Statement::While {
                condition: condition.lower(),
                body: Box::new(body.lower()),
            },
        }
    }
}

impl Block {
    /// Fold the statement list into a right-nested `Sequence` chain:
    /// `Sequence` holds exactly two statements, so a block of N statements
    /// becomes N-1 nested sequences whose left-to-right leaves keep the
    /// original order. A single statement lowers to itself. The fold runs
    /// back to front, so chain depth never grows the call stack.
    pub fn lower(&self) -> Statement {
        let mut lowered: Option<Statement> = None;
        for statement in self.statements.iter().rev() {
            lowered = Some(match lowered {
                None => statement.lower(),
                Some(rest) => Statement::Sequence {
                    first: Box::new(statement.lower()),
                    second: Box::new(rest),
                },
            });
        }
        // The grammar requires at least one statement per block; an empty
        // block could only be constructed by hand and lowers to a no-op.
        lowered.unwrap_or(Statement::DoNothing)
    }
}

impl Program {
    pub fn lower(&self) -> Statement {
        self.block.lower()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, parse_expression};
    use crate::value::Num;

    fn lowered(input: &str) -> Expression {
        parse_expression(input)
            .expect("parse should succeed")
            .lower()
    }

    fn assign(name: &str, value: i64) -> Statement {
        Statement::Assign {
            name: name.to_string(),
            expression: Expression::Number(Num::Int(value)),
        }
    }

    #[test]
    fn lowers_operands_in_source_order() {
        assert_eq!(
            lowered("x + y"),
            Expression::Add {
                left: Box::new(Expression::Variable("x".to_string())),
                right: Box::new(Expression::Variable("y".to_string())),
            }
        );
        assert_eq!(
            lowered("x / y"),
            Expression::Divide {
                left: Box::new(Expression::Variable("x".to_string())),
                right: Box::new(Expression::Variable("y".to_string())),
            }
        );
    }

    #[test]
    fn literal_representation_follows_the_decimal_point() {
        assert_eq!(lowered("123"), Expression::Number(Num::Int(123)));
        assert_eq!(lowered("-123"), Expression::Number(Num::Int(-123)));
        assert_eq!(lowered("1.23"), Expression::Number(Num::Float(1.23)));
        assert_eq!(lowered("-1.23"), Expression::Number(Num::Float(-1.23)));
    }

    #[test]
    fn lowers_booleans_and_negation() {
        assert_eq!(
            lowered("!true"),
            Expression::Not(Box::new(Expression::Boolean(true)))
        );
    }

    #[test]
    fn single_statement_block_lowers_to_the_statement_itself() {
        let program = parse("a = 1;").expect("parse should succeed");
        assert_eq!(program.lower(), assign("a", 1));
    }

    #[test]
    fn two_statement_block_lowers_to_one_sequence() {
        let program = parse("a = 1; b = 2;").expect("parse should succeed");
        assert_eq!(
            program.lower(),
            Statement::Sequence {
                first: Box::new(assign("a", 1)),
                second: Box::new(assign("b", 2)),
            }
        );
    }

    #[test]
    fn longer_blocks_nest_to_the_right() {
        let program = parse("a = 1; b = 2; c = 3; d = 4;").expect("parse should succeed");
        assert_eq!(
            program.lower(),
            Statement::Sequence {
                first: Box::new(assign("a", 1)),
                second: Box::new(Statement::Sequence {
                    first: Box::new(assign("b", 2)),
                    second: Box::new(Statement::Sequence {
                        first: Box::new(assign("c", 3)),
                        second: Box::new(assign("d", 4)),
                    }),
                }),
            }
        );
    }

    #[test]
    fn flattening_preserves_leaf_order_for_any_length() {
        for length in 1..=8 {
            let source = (0..length)
                .map(|index| format!("v{index} = {index};"))
                .collect::<Vec<_>>()
                .join(" ");
            let mut lowered = parse(&source).expect("parse should succeed").lower();

            let mut names = Vec::new();
            let mut sequences = 0;
            loop {
                match lowered {
                    Statement::Sequence { first, second } => {
                        sequences += 1;
                        match *first {
                            Statement::Assign { name, .. } => names.push(name),
                            other => panic!("expected assignment leaf, got {other:?}"),
                        }
                        lowered = *second;
                    }
                    Statement::Assign { name, .. } => {
                        names.push(name);
                        break;
                    }
                    other => panic!("expected assignment leaf, got {other:?}"),
                }
            }

            assert_eq!(sequences, length - 1, "block of {length} statements");
            let expected = (0..length).map(|index| format!("v{index}")).collect::<Vec<_>>();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn nested_blocks_lower_inside_their_statements() {
        let program = parse("while (x < 2) { x = 1; y = 2; }").expect("parse should succeed");
        let Statement::While { body, .. } = program.lower() else {
            panic!("expected while statement");
        };
        assert_eq!(
            *body,
            Statement::Sequence {
                first: Box::new(assign("x", 1)),
                second: Box::new(assign("y", 2)),
            }
        );
    }
}
