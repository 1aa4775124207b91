use crate::ast::{Expression, Statement};
use crate::value::Num;

fn indent(level: usize) -> String {
    "    ".repeat(level)
}

impl Num {
    fn to_python(self) -> String {
        // The canonical rendering already keeps integral floats
        // distinguishable (`2.0`), which is also valid Python.
        self.to_string()
    }
}

impl Expression {
    /// Render as a Python expression reading variables out of an
    /// environment dict named `e`. Every operand is parenthesized
    /// individually, so operator precedence never has to be reconstructed.
    pub fn to_python(&self, indentation: usize) -> String {
        match self {
            Expression::Number(value) => value.to_python(),
            Expression::Boolean(true) => "True".to_string(),
            Expression::Boolean(false) => "False".to_string(),
            Expression::Variable(name) => format!("e['{name}']"),
            Expression::Add { left, right } => format!(
                "({}) + ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::Subtract { left, right } => format!(
                "({}) - ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::Multiply { left, right } => format!(
                "({}) * ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::Divide { left, right } => format!(
                "({}) / ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::And { left, right } => format!(
                "({}) and ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::Or { left, right } => format!(
                "({}) or ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::GreaterThan { left, right } => format!(
                "({}) > ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::LessThan { left, right } => format!(
                "({}) < ({})",
                left.to_python(indentation),
                right.to_python(indentation)
            ),
            Expression::Not(value) => format!("!({})", value.to_python(indentation)),
        }
    }
}

impl Statement {
    /// Render as Python statements at the given indentation level (counted
    /// in 4-space chunks), assignments targeting the environment dict `e`.
    pub fn to_python(&self, indentation: usize) -> String {
        match self {
            Statement::Assign { name, expression } => format!(
                "{}e['{}'] = {}",
                indent(indentation),
                name,
                expression.to_python(indentation)
            ),
            Statement::Sequence { first, second } => format!(
                "{}\n{}",
                first.to_python(indentation),
                second.to_python(indentation)
            ),
            Statement::If {
                condition,
                consequence,
                alternative,
            } => format!(
                "{}if {}:\n{}\nelse:\n{}",
                indent(indentation),
                condition.to_python(indentation),
                consequence.to_python(indentation + 1),
                alternative.to_python(indentation + 1)
            ),
            Statement::While { condition, body } => format!(
                "{}while {}:\n{}",
                indent(indentation),
                condition.to_python(indentation),
                body.to_python(indentation + 1)
            ),
            Statement::DoNothing => format!("{}pass", indent(indentation)),
        }
    }
}
