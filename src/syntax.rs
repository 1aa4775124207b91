use crate::value::Num;

/// Concrete expression node, one variant per grammar production. `Number`
/// keeps the matched literal text so canonical re-rendering reproduces the
/// source literal (including its sign and fraction digits); the numeric
/// value is fixed at parse time, floating exactly when the text carries a
/// decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number { text: String, value: Num },
    Boolean(bool),
    Variable(String),
    Add { left: Box<Expr>, right: Box<Expr> },
    Subtract { left: Box<Expr>, right: Box<Expr> },
    Multiply { left: Box<Expr>, right: Box<Expr> },
    Divide { left: Box<Expr>, right: Box<Expr> },
    And { left: Box<Expr>, right: Box<Expr> },
    Or { left: Box<Expr>, right: Box<Expr> },
    GreaterThan { left: Box<Expr>, right: Box<Expr> },
    LessThan { left: Box<Expr>, right: Box<Expr> },
    Not(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign {
        name: String,
        value: Expr,
    },
    If {
        condition: Expr,
        consequence: Block,
        alternative: Block,
    },
    While {
        condition: Expr,
        body: Block,
    },
}

/// One or more statements, as matched by the block production.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub block: Block,
}

/// Rendering context for canonical re-rendering: the caller-supplied
/// indentation unit plus the current nesting level.
pub struct Renderer {
    indent: String,
    level: usize,
}

impl Renderer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            level: 0,
        }
    }

    fn pad(&self) -> String {
        self.indent.repeat(self.level)
    }
}

impl Expr {
    /// Canonical flat rendering with normalized spacing around operators.
    pub fn render(&self) -> String {
        match self {
            Expr::Number { text, .. } => text.clone(),
            Expr::Boolean(true) => "true".to_string(),
            Expr::Boolean(false) => "false".to_string(),
            Expr::Variable(name) => name.clone(),
            Expr::Add { left, right } => format!("{} + {}", left.render(), right.render()),
            Expr::Subtract { left, right } => format!("{} - {}", left.render(), right.render()),
            Expr::Multiply { left, right } => format!("{} * {}", left.render(), right.render()),
            Expr::Divide { left, right } => format!("{} / {}", left.render(), right.render()),
            Expr::And { left, right } => format!("{} && {}", left.render(), right.render()),
            Expr::Or { left, right } => format!("{} || {}", left.render(), right.render()),
            Expr::GreaterThan { left, right } => format!("{} > {}", left.render(), right.render()),
            Expr::LessThan { left, right } => format!("{} < {}", left.render(), right.render()),
            Expr::Not(value) => format!("!{}", value.render()),
        }
    }
}

impl Stmt {
    /// Canonical multi-line rendering at the renderer's current level.
    /// Braces sit on their own lines and nested blocks indent one level
    /// deeper, whatever the source looked like.
    pub fn render(&self, renderer: &mut Renderer) -> String {
        match self {
            Stmt::Assign { name, value } => {
                format!("{}{} = {};", renderer.pad(), name, value.render())
            }
            Stmt::If {
                condition,
                consequence,
                alternative,
            } => {
                let pad = renderer.pad();
                let mut out = format!("{pad}if ({})\n{pad}{{\n", condition.render());
                renderer.level += 1;
                out.push_str(&consequence.render(renderer));
                renderer.level -= 1;
                out.push_str(&format!("\n{pad}}}\n{pad}else\n{pad}{{\n"));
                renderer.level += 1;
                out.push_str(&alternative.render(renderer));
                renderer.level -= 1;
                out.push_str(&format!("\n{pad}}}"));
                out
            }
            Stmt::While { condition, body } => {
                let pad = renderer.pad();
                let mut out = format!("{pad}while ({})\n{pad}{{\n", condition.render());
                renderer.level += 1;
                out.push_str(&body.render(renderer));
                renderer.level -= 1;
                out.push_str(&format!("\n{pad}}}"));
                out
            }
        }
    }
}

impl Block {
    pub fn render(&self, renderer: &mut Renderer) -> String {
        self.statements
            .iter()
            .map(|statement| statement.render(renderer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Program {
    pub fn render(&self, renderer: &mut Renderer) -> String {
        self.block.render(renderer)
    }
}
