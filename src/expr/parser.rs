use super::lexer::Token;
use super::value::Value;
use crate::error::ExprError;

/// Expression AST produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Expr {
    Literal(Value),
    Var(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum UnaryOp {
    Not,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    pub(super) fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum AssignOp {
    Set,
    Add,
    Sub,
    Mul,
    Div,
}

/// Statement AST: a single assignment, increment, or bare expression.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Stmt {
    Assign {
        name: String,
        op: AssignOp,
        value: Expr,
    },
    /// `x++` / `x--` (prefix or postfix, same effect as a statement).
    Incr {
        name: String,
        delta: f64,
    },
    Expr(Expr),
}

/// Parses a token stream as a single expression, requiring all tokens to be
/// consumed.
pub(super) fn parse_expression(tokens: Vec<Token>) -> Result<Expr, ExprError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Parses a token stream as a `;`-separated statement list.
pub(super) fn parse_statements(tokens: Vec<Token>) -> Result<Vec<Stmt>, ExprError> {
    let mut parser = Parser::new(tokens);
    let mut statements = Vec::new();

    loop {
        while parser.eat(&Token::Semi) {}
        if parser.at_end() {
            break;
        }
        statements.push(parser.statement()?);
        if !parser.at_end() && !parser.eat(&Token::Semi) {
            return Err(parser.unexpected());
        }
    }

    Ok(statements)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn expect_end(&self) -> Result<(), ExprError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ExprError {
        match self.peek() {
            Some(token) => ExprError::UnexpectedToken(token.to_string()),
            None => ExprError::UnexpectedEnd,
        }
    }

    /// Reads a variable reference, accepting the editor's `ctx.name` spelling
    /// as an alias for the bare name. Returns the name and how many tokens it
    /// spans, without consuming anything.
    fn peek_var(&self) -> Option<(String, usize)> {
        match self.peek()? {
            Token::Ident(first) if first == "ctx" => match (self.peek_at(1), self.peek_at(2)) {
                (Some(Token::Dot), Some(Token::Ident(name))) => Some((name.clone(), 3)),
                _ => Some((first.clone(), 1)),
            },
            Token::Ident(name) => Some((name.clone(), 1)),
            _ => None,
        }
    }

    fn statement(&mut self) -> Result<Stmt, ExprError> {
        // Prefix increment: `++x` / `--x`.
        if let Some(delta) = match self.peek() {
            Some(Token::PlusPlus) => Some(1.0),
            Some(Token::MinusMinus) => Some(-1.0),
            _ => None,
        } {
            self.pos += 1;
            let (name, width) = self.peek_var().ok_or(ExprError::InvalidAssignment)?;
            self.pos += width;
            return Ok(Stmt::Incr { name, delta });
        }

        if let Some((name, width)) = self.peek_var() {
            let op = match self.peek_at(width) {
                Some(Token::Assign) => Some(AssignOp::Set),
                Some(Token::PlusAssign) => Some(AssignOp::Add),
                Some(Token::MinusAssign) => Some(AssignOp::Sub),
                Some(Token::StarAssign) => Some(AssignOp::Mul),
                Some(Token::SlashAssign) => Some(AssignOp::Div),
                _ => None,
            };
            if let Some(op) = op {
                self.pos += width + 1;
                let value = self.expression()?;
                return Ok(Stmt::Assign { name, op, value });
            }
            match self.peek_at(width) {
                Some(Token::PlusPlus) => {
                    self.pos += width + 1;
                    return Ok(Stmt::Incr { name, delta: 1.0 });
                }
                Some(Token::MinusMinus) => {
                    self.pos += width + 1;
                    return Ok(Stmt::Incr { name, delta: -1.0 });
                }
                _ => {}
            }
        }

        Ok(Stmt::Expr(self.expression()?))
    }

    fn expression(&mut self) -> Result<Expr, ExprError> {
        self.or()
    }

    fn or(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.and()?;
        while self.eat(&Token::OrOr) {
            let rhs = self.and()?;
            expr = Expr::Binary(BinaryOp::Or, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.equality()?;
        while self.eat(&Token::AndAnd) {
            let rhs = self.equality()?;
            expr = Expr::Binary(BinaryOp::And, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.comparison()?;
        loop {
            let op = match self.peek() {
                Some(Token::EqEq) => BinaryOp::Eq,
                Some(Token::BangEq) => BinaryOp::NotEq,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.comparison()?;
            expr = Expr::Binary(op, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Lt) => BinaryOp::Lt,
                Some(Token::LtEq) => BinaryOp::LtEq,
                Some(Token::Gt) => BinaryOp::Gt,
                Some(Token::GtEq) => BinaryOp::GtEq,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            expr = Expr::Binary(op, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.factor()?;
            expr = Expr::Binary(op, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            expr = Expr::Binary(op, Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Some(Token::Bang) => {
                self.pos += 1;
                Ok(Expr::Unary(UnaryOp::Not, Box::new(self.unary()?)))
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Unary(UnaryOp::Neg, Box::new(self.unary()?)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        if let Some((name, width)) = self.peek_var() {
            self.pos += width;
            return Ok(Expr::Var(name));
        }
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Literal(Value::Number(n))),
            Some(Token::Str(s)) => Ok(Expr::Literal(Value::Str(s))),
            Some(Token::True) => Ok(Expr::Literal(Value::Bool(true))),
            Some(Token::False) => Ok(Expr::Literal(Value::Bool(false))),
            Some(Token::Null) => Ok(Expr::Literal(Value::Null)),
            Some(Token::LParen) => {
                let expr = self.expression()?;
                if self.eat(&Token::RParen) {
                    Ok(expr)
                } else {
                    Err(self.unexpected())
                }
            }
            Some(token) => Err(ExprError::UnexpectedToken(token.to_string())),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}
