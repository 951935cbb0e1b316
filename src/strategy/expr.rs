use crate::evaluation::analysis::{HandAnalysis, StraightDraw};
use thiserror::Error;

/// malformed rule expressions, rejected at construction time.
/// nothing in this grammar ever silently evaluates to false.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("unrecognized token: {0}")]
    UnknownToken(String),

    #[error("expected {expected}, found {found}")]
    Unexpected { expected: &'static str, found: String },

    #[error("{0} is a boolean field and cannot be compared to a number")]
    NotNumeric(&'static str),

    #[error("{0} is a numeric field and needs a comparison")]
    NotBoolean(&'static str),

    #[error("unexpected end of expression")]
    Eof,

    #[error("trailing input after expression: {0}")]
    Trailing(String),
}

/// numeric fields of HandAnalysis the grammar can compare.
/// pair_rank compares on the 2..=14 scale and reads as 0 when
/// the hand is unpaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumField {
    Cards,
    HighCards,
    MaxSuited,
    Span,
    MinRank,
    PairRank,
}

/// boolean fields of HandAnalysis the grammar can test directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolField {
    Paying,
    Paired,
    FlushDraw,
    StraightFlushDraw,
    RoyalDraw,
    OpenEnded,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// tagged-variant expression tree over known analysis fields;
/// parsing is the only way to build one, so evaluation can never
/// meet an unknown name.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Test(BoolField),
    Cmp(NumField, CmpOp, i64),
    Lit(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// parse a closed-grammar boolean/comparison expression:
    ///   expr    := and ('or' and)*
    ///   and     := unary ('and' unary)*
    ///   unary   := 'not' unary | primary
    ///   primary := '(' expr ')' | bool-ident | num-ident op int
    ///            | 'true' | 'false'
    pub fn parse(input: &str) -> Result<Self, RuleError> {
        let tokens = tokenize(input)?;
        let mut parser = Parser { tokens, at: 0 };
        let expr = parser.expr()?;
        match parser.peek() {
            None => Ok(expr),
            Some(token) => Err(RuleError::Trailing(format!("{:?}", token))),
        }
    }

    pub fn eval(&self, a: &HandAnalysis) -> bool {
        match self {
            Expr::Lit(b) => *b,
            Expr::Not(e) => !e.eval(a),
            Expr::And(l, r) => l.eval(a) && r.eval(a),
            Expr::Or(l, r) => l.eval(a) || r.eval(a),
            Expr::Test(field) => match field {
                BoolField::Paying => a.paying,
                BoolField::Paired => a.pair_rank.is_some(),
                BoolField::FlushDraw => a.flush_draw,
                BoolField::StraightFlushDraw => a.straight_flush_draw,
                BoolField::RoyalDraw => a.royal_draw,
                BoolField::OpenEnded => a.straight_draw == StraightDraw::Open,
                BoolField::Inside => a.straight_draw == StraightDraw::Inside,
            },
            Expr::Cmp(field, op, rhs) => {
                let lhs = match field {
                    NumField::Cards => a.cards as i64,
                    NumField::HighCards => a.high_cards as i64,
                    NumField::MaxSuited => a.max_suited as i64,
                    NumField::Span => a.span as i64,
                    NumField::MinRank => u8::from(a.min_rank) as i64 + 2,
                    NumField::PairRank => {
                        a.pair_rank.map(|r| u8::from(r) as i64 + 2).unwrap_or(0)
                    }
                };
                match op {
                    CmpOp::Eq => lhs == *rhs,
                    CmpOp::Ne => lhs != *rhs,
                    CmpOp::Lt => lhs < *rhs,
                    CmpOp::Le => lhs <= *rhs,
                    CmpOp::Gt => lhs > *rhs,
                    CmpOp::Ge => lhs >= *rhs,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(NumField, &'static str),
    Bool(BoolField, &'static str),
    Op(CmpOp),
    Int(i64),
    And,
    Or,
    Not,
    True,
    False,
    Open,
    Close,
}

fn tokenize(input: &str) -> Result<Vec<Token>, RuleError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '(' {
            chars.next();
            tokens.push(Token::Open);
        } else if c == ')' {
            chars.next();
            tokens.push(Token::Close);
        } else if c.is_ascii_digit() {
            let mut n = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    n.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            let value = n.parse().map_err(|_| RuleError::UnknownToken(n.clone()))?;
            tokens.push(Token::Int(value));
        } else if c.is_alphabetic() || c == '_' {
            let mut word = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    word.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(keyword(&word)?);
        } else {
            let mut op = String::from(c);
            chars.next();
            if let Some(&d) = chars.peek() {
                if d == '=' {
                    op.push(d);
                    chars.next();
                }
            }
            tokens.push(Token::Op(match op.as_str() {
                "==" => CmpOp::Eq,
                "!=" => CmpOp::Ne,
                "<" => CmpOp::Lt,
                "<=" => CmpOp::Le,
                ">" => CmpOp::Gt,
                ">=" => CmpOp::Ge,
                _ => return Err(RuleError::UnknownToken(op)),
            }));
        }
    }
    Ok(tokens)
}

fn keyword(word: &str) -> Result<Token, RuleError> {
    Ok(match word {
        "and" => Token::And,
        "or" => Token::Or,
        "not" => Token::Not,
        "true" => Token::True,
        "false" => Token::False,
        "cards" => Token::Num(NumField::Cards, "cards"),
        "high_cards" => Token::Num(NumField::HighCards, "high_cards"),
        "max_suited" => Token::Num(NumField::MaxSuited, "max_suited"),
        "span" => Token::Num(NumField::Span, "span"),
        "min_rank" => Token::Num(NumField::MinRank, "min_rank"),
        "pair_rank" => Token::Num(NumField::PairRank, "pair_rank"),
        "paying" => Token::Bool(BoolField::Paying, "paying"),
        "paired" => Token::Bool(BoolField::Paired, "paired"),
        "flush_draw" => Token::Bool(BoolField::FlushDraw, "flush_draw"),
        "straight_flush_draw" => {
            Token::Bool(BoolField::StraightFlushDraw, "straight_flush_draw")
        }
        "royal_draw" => Token::Bool(BoolField::RoyalDraw, "royal_draw"),
        "open_ended" => Token::Bool(BoolField::OpenEnded, "open_ended"),
        "inside" => Token::Bool(BoolField::Inside, "inside"),
        _ => return Err(RuleError::UnknownIdentifier(word.to_string())),
    })
}

struct Parser {
    tokens: Vec<Token>,
    at: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.at)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.at).cloned();
        self.at += token.is_some() as usize;
        token
    }

    fn expr(&mut self) -> Result<Expr, RuleError> {
        let mut lhs = self.and()?;
        while self.peek() == Some(&Token::Or) {
            self.next();
            let rhs = self.and()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expr, RuleError> {
        let mut lhs = self.unary()?;
        while self.peek() == Some(&Token::And) {
            self.next();
            let rhs = self.unary()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, RuleError> {
        if self.peek() == Some(&Token::Not) {
            self.next();
            Ok(Expr::Not(Box::new(self.unary()?)))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Expr, RuleError> {
        match self.next().ok_or(RuleError::Eof)? {
            Token::Open => {
                let inner = self.expr()?;
                match self.next().ok_or(RuleError::Eof)? {
                    Token::Close => Ok(inner),
                    found => Err(RuleError::Unexpected {
                        expected: "closing parenthesis",
                        found: format!("{:?}", found),
                    }),
                }
            }
            Token::True => Ok(Expr::Lit(true)),
            Token::False => Ok(Expr::Lit(false)),
            Token::Bool(field, name) => match self.peek() {
                Some(Token::Op(_)) => Err(RuleError::NotNumeric(name)),
                _ => Ok(Expr::Test(field)),
            },
            Token::Num(field, name) => {
                let op = match self.next().ok_or(RuleError::Eof)? {
                    Token::Op(op) => op,
                    _ => return Err(RuleError::NotBoolean(name)),
                };
                match self.next().ok_or(RuleError::Eof)? {
                    Token::Int(rhs) => Ok(Expr::Cmp(field, op, rhs)),
                    found => Err(RuleError::Unexpected {
                        expected: "integer literal",
                        found: format!("{:?}", found),
                    }),
                }
            }
            found => Err(RuleError::Unexpected {
                expected: "expression",
                found: format!("{:?}", found),
            }),
        }
    }
}
