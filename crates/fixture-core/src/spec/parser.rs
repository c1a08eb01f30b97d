//! Recursive-descent parser turning spec tokens into a [`FieldSpec`].

use super::lexer::{tokenize, Token};
use super::{Bounds, FieldSpec, SpecError, SpecKind};

/// Parse a raw field spec.
pub fn parse(raw: &str) -> Result<FieldSpec, SpecError> {
    let kind = SpecKind::classify(raw).ok_or_else(|| SpecError::UnknownKind(raw.to_string()))?;
    let tokens = tokenize(raw).map_err(|_| kind.format_error(raw))?;

    Parser {
        raw,
        kind,
        tokens,
        pos: 0,
    }
    .parse()
}

struct Parser<'a> {
    raw: &'a str,
    kind: SpecKind,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse(&mut self) -> Result<FieldSpec, SpecError> {
        // The keyword has to stand alone: "numbers" is not "number".
        let keyword = self.kind.keyword();
        self.expect(|t| matches!(t, Token::Ident(ident) if ident == keyword))?;

        let spec = match self.kind {
            SpecKind::Boolean => FieldSpec::Boolean,
            SpecKind::String => FieldSpec::String {
                length: self.string_length()?,
            },
            SpecKind::Number => {
                let bounds = self.bounds()?.try_map(|literal| self.real(&literal))?;
                FieldSpec::Number(self.finite_span(self.ordered(bounds)?)?)
            }
            SpecKind::Integer => {
                let bounds = self.bounds()?.try_map(|literal| self.integer(&literal))?;
                FieldSpec::Integer(self.ordered(bounds)?)
            }
        };

        if self.pos != self.tokens.len() {
            return Err(self.error());
        }
        Ok(spec)
    }

    /// `[N]` after `string`, if present.
    fn string_length(&mut self) -> Result<Option<usize>, SpecError> {
        if self.peek().is_none() {
            return Ok(None);
        }
        self.expect(|t| *t == Token::LBracket)?;
        let literal = self.literal()?;
        if !literal.chars().all(|c| c.is_ascii_digit()) {
            return Err(self.error());
        }
        let length = literal.parse::<usize>().map_err(|_| self.error())?;
        self.expect(|t| *t == Token::RBracket)?;
        Ok(Some(length))
    }

    /// Bound clause after `number` / `integer`, literals kept as written.
    fn bounds(&mut self) -> Result<Bounds<String>, SpecError> {
        let Some(token) = self.next() else {
            return Ok(Bounds::Unbounded);
        };

        match token {
            Token::Gt => Ok(Bounds::AtLeast(self.literal()?)),
            Token::Lt => Ok(Bounds::AtMost(self.literal()?)),
            Token::Ident(ident) if ident == "in" => {
                self.expect(|t| *t == Token::Lt)?;
                let lower = self.literal()?;
                self.expect(|t| *t == Token::Comma)?;
                let upper = self.literal()?;
                self.expect(|t| *t == Token::Gt)?;
                Ok(Bounds::Between(lower, upper))
            }
            _ => Err(self.error()),
        }
    }

    fn real(&self, literal: &str) -> Result<f64, SpecError> {
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.error()),
        }
    }

    fn integer(&self, literal: &str) -> Result<i64, SpecError> {
        if literal.contains('.') {
            return Err(SpecError::IntegerRealValue(literal.to_string()));
        }
        literal.parse::<i64>().map_err(|_| self.error())
    }

    fn ordered<T: PartialOrd>(&self, bounds: Bounds<T>) -> Result<Bounds<T>, SpecError> {
        match &bounds {
            Bounds::Between(lower, upper) if lower > upper => Err(self.error()),
            _ => Ok(bounds),
        }
    }

    /// The width of a number range must itself be representable.
    fn finite_span(&self, bounds: Bounds<f64>) -> Result<Bounds<f64>, SpecError> {
        match bounds {
            Bounds::Between(lower, upper) if !(upper - lower).is_finite() => Err(self.error()),
            _ => Ok(bounds),
        }
    }

    fn literal(&mut self) -> Result<String, SpecError> {
        match self.next() {
            Some(Token::Literal(literal)) => Ok(literal),
            _ => Err(self.error()),
        }
    }

    fn expect(&mut self, accept: impl Fn(&Token) -> bool) -> Result<(), SpecError> {
        match self.next() {
            Some(token) if accept(&token) => Ok(()),
            _ => Err(self.error()),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self) -> SpecError {
        self.kind.format_error(self.raw)
    }
}
