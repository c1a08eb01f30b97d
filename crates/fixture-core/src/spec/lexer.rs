//! Tokenizer for field specs.

/// A single field spec token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Keyword such as `number` or `in`
    Ident(String),
    /// Numeric literal, kept as written so the parser can tell reals from integers
    Literal(String),
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
}

/// Character the lexer could not place in any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: usize,
    pub found: char,
}

/// Split a raw spec into tokens, skipping whitespace.
pub fn tokenize(raw: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = raw.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let token = match c {
            '<' => Token::Lt,
            '>' => Token::Gt,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            c if c.is_ascii_alphabetic() => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                }
                tokens.push(Token::Ident(ident));
                continue;
            }
            c if c.is_ascii_digit() || c == '.' || c == '-' => {
                let mut literal = String::new();
                literal.push(c);
                chars.next();
                while let Some(&(_, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || c == '.') {
                        break;
                    }
                    literal.push(c);
                    chars.next();
                }
                if !is_numeric_literal(&literal) {
                    return Err(LexError { position, found: c });
                }
                tokens.push(Token::Literal(literal));
                continue;
            }
            found => return Err(LexError { position, found }),
        };
        tokens.push(token);
        chars.next();
    }

    Ok(tokens)
}

/// `-?digits`, `-?digits.digits` or `-?.digits`.
fn is_numeric_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => all_digits(whole) && !fraction.is_empty() && all_digits(fraction),
    }
}
