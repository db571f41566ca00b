use super::DecodeError;
use crate::escape::unescape;
use std::fmt;

/// The slice of C the generated documents are written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One or more adjacent string literals, already concatenated
    Str(Vec<u8>),
    Ident(String),
    Number(u64),
    Punct(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Str(bytes) => write!(f, "string literal ({} bytes)", bytes.len()),
            Token::Ident(name) => write!(f, "`{}`", name),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Punct(c) => write!(f, "`{}`", c),
        }
    }
}

/// Tokenize a document, skipping comments and preprocessor lines
pub fn tokenize(src: &str) -> Result<Vec<Token>, DecodeError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            i += 1;
        } else if bytes[i..].starts_with(b"/*") {
            i = match src[i + 2..].find("*/") {
                Some(end) => i + 2 + end + 2,
                None => bytes.len(),
            };
        } else if bytes[i..].starts_with(b"//") || b == b'#' {
            i = src[i..].find('\n').map_or(bytes.len(), |end| i + end);
        } else if b == b'"' {
            let start = i + 1;
            let mut j = start;
            loop {
                match bytes.get(j) {
                    None | Some(b'\n') => return Err(DecodeError::UnterminatedLiteral(i)),
                    Some(b'\\') => j += 2,
                    Some(b'"') => break,
                    Some(_) => j += 1,
                }
            }
            let value = unescape(&src[start..j])?;
            match tokens.last_mut() {
                Some(Token::Str(prev)) => prev.extend(value),
                _ => tokens.push(Token::Str(value)),
            }
            i = j + 1;
        } else if b.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            tokens.push(Token::Number(parse_number(&src[start..i])?));
        } else if b.is_ascii_alphabetic() || b == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            tokens.push(Token::Ident(src[start..i].to_string()));
        } else {
            // Whole char, so multi-byte input cannot split a boundary
            let c = src[i..].chars().next().unwrap_or('\u{fffd}');
            tokens.push(Token::Punct(c));
            i += c.len_utf8();
        }
    }

    Ok(tokens)
}

fn parse_number(text: &str) -> Result<u64, DecodeError> {
    let digits = text.trim_end_matches(['u', 'U', 'l', 'L']);
    let parsed = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        u64::from_str_radix(&digits[1..], 8)
    } else {
        digits.parse()
    };
    parsed.map_err(|_| DecodeError::InvalidNumber(text.to_string()))
}
