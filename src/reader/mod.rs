//! Decoding generated documents back into resource tables
//!
//! This is the consumer's view of a generated file: auxiliary arrays are
//! resolved, adjacent literals are concatenated with C semantics, and the
//! table is read up to its guard entry.

mod error;
mod lexer;


pub use error::DecodeError;
pub use lexer::{Token, tokenize};

use crate::layout::RecordLayout;
use std::collections::HashMap;

/// One decoded table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl PackedEntry {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Entries of a resource table in emission order, guard excluded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceTable {
    entries: Vec<PackedEntry>,
}

impl ResourceTable {
    pub fn new(entries: Vec<PackedEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackedEntry> {
        self.entries.iter()
    }

    /// First entry with this name
    pub fn get(&self, name: &str) -> Option<&PackedEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode a generated document laid out per `layout`
pub fn decode(src: &str, layout: &RecordLayout) -> Result<ResourceTable, DecodeError> {
    let tokens = tokenize(src)?;
    let mut cursor = Cursor {
        tokens: &tokens,
        pos: 0,
    };
    let mut arrays: HashMap<String, Vec<u8>> = HashMap::new();

    while let Some(symbol) = cursor.next_declaration() {
        if symbol == layout.table_symbol {
            let entries = cursor.table(layout, &arrays)?;
            return Ok(ResourceTable::new(entries));
        }
        if arrays.contains_key(&symbol) {
            return Err(DecodeError::DuplicateSymbol(symbol));
        }
        let bytes = cursor.byte_array()?;
        arrays.insert(symbol, bytes);
    }

    Err(DecodeError::MissingTable(layout.table_symbol.clone()))
}

/// A field value as written in an entry
enum Value {
    Str(Vec<u8>),
    Symbol(String),
    Number(u64),
    /// Anything else, e.g. the guard's `(void*)0`
    Other,
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'a Token, DecodeError> {
        let token = self.peek().ok_or(DecodeError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek() == Some(&Token::Punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, c: char) -> Result<(), DecodeError> {
        let token = self.next()?;
        if *token == Token::Punct(c) {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedToken {
                expected: format!("`{}`", c),
                found: token.to_string(),
            })
        }
    }

    /// Advance past the next `<ident>[] = {`, returning the identifier
    fn next_declaration(&mut self) -> Option<String> {
        const OPENING: [char; 4] = ['[', ']', '=', '{'];

        while self.pos < self.tokens.len() {
            if let Token::Ident(name) = &self.tokens[self.pos] {
                let rest = &self.tokens[self.pos + 1..];
                let opens = rest.len() >= OPENING.len()
                    && OPENING
                        .iter()
                        .zip(rest)
                        .all(|(c, t)| *t == Token::Punct(*c));
                if opens {
                    self.pos += 1 + OPENING.len();
                    return Some(name.clone());
                }
            }
            self.pos += 1;
        }
        None
    }

    /// `0x00, 0x01, ... };` after the opening brace
    fn byte_array(&mut self) -> Result<Vec<u8>, DecodeError> {
        let mut bytes = Vec::new();
        loop {
            match self.next()? {
                Token::Punct('}') => break,
                Token::Punct(',') => continue,
                Token::Number(n) => {
                    let byte = u8::try_from(*n).map_err(|_| DecodeError::ByteOutOfRange(*n))?;
                    bytes.push(byte);
                }
                other => {
                    return Err(DecodeError::UnexpectedToken {
                        expected: "byte value".to_string(),
                        found: other.to_string(),
                    })
                }
            }
        }
        self.eat_punct(';');
        Ok(bytes)
    }

    /// Records up to and including the guard
    fn table(
        &mut self,
        layout: &RecordLayout,
        arrays: &HashMap<String, Vec<u8>>,
    ) -> Result<Vec<PackedEntry>, DecodeError> {
        let mut entries = Vec::new();

        loop {
            if self.eat_punct('}') {
                return Err(DecodeError::MissingGuard);
            }
            let mut fields = self.record()?;
            self.eat_punct(',');

            let index = entries.len();
            let name = match fields.remove(&layout.name_field) {
                Some(Value::Str(bytes)) => {
                    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidName(index))?
                }
                // Anything but a string literal is the guard
                _ => return Ok(entries),
            };

            let missing = |field: &str| DecodeError::MissingField {
                index,
                field: field.to_string(),
            };

            let declared = match fields.remove(&layout.len_field) {
                Some(Value::Number(n)) => n,
                _ => return Err(missing(layout.len_field.as_str())),
            };

            let data = match fields.remove(&layout.data_field) {
                Some(Value::Str(bytes)) => bytes,
                Some(Value::Symbol(symbol)) => arrays
                    .get(&symbol)
                    .cloned()
                    .ok_or(DecodeError::UnknownSymbol(symbol))?,
                _ => return Err(missing(layout.data_field.as_str())),
            };

            if declared != data.len() as u64 {
                return Err(DecodeError::LengthMismatch {
                    name,
                    declared,
                    actual: data.len(),
                });
            }

            entries.push(PackedEntry { name, data });
        }
    }

    /// `{ .field = value, ... }`
    fn record(&mut self) -> Result<HashMap<String, Value>, DecodeError> {
        self.expect_punct('{')?;
        let mut fields = HashMap::new();

        while !self.eat_punct('}') {
            self.expect_punct('.')?;
            let field = match self.next()? {
                Token::Ident(name) => name.clone(),
                other => {
                    return Err(DecodeError::UnexpectedToken {
                        expected: "field name".to_string(),
                        found: other.to_string(),
                    })
                }
            };
            self.expect_punct('=')?;
            let value = self.value()?;
            fields.insert(field, value);
            self.eat_punct(',');
        }

        Ok(fields)
    }

    /// A value runs until a top-level `,` or `}`
    fn value(&mut self) -> Result<Value, DecodeError> {
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            match token {
                Token::Punct('(') => depth += 1,
                Token::Punct(')') => depth = depth.saturating_sub(1),
                Token::Punct(',') | Token::Punct('}') if depth == 0 => break,
                _ => {}
            }
            self.pos += 1;
        }
        if self.peek().is_none() {
            return Err(DecodeError::UnexpectedEnd);
        }

        Ok(match &self.tokens[start..self.pos] {
            [Token::Str(bytes)] => Value::Str(bytes.clone()),
            [Token::Ident(symbol)] => Value::Symbol(symbol.clone()),
            [Token::Number(n)] => Value::Number(*n),
            _ => Value::Other,
        })
    }
}
