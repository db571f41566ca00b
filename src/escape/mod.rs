//! Byte-exact conversion between raw bytes and C string literals
//!
//! Escaping always produces plain ASCII: `\\ \" \n \t \0` use their short
//! forms, every other control byte and every byte >= 0x80 becomes `\xHH`.
//! C numeric escapes are greedy, so a literal is closed and reopened
//! (`"\x01" "abc"`) whenever the next raw character would extend the
//! previous escape. Adjacent literals concatenate, so the value is unchanged.


use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EscapeError {
    #[error("Unknown escape sequence: \\{0}")]
    UnknownEscape(char),

    #[error("Escape value out of byte range: {0:#x}")]
    OutOfRange(u32),

    #[error("Hex escape without digits")]
    EmptyHexEscape,

    #[error("Dangling backslash at end of literal")]
    DanglingBackslash,
}

/// What the previous output token was, for greedy-escape splitting
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Hex,
    Octal,
}

/// Split content into lines, keeping each `\n` with the line it ends
///
/// Empty input yields no lines. A trailing fragment without a newline is
/// its own line.
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    bytes.split_inclusive(|&b| b == b'\n').collect()
}

/// Escape bytes into one quoted literal (possibly several adjacent ones)
pub fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');

    let mut pending = Pending::None;
    let mut prev_question = false;

    for &b in bytes {
        let extends_escape = match pending {
            Pending::Hex => b.is_ascii_hexdigit(),
            Pending::Octal => (b'0'..=b'7').contains(&b),
            Pending::None => false,
        };
        if extends_escape {
            out.push_str("\" \"");
        }
        pending = Pending::None;

        match b {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            0 => {
                out.push_str("\\0");
                pending = Pending::Octal;
            }
            // Keep "??" out of the source so no trigraph can form
            b'?' if prev_question => out.push_str("\\?"),
            b if b < 0x20 || b >= 0x80 => {
                out.push_str(&format!("\\x{:02x}", b));
                pending = Pending::Hex;
            }
            b => out.push(b as char),
        }

        prev_question = b == b'?';
    }

    out.push('"');
    out
}

/// Escape every byte numerically, the inline binary form
pub fn escape_hex_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 2);
    out.push('"');
    for &b in bytes {
        out.push_str(&format!("\\x{:02x}", b));
    }
    out.push('"');
    out
}

/// Decode the body of a C string literal (without the surrounding quotes)
pub fn unescape(body: &str) -> Result<Vec<u8>, EscapeError> {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        let Some(&code) = bytes.get(i + 1) else {
            return Err(EscapeError::DanglingBackslash);
        };
        i += 2;

        match code {
            b'\\' => out.push(b'\\'),
            b'"' => out.push(b'"'),
            b'\'' => out.push(b'\''),
            b'?' => out.push(b'?'),
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'v' => out.push(0x0b),
            b'x' => {
                let start = i;
                let mut value: u32 = 0;
                while let Some(&d) = bytes.get(i).filter(|d| d.is_ascii_hexdigit()) {
                    value = value
                        .saturating_mul(16)
                        .saturating_add((d as char).to_digit(16).unwrap_or(0));
                    i += 1;
                }
                if i == start {
                    return Err(EscapeError::EmptyHexEscape);
                }
                out.push(u8::try_from(value).map_err(|_| EscapeError::OutOfRange(value))?);
            }
            b'0'..=b'7' => {
                let mut value = u32::from(code - b'0');
                let mut digits = 1;
                while digits < 3 {
                    match bytes.get(i) {
                        Some(&d) if (b'0'..=b'7').contains(&d) => {
                            value = value * 8 + u32::from(d - b'0');
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                out.push(u8::try_from(value).map_err(|_| EscapeError::OutOfRange(value))?);
            }
            other => return Err(EscapeError::UnknownEscape(other as char)),
        }
    }

    Ok(out)
}
