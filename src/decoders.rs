// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("The escaped character '\\{0}' is not valid")]
    InvalidEscape(char),

    #[error("The escaped Unicode character '{0}' is not encoding a valid Unicode character")]
    InvalidUnicode(String),

    #[error("The escape sequence at the end of the token is incomplete")]
    Incomplete,
}

/// Iterates over the characters of the body of a quoted token,
/// resolving Java escape sequences on the way.
pub struct StringDecoder<'a> {
    input: &'a str,
    i: usize,
}

impl<'a> StringDecoder<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, i: 0 }
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.i..).unwrap_or_default()
    }

    /// Reads the `u`s and the four hex digits of a Unicode escape,
    /// starting right after the backslash.
    fn utf16_escape(&mut self) -> Result<u32, Error> {
        // Java allows any number of 'u's in a Unicode escape.
        let us = self.rest().bytes().take_while(|b| *b == b'u').count();
        let start = self.i + us;
        let hex = self
            .input
            .get(start..start + 4)
            .ok_or(Error::Incomplete)?;
        self.i = start + 4;
        parse_hex4(hex)
    }

    fn decode_escape(&mut self) -> Result<char, Error> {
        let mut chars = self.rest().chars();
        let c = chars.next().ok_or(Error::Incomplete)?;
        match c {
            'u' => {
                let unit = self.utf16_escape()?;
                if !(0xD800..0xDC00).contains(&unit) {
                    return decode_code_point(unit);
                }
                // a high surrogate has to be followed by its low surrogate
                if !self.rest().starts_with("\\u") {
                    return Err(Error::InvalidUnicode(format!("\\u{unit:04X}")));
                }
                self.i += 1;
                let low = self.utf16_escape()?;
                decode_surrogates(unit, low)
            }
            '0'..='7' => {
                // Octal escapes take at most three digits
                // and may not exceed \377.
                let max_len = if c <= '3' { 3 } else { 2 };
                let len = self
                    .rest()
                    .bytes()
                    .take(max_len)
                    .take_while(u8::is_ascii_digit)
                    .take_while(|b| *b < b'8')
                    .count();
                let digits = self.input.get(self.i..self.i + len).unwrap_or("0");
                self.i += len;
                u32::from_str_radix(digits, 8)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| Error::InvalidUnicode(format!("\\{digits}")))
            }
            c => {
                self.i += c.len_utf8();
                decode_echar(c)
            }
        }
    }
}

impl Iterator for StringDecoder<'_> {
    type Item = Result<char, Error>;

    fn next(&mut self) -> Option<Result<char, Error>> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(if c == '\\' { self.decode_escape() } else { Ok(c) })
    }
}

/// Decodes the body of a quoted token
/// (without the surrounding quotes).
///
/// # Errors
///
/// If the body contains an invalid or incomplete escape sequence.
pub fn decode(body: &str) -> Result<String, Error> {
    StringDecoder::new(body).collect()
}

pub const fn decode_echar(c: char) -> Result<char, Error> {
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        's' => Ok(' '),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        _ => Err(Error::InvalidEscape(c)),
    }
}

fn parse_hex4(hex: &str) -> Result<u32, Error> {
    if hex.len() == 4 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidUnicode(format!("\\u{hex}")))
    } else {
        Err(Error::InvalidUnicode(format!("\\u{hex}")))
    }
}

fn decode_code_point(code: u32) -> Result<char, Error> {
    char::from_u32(code).ok_or_else(|| Error::InvalidUnicode(format!("\\u{code:04X}")))
}

/// Decodes the four hex digits of a `\uXXXX` escape.
///
/// # Errors
///
/// If `hex` is not exactly four hex digits,
/// or if it denotes a surrogate code point.
pub fn decode_uchar(hex: &str) -> Result<char, Error> {
    decode_code_point(parse_hex4(hex)?)
}

/// Combines the two halves of a UTF-16 surrogate pair,
/// as in `\uD83D\uDE00`.
///
/// # Errors
///
/// If `high` or `low` is not a surrogate of the respective kind.
pub fn decode_surrogates(high: u32, low: u32) -> Result<char, Error> {
    if (0xD800..0xDC00).contains(&high) && (0xDC00..0xE000).contains(&low) {
        decode_code_point(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    } else {
        Err(Error::InvalidUnicode(format!("\\u{high:04X}\\u{low:04X}")))
    }
}
