// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Reads syntax trees written in the bracketed tree notation,
//! e.g. `AdditiveExpression(PrimaryIdentifier("a"), "+", IntegerLiteral("1"))`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::decoders;
use crate::tree::{Child, Node};

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[A-Za-z_$][A-Za-z0-9_$]*").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),

    #[error("Unexpected character '{1}' at offset {0}, expected {2}")]
    UnexpectedChar(usize, char, &'static str),

    #[error("Unterminated token starting at offset {0}")]
    UnterminatedToken(usize),

    #[error("Invalid escape in token starting at offset {0}: {1}")]
    InvalidEscape(usize, #[source] decoders::Error),

    #[error("Trailing input at offset {0}")]
    TrailingInput(usize),
}

struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    fn expect(&mut self, expected: char, what: &'static str) -> Result<(), Error> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(Error::UnexpectedChar(self.pos, c, what)),
            None => Err(Error::UnexpectedEnd(self.pos)),
        }
    }

    fn read_name(&mut self) -> Result<&'a str, Error> {
        self.skip_whitespace();
        let rest = self.rest();
        if let Some(found) = RE_NAME.find(rest) {
            self.pos += found.end();
            Ok(found.as_str())
        } else {
            match rest.chars().next() {
                Some(c) => Err(Error::UnexpectedChar(self.pos, c, "a node name")),
                None => Err(Error::UnexpectedEnd(self.pos)),
            }
        }
    }

    fn read_token(&mut self) -> Result<String, Error> {
        let start = self.pos;
        self.expect('"', "a token")?;
        let body_start = self.pos;
        let mut escaped = false;
        for (offset, c) in self.rest().char_indices() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                let body = self
                    .input
                    .get(body_start..body_start + offset)
                    .unwrap_or_default();
                self.pos = body_start + offset + 1;
                return decoders::decode(body).map_err(|err| Error::InvalidEscape(start, err));
            }
        }
        Err(Error::UnterminatedToken(start))
    }

    fn read_child(&mut self) -> Result<Child, Error> {
        match self.peek() {
            Some('"') => Ok(Child::Token(self.read_token()?)),
            Some(_) => {
                let checkpoint = self.pos;
                let name = self.read_name()?;
                if name == "null" {
                    Ok(Child::Absent)
                } else {
                    self.pos = checkpoint;
                    Ok(Child::Node(self.read_node()?))
                }
            }
            None => Err(Error::UnexpectedEnd(self.pos)),
        }
    }

    fn read_node(&mut self) -> Result<Node, Error> {
        let name = self.read_name()?;
        let mut children = Vec::new();
        if self.peek() == Some('(') {
            self.pos += 1;
            if self.peek() == Some(')') {
                self.pos += 1;
            } else {
                loop {
                    children.push(self.read_child()?);
                    match self.peek() {
                        Some(',') => self.pos += 1,
                        Some(')') => {
                            self.pos += 1;
                            break;
                        }
                        Some(c) => {
                            return Err(Error::UnexpectedChar(self.pos, c, "',' or ')'"));
                        }
                        None => return Err(Error::UnexpectedEnd(self.pos)),
                    }
                }
            }
        }
        Ok(Node::new(name, children))
    }
}

/// Reads a single node from its tree notation.
///
/// # Errors
///
/// If the input is not a well-formed tree notation of exactly one node.
pub fn read(input: &str) -> Result<Node, Error> {
    let mut reader = Reader::new(input);
    let node = reader.read_node()?;
    if reader.peek().is_some() {
        return Err(Error::TrailingInput(reader.pos));
    }
    tracing::trace!("Read node '{}' with {} children", node.name(), node.len());
    Ok(node)
}
