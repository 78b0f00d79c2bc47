// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Vertical layout of declarations and statements:
//! where lines break, where blank lines go,
//! and when single-statement bodies get indented.

use std::collections::HashMap;

use crate::ast::Item;
use crate::grammar::NodeKind;

/// The layout state threaded through the printing
/// of declarations and statements.
///
/// Every printing function takes the state it starts in
/// and returns the state it leaves behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    /// The last thing printed was a declaration.
    pub declaration: bool,
    /// The last thing printed was a statement.
    pub statement: bool,
    /// The current line has not been terminated yet.
    pub open_line: bool,
    /// The next statement is the body of another statement,
    /// and thus needs one more level of indentation.
    pub nested: bool,
    /// The next statement is the `else` arm of an `if`.
    pub if_else: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Any,
    /// An `if` without an `else` arm.
    If,
    /// An `if` with an `else` arm.
    IfElse,
}

/// What to emit before the first token of a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opening {
    /// Number of line breaks to emit.
    pub newlines: usize,
    /// Whether to increase the indentation level.
    pub indent: bool,
}

impl Layout {
    /// The state at the start of a sequence of declarations and statements.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Marks the next statement as the body of the current one.
    pub const fn prepare_nested(&mut self) {
        self.declaration = false;
        self.statement = false;
        self.open_line = true;
        self.nested = true;
        self.if_else = false;
    }

    /// Starts printing a statement of the given kind.
    ///
    /// Returns what to emit before the statement,
    /// and whether the statement is nested,
    /// which has to be handed back to [`Self::end_statement`].
    pub const fn start_statement(&mut self, kind: StatementKind) -> (Opening, bool) {
        let mut opening = Opening {
            newlines: 0,
            indent: false,
        };
        if self.if_else && matches!(kind, StatementKind::If | StatementKind::IfElse) {
            self.nested = false;
        } else {
            if self.open_line {
                opening.newlines += 1;
            }
            if self.declaration {
                opening.newlines += 1;
            }
            opening.indent = self.nested;
        }
        self.open_line = false;
        let nested = self.nested;
        self.nested = false;
        (opening, nested)
    }

    /// Finishes printing a statement.
    ///
    /// Returns whether to decrease the indentation level again.
    pub const fn end_statement(&mut self, nested: bool) -> bool {
        self.declaration = false;
        self.statement = true;
        nested
    }
}

/// When a declaration counts as long,
/// which surrounds it with blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongRule {
    Always,
    /// When it has a body (e.g. a method that is not abstract).
    WithBody,
    /// When it contains a block or an array initializer anywhere.
    WithLongExpression,
    Never,
}

/// The facts about one item of a sequence
/// that decide about blank lines around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub is_block: bool,
    pub is_declaration: bool,
    pub is_long: bool,
}

/// Whether a blank line goes between two consecutive items.
#[must_use]
pub const fn needs_blank_line(prev: Neighbor, cur: Neighbor) -> bool {
    prev.is_block
        || (prev.is_long && cur.is_declaration)
        || cur.is_block
        || cur.is_long
        || (!prev.is_declaration && cur.is_declaration)
}

/// Which kinds of items count as long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankLinePolicy {
    rules: HashMap<NodeKind, LongRule>,
}

impl Default for BlankLinePolicy {
    fn default() -> Self {
        Self {
            rules: HashMap::from([
                (NodeKind::ConstructorDeclaration, LongRule::Always),
                (NodeKind::ClassDeclaration, LongRule::Always),
                (NodeKind::InterfaceDeclaration, LongRule::Always),
                (NodeKind::AnnotationDeclaration, LongRule::Always),
                (NodeKind::EnumDeclaration, LongRule::Always),
                (NodeKind::BlockDeclaration, LongRule::Always),
                (NodeKind::MethodDeclaration, LongRule::WithBody),
                (NodeKind::FieldDeclaration, LongRule::WithLongExpression),
                (NodeKind::AnnotationMethod, LongRule::WithLongExpression),
            ]),
        }
    }
}

impl BlankLinePolicy {
    /// A policy where nothing is long.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, kind: NodeKind, rule: LongRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    #[must_use]
    pub fn rule(&self, kind: NodeKind) -> LongRule {
        self.rules.get(&kind).copied().unwrap_or(LongRule::Never)
    }

    #[must_use]
    pub fn is_long(&self, item: &Item) -> bool {
        match self.rule(item.kind()) {
            LongRule::Always => true,
            LongRule::WithBody => match item {
                Item::Decl(decl) => decl.has_body(),
                Item::Stmt(_) => false,
            },
            LongRule::WithLongExpression => item.contains_long_expression(),
            LongRule::Never => false,
        }
    }

    #[must_use]
    pub fn neighbor(&self, item: &Item) -> Neighbor {
        let kind = item.kind();
        Neighbor {
            is_block: kind == NodeKind::Block,
            is_declaration: kind.is_declaration(),
            is_long: self.is_long(item),
        }
    }
}
