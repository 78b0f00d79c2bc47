// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Operator precedence levels.
//!
//! Levels follow the usual Java operator precedence,
//! scaled by ten so that contexts can sit in between two operators.
//! Higher levels bind tighter.

use crate::ast::{BinaryKind, Expression};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
    /// Any expression goes, e.g. an expression statement or a subscript.
    pub const BASE: Self = Self(0);
    /// A constant expression, e.g. a `case` label.
    pub const CONSTANT: Self = Self(1);
    /// An element of a comma separated list.
    pub const LIST: Self = Self(10);
    pub const ASSIGNMENT: Self = Self(10);
    pub const CONDITIONAL: Self = Self(20);
    pub const LOGICAL_OR: Self = Self(30);
    pub const LOGICAL_AND: Self = Self(40);
    pub const BITWISE_OR: Self = Self(50);
    pub const BITWISE_XOR: Self = Self(60);
    pub const BITWISE_AND: Self = Self(70);
    pub const EQUALITY: Self = Self(80);
    pub const INSTANCE_OF: Self = Self(90);
    pub const RELATIONAL: Self = Self(100);
    pub const SHIFT: Self = Self(110);
    pub const ADDITIVE: Self = Self(120);
    pub const MULTIPLICATIVE: Self = Self(130);
    pub const CAST: Self = Self(140);
    pub const PREFIX: Self = Self(150);
    pub const POSTFIX: Self = Self(160);
    pub const PRIMARY: Self = Self(160);

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// The context one step stricter than this one.
    #[must_use]
    pub const fn stricter(self) -> Self {
        Self(self.0 + 1)
    }

    /// Whether an expression of this precedence
    /// has to be put in parentheses in `context`.
    #[must_use]
    pub const fn needs_parens(self, context: Self) -> bool {
        self.0 < context.0
    }
}

impl BinaryKind {
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::LogicalOr => Precedence::LOGICAL_OR,
            Self::LogicalAnd => Precedence::LOGICAL_AND,
            Self::BitwiseOr => Precedence::BITWISE_OR,
            Self::BitwiseXor => Precedence::BITWISE_XOR,
            Self::BitwiseAnd => Precedence::BITWISE_AND,
            Self::Equality => Precedence::EQUALITY,
            Self::Relational => Precedence::RELATIONAL,
            Self::Shift => Precedence::SHIFT,
            Self::Additive => Precedence::ADDITIVE,
            Self::Multiplicative => Precedence::MULTIPLICATIVE,
        }
    }
}

impl Expression {
    #[must_use]
    pub const fn precedence(&self) -> Precedence {
        match self {
            Self::Assignment { .. } => Precedence::ASSIGNMENT,
            Self::Conditional { .. } => Precedence::CONDITIONAL,
            Self::Binary { kind, .. } => kind.precedence(),
            Self::InstanceOf { .. } => Precedence::INSTANCE_OF,
            Self::Cast { .. } => Precedence::CAST,
            Self::Unary { .. } => Precedence::PREFIX,
            Self::Postfix { .. } => Precedence::POSTFIX,
            Self::Call { .. }
            | Self::Selection { .. }
            | Self::Subscript { .. }
            | Self::ClassLiteral(_)
            | Self::This(_)
            | Self::Super(_)
            | Self::Identifier(_)
            | Self::QualifiedIdentifier(_)
            | Self::NewClass { .. }
            | Self::NewArray { .. }
            | Self::ArrayInitializer(_)
            | Self::Literal { .. }
            | Self::Null => Precedence::PRIMARY,
        }
    }
}

impl Expression {
    /// The `+` or `-` the printed form of this expression starts with, if any.
    ///
    /// Two such signs in a row have to be kept apart,
    /// e.g. `- -a` must not become `--a`.
    #[must_use]
    pub fn leading_sign(&self) -> Option<char> {
        let (first, context) = match self {
            Self::Unary { op, .. } => return op.sign(),
            Self::Literal { text, .. } => {
                return text.chars().next().filter(|c| matches!(c, '+' | '-'));
            }
            Self::Assignment { target, .. } => (target, Precedence::ASSIGNMENT.stricter()),
            Self::Conditional { condition, .. } => (condition, Precedence::CONDITIONAL.stricter()),
            Self::Binary { kind, left, .. } => (left, kind.precedence()),
            Self::InstanceOf { expr, .. } => (expr, Precedence::INSTANCE_OF),
            Self::Selection { expr, .. }
            | Self::Subscript { expr, .. }
            | Self::Postfix { expr, .. }
            | Self::Call {
                receiver: Some(expr),
                ..
            }
            | Self::NewClass {
                outer: Some(expr), ..
            }
            | Self::This(Some(expr))
            | Self::Super(Some(expr)) => (expr, Precedence::PRIMARY),
            Self::Cast { .. }
            | Self::Call { .. }
            | Self::NewClass { .. }
            | Self::This(None)
            | Self::Super(None)
            | Self::ClassLiteral(_)
            | Self::Identifier(_)
            | Self::QualifiedIdentifier(_)
            | Self::NewArray { .. }
            | Self::ArrayInitializer(_)
            | Self::Null => return None,
        };
        if first.precedence().needs_parens(context) {
            None
        } else {
            first.leading_sign()
        }
    }
}
