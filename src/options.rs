// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{DEFAULT_INDENTATION, DEFAULT_LINE_WIDTH};
use crate::layout::BlankLinePolicy;

/// How non-empty array initializers are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayInitializerStyle {
    /// On a single line (`{ a, b };`) if that fits the line width,
    /// including the delimiter that follows,
    /// broken over multiple lines otherwise.
    #[default]
    FitOnLine,
    /// Always broken over multiple lines,
    /// with the elements packed onto as few lines as fit.
    AlwaysBreak,
}

pub struct FormatOptions {
    /// Do not write the output but only check
    /// if the existing output already matches it.
    pub check: bool,
    /// Whether to overwrite an already existing output file.
    pub force: bool,
    /// Space(s) or tab(s) representing one level of indentation.
    pub indentation: String,
    /// The number of columns after which lines get broken,
    /// where that is supported (array initializers).
    pub line_width: usize,
    pub array_initializers: ArrayInitializerStyle,
    /// Which declarations get surrounded by blank lines.
    pub blank_lines: BlankLinePolicy,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            check: false,
            force: false,
            indentation: " ".repeat(DEFAULT_INDENTATION),
            line_width: DEFAULT_LINE_WIDTH,
            array_initializers: ArrayInitializerStyle::default(),
            blank_lines: BlankLinePolicy::default(),
        }
    }
}
