// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

/// Spaces per level of indentation.
pub const DEFAULT_INDENTATION: usize = 2;

/// The column after which array initializers get broken.
pub const DEFAULT_LINE_WIDTH: usize = 78;

/// File suffix of the syntax tree files we read.
pub const INPUT_SUFFIX: &str = "jtree";

/// File suffix of the source files we write.
pub const OUTPUT_SUFFIX: &str = "java";
