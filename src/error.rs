// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::reader;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug)]
pub enum FilesListErrorType {
    ReadDir,
    ExtractEntry,
    EvaluateFileType,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("The printed output differs from the existing file {}", .0.display())]
    Check(PathBuf),

    #[error("Unsupported node kind '{0}'")]
    UnsupportedNode(String),

    #[error("Malformed '{tag}' node: {reason}")]
    MalformedNode { tag: String, reason: String },

    #[error("Failed to read the syntax tree: {0}")]
    Read(#[from] reader::Error),

    /// Represents all cases of `std::fmt::Error`.
    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error("The target to format {} does not seem to exist", .0.display())]
    TargetFileDoesNotExist(PathBuf),

    #[error("Error while reading {}", .0.display())]
    FailedToReadTargetFile(PathBuf),

    #[error("Error while writing {}", .0.display())]
    FailedToWriteFormattedFile(PathBuf),

    #[error("The output file {} already exists; use --force to overwrite it", .0.display())]
    OutputExists(PathBuf),

    #[error("Failed to list files in input directory {}: {:?}", .0.display(), .1)]
    FailedToListFilesInInputDir(PathBuf, FilesListErrorType),
}

impl Error {
    pub fn malformed(tag: &str, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            tag: tag.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type FmtResult<T> = std::result::Result<T, Error>;
