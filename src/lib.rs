// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use git_version::git_version;

use crate::error::{Error, FilesListErrorType};
use crate::options::FormatOptions;

pub mod ast;
pub mod constants;
pub mod context;
pub mod decoders;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod layout;
pub mod lower;
pub mod options;
pub mod precedence;
pub mod reader;
pub mod tree;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// Where the printed source of an input file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Next to the input file, with the suffix replaced by `.java`.
    Sibling,
    Stdout,
}

/// Recursively collects all files with the given suffix
/// in `dir` into `files`.
///
/// # Errors
///
/// If listing the contents of a directory fails.
pub fn add_files_with_suffix(
    dir: &Path,
    suffix: &OsStr,
    files: &mut Vec<PathBuf>,
) -> Result<(), Error> {
    let entries = fs::read_dir(dir).map_err(|_err| {
        Error::FailedToListFilesInInputDir(dir.to_path_buf(), FilesListErrorType::ReadDir)
    })?;
    for entry in entries {
        let entry = entry.map_err(|_err| {
            Error::FailedToListFilesInInputDir(dir.to_path_buf(), FilesListErrorType::ExtractEntry)
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|_err| {
            Error::FailedToListFilesInInputDir(
                dir.to_path_buf(),
                FilesListErrorType::EvaluateFileType,
            )
        })?;
        if file_type.is_dir() {
            add_files_with_suffix(&path, suffix, files)?;
        } else if path.extension() == Some(suffix) {
            files.push(path);
        }
    }
    Ok(())
}

/// The file the printed source of `input` gets written to.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(constants::OUTPUT_SUFFIX)
}

/// Prints each of the given syntax tree files as Java source.
///
/// # Errors
///
/// If a file can not be read or written,
/// if its content is not a supported syntax tree,
/// if the output file already exists and `options.force` is not set,
/// or in check mode, if the existing output differs.
pub fn run(options: &Rc<FormatOptions>, files: &[PathBuf], output: &Output) -> Result<(), Error> {
    for file in files {
        tracing::debug!("Printing {} ...", file.display());
        let text = fs::read_to_string(file)
            .map_err(|_err| Error::FailedToReadTargetFile(file.clone()))?;
        let formatted = formatter::format_str(&text, Rc::clone(options))?;

        if *output == Output::Stdout {
            #[allow(clippy::print_stdout)]
            {
                print!("{formatted}");
            }
            continue;
        }

        let target = output_path(file);
        if options.check {
            let existing = fs::read_to_string(&target)
                .map_err(|_err| Error::FailedToReadTargetFile(target.clone()))?;
            if existing != formatted {
                let patch = diffy::create_patch(&existing, &formatted);
                tracing::warn!(
                    "{} is not formatted as expected:\n{}",
                    target.display(),
                    patch
                );
                return Err(Error::Check(target));
            }
            tracing::debug!("{} is up to date", target.display());
        } else {
            if target.exists() && !options.force {
                return Err(Error::OutputExists(target));
            }
            fs::write(&target, &formatted)
                .map_err(|_err| Error::FailedToWriteFormattedFile(target.clone()))?;
            tracing::info!("Wrote {}", target.display());
        }
    }
    Ok(())
}
