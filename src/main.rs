// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use prjava::constants::INPUT_SUFFIX;
use prjava::error::Error;
use std::ffi::OsStr;
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to run the printer: {0}")]
    Format(#[from] prjava::error::Error),
}

fn main() -> Result<(), CliError> {
    let invocation = cli::init()?;

    let mut files = Vec::new();
    for source in invocation.src {
        if source.is_file() {
            files.push(source);
        } else if source.is_dir() {
            prjava::add_files_with_suffix(&source, OsStr::new(INPUT_SUFFIX), &mut files)?;
        } else {
            return Err(Error::TargetFileDoesNotExist(source).into());
        }
    }
    tracing::debug!("Found {} file(s) to print", files.len());

    prjava::run(&invocation.options, &files, &invocation.output)?;
    Ok(())
}
