// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::Path, rc::Rc};

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    error::Error,
    formatter::{format, format_node, format_str},
    lower::lower_unit,
    options::FormatOptions,
    reader,
};

fn test_format(input: &str, expected: &str, debug_file: &Path, expected_file: &Path) -> Result<(), Error> {
    let output = format_str(input, Rc::new(FormatOptions::default()))?;
    let debug_file_abs = std::path::absolute(format!("target/tests/{}", debug_file.display())).unwrap();
    std::fs::create_dir_all(debug_file_abs.parent().unwrap()).unwrap();
    if output != expected {
        std::fs::write(&debug_file_abs, &output).unwrap();
        eprintln!(
            "Debug out file written to:\n{}\n\nCompare with:\nmeld tests/{} target/tests/{} &",
            debug_file.display(),
            expected_file.display(),
            debug_file.display()
        );
    } else if fs::exists(&debug_file_abs).unwrap() {
        std::fs::remove_file(debug_file_abs).unwrap();
    }
    assert_eq!(output, expected);
    Ok(())
}

/// Printing the tree notation of a read tree
/// and reading that back in has to print the same source.
fn test_stable(input: &str) -> Result<(), Error> {
    let options = Rc::new(FormatOptions::default());
    let node = reader::read(input)?;
    let reread = reader::read(&node.to_string())?;
    assert_eq!(node, reread);
    assert_eq!(
        format_node(&node, Rc::clone(&options))?,
        format_node(&reread, options)?
    );
    Ok(())
}

macro_rules! test_auto {
    ($input:literal, $expected:literal) => {
        test_format(
            include_str!($input),
            include_str!($expected),
            Path::new(&format!("{}.actual_output.java", $expected)),
            Path::new($expected),
        )
    };
    ($input:literal) => {
        test_stable(include_str!($input))
    };
}

#[test]
fn test_greeter() -> Result<(), Error> {
    test_auto!("data/input/greeter.jtree", "data/output/greeter.java")
}

#[test]
fn test_greeter_stable() -> Result<(), Error> {
    test_auto!("data/input/greeter.jtree")
}

#[test]
fn test_loops() -> Result<(), Error> {
    test_auto!("data/input/loops.jtree", "data/output/loops.java")
}

#[test]
fn test_loops_stable() -> Result<(), Error> {
    test_auto!("data/input/loops.jtree")
}

#[test]
fn test_kinds() -> Result<(), Error> {
    test_auto!("data/input/kinds.jtree", "data/output/kinds.java")
}

#[test]
fn test_kinds_stable() -> Result<(), Error> {
    test_auto!("data/input/kinds.jtree")
}

#[test]
fn test_lowered_unit() -> Result<(), Error> {
    let node = reader::read(include_str!("data/input/greeter.jtree"))?;
    let unit = lower_unit(&node)?;
    assert_eq!(unit.items.len(), 5);
    assert_eq!(
        format(&unit, Rc::new(FormatOptions::default()))?,
        include_str!("data/output/greeter.java")
    );
    Ok(())
}
