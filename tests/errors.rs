// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::PathBuf, rc::Rc};

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    error::Error,
    formatter::{format_node, format_str},
    node,
    options::FormatOptions,
    reader, Output,
};

fn print(tree: &str) -> Result<String, Error> {
    format_str(tree, Rc::new(FormatOptions::default()))
}

#[test]
fn test_unsupported_node() {
    assert!(matches!(
        print("Frobnicate()"),
        Err(Error::UnsupportedNode(tag)) if tag == "Frobnicate"
    ));
    assert!(matches!(
        print("ExpressionStatement(LambdaExpression())"),
        Err(Error::UnsupportedNode(tag)) if tag == "LambdaExpression"
    ));
}

#[test]
fn test_malformed_node() {
    assert!(matches!(
        print(r#"ConditionalExpression(PrimaryIdentifier("a"), null, PrimaryIdentifier("b"))"#),
        Err(Error::MalformedNode { tag, .. }) if tag == "ConditionalExpression"
    ));
    assert!(matches!(
        print(r#"NewArrayExpression(PrimitiveType("int"), null, null, null)"#),
        Err(Error::MalformedNode { tag, .. }) if tag == "NewArrayExpression"
    ));
    assert!(matches!(
        print(r#"TryCatchFinallyStatement(Block())"#),
        Err(Error::MalformedNode { tag, .. }) if tag == "TryCatchFinallyStatement"
    ));
    assert!(matches!(
        print(r#"AdditiveExpression(PrimaryIdentifier("a"), "*", PrimaryIdentifier("b"))"#),
        Err(Error::MalformedNode { tag, .. }) if tag == "AdditiveExpression"
    ));
    assert!(matches!(
        format_node(&node!("ReturnStatement", "x"), Rc::new(FormatOptions::default())),
        Err(Error::MalformedNode { tag, .. }) if tag == "ReturnStatement"
    ));
}

#[test]
fn test_read_error() {
    assert!(matches!(
        print("Foo("),
        Err(Error::Read(reader::Error::UnexpectedEnd(4)))
    ));
}

/// Writes the given files into a fresh directory below `target/tests`.
fn scratch_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = std::path::absolute(format!("target/tests/run/{name}")).unwrap();
    if fs::exists(&dir).unwrap() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    for (file, content) in files {
        fs::write(dir.join(file), content).unwrap();
    }
    dir
}

const TREE: &str = r#"ExpressionStatement(CallExpression(null, null, "run", Arguments()))"#;

#[test]
fn test_run_writes_sibling() -> Result<(), Error> {
    let dir = scratch_dir("write", &[("Run.jtree", TREE)]);
    let mut files = Vec::new();
    prjava::add_files_with_suffix(&dir, "jtree".as_ref(), &mut files)?;
    assert_eq!(files, vec![dir.join("Run.jtree")]);

    let options = Rc::new(FormatOptions::default());
    prjava::run(&options, &files, &Output::Sibling)?;
    assert_eq!(fs::read_to_string(dir.join("Run.java")).unwrap(), "run();\n");

    assert!(matches!(
        prjava::run(&options, &files, &Output::Sibling),
        Err(Error::OutputExists(path)) if path == dir.join("Run.java")
    ));
    let forced = Rc::new(FormatOptions {
        force: true,
        ..FormatOptions::default()
    });
    prjava::run(&forced, &files, &Output::Sibling)?;
    Ok(())
}

#[test]
fn test_run_check() -> Result<(), Error> {
    let dir = scratch_dir(
        "check",
        &[
            ("Good.jtree", TREE),
            ("Good.java", "run();\n"),
            ("Bad.jtree", TREE),
            ("Bad.java", "run( );\n"),
        ],
    );
    let options = Rc::new(FormatOptions {
        check: true,
        ..FormatOptions::default()
    });
    prjava::run(&options, &[dir.join("Good.jtree")], &Output::Sibling)?;
    assert!(matches!(
        prjava::run(&options, &[dir.join("Bad.jtree")], &Output::Sibling),
        Err(Error::Check(path)) if path == dir.join("Bad.java")
    ));
    Ok(())
}
