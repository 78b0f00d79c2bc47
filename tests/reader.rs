// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    decoders::{self, decode_surrogates, decode_uchar},
    node,
    reader::{read, Error},
    tree::{Child, Node},
};

#[test]
fn test_read_children() -> Result<(), Error> {
    let node = read(r#"ImportDeclaration(null, QualifiedIdentifier("java", "util", "List"), null)"#)?;
    assert_eq!(
        node,
        node!(
            "ImportDeclaration",
            Child::Absent,
            node!("QualifiedIdentifier", "java", "util", "List"),
            Child::Absent
        )
    );
    assert_eq!(node.children().len(), 3);
    assert!(node.get(0).is_some_and(Child::is_absent));
    assert_eq!(
        node.get(1).and_then(Child::as_node).map(Node::len),
        Some(3)
    );
    Ok(())
}

#[test]
fn test_read_leaves() -> Result<(), Error> {
    assert_eq!(read("EmptyStatement")?, Node::leaf("EmptyStatement"));
    assert_eq!(read("  FormalParameters ( )  ")?, Node::leaf("FormalParameters"));
    Ok(())
}

#[test]
fn test_read_escapes() -> Result<(), Error> {
    let node = read(r#"StringLiteral("\"a\\tb\"\n")"#)?;
    assert_eq!(node.get(0).and_then(Child::as_token), Some("\"a\\tb\"\n"));
    assert_eq!(read(r#"CharacterLiteral("A")"#)?, node!("CharacterLiteral", "A"));
    Ok(())
}

#[test]
fn test_display_reads_back() -> Result<(), Error> {
    let node = node!(
        "ExpressionStatement",
        node!(
            "CallExpression",
            Child::Absent,
            Child::Absent,
            "println",
            node!("Arguments", node!("StringLiteral", "\"tab\there\""))
        )
    );
    let text = node.to_string();
    assert_eq!(
        text,
        r#"ExpressionStatement(CallExpression(null, null, "println", Arguments(StringLiteral("\"tab\there\""))))"#
    );
    assert_eq!(read(&text)?, node);
    Ok(())
}

#[test]
fn test_errors_carry_offsets() {
    assert_eq!(read(r#"Foo("x""#), Err(Error::UnexpectedEnd(7)));
    assert_eq!(read(r#"Foo("x)"#), Err(Error::UnterminatedToken(4)));
    assert_eq!(read("Foo() Bar"), Err(Error::TrailingInput(6)));
    assert_eq!(read("Foo(1)"), Err(Error::UnexpectedChar(4, '1', "a node name")));
    assert_eq!(
        read("Foo(a b)"),
        Err(Error::UnexpectedChar(6, 'b', "',' or ')'"))
    );
    assert!(matches!(
        read(r#"Foo("\q")"#),
        Err(Error::InvalidEscape(4, _))
    ));
}

#[test]
fn test_read_surrogate_pair() -> Result<(), Error> {
    assert_eq!(
        read(r#"StringLiteral("\uD83D\uDE00!")"#)?,
        node!("StringLiteral", "\u{1F600}!")
    );
    assert_eq!(read(r#"CharacterLiteral("\uuu0041")"#)?, node!("CharacterLiteral", "A"));
    assert!(matches!(
        read(r#"StringLiteral("\uD83Dx")"#),
        Err(Error::InvalidEscape(14, decoders::Error::InvalidUnicode(_)))
    ));
    assert!(matches!(
        read(r#"StringLiteral("\uD83D\u0041")"#),
        Err(Error::InvalidEscape(14, decoders::Error::InvalidUnicode(_)))
    ));
    Ok(())
}

#[test]
fn test_unicode_escape_digits() {
    assert_eq!(decode_uchar("00e9"), Ok('\u{e9}'));
    assert!(decode_uchar("+041").is_err());
    assert!(decode_uchar("41").is_err());
    assert!(decode_uchar("DE00").is_err());
    assert_eq!(decode_surrogates(0xD83D, 0xDE00), Ok('\u{1F600}'));
    assert!(decode_surrogates(0xDE00, 0xD83D).is_err());
}
