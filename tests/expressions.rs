// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    ast::{BinaryKind, CompilationUnit, Expression, Item, Statement, Type, UnaryOp},
    error::Error,
    formatter::{format, format_str},
    options::FormatOptions,
};

fn print(tree: &str) -> Result<String, Error> {
    format_str(tree, Rc::new(FormatOptions::default()))
}

#[test]
fn test_parenthesizes_looser_operand() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"MultiplicativeExpression(
                AdditiveExpression(PrimaryIdentifier("a"), "+", PrimaryIdentifier("b")),
                "*",
                PrimaryIdentifier("c"))"#
        )?,
        "(a + b) * c"
    );
    assert_eq!(
        print(
            r#"AdditiveExpression(
                PrimaryIdentifier("a"),
                "+",
                MultiplicativeExpression(PrimaryIdentifier("b"), "*", PrimaryIdentifier("c")))"#
        )?,
        "a + b * c"
    );
    Ok(())
}

#[test]
fn test_left_associativity() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"AdditiveExpression(
                AdditiveExpression(PrimaryIdentifier("a"), "-", PrimaryIdentifier("b")),
                "-",
                PrimaryIdentifier("c"))"#
        )?,
        "a - b - c"
    );
    assert_eq!(
        print(
            r#"AdditiveExpression(
                PrimaryIdentifier("a"),
                "-",
                AdditiveExpression(PrimaryIdentifier("b"), "-", PrimaryIdentifier("c")))"#
        )?,
        "a - (b - c)"
    );
    Ok(())
}

#[test]
fn test_right_associativity() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"Expression(
                PrimaryIdentifier("a"),
                "=",
                Expression(PrimaryIdentifier("b"), "=", PrimaryIdentifier("c")))"#
        )?,
        "a = b = c"
    );
    assert_eq!(
        print(
            r#"ConditionalExpression(
                PrimaryIdentifier("a"),
                PrimaryIdentifier("b"),
                ConditionalExpression(PrimaryIdentifier("c"), PrimaryIdentifier("d"), PrimaryIdentifier("e")))"#
        )?,
        "a ? b : c ? d : e"
    );
    assert_eq!(
        print(
            r#"ConditionalExpression(
                ConditionalExpression(PrimaryIdentifier("a"), PrimaryIdentifier("b"), PrimaryIdentifier("c")),
                PrimaryIdentifier("d"),
                PrimaryIdentifier("e"))"#
        )?,
        "(a ? b : c) ? d : e"
    );
    assert_eq!(
        print(
            r#"ConditionalExpression(
                Expression(PrimaryIdentifier("a"), "=", PrimaryIdentifier("b")),
                PrimaryIdentifier("c"),
                PrimaryIdentifier("d"))"#
        )?,
        "(a = b) ? c : d"
    );
    Ok(())
}

#[test]
fn test_logical_operators() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"LogicalOrExpression(
                LogicalAndExpression(PrimaryIdentifier("a"), PrimaryIdentifier("b")),
                PrimaryIdentifier("c"))"#
        )?,
        "a && b || c"
    );
    assert_eq!(
        print(
            r#"LogicalAndExpression(
                LogicalOrExpression(PrimaryIdentifier("a"), PrimaryIdentifier("b")),
                PrimaryIdentifier("c"))"#
        )?,
        "(a || b) && c"
    );
    Ok(())
}

#[test]
fn test_instanceof() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"LogicalNegationExpression(
                InstanceOfExpression(PrimaryIdentifier("a"), Type(QualifiedIdentifier("String"), null)))"#
        )?,
        "!(a instanceof String)"
    );
    assert_eq!(
        print(
            r#"EqualityExpression(
                InstanceOfExpression(PrimaryIdentifier("a"), Type(QualifiedIdentifier("String"), null)),
                "==",
                BooleanLiteral("false"))"#
        )?,
        "a instanceof String == false"
    );
    assert_eq!(
        print(
            r#"InstanceOfExpression(
                EqualityExpression(PrimaryIdentifier("a"), "==", PrimaryIdentifier("b")),
                QualifiedIdentifier("Boolean"))"#
        )?,
        "(a == b) instanceof Boolean"
    );
    Ok(())
}

#[test]
fn test_same_signs_kept_apart() -> Result<(), Error> {
    assert_eq!(
        print(r#"UnaryExpression("-", UnaryExpression("-", PrimaryIdentifier("a")))"#)?,
        "- -a"
    );
    assert_eq!(
        print(r#"UnaryExpression("+", UnaryExpression("++", PrimaryIdentifier("a")))"#)?,
        "+ ++a"
    );
    assert_eq!(
        print(r#"UnaryExpression("-", UnaryExpression("+", PrimaryIdentifier("a")))"#)?,
        "-+a"
    );
    assert_eq!(
        print(r#"UnaryExpression("-", PostfixExpression(PrimaryIdentifier("a"), "--"))"#)?,
        "-a--"
    );
    assert_eq!(
        print(
            r#"UnaryExpression("-",
                AdditiveExpression(UnaryExpression("-", PrimaryIdentifier("a")), "+", PrimaryIdentifier("b")))"#
        )?,
        "-(-a + b)"
    );
    Ok(())
}

#[test]
fn test_casts() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"CastExpression(Type(QualifiedIdentifier("Integer"), null), UnaryExpression("-", PrimaryIdentifier("a")))"#
        )?,
        "(Integer)(-a)"
    );
    assert_eq!(
        print(r#"BasicCastExpression(PrimitiveType("int"), null, UnaryExpression("-", PrimaryIdentifier("a")))"#)?,
        "(int)-a"
    );
    assert_eq!(
        print(
            r#"BasicCastExpression(PrimitiveType("int"), null,
                AdditiveExpression(PrimaryIdentifier("a"), "+", PrimaryIdentifier("b")))"#
        )?,
        "(int)(a + b)"
    );
    assert_eq!(
        print(
            r#"SelectionExpression(
                CastExpression(Type(QualifiedIdentifier("Foo"), null), PrimaryIdentifier("o")),
                "bar")"#
        )?,
        "((Foo)o).bar"
    );
    Ok(())
}

#[test]
fn test_primaries() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"CallExpression(
                AdditiveExpression(PrimaryIdentifier("a"), "+", PrimaryIdentifier("b")),
                null,
                "foo",
                Arguments())"#
        )?,
        "(a + b).foo()"
    );
    assert_eq!(
        print(
            r#"CallExpression(
                PrimaryIdentifier("Collections"),
                TypeArguments(QualifiedIdentifier("String")),
                "emptyList",
                Arguments())"#
        )?,
        "Collections.<String>emptyList()"
    );
    assert_eq!(
        print(
            r#"SubscriptExpression(
                PrimaryIdentifier("xs"),
                AdditiveExpression(PrimaryIdentifier("i"), "+", IntegerLiteral("1")))"#
        )?,
        "xs[i + 1]"
    );
    assert_eq!(
        print(r#"PostfixExpression(UnaryExpression("-", PrimaryIdentifier("a")), "++")"#)?,
        "(-a)++"
    );
    assert_eq!(print(r#"ThisExpression(PrimaryIdentifier("Outer"))"#)?, "Outer.this");
    assert_eq!(print("ClassLiteralExpression(VoidType)")?, "void.class");
    assert_eq!(
        print(r#"ClassLiteralExpression(Type(PrimitiveType("int"), "[]"))"#)?,
        "int[].class"
    );
    assert_eq!(print("NullLiteral")?, "null");
    Ok(())
}

#[test]
fn test_arguments_in_list_context() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"CallExpression(null, null, "f", Arguments(
                Expression(PrimaryIdentifier("a"), "=", PrimaryIdentifier("b")),
                ConditionalExpression(PrimaryIdentifier("c"), PrimaryIdentifier("d"), PrimaryIdentifier("e"))))"#
        )?,
        "f(a = b, c ? d : e)"
    );
    Ok(())
}

#[test]
fn test_array_creation() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"NewArrayExpression(
                PrimitiveType("int"),
                ConcreteDimensions(AdditiveExpression(PrimaryIdentifier("n"), "+", IntegerLiteral("1"))),
                "[]",
                null)"#
        )?,
        "new int[n + 1][]"
    );
    assert_eq!(
        print(
            r#"NewArrayExpression(
                QualifiedIdentifier("String"),
                null,
                "[]",
                ArrayInitializer(StringLiteral("\"a\"")))"#
        )?,
        r#"new String[] { "a" }"#
    );
    Ok(())
}

#[test]
fn test_typed_tree() -> Result<(), Error> {
    let sum = Expression::binary(
        BinaryKind::Additive,
        Expression::ident("a"),
        "+",
        Expression::ident("b"),
    );
    let product = Expression::binary(BinaryKind::Multiplicative, sum, "*", Expression::int("2"));
    let boxed = Expression::Cast {
        ty: Type::named("java.lang.Integer"),
        operand: Box::new(Expression::Unary {
            op: UnaryOp::Minus,
            operand: Box::new(Expression::ident("x")),
        }),
    };
    let converted = Expression::Cast {
        ty: Type::primitive("long"),
        operand: Box::new(Expression::Unary {
            op: UnaryOp::Minus,
            operand: Box::new(Expression::ident("x")),
        }),
    };
    let unit = CompilationUnit {
        items: vec![
            Item::Stmt(Statement::Expression(product)),
            Item::Stmt(Statement::Expression(boxed)),
            Item::Stmt(Statement::Expression(converted)),
        ],
    };
    assert_eq!(
        format(&unit, Rc::new(FormatOptions::default()))?,
        "(a + b) * 2;\n(java.lang.Integer)(-x);\n(long)-x;\n"
    );
    Ok(())
}
