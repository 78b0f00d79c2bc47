// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    error::Error,
    formatter::format_str,
    options::{ArrayInitializerStyle, FormatOptions},
};

fn print(tree: &str) -> Result<String, Error> {
    format_str(tree, Rc::new(FormatOptions::default()))
}

fn print_with(tree: &str, options: FormatOptions) -> Result<String, Error> {
    format_str(tree, Rc::new(options))
}

#[test]
fn test_dangling_bodies_are_indented() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"ConditionalStatement(
                PrimaryIdentifier("a"),
                ReturnStatement(null),
                ReturnStatement(IntegerLiteral("1")))"#
        )?,
        "if (a)\n  return;\nelse\n  return 1;\n"
    );
    Ok(())
}

#[test]
fn test_else_if_stays_on_line() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"ConditionalStatement(
                PrimaryIdentifier("a"),
                Block(ExpressionStatement(CallExpression(null, null, "f", Arguments()))),
                ConditionalStatement(
                    PrimaryIdentifier("b"),
                    Block(ExpressionStatement(CallExpression(null, null, "g", Arguments())))))"#
        )?,
        "if (a) {\n  f();\n} else if (b) {\n  g();\n}\n"
    );
    Ok(())
}

#[test]
fn test_for_condition_assignment() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"ForStatement(
                BasicForControl(null, null, null,
                    Expression(PrimaryIdentifier("a"), "=", PrimaryIdentifier("b")),
                    null),
                EmptyStatement)"#
        )?,
        "for (; (a = b); )\n  ;\n"
    );
    Ok(())
}

#[test]
fn test_labeled_statement() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"LabeledStatement("outer",
                WhileStatement(BooleanLiteral("true"), BreakStatement("outer")))"#
        )?,
        "outer:\nwhile (true)\n  break outer;\n"
    );
    Ok(())
}

#[test]
fn test_do_while() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"DoWhileStatement(
                Block(ExpressionStatement(PostfixExpression(PrimaryIdentifier("i"), "++"))),
                RelationalExpression(PrimaryIdentifier("i"), "<", IntegerLiteral("10")))"#
        )?,
        "do {\n  i++;\n} while (i < 10);\n"
    );
    Ok(())
}

#[test]
fn test_try_catch_finally() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"TryCatchFinallyStatement(
                Block(ExpressionStatement(CallExpression(null, null, "run", Arguments()))),
                CatchClause(FormalParameter(null, QualifiedIdentifier("Exception"), null, "e", null), Block()),
                Block(ExpressionStatement(CallExpression(null, null, "close", Arguments()))))"#
        )?,
        "try {\n  run();\n} catch (Exception e) {\n} finally {\n  close();\n}\n"
    );
    Ok(())
}

#[test]
fn test_synchronized_and_assert() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"SynchronizedStatement(ThisExpression(null),
                Block(AssertStatement(
                    RelationalExpression(PrimaryIdentifier("n"), ">", IntegerLiteral("0")),
                    StringLiteral("\"positive\""))))"#
        )?,
        "synchronized (this) {\n  assert n > 0 : \"positive\";\n}\n"
    );
    Ok(())
}

#[test]
fn test_anonymous_class() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"ExpressionStatement(
                NewClassExpression(null, null, QualifiedIdentifier("Runnable"), Arguments(),
                    ClassBody(
                        MethodDeclaration(Modifiers(Modifier("public")), null, VoidType(), "run",
                            FormalParameters(), null, null, Block()))))"#
        )?,
        "new Runnable() {\n  public void run() {\n  }\n};\n"
    );
    Ok(())
}

#[test]
fn test_blank_line_after_local_declaration() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"Block(
                FieldDeclaration(null, PrimitiveType("int"), Declarators(Declarator("a", null, IntegerLiteral("1")))),
                FieldDeclaration(null, PrimitiveType("int"), Declarators(Declarator("b", null, null))),
                ExpressionStatement(Expression(PrimaryIdentifier("b"), "=", PrimaryIdentifier("a"))))"#
        )?,
        "{\n  int a = 1;\n  int b;\n\n  b = a;\n}\n"
    );
    Ok(())
}

#[test]
fn test_annotations() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"FieldDeclaration(
                Modifiers(
                    Annotation(QualifiedIdentifier("Deprecated"),
                        ElementValuePairs(
                            ElementValuePair("since", StringLiteral("\"9\"")),
                            ElementValuePair("forRemoval", BooleanLiteral("true")))),
                    Modifier("static")),
                PrimitiveType("long"),
                Declarators(Declarator("id", null, null), Declarator("ids", "[]", null)))"#
        )?,
        "@Deprecated(since = \"9\", forRemoval = true) static long id, ids[];\n"
    );
    Ok(())
}

#[test]
fn test_empty_array_initializer() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"FieldDeclaration(null, Type(PrimitiveType("int"), "[]"),
                Declarators(Declarator("xs", null, ArrayInitializer())))"#
        )?,
        "int[] xs = { };\n"
    );
    Ok(())
}

const NUMBERS: &str = r#"FieldDeclaration(null, Type(PrimitiveType("int"), "[]"),
    Declarators(Declarator("xs", null, ArrayInitializer(
        IntegerLiteral("100"), IntegerLiteral("200"), IntegerLiteral("300"), IntegerLiteral("400")))))"#;

#[test]
fn test_array_initializer_on_one_line() -> Result<(), Error> {
    assert_eq!(print(NUMBERS)?, "int[] xs = { 100, 200, 300, 400 };\n");
    assert_eq!(
        print(
            r#"ArrayInitializer(
                ArrayInitializer(IntegerLiteral("1")),
                ArrayInitializer(IntegerLiteral("2")))"#
        )?,
        "{ { 1 }, { 2 } }"
    );
    Ok(())
}

#[test]
fn test_array_initializer_broken() -> Result<(), Error> {
    let options = FormatOptions {
        line_width: 15,
        ..FormatOptions::default()
    };
    assert_eq!(
        print_with(NUMBERS, options)?,
        "int[] xs = {\n  100, 200,\n  300, 400\n};\n"
    );
    Ok(())
}

#[test]
fn test_array_initializer_always_broken() -> Result<(), Error> {
    let options = FormatOptions {
        array_initializers: ArrayInitializerStyle::AlwaysBreak,
        ..FormatOptions::default()
    };
    assert_eq!(
        print_with(NUMBERS, options)?,
        "int[] xs = {\n  100, 200, 300, 400\n};\n"
    );
    Ok(())
}

const SMALL_NUMBERS: &str = r#"FieldDeclaration(null, Type(PrimitiveType("int"), "[]"),
    Declarators(Declarator("xs", null, ArrayInitializer(
        IntegerLiteral("1"), IntegerLiteral("2"), IntegerLiteral("3")))))"#;

#[test]
fn test_array_initializer_width_includes_semicolon() -> Result<(), Error> {
    let exact = FormatOptions {
        line_width: 23,
        ..FormatOptions::default()
    };
    assert_eq!(print_with(SMALL_NUMBERS, exact)?, "int[] xs = { 1, 2, 3 };\n");
    let narrow = FormatOptions {
        line_width: 22,
        ..FormatOptions::default()
    };
    assert_eq!(
        print_with(SMALL_NUMBERS, narrow)?,
        "int[] xs = {\n  1, 2, 3\n};\n"
    );
    Ok(())
}

#[test]
fn test_simple_else_after_block() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"ConditionalStatement(
                PrimaryIdentifier("a"),
                Block(ExpressionStatement(CallExpression(null, null, "f", Arguments()))),
                ExpressionStatement(CallExpression(null, null, "x", Arguments())))"#
        )?,
        "if (a) {\n  f();\n} else\n  x();\n"
    );
    Ok(())
}

#[test]
fn test_anonymous_class_fields() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"CompilationUnit(
                ClassDeclaration(null, "Tasks", null, null, null,
                    ClassBody(
                        FieldDeclaration(null, PrimitiveType("int"), Declarators(Declarator("k", null, null))),
                        FieldDeclaration(null, Type(QualifiedIdentifier("Runnable"), null),
                            Declarators(Declarator("r", null,
                                NewClassExpression(null, null, QualifiedIdentifier("Runnable"), Arguments(),
                                    ClassBody(
                                        MethodDeclaration(Modifiers(Modifier("public")), null, VoidType(), "run",
                                            FormalParameters(), null, null,
                                            Block(SwitchStatement(PrimaryIdentifier("k"),
                                                CaseClause(IntegerLiteral("1"), BreakStatement(null)))))))))),
                        FieldDeclaration(null, Type(QualifiedIdentifier("Object"), null),
                            Declarators(Declarator("o", null,
                                NewClassExpression(null, null, QualifiedIdentifier("Object"), Arguments(),
                                    ClassBody())))),
                        FieldDeclaration(null, PrimitiveType("int"), Declarators(Declarator("n", null, null))))))"#
        )?,
        "class Tasks {
  int k;

  Runnable r = new Runnable() {
    public void run() {
      switch (k) {
      case 1:
        break;
      }
    }
  };

  Object o = new Object() {
  };
  int n;
}
"
    );
    Ok(())
}

#[test]
fn test_imports_grouped_by_package() -> Result<(), Error> {
    assert_eq!(
        print(
            r#"CompilationUnit(
                ImportDeclaration(null, QualifiedIdentifier("java", "util", "List"), null),
                ImportDeclaration(null, QualifiedIdentifier("java", "util", "Map"), null),
                ImportDeclaration(null, QualifiedIdentifier("java", "io", "File"), null),
                ImportDeclaration(null, QualifiedIdentifier("java", "io"), "*"))"#
        )?,
        "import java.util.List;\nimport java.util.Map;\n\nimport java.io.File;\nimport java.io.*;\n"
    );
    Ok(())
}
