// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use prjava::{
    ast::{Expression, Item, SwitchClause},
    error::Error,
    grammar::NodeKind,
    layout::{needs_blank_line, BlankLinePolicy, Layout, LongRule, Neighbor, Opening, StatementKind},
    lower::{lower, Lowered},
    precedence::Precedence,
    reader,
};

const fn neighbor(is_block: bool, is_declaration: bool, is_long: bool) -> Neighbor {
    Neighbor {
        is_block,
        is_declaration,
        is_long,
    }
}

#[test]
fn test_blank_lines_between_items() {
    let field = neighbor(false, true, false);
    let method = neighbor(false, true, true);
    let statement = neighbor(false, false, false);
    let block = neighbor(true, false, false);

    assert!(!needs_blank_line(field, field));
    assert!(needs_blank_line(field, method));
    assert!(needs_blank_line(method, field));
    assert!(!needs_blank_line(method, statement));
    assert!(needs_blank_line(statement, field));
    assert!(!needs_blank_line(field, statement));
    assert!(!needs_blank_line(statement, statement));
    assert!(needs_blank_line(block, statement));
    assert!(needs_blank_line(statement, block));
}

#[test]
fn test_default_policy() {
    let policy = BlankLinePolicy::default();
    assert_eq!(policy.rule(NodeKind::ClassDeclaration), LongRule::Always);
    assert_eq!(policy.rule(NodeKind::BlockDeclaration), LongRule::Always);
    assert_eq!(policy.rule(NodeKind::MethodDeclaration), LongRule::WithBody);
    assert_eq!(policy.rule(NodeKind::FieldDeclaration), LongRule::WithLongExpression);
    assert_eq!(policy.rule(NodeKind::ImportDeclaration), LongRule::Never);

    let compact = BlankLinePolicy::compact().with_rule(NodeKind::EnumDeclaration, LongRule::Always);
    assert_eq!(compact.rule(NodeKind::ClassDeclaration), LongRule::Never);
    assert_eq!(compact.rule(NodeKind::EnumDeclaration), LongRule::Always);
}

#[test]
fn test_statement_after_declaration() {
    let mut layout = Layout::reset();
    layout.declaration = true;
    let (opening, nested) = layout.start_statement(StatementKind::Any);
    assert_eq!(
        opening,
        Opening {
            newlines: 1,
            indent: false
        }
    );
    assert!(!nested);
    assert!(!layout.end_statement(nested));
    assert!(layout.statement);
    assert!(!layout.declaration);
}

#[test]
fn test_nested_statement() {
    let mut layout = Layout::reset();
    layout.prepare_nested();
    let (opening, nested) = layout.start_statement(StatementKind::Any);
    assert_eq!(
        opening,
        Opening {
            newlines: 1,
            indent: true
        }
    );
    assert!(nested);
    assert!(!layout.nested);
    assert!(!layout.open_line);
    assert!(layout.end_statement(nested));
}

#[test]
fn test_else_if_bonds() {
    let mut layout = Layout::reset();
    layout.prepare_nested();
    layout.if_else = true;
    let (opening, nested) = layout.start_statement(StatementKind::IfElse);
    assert_eq!(opening, Opening::default());
    assert!(!nested);

    let mut layout = Layout::reset();
    layout.prepare_nested();
    layout.if_else = true;
    let (opening, nested) = layout.start_statement(StatementKind::Any);
    assert_eq!(
        opening,
        Opening {
            newlines: 1,
            indent: true
        }
    );
    assert!(nested);
}

#[test]
fn test_precedence_order() {
    assert!(Precedence::ADDITIVE.needs_parens(Precedence::MULTIPLICATIVE));
    assert!(!Precedence::MULTIPLICATIVE.needs_parens(Precedence::ADDITIVE));
    assert!(Precedence::ADDITIVE.needs_parens(Precedence::ADDITIVE.stricter()));
    assert!(!Precedence::ASSIGNMENT.needs_parens(Precedence::LIST));
    assert!(!Precedence::CONDITIONAL.needs_parens(Precedence::CONSTANT));
    assert_eq!(Precedence::PRIMARY.level(), 160);
}

fn lowered_item(tree: &str) -> Result<Item, Error> {
    let Lowered::Item(item) = lower(&reader::read(tree)?)? else {
        panic!("not an item: {tree}");
    };
    Ok(item)
}

#[test]
fn test_switch_clause_label() {
    let case = SwitchClause::Case {
        label: Expression::ident("RED"),
        items: Vec::new(),
    };
    assert_eq!(case.label(), Some(&Expression::ident("RED")));
    assert_eq!(SwitchClause::Default(Vec::new()).label(), None);
}

#[test]
fn test_switch_with_long_case() -> Result<(), Error> {
    let long = lowered_item(
        r#"SwitchStatement(PrimaryIdentifier("k"),
            CaseClause(IntegerLiteral("1"),
                FieldDeclaration(null, Type(PrimitiveType("int"), "[]"),
                    Declarators(Declarator("xs", null, ArrayInitializer(IntegerLiteral("1")))))),
            DefaultClause(BreakStatement(null)))"#,
    )?;
    let short = lowered_item(
        r#"SwitchStatement(PrimaryIdentifier("k"),
            CaseClause(IntegerLiteral("1"), BreakStatement(null)),
            DefaultClause())"#,
    )?;
    let policy =
        BlankLinePolicy::default().with_rule(NodeKind::SwitchStatement, LongRule::WithLongExpression);
    assert!(policy.is_long(&long));
    assert!(!policy.is_long(&short));
    assert!(!BlankLinePolicy::default().is_long(&long));
    Ok(())
}

#[test]
fn test_anonymous_class_field() -> Result<(), Error> {
    let policy = BlankLinePolicy::default();
    let empty = lowered_item(
        r#"FieldDeclaration(null, Type(QualifiedIdentifier("Object"), null),
            Declarators(Declarator("o", null,
                NewClassExpression(null, null, QualifiedIdentifier("Object"), Arguments(), ClassBody()))))"#,
    )?;
    assert!(!policy.is_long(&empty));

    let with_switch = lowered_item(
        r#"FieldDeclaration(null, Type(QualifiedIdentifier("Runnable"), null),
            Declarators(Declarator("r", null,
                NewClassExpression(null, null, QualifiedIdentifier("Runnable"), Arguments(),
                    ClassBody(
                        MethodDeclaration(Modifiers(Modifier("public")), null, VoidType(), "run",
                            FormalParameters(), null, null,
                            Block(SwitchStatement(PrimaryIdentifier("k"),
                                CaseClause(IntegerLiteral("1"), BreakStatement(null))))))))))"#,
    )?;
    assert!(policy.is_long(&with_switch));
    Ok(())
}
