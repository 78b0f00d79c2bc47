// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Typed Java syntax tree.
//!
//! Every node category of the grammar is one variant of a closed enum,
//! so the printer can match on it exhaustively.
//! Absent optional children are `None`,
//! repeated children are `Vec`s,
//! and empty repeated children are equivalent to absent ones
//! wherever the printer does not tell them apart.

use crate::grammar::NodeKind;

/// A (possibly qualified) name, e.g. `java.util.List`.
pub type QualifiedName = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub items: Vec<Item>,
}

/// One entry of a sequence of declarations and statements,
/// as found in compilation units, class bodies and blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Decl(Declaration),
    Stmt(Statement),
}

impl Item {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Decl(decl) => decl.kind(),
            Self::Stmt(stmt) => stmt.kind(),
        }
    }

    /// Whether this item contains a block or an array initializer
    /// anywhere within.
    #[must_use]
    pub fn contains_long_expression(&self) -> bool {
        match self {
            Self::Decl(decl) => decl.contains_long_expression(),
            Self::Stmt(stmt) => stmt.contains_long_expression(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Package(PackageDecl),
    Import(ImportDecl),
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Annotation(AnnotationDecl),
    Enum(EnumDecl),
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Initializer(InitializerDecl),
    AnnotationMethod(AnnotationMethod),
    Empty,
}

impl Declaration {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Package(_) => NodeKind::PackageDeclaration,
            Self::Import(_) => NodeKind::ImportDeclaration,
            Self::Class(_) => NodeKind::ClassDeclaration,
            Self::Interface(_) => NodeKind::InterfaceDeclaration,
            Self::Annotation(_) => NodeKind::AnnotationDeclaration,
            Self::Enum(_) => NodeKind::EnumDeclaration,
            Self::Field(_) => NodeKind::FieldDeclaration,
            Self::Method(_) => NodeKind::MethodDeclaration,
            Self::Constructor(_) => NodeKind::ConstructorDeclaration,
            Self::Initializer(_) => NodeKind::BlockDeclaration,
            Self::AnnotationMethod(_) => NodeKind::AnnotationMethod,
            Self::Empty => NodeKind::EmptyDeclaration,
        }
    }

    /// Whether this declaration has a body of its own
    /// (a block, or a class body).
    #[must_use]
    pub const fn has_body(&self) -> bool {
        match self {
            Self::Method(method) => method.body.is_some(),
            Self::Class(_)
            | Self::Interface(_)
            | Self::Annotation(_)
            | Self::Enum(_)
            | Self::Constructor(_)
            | Self::Initializer(_) => true,
            Self::Package(_)
            | Self::Import(_)
            | Self::Field(_)
            | Self::AnnotationMethod(_)
            | Self::Empty => false,
        }
    }

    #[must_use]
    pub fn contains_long_expression(&self) -> bool {
        match self {
            Self::Package(_) | Self::Import(_) | Self::Empty => false,
            Self::Field(field) => {
                field.modifiers.contains_long_expression()
                    || field
                        .declarators
                        .iter()
                        .filter_map(|decl| decl.init.as_ref())
                        .any(Expression::contains_long_expression)
            }
            Self::AnnotationMethod(method) => {
                method.modifiers.contains_long_expression()
                    || method
                        .default
                        .as_ref()
                        .is_some_and(ElementValue::contains_long_expression)
            }
            Self::Method(method) => {
                method.body.is_some() || method.modifiers.contains_long_expression()
            }
            Self::Constructor(_) | Self::Initializer(_) => true,
            Self::Class(class) => items_contain_long_expression(&class.body),
            Self::Interface(interface) => items_contain_long_expression(&interface.body),
            Self::Annotation(annotation) => items_contain_long_expression(&annotation.body),
            Self::Enum(decl) => {
                decl.constants.iter().any(|constant| {
                    constant
                        .args
                        .iter()
                        .flatten()
                        .any(Expression::contains_long_expression)
                        || constant
                            .body
                            .as_deref()
                            .is_some_and(items_contain_long_expression)
                }) || decl
                    .members
                    .as_deref()
                    .is_some_and(items_contain_long_expression)
            }
        }
    }
}

fn items_contain_long_expression(items: &[Item]) -> bool {
    items.iter().any(Item::contains_long_expression)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(pub Vec<Modifier>);

impl Modifiers {
    #[must_use]
    pub fn keywords<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            words
                .into_iter()
                .map(|word| Modifier::Keyword(word.to_owned()))
                .collect(),
        )
    }

    fn contains_long_expression(&self) -> bool {
        self.0.iter().any(|modifier| match modifier {
            Modifier::Keyword(_) => false,
            Modifier::Annotation(annotation) => annotation.contains_long_expression(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Keyword(String),
    Annotation(Annotation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: QualifiedName,
    pub value: Option<AnnotationValue>,
}

impl Annotation {
    fn contains_long_expression(&self) -> bool {
        match &self.value {
            None => false,
            Some(AnnotationValue::Single(value)) => value.contains_long_expression(),
            Some(AnnotationValue::Pairs(pairs)) => pairs
                .iter()
                .any(|(_, value)| value.contains_long_expression()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Single(ElementValue),
    Pairs(Vec<(String, ElementValue)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementValue {
    Expr(Expression),
    Annotation(Box<Annotation>),
}

impl ElementValue {
    fn contains_long_expression(&self) -> bool {
        match self {
            Self::Expr(expr) => expr.contains_long_expression(),
            Self::Annotation(annotation) => annotation.contains_long_expression(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDecl {
    pub annotations: Vec<Annotation>,
    pub name: QualifiedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub is_static: bool,
    pub name: QualifiedName,
    /// Whether this is a `.*` import.
    pub on_demand: bool,
}

impl ImportDecl {
    /// The package (or, for static imports, the type)
    /// this import takes its name(s) from.
    #[must_use]
    pub fn package(&self) -> String {
        let len = if self.on_demand {
            self.name.len()
        } else {
            self.name.len().saturating_sub(1)
        };
        self.name.get(..len).unwrap_or_default().join(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub implements: Vec<Type>,
    pub body: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub type_params: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub body: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub body: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub modifiers: Modifiers,
    pub name: String,
    pub implements: Vec<Type>,
    pub constants: Vec<EnumConstant>,
    pub members: Option<Vec<Item>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub annotations: Vec<Annotation>,
    pub name: String,
    pub args: Option<Vec<Expression>>,
    pub body: Option<Vec<Item>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub ty: Type,
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    pub name: String,
    pub dims: usize,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParameter>,
    pub result: ResultType,
    /// `None` for the `<init>` pseudo-method.
    pub name: Option<String>,
    pub params: Vec<FormalParameter>,
    pub dims: usize,
    pub throws: Vec<Type>,
    pub body: Option<Vec<Item>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub type_params: Vec<TypeParameter>,
    pub name: String,
    pub params: Vec<FormalParameter>,
    pub throws: Vec<Type>,
    pub body: Vec<Item>,
}

/// An instance or static initializer block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub body: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMethod {
    pub modifiers: Modifiers,
    pub ty: Type,
    pub name: String,
    pub default: Option<ElementValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParameter {
    pub modifiers: Modifiers,
    pub ty: Type,
    pub varargs: bool,
    pub name: String,
    pub dims: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Block(Vec<Item>),
    If {
        condition: Expression,
        then: Box<Statement>,
        otherwise: Option<Box<Statement>>,
    },
    For {
        control: ForControl,
        body: Box<Statement>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
        condition: Expression,
    },
    Try {
        body: Vec<Item>,
        catches: Vec<CatchClause>,
        finally: Option<Vec<Item>>,
    },
    Switch {
        selector: Expression,
        clauses: Vec<SwitchClause>,
    },
    Synchronized {
        lock: Expression,
        body: Box<Statement>,
    },
    Return(Option<Expression>),
    Throw(Expression),
    Break(Option<String>),
    Continue(Option<String>),
    Labeled {
        label: String,
        body: Box<Statement>,
    },
    Expression(Expression),
    Assert {
        condition: Expression,
        message: Option<Expression>,
    },
    Empty,
}

impl Statement {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Block(_) => NodeKind::Block,
            Self::If { .. } => NodeKind::ConditionalStatement,
            Self::For { .. } => NodeKind::ForStatement,
            Self::While { .. } => NodeKind::WhileStatement,
            Self::DoWhile { .. } => NodeKind::DoWhileStatement,
            Self::Try { .. } => NodeKind::TryCatchFinallyStatement,
            Self::Switch { .. } => NodeKind::SwitchStatement,
            Self::Synchronized { .. } => NodeKind::SynchronizedStatement,
            Self::Return(_) => NodeKind::ReturnStatement,
            Self::Throw(_) => NodeKind::ThrowStatement,
            Self::Break(_) => NodeKind::BreakStatement,
            Self::Continue(_) => NodeKind::ContinueStatement,
            Self::Labeled { .. } => NodeKind::LabeledStatement,
            Self::Expression(_) => NodeKind::ExpressionStatement,
            Self::Assert { .. } => NodeKind::AssertStatement,
            Self::Empty => NodeKind::EmptyStatement,
        }
    }

    #[must_use]
    pub fn contains_long_expression(&self) -> bool {
        match self {
            Self::Block(_) | Self::Try { .. } => true,
            Self::If {
                condition,
                then,
                otherwise,
            } => {
                condition.contains_long_expression()
                    || then.contains_long_expression()
                    || otherwise
                        .as_deref()
                        .is_some_and(Self::contains_long_expression)
            }
            Self::For { control, body } => {
                control.contains_long_expression() || body.contains_long_expression()
            }
            Self::While { condition, body }
            | Self::DoWhile { body, condition }
            | Self::Synchronized {
                lock: condition,
                body,
            } => condition.contains_long_expression() || body.contains_long_expression(),
            Self::Switch { selector, clauses } => {
                selector.contains_long_expression()
                    || clauses.iter().any(|clause| {
                        clause.label().is_some_and(Expression::contains_long_expression)
                            || items_contain_long_expression(clause.items())
                    })
            }
            Self::Return(expr) => expr
                .as_ref()
                .is_some_and(Expression::contains_long_expression),
            Self::Throw(expr) | Self::Expression(expr) => expr.contains_long_expression(),
            Self::Labeled { body, .. } => body.contains_long_expression(),
            Self::Assert { condition, message } => {
                condition.contains_long_expression()
                    || message
                        .as_ref()
                        .is_some_and(Expression::contains_long_expression)
            }
            Self::Break(_) | Self::Continue(_) | Self::Empty => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchClause {
    pub param: FormalParameter,
    pub body: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchClause {
    Case { label: Expression, items: Vec<Item> },
    Default(Vec<Item>),
}

impl SwitchClause {
    /// The `case` label, or `None` for `default`.
    #[must_use]
    pub const fn label(&self) -> Option<&Expression> {
        match self {
            Self::Case { label, .. } => Some(label),
            Self::Default(_) => None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        match self {
            Self::Case { items, .. } | Self::Default(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForControl {
    Basic {
        modifiers: Modifiers,
        ty: Option<Type>,
        init: Option<ForInit>,
        condition: Option<Expression>,
        update: Vec<Expression>,
    },
    Enhanced {
        modifiers: Modifiers,
        ty: Type,
        name: String,
        iterable: Expression,
    },
}

impl ForControl {
    fn contains_long_expression(&self) -> bool {
        match self {
            Self::Basic {
                init,
                condition,
                update,
                ..
            } => {
                let init_long = match init {
                    None => false,
                    Some(ForInit::Declarators(decls)) => decls
                        .iter()
                        .filter_map(|decl| decl.init.as_ref())
                        .any(Expression::contains_long_expression),
                    Some(ForInit::Expressions(exprs)) => {
                        exprs.iter().any(Expression::contains_long_expression)
                    }
                };
                init_long
                    || condition
                        .as_ref()
                        .is_some_and(Expression::contains_long_expression)
                    || update.iter().any(Expression::contains_long_expression)
            }
            Self::Enhanced { iterable, .. } => iterable.contains_long_expression(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForInit {
    Declarators(Vec<Declarator>),
    Expressions(Vec<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

impl BinaryKind {
    /// The operator of the kinds that only have a single one.
    #[must_use]
    pub const fn fixed_operator(self) -> Option<&'static str> {
        match self {
            Self::LogicalOr => Some("||"),
            Self::LogicalAnd => Some("&&"),
            Self::BitwiseOr => Some("|"),
            Self::BitwiseXor => Some("^"),
            Self::BitwiseAnd => Some("&"),
            Self::Equality | Self::Relational | Self::Shift | Self::Additive | Self::Multiplicative => {
                None
            }
        }
    }

    /// Whether `operator` belongs to this kind.
    #[must_use]
    pub fn accepts(self, operator: &str) -> bool {
        match self {
            Self::Equality => matches!(operator, "==" | "!="),
            Self::Relational => matches!(operator, "<" | ">" | "<=" | ">="),
            Self::Shift => matches!(operator, "<<" | ">>" | ">>>"),
            Self::Additive => matches!(operator, "+" | "-"),
            Self::Multiplicative => matches!(operator, "*" | "/" | "%"),
            Self::LogicalOr | Self::LogicalAnd | Self::BitwiseOr | Self::BitwiseXor | Self::BitwiseAnd => {
                self.fixed_operator() == Some(operator)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Increment,
    Decrement,
    BitwiseNot,
    LogicalNot,
}

impl UnaryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::BitwiseNot => "~",
            Self::LogicalNot => "!",
        }
    }

    #[must_use]
    pub fn from_prefix(operator: &str) -> Option<Self> {
        match operator {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "++" => Some(Self::Increment),
            "--" => Some(Self::Decrement),
            "~" => Some(Self::BitwiseNot),
            "!" => Some(Self::LogicalNot),
            _ => None,
        }
    }

    /// The sign character this operator is spelled with, if any.
    #[must_use]
    pub const fn sign(self) -> Option<char> {
        match self {
            Self::Plus | Self::Increment => Some('+'),
            Self::Minus | Self::Decrement => Some('-'),
            Self::BitwiseNot | Self::LogicalNot => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    FloatingPoint,
    Character,
    String,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Assignment {
        target: Box<Expression>,
        operator: String,
        value: Box<Expression>,
    },
    Conditional {
        condition: Box<Expression>,
        then: Box<Expression>,
        otherwise: Box<Expression>,
    },
    Binary {
        kind: BinaryKind,
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    InstanceOf {
        expr: Box<Expression>,
        ty: Type,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Cast {
        ty: Type,
        operand: Box<Expression>,
    },
    Call {
        receiver: Option<Box<Expression>>,
        type_args: Vec<TypeArgument>,
        name: String,
        args: Vec<Expression>,
    },
    Selection {
        expr: Box<Expression>,
        name: String,
    },
    Subscript {
        expr: Box<Expression>,
        index: Box<Expression>,
    },
    Postfix {
        expr: Box<Expression>,
        operator: String,
    },
    ClassLiteral(ResultType),
    This(Option<Box<Expression>>),
    Super(Option<Box<Expression>>),
    Identifier(String),
    QualifiedIdentifier(QualifiedName),
    NewClass {
        outer: Option<Box<Expression>>,
        type_args: Vec<TypeArgument>,
        ty: Type,
        args: Vec<Expression>,
        body: Option<Vec<Item>>,
    },
    NewArray {
        ty: Type,
        dims: Vec<Expression>,
        extra_dims: usize,
        init: Option<Vec<Expression>>,
    },
    ArrayInitializer(Vec<Expression>),
    Literal {
        kind: LiteralKind,
        text: String,
    },
    Null,
}

impl Expression {
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Identifier(name.to_owned())
    }

    #[must_use]
    pub fn int(text: &str) -> Self {
        Self::Literal {
            kind: LiteralKind::Integer,
            text: text.to_owned(),
        }
    }

    #[must_use]
    pub fn binary(kind: BinaryKind, left: Self, operator: &str, right: Self) -> Self {
        Self::Binary {
            kind,
            operator: operator.to_owned(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Whether this expression contains an array initializer
    /// or a block (e.g. within an anonymous class body).
    #[must_use]
    pub fn contains_long_expression(&self) -> bool {
        match self {
            Self::ArrayInitializer(_) | Self::NewArray { init: Some(_), .. } => true,
            Self::NewArray { dims, .. } => dims.iter().any(Self::contains_long_expression),
            Self::Assignment {
                target: left,
                value: right,
                ..
            }
            | Self::Binary { left, right, .. }
            | Self::Subscript {
                expr: left,
                index: right,
            } => left.contains_long_expression() || right.contains_long_expression(),
            Self::Conditional {
                condition,
                then,
                otherwise,
            } => {
                condition.contains_long_expression()
                    || then.contains_long_expression()
                    || otherwise.contains_long_expression()
            }
            Self::InstanceOf { expr, .. }
            | Self::Unary { operand: expr, .. }
            | Self::Cast { operand: expr, .. }
            | Self::Selection { expr, .. }
            | Self::Postfix { expr, .. } => expr.contains_long_expression(),
            Self::Call { receiver, args, .. } => {
                receiver
                    .as_deref()
                    .is_some_and(Self::contains_long_expression)
                    || args.iter().any(Self::contains_long_expression)
            }
            Self::This(qualifier) | Self::Super(qualifier) => qualifier
                .as_deref()
                .is_some_and(Self::contains_long_expression),
            Self::NewClass {
                outer, args, body, ..
            } => {
                outer.as_deref().is_some_and(Self::contains_long_expression)
                    || args.iter().any(Self::contains_long_expression)
                    || body.as_deref().is_some_and(items_contain_long_expression)
            }
            Self::ClassLiteral(_)
            | Self::Identifier(_)
            | Self::QualifiedIdentifier(_)
            | Self::Literal { .. }
            | Self::Null => false,
        }
    }
}

/// The base of a type, without any array dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Primitive(String),
    Qualified(QualifiedName),
    Instantiated(Vec<TypeInstantiation>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub base: TypeName,
    pub dims: usize,
}

impl Type {
    #[must_use]
    pub fn primitive(name: &str) -> Self {
        Self {
            base: TypeName::Primitive(name.to_owned()),
            dims: 0,
        }
    }

    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            base: TypeName::Qualified(name.split('.').map(str::to_owned).collect()),
            dims: 0,
        }
    }

    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.base, TypeName::Primitive(_)) && self.dims == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultType {
    Void,
    Type(Type),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInstantiation {
    pub name: String,
    pub args: Vec<TypeArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgument {
    Type(Type),
    Wildcard(Option<WildcardBound>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardBound {
    /// Either `extends` or `super`.
    pub keyword: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub bound: Vec<Type>,
}
