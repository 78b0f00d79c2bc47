// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Lowering of generic syntax trees into the typed Java syntax tree.
//!
//! Every node is checked against the child layout of its tag.
//! Unknown tags fail with [`Error::UnsupportedNode`],
//! known tags with unexpected children with [`Error::MalformedNode`].

use crate::ast::{
    Annotation, AnnotationDecl, AnnotationMethod, AnnotationValue, BinaryKind, CatchClause,
    ClassDecl, CompilationUnit, ConstructorDecl, Declaration, Declarator, ElementValue,
    EnumConstant, EnumDecl, Expression, FieldDecl, ForControl, ForInit, FormalParameter,
    ImportDecl, InitializerDecl, InterfaceDecl, Item, LiteralKind, MethodDecl, Modifier,
    Modifiers, PackageDecl, QualifiedName, ResultType, Statement, SwitchClause, Type,
    TypeArgument, TypeInstantiation, TypeName, TypeParameter, UnaryOp, WildcardBound,
};
use crate::error::{Error, FmtResult};
use crate::grammar::NodeKind;
use crate::tree::{Child, Node};

/// A node of any of the categories that can be printed on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lowered {
    Unit(CompilationUnit),
    Item(Item),
    Expression(Expression),
    Type(ResultType),
}

/// Positional access to the children of a node,
/// failing with [`Error::MalformedNode`] on unexpected children.
#[derive(Clone, Copy)]
struct Shape<'a> {
    node: &'a Node,
    kind: NodeKind,
}

impl<'a> Shape<'a> {
    fn of(node: &'a Node) -> FmtResult<Self> {
        Ok(Self {
            node,
            kind: node.name().parse()?,
        })
    }

    fn malformed(self, reason: impl Into<String>) -> Error {
        Error::malformed(self.node.name(), reason)
    }

    /// Fails unless the node is of one of the given kinds.
    fn expect(self, kinds: &[NodeKind]) -> FmtResult<Self> {
        if kinds.contains(&self.kind) {
            Ok(self)
        } else {
            Err(self.malformed(format!("expected one of {kinds:?}")))
        }
    }

    fn opt_node(self, idx: usize) -> FmtResult<Option<&'a Node>> {
        match self.node.get(idx) {
            None | Some(Child::Absent) => Ok(None),
            Some(Child::Node(node)) => Ok(Some(node)),
            Some(Child::Token(token)) => Err(self.malformed(format!(
                "expected a node at position {idx}, found token \"{token}\""
            ))),
        }
    }

    fn node(self, idx: usize) -> FmtResult<&'a Node> {
        self.opt_node(idx)?
            .ok_or_else(|| self.malformed(format!("missing node at position {idx}")))
    }

    fn opt_shape(self, idx: usize) -> FmtResult<Option<Self>> {
        self.opt_node(idx)?.map(Self::of).transpose()
    }

    fn shape(self, idx: usize) -> FmtResult<Self> {
        Self::of(self.node(idx)?)
    }

    fn opt_token(self, idx: usize) -> FmtResult<Option<&'a str>> {
        match self.node.get(idx) {
            None | Some(Child::Absent) => Ok(None),
            Some(Child::Token(token)) => Ok(Some(token)),
            Some(Child::Node(node)) => Err(self.malformed(format!(
                "expected a token at position {idx}, found node '{}'",
                node.name()
            ))),
        }
    }

    fn token(self, idx: usize) -> FmtResult<&'a str> {
        self.opt_token(idx)?
            .ok_or_else(|| self.malformed(format!("missing token at position {idx}")))
    }

    /// All children from `start` on, which have to be nodes;
    /// absent ones are skipped.
    fn shapes_from(self, start: usize) -> FmtResult<Vec<Self>> {
        let mut shapes = Vec::new();
        for idx in start..self.node.len() {
            if let Some(node) = self.opt_node(idx)? {
                shapes.push(Self::of(node)?);
            }
        }
        Ok(shapes)
    }

    fn shapes(self) -> FmtResult<Vec<Self>> {
        self.shapes_from(0)
    }

    fn tokens(self) -> FmtResult<Vec<String>> {
        (0..self.node.len())
            .map(|idx| self.token(idx).map(str::to_owned))
            .collect()
    }

    fn max_len(self, max: usize) -> FmtResult<Self> {
        if self.node.len() > max {
            Err(self.malformed(format!(
                "expected at most {max} children, found {}",
                self.node.len()
            )))
        } else {
            Ok(self)
        }
    }
}

/// Lowers a node of any printable category.
///
/// # Errors
///
/// If the node or any of its descendants has an unknown tag,
/// or children that do not fit its tag.
pub fn lower(node: &Node) -> FmtResult<Lowered> {
    let shape = Shape::of(node)?;
    Ok(match shape.kind {
        NodeKind::CompilationUnit => Lowered::Unit(compilation_unit(shape)?),
        NodeKind::VoidType
        | NodeKind::Type
        | NodeKind::PrimitiveType
        | NodeKind::InstantiatedType => Lowered::Type(result_type(shape)?),
        kind if is_expression(kind) => Lowered::Expression(expression(shape)?),
        _ => Lowered::Item(item(shape)?),
    })
}

/// Lowers a compilation unit.
///
/// # Errors
///
/// See [`lower`].
pub fn lower_unit(node: &Node) -> FmtResult<CompilationUnit> {
    compilation_unit(Shape::of(node)?)
}

const fn is_expression(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Expression
            | NodeKind::ConditionalExpression
            | NodeKind::LogicalOrExpression
            | NodeKind::LogicalAndExpression
            | NodeKind::BitwiseOrExpression
            | NodeKind::BitwiseXorExpression
            | NodeKind::BitwiseAndExpression
            | NodeKind::EqualityExpression
            | NodeKind::InstanceOfExpression
            | NodeKind::RelationalExpression
            | NodeKind::ShiftExpression
            | NodeKind::AdditiveExpression
            | NodeKind::MultiplicativeExpression
            | NodeKind::UnaryExpression
            | NodeKind::BitwiseNegationExpression
            | NodeKind::LogicalNegationExpression
            | NodeKind::BasicCastExpression
            | NodeKind::CastExpression
            | NodeKind::CallExpression
            | NodeKind::SelectionExpression
            | NodeKind::SubscriptExpression
            | NodeKind::PostfixExpression
            | NodeKind::ClassLiteralExpression
            | NodeKind::ThisExpression
            | NodeKind::SuperExpression
            | NodeKind::PrimaryIdentifier
            | NodeKind::NewClassExpression
            | NodeKind::NewArrayExpression
            | NodeKind::ArrayInitializer
            | NodeKind::IntegerLiteral
            | NodeKind::FloatingPointLiteral
            | NodeKind::CharacterLiteral
            | NodeKind::StringLiteral
            | NodeKind::BooleanLiteral
            | NodeKind::NullLiteral
            | NodeKind::QualifiedIdentifier
    )
}

fn compilation_unit(shape: Shape) -> FmtResult<CompilationUnit> {
    let shape = shape.expect(&[NodeKind::CompilationUnit])?;
    Ok(CompilationUnit {
        items: items(shape, 0)?,
    })
}

fn items(shape: Shape, start: usize) -> FmtResult<Vec<Item>> {
    shape.shapes_from(start)?.into_iter().map(item).collect()
}

fn item(shape: Shape) -> FmtResult<Item> {
    Ok(match shape.kind {
        NodeKind::PackageDeclaration
        | NodeKind::ImportDeclaration
        | NodeKind::ClassDeclaration
        | NodeKind::InterfaceDeclaration
        | NodeKind::AnnotationDeclaration
        | NodeKind::EnumDeclaration
        | NodeKind::FieldDeclaration
        | NodeKind::MethodDeclaration
        | NodeKind::ConstructorDeclaration
        | NodeKind::BlockDeclaration
        | NodeKind::EmptyDeclaration
        | NodeKind::AnnotationMethod => Item::Decl(declaration(shape)?),
        _ => Item::Stmt(statement(shape)?),
    })
}

fn declaration(shape: Shape) -> FmtResult<Declaration> {
    Ok(match shape.kind {
        NodeKind::PackageDeclaration => Declaration::Package(PackageDecl {
            annotations: match shape.opt_shape(0)? {
                Some(annotations) => annotation_list(annotations)?,
                None => Vec::new(),
            },
            name: qualified_name(shape.shape(1)?)?,
        }),
        NodeKind::ImportDeclaration => Declaration::Import(ImportDecl {
            is_static: shape.opt_token(0)?.is_some(),
            name: qualified_name(shape.shape(1)?)?,
            on_demand: shape.opt_token(2)?.is_some(),
        }),
        NodeKind::ClassDeclaration => Declaration::Class(ClassDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            name: shape.token(1)?.to_owned(),
            type_params: type_parameters(shape.opt_shape(2)?)?,
            extends: type_list(shape.opt_shape(3)?, NodeKind::Extension)?,
            implements: type_list(shape.opt_shape(4)?, NodeKind::Implementation)?,
            body: class_body(shape.shape(5)?)?,
        }),
        NodeKind::InterfaceDeclaration => Declaration::Interface(InterfaceDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            name: shape.token(1)?.to_owned(),
            type_params: type_parameters(shape.opt_shape(2)?)?,
            extends: type_list(shape.opt_shape(3)?, NodeKind::Extension)?,
            body: class_body(shape.shape(4)?)?,
        }),
        NodeKind::AnnotationDeclaration => Declaration::Annotation(AnnotationDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            name: shape.token(1)?.to_owned(),
            body: class_body(shape.shape(2)?)?,
        }),
        NodeKind::EnumDeclaration => Declaration::Enum(enum_declaration(shape)?),
        NodeKind::FieldDeclaration => Declaration::Field(FieldDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            ty: ty(shape.shape(1)?)?,
            declarators: declarators(shape.shape(2)?)?,
        }),
        NodeKind::MethodDeclaration => Declaration::Method(MethodDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            type_params: type_parameters(shape.opt_shape(1)?)?,
            result: result_type(shape.shape(2)?)?,
            name: match shape.token(3)? {
                "<init>" => None,
                name => Some(name.to_owned()),
            },
            params: formal_parameters(shape.shape(4)?)?,
            dims: dimensions(shape, 5)?,
            throws: type_list(shape.opt_shape(6)?, NodeKind::ThrowsClause)?,
            body: shape.opt_shape(7)?.map(block).transpose()?,
        }),
        NodeKind::ConstructorDeclaration => Declaration::Constructor(ConstructorDecl {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            type_params: type_parameters(shape.opt_shape(1)?)?,
            name: shape.token(2)?.to_owned(),
            params: formal_parameters(shape.shape(3)?)?,
            throws: type_list(shape.opt_shape(4)?, NodeKind::ThrowsClause)?,
            body: block(shape.shape(5)?)?,
        }),
        NodeKind::BlockDeclaration => Declaration::Initializer(InitializerDecl {
            is_static: match shape.opt_token(0)? {
                None => false,
                Some("static") => true,
                Some(other) => {
                    return Err(shape.malformed(format!("unexpected initializer keyword \"{other}\"")));
                }
            },
            body: block(shape.shape(1)?)?,
        }),
        NodeKind::AnnotationMethod => Declaration::AnnotationMethod(AnnotationMethod {
            modifiers: modifiers(shape.opt_shape(0)?)?,
            ty: ty(shape.shape(1)?)?,
            name: shape.token(2)?.to_owned(),
            default: shape
                .opt_shape(3)?
                .map(|value| {
                    if value.kind == NodeKind::DefaultValue {
                        element_value(value.shape(0)?)
                    } else {
                        element_value(value)
                    }
                })
                .transpose()?,
        }),
        NodeKind::EmptyDeclaration => Declaration::Empty,
        _ => return Err(shape.malformed("expected a declaration")),
    })
}

fn enum_declaration(shape: Shape) -> FmtResult<EnumDecl> {
    let constants = shape
        .shape(3)?
        .expect(&[NodeKind::EnumConstants])?
        .shapes()?
        .into_iter()
        .map(enum_constant)
        .collect::<FmtResult<_>>()?;
    let members = shape
        .opt_shape(4)?
        .map(|members| members.expect(&[NodeKind::EnumMembers]).and_then(|m| items(m, 0)))
        .transpose()?;
    Ok(EnumDecl {
        modifiers: modifiers(shape.opt_shape(0)?)?,
        name: shape.token(1)?.to_owned(),
        implements: type_list(shape.opt_shape(2)?, NodeKind::Implementation)?,
        constants,
        members,
    })
}

fn enum_constant(shape: Shape) -> FmtResult<EnumConstant> {
    let shape = shape.expect(&[NodeKind::EnumConstant])?;
    Ok(EnumConstant {
        annotations: match shape.opt_shape(0)? {
            Some(annotations) => annotation_list(annotations)?,
            None => Vec::new(),
        },
        name: shape.token(1)?.to_owned(),
        args: shape.opt_shape(2)?.map(arguments).transpose()?,
        body: shape.opt_shape(3)?.map(class_body).transpose()?,
    })
}

fn class_body(shape: Shape) -> FmtResult<Vec<Item>> {
    items(shape.expect(&[NodeKind::ClassBody])?, 0)
}

fn block(shape: Shape) -> FmtResult<Vec<Item>> {
    items(shape.expect(&[NodeKind::Block])?, 0)
}

fn modifiers(shape: Option<Shape>) -> FmtResult<Modifiers> {
    let Some(shape) = shape else {
        return Ok(Modifiers::default());
    };
    let shape = shape.expect(&[NodeKind::Modifiers, NodeKind::FinalClause])?;
    if shape.kind == NodeKind::FinalClause {
        return Ok(Modifiers::keywords(["final"]));
    }
    shape
        .shapes()?
        .into_iter()
        .map(|modifier| match modifier.kind {
            NodeKind::Modifier => Ok(Modifier::Keyword(modifier.max_len(1)?.token(0)?.to_owned())),
            NodeKind::Annotation => Ok(Modifier::Annotation(annotation(modifier)?)),
            _ => Err(modifier.malformed("expected a modifier or an annotation")),
        })
        .collect::<FmtResult<_>>()
        .map(Modifiers)
}

fn annotation_list(shape: Shape) -> FmtResult<Vec<Annotation>> {
    shape
        .expect(&[NodeKind::Annotations])?
        .shapes()?
        .into_iter()
        .map(annotation)
        .collect()
}

fn annotation(shape: Shape) -> FmtResult<Annotation> {
    let shape = shape.expect(&[NodeKind::Annotation])?.max_len(2)?;
    let value = match shape.opt_shape(1)? {
        None => None,
        Some(pairs) if pairs.kind == NodeKind::ElementValuePairs => Some(AnnotationValue::Pairs(
            pairs
                .shapes()?
                .into_iter()
                .map(element_value_pair)
                .collect::<FmtResult<_>>()?,
        )),
        Some(value) => Some(AnnotationValue::Single(element_value(value)?)),
    };
    Ok(Annotation {
        name: qualified_name(shape.shape(0)?)?,
        value,
    })
}

fn element_value_pair(shape: Shape) -> FmtResult<(String, ElementValue)> {
    let shape = shape.expect(&[NodeKind::ElementValuePair])?.max_len(2)?;
    let name = match shape.opt_token(0) {
        Ok(Some(name)) => name.to_owned(),
        _ => {
            let name = shape.shape(0)?.expect(&[NodeKind::PrimaryIdentifier])?;
            name.token(0)?.to_owned()
        }
    };
    Ok((name, element_value(shape.shape(1)?)?))
}

fn element_value(shape: Shape) -> FmtResult<ElementValue> {
    Ok(if shape.kind == NodeKind::Annotation {
        ElementValue::Annotation(Box::new(annotation(shape)?))
    } else {
        ElementValue::Expr(expression(shape)?)
    })
}

fn formal_parameters(shape: Shape) -> FmtResult<Vec<FormalParameter>> {
    shape
        .expect(&[NodeKind::FormalParameters])?
        .shapes()?
        .into_iter()
        .map(formal_parameter)
        .collect()
}

fn formal_parameter(shape: Shape) -> FmtResult<FormalParameter> {
    let shape = shape.expect(&[NodeKind::FormalParameter])?.max_len(5)?;
    let varargs = match shape.opt_token(2)? {
        None => false,
        Some("...") => true,
        Some(other) => return Err(shape.malformed(format!("unexpected token \"{other}\""))),
    };
    Ok(FormalParameter {
        modifiers: modifiers(shape.opt_shape(0)?)?,
        ty: ty(shape.shape(1)?)?,
        varargs,
        name: shape.token(3)?.to_owned(),
        dims: dimensions(shape, 4)?,
    })
}

fn declarators(shape: Shape) -> FmtResult<Vec<Declarator>> {
    shape
        .expect(&[NodeKind::Declarators])?
        .shapes()?
        .into_iter()
        .map(declarator)
        .collect()
}

fn declarator(shape: Shape) -> FmtResult<Declarator> {
    let shape = shape.expect(&[NodeKind::Declarator])?.max_len(3)?;
    Ok(Declarator {
        name: shape.token(0)?.to_owned(),
        dims: dimensions(shape, 1)?,
        init: shape.opt_shape(2)?.map(expression).transpose()?,
    })
}

/// The number of array dimensions at `idx`,
/// given either as a `Dimensions` node or as a token of brackets.
fn dimensions(shape: Shape, idx: usize) -> FmtResult<usize> {
    match shape.node.get(idx) {
        None | Some(Child::Absent) => Ok(0),
        Some(Child::Token(token)) => Ok(token.chars().filter(|c| *c == '[').count()),
        Some(Child::Node(node)) => {
            let dims = Shape::of(node)?.expect(&[NodeKind::Dimensions])?;
            Ok(dims.node.len())
        }
    }
}

fn type_parameters(shape: Option<Shape>) -> FmtResult<Vec<TypeParameter>> {
    let Some(shape) = shape else {
        return Ok(Vec::new());
    };
    shape
        .expect(&[NodeKind::TypeParameters])?
        .shapes()?
        .into_iter()
        .map(|param| {
            let param = param.expect(&[NodeKind::TypeParameter])?.max_len(2)?;
            let bound = match param.opt_shape(1)? {
                Some(bound) => bound
                    .expect(&[NodeKind::Bound])?
                    .shapes()?
                    .into_iter()
                    .map(ty)
                    .collect::<FmtResult<_>>()?,
                None => Vec::new(),
            };
            Ok(TypeParameter {
                name: param.token(0)?.to_owned(),
                bound,
            })
        })
        .collect()
}

fn type_list(shape: Option<Shape>, kind: NodeKind) -> FmtResult<Vec<Type>> {
    match shape {
        Some(shape) => shape.expect(&[kind])?.shapes()?.into_iter().map(ty).collect(),
        None => Ok(Vec::new()),
    }
}

fn type_arguments(shape: Option<Shape>) -> FmtResult<Vec<TypeArgument>> {
    let Some(shape) = shape else {
        return Ok(Vec::new());
    };
    shape
        .expect(&[NodeKind::TypeArguments])?
        .shapes()?
        .into_iter()
        .map(|arg| {
            if arg.kind == NodeKind::Wildcard {
                let bound = match arg.max_len(1)?.opt_shape(0)? {
                    Some(bound) => {
                        let bound = bound.expect(&[NodeKind::WildcardBound])?.max_len(2)?;
                        let keyword = bound.token(0)?;
                        if !matches!(keyword, "extends" | "super") {
                            return Err(bound.malformed(format!("unexpected bound \"{keyword}\"")));
                        }
                        Some(WildcardBound {
                            keyword: keyword.to_owned(),
                            ty: ty(bound.shape(1)?)?,
                        })
                    }
                    None => None,
                };
                Ok(TypeArgument::Wildcard(bound))
            } else {
                ty(arg).map(TypeArgument::Type)
            }
        })
        .collect()
}

fn result_type(shape: Shape) -> FmtResult<ResultType> {
    if shape.kind == NodeKind::VoidType {
        Ok(ResultType::Void)
    } else {
        ty(shape).map(ResultType::Type)
    }
}

fn ty(shape: Shape) -> FmtResult<Type> {
    if shape.kind == NodeKind::Type {
        let shape = shape.max_len(2)?;
        Ok(Type {
            base: type_name(shape.shape(0)?)?,
            dims: dimensions(shape, 1)?,
        })
    } else {
        Ok(Type {
            base: type_name(shape)?,
            dims: 0,
        })
    }
}

fn type_name(shape: Shape) -> FmtResult<TypeName> {
    Ok(match shape.kind {
        NodeKind::PrimitiveType => TypeName::Primitive(shape.max_len(1)?.token(0)?.to_owned()),
        NodeKind::QualifiedIdentifier => TypeName::Qualified(qualified_name(shape)?),
        NodeKind::InstantiatedType => TypeName::Instantiated(
            shape
                .shapes()?
                .into_iter()
                .map(|inst| {
                    if inst.kind == NodeKind::QualifiedIdentifier {
                        return Ok(TypeInstantiation {
                            name: qualified_name(inst)?.join("."),
                            args: Vec::new(),
                        });
                    }
                    let inst = inst.expect(&[NodeKind::TypeInstantiation])?.max_len(2)?;
                    Ok(TypeInstantiation {
                        name: inst.token(0)?.to_owned(),
                        args: type_arguments(inst.opt_shape(1)?)?,
                    })
                })
                .collect::<FmtResult<_>>()?,
        ),
        _ => return Err(shape.malformed("expected a type")),
    })
}

fn qualified_name(shape: Shape) -> FmtResult<QualifiedName> {
    let shape = shape.expect(&[NodeKind::QualifiedIdentifier, NodeKind::PrimaryIdentifier])?;
    let name = shape.tokens()?;
    if name.is_empty() {
        return Err(shape.malformed("empty name"));
    }
    Ok(name)
}

fn statement(shape: Shape) -> FmtResult<Statement> {
    Ok(match shape.kind {
        NodeKind::Block => Statement::Block(items(shape, 0)?),
        NodeKind::ConditionalStatement => Statement::If {
            condition: expression(shape.max_len(3)?.shape(0)?)?,
            then: Box::new(statement(shape.shape(1)?)?),
            otherwise: shape
                .opt_shape(2)?
                .map(|arm| statement(arm).map(Box::new))
                .transpose()?,
        },
        NodeKind::ForStatement => Statement::For {
            control: for_control(shape.max_len(2)?.shape(0)?)?,
            body: Box::new(statement(shape.shape(1)?)?),
        },
        NodeKind::WhileStatement => Statement::While {
            condition: expression(shape.max_len(2)?.shape(0)?)?,
            body: Box::new(statement(shape.shape(1)?)?),
        },
        NodeKind::DoWhileStatement => Statement::DoWhile {
            body: Box::new(statement(shape.max_len(2)?.shape(0)?)?),
            condition: expression(shape.shape(1)?)?,
        },
        NodeKind::TryCatchFinallyStatement => try_statement(shape)?,
        NodeKind::SwitchStatement => Statement::Switch {
            selector: expression(shape.shape(0)?)?,
            clauses: shape
                .shapes_from(1)?
                .into_iter()
                .map(|clause| match clause.kind {
                    NodeKind::CaseClause => Ok(SwitchClause::Case {
                        label: expression(clause.shape(0)?)?,
                        items: items(clause, 1)?,
                    }),
                    NodeKind::DefaultClause => Ok(SwitchClause::Default(items(clause, 0)?)),
                    _ => Err(clause.malformed("expected a switch clause")),
                })
                .collect::<FmtResult<_>>()?,
        },
        NodeKind::SynchronizedStatement => Statement::Synchronized {
            lock: expression(shape.max_len(2)?.shape(0)?)?,
            body: Box::new(statement(shape.shape(1)?)?),
        },
        NodeKind::ReturnStatement => {
            Statement::Return(shape.max_len(1)?.opt_shape(0)?.map(expression).transpose()?)
        }
        NodeKind::ThrowStatement => Statement::Throw(expression(shape.max_len(1)?.shape(0)?)?),
        NodeKind::BreakStatement => {
            Statement::Break(shape.max_len(1)?.opt_token(0)?.map(str::to_owned))
        }
        NodeKind::ContinueStatement => {
            Statement::Continue(shape.max_len(1)?.opt_token(0)?.map(str::to_owned))
        }
        NodeKind::LabeledStatement => Statement::Labeled {
            label: shape.max_len(2)?.token(0)?.to_owned(),
            body: Box::new(statement(shape.shape(1)?)?),
        },
        NodeKind::ExpressionStatement => {
            Statement::Expression(expression(shape.max_len(1)?.shape(0)?)?)
        }
        NodeKind::AssertStatement => Statement::Assert {
            condition: expression(shape.max_len(2)?.shape(0)?)?,
            message: shape.opt_shape(1)?.map(expression).transpose()?,
        },
        NodeKind::EmptyStatement => Statement::Empty,
        _ => return Err(shape.malformed("expected a statement")),
    })
}

fn try_statement(shape: Shape) -> FmtResult<Statement> {
    let body = block(shape.shape(0)?)?;
    let len = shape.node.len();
    let mut catches = Vec::new();
    let mut finally = None;
    for idx in 1..len {
        let Some(clause) = shape.opt_shape(idx)? else {
            continue;
        };
        match clause.kind {
            NodeKind::CatchClause => {
                let clause = clause.max_len(2)?;
                catches.push(CatchClause {
                    param: formal_parameter(clause.shape(0)?)?,
                    body: block(clause.shape(1)?)?,
                });
            }
            NodeKind::Block if idx + 1 == len => finally = Some(items(clause, 0)?),
            _ => return Err(clause.malformed("expected a catch clause or a finally block")),
        }
    }
    if catches.is_empty() && finally.is_none() {
        return Err(shape.malformed("a try statement needs a catch clause or a finally block"));
    }
    Ok(Statement::Try {
        body,
        catches,
        finally,
    })
}

fn for_control(shape: Shape) -> FmtResult<ForControl> {
    Ok(match shape.kind {
        NodeKind::BasicForControl => {
            let shape = shape.max_len(5)?;
            let init = match shape.opt_shape(2)? {
                None => None,
                Some(init) if init.kind == NodeKind::Declarators => {
                    Some(ForInit::Declarators(declarators(init)?))
                }
                Some(init) => Some(ForInit::Expressions(expression_list(init)?)),
            };
            ForControl::Basic {
                modifiers: modifiers(shape.opt_shape(0)?)?,
                ty: shape.opt_shape(1)?.map(ty).transpose()?,
                init,
                condition: shape.opt_shape(3)?.map(expression).transpose()?,
                update: match shape.opt_shape(4)? {
                    Some(update) => expression_list(update)?,
                    None => Vec::new(),
                },
            }
        }
        NodeKind::EnhancedForControl => {
            let shape = shape.max_len(4)?;
            ForControl::Enhanced {
                modifiers: modifiers(shape.opt_shape(0)?)?,
                ty: ty(shape.shape(1)?)?,
                name: shape.token(2)?.to_owned(),
                iterable: expression(shape.shape(3)?)?,
            }
        }
        _ => return Err(shape.malformed("expected a for control")),
    })
}

fn expression_list(shape: Shape) -> FmtResult<Vec<Expression>> {
    shape
        .expect(&[NodeKind::ExpressionList])?
        .shapes()?
        .into_iter()
        .map(expression)
        .collect()
}

fn arguments(shape: Shape) -> FmtResult<Vec<Expression>> {
    shape
        .expect(&[NodeKind::Arguments])?
        .shapes()?
        .into_iter()
        .map(expression)
        .collect()
}

fn boxed(shape: Shape, idx: usize) -> FmtResult<Box<Expression>> {
    expression(shape.shape(idx)?).map(Box::new)
}

fn opt_boxed(shape: Shape, idx: usize) -> FmtResult<Option<Box<Expression>>> {
    shape
        .opt_shape(idx)?
        .map(|expr| expression(expr).map(Box::new))
        .transpose()
}

fn binary(shape: Shape, kind: BinaryKind) -> FmtResult<Expression> {
    let (operator, right) = match kind.fixed_operator() {
        Some(operator) => (operator, 1),
        None => (shape.token(1)?, 2),
    };
    if !kind.accepts(operator) {
        return Err(shape.malformed(format!("unexpected operator \"{operator}\"")));
    }
    Ok(Expression::Binary {
        kind,
        operator: operator.to_owned(),
        left: boxed(shape.max_len(right + 1)?, 0)?,
        right: boxed(shape, right)?,
    })
}

fn literal(shape: Shape, kind: LiteralKind) -> FmtResult<Expression> {
    Ok(Expression::Literal {
        kind,
        text: shape.max_len(1)?.token(0)?.to_owned(),
    })
}

fn expression(shape: Shape) -> FmtResult<Expression> {
    Ok(match shape.kind {
        NodeKind::Expression => {
            let operator = shape.max_len(3)?.token(1)?;
            if !operator.ends_with('=') {
                return Err(shape.malformed(format!("unexpected operator \"{operator}\"")));
            }
            Expression::Assignment {
                target: boxed(shape, 0)?,
                operator: operator.to_owned(),
                value: boxed(shape, 2)?,
            }
        }
        NodeKind::ConditionalExpression => Expression::Conditional {
            condition: boxed(shape.max_len(3)?, 0)?,
            then: boxed(shape, 1)?,
            otherwise: boxed(shape, 2)?,
        },
        NodeKind::LogicalOrExpression => binary(shape, BinaryKind::LogicalOr)?,
        NodeKind::LogicalAndExpression => binary(shape, BinaryKind::LogicalAnd)?,
        NodeKind::BitwiseOrExpression => binary(shape, BinaryKind::BitwiseOr)?,
        NodeKind::BitwiseXorExpression => binary(shape, BinaryKind::BitwiseXor)?,
        NodeKind::BitwiseAndExpression => binary(shape, BinaryKind::BitwiseAnd)?,
        NodeKind::EqualityExpression => binary(shape, BinaryKind::Equality)?,
        NodeKind::RelationalExpression => binary(shape, BinaryKind::Relational)?,
        NodeKind::ShiftExpression => binary(shape, BinaryKind::Shift)?,
        NodeKind::AdditiveExpression => binary(shape, BinaryKind::Additive)?,
        NodeKind::MultiplicativeExpression => binary(shape, BinaryKind::Multiplicative)?,
        NodeKind::InstanceOfExpression => Expression::InstanceOf {
            expr: boxed(shape.max_len(2)?, 0)?,
            ty: ty(shape.shape(1)?)?,
        },
        NodeKind::UnaryExpression => {
            let operator = shape.max_len(2)?.token(0)?;
            let op = UnaryOp::from_prefix(operator)
                .filter(|op| op.sign().is_some())
                .ok_or_else(|| shape.malformed(format!("unexpected operator \"{operator}\"")))?;
            Expression::Unary {
                op,
                operand: boxed(shape, 1)?,
            }
        }
        NodeKind::BitwiseNegationExpression => Expression::Unary {
            op: UnaryOp::BitwiseNot,
            operand: boxed(shape.max_len(1)?, 0)?,
        },
        NodeKind::LogicalNegationExpression => Expression::Unary {
            op: UnaryOp::LogicalNot,
            operand: boxed(shape.max_len(1)?, 0)?,
        },
        NodeKind::BasicCastExpression => {
            let shape = shape.max_len(3)?;
            Expression::Cast {
                ty: Type {
                    base: type_name(shape.shape(0)?.expect(&[NodeKind::PrimitiveType])?)?,
                    dims: dimensions(shape, 1)?,
                },
                operand: boxed(shape, 2)?,
            }
        }
        NodeKind::CastExpression => Expression::Cast {
            ty: ty(shape.max_len(2)?.shape(0)?)?,
            operand: boxed(shape, 1)?,
        },
        NodeKind::CallExpression => Expression::Call {
            receiver: opt_boxed(shape.max_len(4)?, 0)?,
            type_args: type_arguments(shape.opt_shape(1)?)?,
            name: shape.token(2)?.to_owned(),
            args: arguments(shape.shape(3)?)?,
        },
        NodeKind::SelectionExpression => Expression::Selection {
            expr: boxed(shape.max_len(2)?, 0)?,
            name: shape.token(1)?.to_owned(),
        },
        NodeKind::SubscriptExpression => Expression::Subscript {
            expr: boxed(shape.max_len(2)?, 0)?,
            index: boxed(shape, 1)?,
        },
        NodeKind::PostfixExpression => {
            let operator = shape.max_len(2)?.token(1)?;
            if !matches!(operator, "++" | "--") {
                return Err(shape.malformed(format!("unexpected operator \"{operator}\"")));
            }
            Expression::Postfix {
                expr: boxed(shape, 0)?,
                operator: operator.to_owned(),
            }
        }
        NodeKind::ClassLiteralExpression => {
            Expression::ClassLiteral(result_type(shape.max_len(1)?.shape(0)?)?)
        }
        NodeKind::ThisExpression => Expression::This(opt_boxed(shape.max_len(1)?, 0)?),
        NodeKind::SuperExpression => Expression::Super(opt_boxed(shape.max_len(1)?, 0)?),
        NodeKind::PrimaryIdentifier => {
            Expression::Identifier(shape.max_len(1)?.token(0)?.to_owned())
        }
        NodeKind::QualifiedIdentifier => Expression::QualifiedIdentifier(qualified_name(shape)?),
        NodeKind::NewClassExpression => Expression::NewClass {
            outer: opt_boxed(shape.max_len(5)?, 0)?,
            type_args: type_arguments(shape.opt_shape(1)?)?,
            ty: ty(shape.shape(2)?)?,
            args: arguments(shape.shape(3)?)?,
            body: shape.opt_shape(4)?.map(class_body).transpose()?,
        },
        NodeKind::NewArrayExpression => {
            let shape = shape.max_len(4)?;
            let dims = match shape.opt_shape(1)? {
                Some(dims) => dims
                    .expect(&[NodeKind::ConcreteDimensions])?
                    .shapes()?
                    .into_iter()
                    .map(expression)
                    .collect::<FmtResult<_>>()?,
                None => Vec::new(),
            };
            let init = match shape.opt_shape(3)? {
                Some(init) => Some(
                    init.expect(&[NodeKind::ArrayInitializer])?
                        .shapes()?
                        .into_iter()
                        .map(expression)
                        .collect::<FmtResult<_>>()?,
                ),
                None => None,
            };
            if dims.is_empty() == init.is_none() {
                return Err(shape.malformed(
                    "expected either concrete dimensions or an array initializer",
                ));
            }
            Expression::NewArray {
                ty: ty(shape.shape(0)?)?,
                dims,
                extra_dims: dimensions(shape, 2)?,
                init,
            }
        }
        NodeKind::ArrayInitializer => Expression::ArrayInitializer(
            shape
                .shapes()?
                .into_iter()
                .map(expression)
                .collect::<FmtResult<_>>()?,
        ),
        NodeKind::IntegerLiteral => literal(shape, LiteralKind::Integer)?,
        NodeKind::FloatingPointLiteral => literal(shape, LiteralKind::FloatingPoint)?,
        NodeKind::CharacterLiteral => literal(shape, LiteralKind::Character)?,
        NodeKind::StringLiteral => literal(shape, LiteralKind::String)?,
        NodeKind::BooleanLiteral => literal(shape, LiteralKind::Boolean)?,
        NodeKind::NullLiteral => Expression::Null,
        _ => return Err(shape.malformed("expected an expression")),
    })
}
