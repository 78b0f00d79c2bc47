// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::error::Error;

/// All the node tags the printer knows how to handle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NodeKind {
    // Units and declarations
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    AnnotationDeclaration,
    EnumDeclaration,
    FieldDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    BlockDeclaration,
    EmptyDeclaration,
    AnnotationMethod,
    ClassBody,
    EnumConstants,
    EnumConstant,
    EnumMembers,
    Modifiers,
    Modifier,
    Annotations,
    Annotation,
    ElementValuePairs,
    ElementValuePair,
    DefaultValue,
    FormalParameters,
    FormalParameter,
    FinalClause,
    Declarators,
    Declarator,
    ThrowsClause,
    Extension,
    Implementation,
    // Statements
    Block,
    ConditionalStatement,
    ForStatement,
    BasicForControl,
    EnhancedForControl,
    WhileStatement,
    DoWhileStatement,
    TryCatchFinallyStatement,
    CatchClause,
    SwitchStatement,
    CaseClause,
    DefaultClause,
    SynchronizedStatement,
    ReturnStatement,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    LabeledStatement,
    ExpressionStatement,
    AssertStatement,
    EmptyStatement,
    // Expressions
    ExpressionList,
    Expression,
    ConditionalExpression,
    LogicalOrExpression,
    LogicalAndExpression,
    BitwiseOrExpression,
    BitwiseXorExpression,
    BitwiseAndExpression,
    EqualityExpression,
    InstanceOfExpression,
    RelationalExpression,
    ShiftExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    UnaryExpression,
    BitwiseNegationExpression,
    LogicalNegationExpression,
    BasicCastExpression,
    CastExpression,
    CallExpression,
    SelectionExpression,
    SubscriptExpression,
    PostfixExpression,
    ClassLiteralExpression,
    ThisExpression,
    SuperExpression,
    PrimaryIdentifier,
    NewClassExpression,
    NewArrayExpression,
    ConcreteDimensions,
    ArrayInitializer,
    Arguments,
    IntegerLiteral,
    FloatingPointLiteral,
    CharacterLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    QualifiedIdentifier,
    // Types
    VoidType,
    Type,
    PrimitiveType,
    InstantiatedType,
    TypeInstantiation,
    Dimensions,
    TypeParameters,
    TypeParameter,
    Bound,
    TypeArguments,
    Wildcard,
    WildcardBound,
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "CompilationUnit" => Self::CompilationUnit,
            "PackageDeclaration" => Self::PackageDeclaration,
            "ImportDeclaration" => Self::ImportDeclaration,
            "ClassDeclaration" => Self::ClassDeclaration,
            "InterfaceDeclaration" => Self::InterfaceDeclaration,
            "AnnotationDeclaration" => Self::AnnotationDeclaration,
            "EnumDeclaration" => Self::EnumDeclaration,
            "FieldDeclaration" => Self::FieldDeclaration,
            "MethodDeclaration" => Self::MethodDeclaration,
            "ConstructorDeclaration" => Self::ConstructorDeclaration,
            "BlockDeclaration" => Self::BlockDeclaration,
            "EmptyDeclaration" => Self::EmptyDeclaration,
            "AnnotationMethod" => Self::AnnotationMethod,
            "ClassBody" => Self::ClassBody,
            "EnumConstants" => Self::EnumConstants,
            "EnumConstant" => Self::EnumConstant,
            "EnumMembers" => Self::EnumMembers,
            "Modifiers" => Self::Modifiers,
            "Modifier" => Self::Modifier,
            "Annotations" => Self::Annotations,
            "Annotation" => Self::Annotation,
            "ElementValuePairs" => Self::ElementValuePairs,
            "ElementValuePair" => Self::ElementValuePair,
            "DefaultValue" => Self::DefaultValue,
            "FormalParameters" => Self::FormalParameters,
            "FormalParameter" => Self::FormalParameter,
            "FinalClause" => Self::FinalClause,
            "Declarators" => Self::Declarators,
            "Declarator" => Self::Declarator,
            "ThrowsClause" => Self::ThrowsClause,
            "Extension" => Self::Extension,
            "Implementation" => Self::Implementation,
            "Block" => Self::Block,
            "ConditionalStatement" => Self::ConditionalStatement,
            "ForStatement" => Self::ForStatement,
            "BasicForControl" => Self::BasicForControl,
            "EnhancedForControl" => Self::EnhancedForControl,
            "WhileStatement" => Self::WhileStatement,
            "DoWhileStatement" => Self::DoWhileStatement,
            "TryCatchFinallyStatement" => Self::TryCatchFinallyStatement,
            "CatchClause" => Self::CatchClause,
            "SwitchStatement" => Self::SwitchStatement,
            "CaseClause" => Self::CaseClause,
            "DefaultClause" => Self::DefaultClause,
            "SynchronizedStatement" => Self::SynchronizedStatement,
            "ReturnStatement" => Self::ReturnStatement,
            "ThrowStatement" => Self::ThrowStatement,
            "BreakStatement" => Self::BreakStatement,
            "ContinueStatement" => Self::ContinueStatement,
            "LabeledStatement" => Self::LabeledStatement,
            "ExpressionStatement" => Self::ExpressionStatement,
            "AssertStatement" => Self::AssertStatement,
            "EmptyStatement" => Self::EmptyStatement,
            "ExpressionList" => Self::ExpressionList,
            "Expression" => Self::Expression,
            "ConditionalExpression" => Self::ConditionalExpression,
            "LogicalOrExpression" => Self::LogicalOrExpression,
            "LogicalAndExpression" => Self::LogicalAndExpression,
            "BitwiseOrExpression" => Self::BitwiseOrExpression,
            "BitwiseXorExpression" => Self::BitwiseXorExpression,
            "BitwiseAndExpression" => Self::BitwiseAndExpression,
            "EqualityExpression" => Self::EqualityExpression,
            "InstanceOfExpression" => Self::InstanceOfExpression,
            "RelationalExpression" => Self::RelationalExpression,
            "ShiftExpression" => Self::ShiftExpression,
            "AdditiveExpression" => Self::AdditiveExpression,
            "MultiplicativeExpression" => Self::MultiplicativeExpression,
            "UnaryExpression" => Self::UnaryExpression,
            "BitwiseNegationExpression" => Self::BitwiseNegationExpression,
            "LogicalNegationExpression" => Self::LogicalNegationExpression,
            "BasicCastExpression" => Self::BasicCastExpression,
            "CastExpression" => Self::CastExpression,
            "CallExpression" => Self::CallExpression,
            "SelectionExpression" => Self::SelectionExpression,
            "SubscriptExpression" => Self::SubscriptExpression,
            "PostfixExpression" => Self::PostfixExpression,
            "ClassLiteralExpression" => Self::ClassLiteralExpression,
            "ThisExpression" => Self::ThisExpression,
            "SuperExpression" => Self::SuperExpression,
            "PrimaryIdentifier" => Self::PrimaryIdentifier,
            "NewClassExpression" => Self::NewClassExpression,
            "NewArrayExpression" => Self::NewArrayExpression,
            "ConcreteDimensions" => Self::ConcreteDimensions,
            "ArrayInitializer" => Self::ArrayInitializer,
            "Arguments" => Self::Arguments,
            "IntegerLiteral" => Self::IntegerLiteral,
            "FloatingPointLiteral" => Self::FloatingPointLiteral,
            "CharacterLiteral" => Self::CharacterLiteral,
            "StringLiteral" => Self::StringLiteral,
            "BooleanLiteral" => Self::BooleanLiteral,
            "NullLiteral" => Self::NullLiteral,
            "QualifiedIdentifier" => Self::QualifiedIdentifier,
            "VoidType" => Self::VoidType,
            "Type" => Self::Type,
            "PrimitiveType" => Self::PrimitiveType,
            "InstantiatedType" => Self::InstantiatedType,
            "TypeInstantiation" => Self::TypeInstantiation,
            "Dimensions" => Self::Dimensions,
            "TypeParameters" => Self::TypeParameters,
            "TypeParameter" => Self::TypeParameter,
            "Bound" => Self::Bound,
            "TypeArguments" => Self::TypeArguments,
            "Wildcard" => Self::Wildcard,
            "WildcardBound" => Self::WildcardBound,
            other => return Err(Error::UnsupportedNode(other.to_owned())),
        })
    }
}

impl NodeKind {
    /// Whether nodes of this kind count as declarations
    /// when deciding where to put blank lines.
    #[must_use]
    pub const fn is_declaration(self) -> bool {
        matches!(
            self,
            Self::PackageDeclaration
                | Self::ImportDeclaration
                | Self::ClassDeclaration
                | Self::InterfaceDeclaration
                | Self::AnnotationDeclaration
                | Self::EnumDeclaration
                | Self::FieldDeclaration
                | Self::MethodDeclaration
                | Self::ConstructorDeclaration
                | Self::BlockDeclaration
                | Self::EmptyDeclaration
        )
    }
}
