// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;
use std::rc::Rc;

use crate::ast::{
    Annotation, AnnotationValue, CompilationUnit, Declaration, Declarator, ElementValue,
    EnumDecl, Expression, ForControl, ForInit, FormalParameter, Item, Modifier, Modifiers,
    ResultType, Statement, SwitchClause, Type, TypeArgument, TypeName, TypeParameter,
};
use crate::context::Context;
use crate::error::FmtResult;
use crate::layout::{needs_blank_line, Layout, Neighbor, Opening, StatementKind};
use crate::lower::{lower, Lowered};
use crate::options::{ArrayInitializerStyle, FormatOptions};
use crate::precedence::Precedence;
use crate::reader;
use crate::tree::Node;

/// Prints a compilation unit as Java source.
///
/// # Errors
///
/// Fails only if writing to the in-memory output fails.
pub fn format(unit: &CompilationUnit, options: Rc<FormatOptions>) -> FmtResult<String> {
    let formatter = JavaFormatter::new(options);
    let mut output = String::new();
    let mut context = formatter.context(&mut output);
    formatter.fmt_unit(&mut context, unit)?;
    Ok(output)
}

/// Prints a generic syntax tree node as Java source.
///
/// The node may be a compilation unit, a declaration, a statement,
/// an expression or a type.
///
/// # Errors
///
/// If the node contains unsupported tags
/// or children that do not fit their tags.
pub fn format_node(node: &Node, options: Rc<FormatOptions>) -> FmtResult<String> {
    let lowered = lower(node)?;
    tracing::debug!("{lowered:#?}");
    let formatter = JavaFormatter::new(options);
    let mut output = String::new();
    let mut context = formatter.context(&mut output);
    match &lowered {
        Lowered::Unit(unit) => formatter.fmt_unit(&mut context, unit)?,
        Lowered::Item(item) => {
            formatter.fmt_items(&mut context, std::slice::from_ref(item))?;
        }
        Lowered::Expression(expr) => formatter.fmt_expr(&mut context, expr, Precedence::BASE)?,
        Lowered::Type(ty) => formatter.fmt_result_type(&mut context, ty)?,
    }
    Ok(output)
}

/// Reads a syntax tree from its tree notation,
/// and prints it as Java source.
///
/// # Errors
///
/// If the text is not valid tree notation,
/// or see [`format_node`].
pub fn format_str(text: &str, options: Rc<FormatOptions>) -> FmtResult<String> {
    let node = reader::read(text)?;
    format_node(&node, options)
}

/// Prints the typed Java syntax tree.
///
/// Holds nothing but the options;
/// all the state of one printing run
/// lives in the [`Context`] and the threaded [`Layout`].
pub struct JavaFormatter {
    options: Rc<FormatOptions>,
}

impl JavaFormatter {
    #[must_use]
    pub const fn new(options: Rc<FormatOptions>) -> Self {
        Self { options }
    }

    pub fn context<'a>(&self, output: &'a mut String) -> Context<'a, String> {
        Context::new(output, &self.options.indentation, self.options.line_width)
    }

    /// Prints a whole compilation unit.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn fmt_unit<W: Write>(&self, context: &mut Context<W>, unit: &CompilationUnit) -> FmtResult<()> {
        tracing::debug!("Printing a compilation unit with {} items", unit.items.len());
        self.fmt_items(context, &unit.items)?;
        Ok(())
    }

    fn open<W: Write>(context: &mut Context<W>, opening: Opening) -> FmtResult<()> {
        for _ in 0..opening.newlines {
            context.pln()?;
        }
        if opening.indent {
            context.incr();
        }
        Ok(())
    }

    fn close<W: Write>(context: &mut Context<W>, layout: &mut Layout, nested: bool) {
        if layout.end_statement(nested) {
            context.decr();
        }
    }

    /// Prints a sequence of declarations and statements,
    /// separating them with blank lines where appropriate.
    fn fmt_items<W: Write>(&self, context: &mut Context<W>, items: &[Item]) -> FmtResult<Layout> {
        let policy = &self.options.blank_lines;
        let mut layout = Layout::reset();
        let mut package: Option<String> = None;
        let mut prev: Option<Neighbor> = None;
        for item in items {
            let cur = policy.neighbor(item);
            if prev.is_some_and(|prev| needs_blank_line(prev, cur)) {
                context.pln()?;
            }
            layout = match item {
                Item::Decl(decl) => self.fmt_decl(context, decl, layout, &mut package)?,
                Item::Stmt(stmt) => self.fmt_stmt(context, stmt, layout)?,
            };
            if layout.open_line {
                context.pln()?;
            }
            layout.open_line = false;
            prev = Some(cur);
        }
        Ok(layout)
    }

    fn fmt_class_body<W: Write>(
        &self,
        context: &mut Context<W>,
        items: &[Item],
        layout: Layout,
    ) -> FmtResult<Layout> {
        if layout.open_line {
            context.write_char(' ')?;
        }
        context.write_char('{')?;
        context.pln()?;
        context.incr();
        self.fmt_items(context, items)?;
        context.decr();
        context.indent()?;
        context.write_char('}')?;
        Ok(Layout {
            open_line: true,
            nested: false,
            if_else: false,
            ..layout
        })
    }

    fn fmt_block<W: Write>(
        &self,
        context: &mut Context<W>,
        items: &[Item],
        layout: Layout,
    ) -> FmtResult<Layout> {
        if layout.open_line {
            context.write_char(' ')?;
        } else {
            context.indent()?;
        }
        context.write_char('{')?;
        context.pln()?;
        context.incr();
        self.fmt_items(context, items)?;
        context.decr();
        context.indent()?;
        context.write_char('}')?;
        Ok(Layout {
            open_line: true,
            statement: true,
            ..Layout::reset()
        })
    }

    fn fmt_decl<W: Write>(
        &self,
        context: &mut Context<W>,
        decl: &Declaration,
        mut layout: Layout,
        package: &mut Option<String>,
    ) -> FmtResult<Layout> {
        match decl {
            Declaration::Package(pkg) => {
                context.indent()?;
                for annotation in &pkg.annotations {
                    self.fmt_annotation(context, annotation)?;
                    context.write_char(' ')?;
                }
                write!(context, "package {};", pkg.name.join("."))?;
                context.pln()?;
                *package = Some(pkg.name.join("."));
                layout.open_line = false;
            }
            Declaration::Import(import) => {
                let import_package = import.package();
                if package.as_ref().is_some_and(|prev| *prev != import_package) {
                    context.pln()?;
                }
                *package = Some(import_package);
                context.indent()?;
                context.write_str("import ")?;
                if import.is_static {
                    context.write_str("static ")?;
                }
                context.write_str(&import.name.join("."))?;
                if import.on_demand {
                    context.write_str(".*")?;
                }
                context.write_char(';')?;
                context.pln()?;
                layout.open_line = false;
            }
            Declaration::Class(class) => {
                context.indent()?;
                self.fmt_modifiers(context, &class.modifiers)?;
                write!(context, "class {}", class.name)?;
                self.fmt_type_params(context, &class.type_params)?;
                self.fmt_type_list(context, " extends ", &class.extends)?;
                self.fmt_type_list(context, " implements ", &class.implements)?;
                layout.open_line = true;
                layout = self.fmt_class_body(context, &class.body, layout)?;
                context.pln()?;
                layout.declaration = true;
                layout.open_line = false;
            }
            Declaration::Interface(interface) => {
                context.indent()?;
                self.fmt_modifiers(context, &interface.modifiers)?;
                write!(context, "interface {}", interface.name)?;
                self.fmt_type_params(context, &interface.type_params)?;
                self.fmt_type_list(context, " extends ", &interface.extends)?;
                layout.open_line = true;
                layout = self.fmt_class_body(context, &interface.body, layout)?;
                context.pln()?;
                layout.declaration = true;
                layout.open_line = false;
            }
            Declaration::Annotation(annotation) => {
                context.indent()?;
                self.fmt_modifiers(context, &annotation.modifiers)?;
                write!(context, "@interface {}", annotation.name)?;
                layout.open_line = true;
                layout = self.fmt_class_body(context, &annotation.body, layout)?;
                context.pln()?;
                layout.declaration = true;
                layout.open_line = false;
            }
            Declaration::Enum(decl) => layout = self.fmt_enum(context, decl, layout)?,
            Declaration::Field(field) => {
                context.indent()?;
                self.fmt_modifiers(context, &field.modifiers)?;
                self.fmt_type(context, &field.ty)?;
                context.write_char(' ')?;
                self.fmt_declarators(context, &field.declarators)?;
                context.write_char(';')?;
                context.pln()?;
                layout.declaration = true;
                layout.open_line = false;
            }
            Declaration::Method(method) => {
                context.indent()?;
                self.fmt_modifiers(context, &method.modifiers)?;
                if !method.type_params.is_empty() {
                    self.fmt_type_params(context, &method.type_params)?;
                    context.write_char(' ')?;
                }
                self.fmt_result_type(context, &method.result)?;
                if let Some(name) = &method.name {
                    write!(context, " {name}")?;
                }
                self.fmt_params(context, &method.params)?;
                fmt_dims(context, method.dims)?;
                self.fmt_type_list(context, " throws ", &method.throws)?;
                if let Some(body) = &method.body {
                    layout.open_line = true;
                    layout = self.fmt_block(context, body, layout)?;
                    context.pln()?;
                } else {
                    context.write_char(';')?;
                    context.pln()?;
                }
                layout.open_line = false;
            }
            Declaration::Constructor(constructor) => {
                context.indent()?;
                self.fmt_modifiers(context, &constructor.modifiers)?;
                if !constructor.type_params.is_empty() {
                    self.fmt_type_params(context, &constructor.type_params)?;
                    context.write_char(' ')?;
                }
                context.write_str(&constructor.name)?;
                self.fmt_params(context, &constructor.params)?;
                self.fmt_type_list(context, " throws ", &constructor.throws)?;
                layout.open_line = true;
                layout = self.fmt_block(context, &constructor.body, layout)?;
                context.pln()?;
                layout.open_line = false;
            }
            Declaration::Initializer(initializer) => {
                if initializer.is_static {
                    context.indent()?;
                    context.write_str("static")?;
                    layout.open_line = true;
                } else {
                    layout.open_line = false;
                }
                layout = self.fmt_block(context, &initializer.body, layout)?;
                context.pln()?;
                layout.open_line = false;
            }
            Declaration::AnnotationMethod(method) => {
                context.indent()?;
                self.fmt_modifiers(context, &method.modifiers)?;
                self.fmt_type(context, &method.ty)?;
                write!(context, " {}()", method.name)?;
                if let Some(default) = &method.default {
                    context.write_str(" default ")?;
                    self.fmt_element_value(context, default)?;
                }
                context.write_char(';')?;
                context.pln()?;
                layout.open_line = false;
            }
            Declaration::Empty => {}
        }
        Ok(layout)
    }

    fn fmt_enum<W: Write>(
        &self,
        context: &mut Context<W>,
        decl: &EnumDecl,
        mut layout: Layout,
    ) -> FmtResult<Layout> {
        context.indent()?;
        self.fmt_modifiers(context, &decl.modifiers)?;
        write!(context, "enum {}", decl.name)?;
        self.fmt_type_list(context, " implements ", &decl.implements)?;
        context.write_str(" {")?;
        context.pln()?;
        context.incr();

        for (idx, constant) in decl.constants.iter().enumerate() {
            context.indent()?;
            for annotation in &constant.annotations {
                self.fmt_annotation(context, annotation)?;
                context.write_char(' ')?;
            }
            context.write_str(&constant.name)?;
            if let Some(args) = &constant.args {
                self.fmt_args(context, args)?;
            }
            if let Some(body) = &constant.body {
                let body_layout = Layout {
                    open_line: true,
                    ..Layout::reset()
                };
                self.fmt_class_body(context, body, body_layout)?;
            }
            if idx + 1 < decl.constants.len() {
                context.write_char(',')?;
                context.pln()?;
                if constant.body.is_some() {
                    context.pln()?;
                }
            }
        }
        layout.open_line = !decl.constants.is_empty();

        if let Some(members) = &decl.members {
            if decl.constants.is_empty() {
                context.indent()?;
            }
            context.write_char(';')?;
            context.pln()?;
            context.pln()?;
            layout = self.fmt_items(context, members)?;
        }

        if layout.open_line {
            context.pln()?;
        }
        context.decr();
        context.indent()?;
        context.write_char('}')?;
        context.pln()?;
        Ok(Layout {
            declaration: true,
            open_line: false,
            nested: false,
            if_else: false,
            ..layout
        })
    }

    fn fmt_stmt<W: Write>(
        &self,
        context: &mut Context<W>,
        stmt: &Statement,
        mut layout: Layout,
    ) -> FmtResult<Layout> {
        if let Statement::Block(items) = stmt {
            return self.fmt_block(context, items, layout);
        }
        let kind = match stmt {
            Statement::If {
                otherwise: None, ..
            } => StatementKind::If,
            Statement::If {
                otherwise: Some(_), ..
            } => StatementKind::IfElse,
            _ => StatementKind::Any,
        };
        let (opening, nested) = layout.start_statement(kind);
        Self::open(context, opening)?;
        match stmt {
            Statement::Block(_) => {}
            Statement::If {
                condition,
                then,
                otherwise,
            } => {
                if layout.if_else {
                    context.write_char(' ')?;
                } else {
                    context.indent()?;
                }
                context.write_str("if (")?;
                self.fmt_expr(context, condition, Precedence::BASE)?;
                context.write_char(')')?;
                layout.prepare_nested();
                layout = self.fmt_stmt(context, then, layout)?;
                if let Some(otherwise) = otherwise {
                    if layout.open_line {
                        context.write_str(" else")?;
                    } else {
                        context.indent()?;
                        context.write_str("else")?;
                    }
                    layout.prepare_nested();
                    layout.if_else = true;
                    layout = self.fmt_stmt(context, otherwise, layout)?;
                    layout.if_else = false;
                }
            }
            Statement::For { control, body } => {
                context.indent()?;
                context.write_str("for (")?;
                self.fmt_for_control(context, control)?;
                context.write_char(')')?;
                layout = self.fmt_nested(context, body, layout)?;
            }
            Statement::While { condition, body } => {
                context.indent()?;
                context.write_str("while (")?;
                self.fmt_expr(context, condition, Precedence::BASE)?;
                context.write_char(')')?;
                layout = self.fmt_nested(context, body, layout)?;
            }
            Statement::DoWhile { body, condition } => {
                context.indent()?;
                context.write_str("do")?;
                layout = self.fmt_nested(context, body, layout)?;
                if layout.open_line {
                    context.write_char(' ')?;
                } else {
                    context.indent()?;
                }
                context.write_str("while (")?;
                self.fmt_expr(context, condition, Precedence::BASE)?;
                context.write_str(");")?;
                context.pln()?;
                layout.open_line = false;
            }
            Statement::Try {
                body,
                catches,
                finally,
            } => {
                context.indent()?;
                context.write_str("try")?;
                layout.open_line = true;
                layout = self.fmt_block(context, body, layout)?;
                for catch in catches {
                    context.write_str(" catch (")?;
                    self.fmt_param(context, &catch.param)?;
                    context.write_char(')')?;
                    layout = self.fmt_block(context, &catch.body, layout)?;
                }
                if let Some(finally) = finally {
                    context.write_str(" finally")?;
                    layout = self.fmt_block(context, finally, layout)?;
                }
            }
            Statement::Switch { selector, clauses } => {
                context.indent()?;
                context.write_str("switch (")?;
                self.fmt_expr(context, selector, Precedence::CONSTANT)?;
                context.write_str(") {")?;
                context.pln()?;
                context.incr();
                layout.declaration = false;
                layout.open_line = false;
                layout.nested = false;
                layout.if_else = false;
                for clause in clauses {
                    layout = self.fmt_switch_clause(context, clause, layout)?;
                }
                if layout.open_line {
                    context.pln()?;
                }
                context.decr();
                context.indent()?;
                context.write_char('}')?;
                layout.open_line = true;
                layout.nested = false;
                layout.if_else = false;
            }
            Statement::Synchronized { lock, body } => {
                context.indent()?;
                context.write_str("synchronized (")?;
                self.fmt_expr(context, lock, Precedence::BASE)?;
                context.write_char(')')?;
                layout = self.fmt_nested(context, body, layout)?;
            }
            Statement::Return(value) => {
                context.indent()?;
                context.write_str("return")?;
                if let Some(value) = value {
                    context.write_char(' ')?;
                    self.fmt_expr(context, value, Precedence::BASE)?;
                }
                Self::end_simple(context, &mut layout)?;
            }
            Statement::Throw(value) => {
                context.indent()?;
                context.write_str("throw ")?;
                self.fmt_expr(context, value, Precedence::BASE)?;
                Self::end_simple(context, &mut layout)?;
            }
            Statement::Break(label) | Statement::Continue(label) => {
                context.indent()?;
                context.write_str(if matches!(stmt, Statement::Break(_)) {
                    "break"
                } else {
                    "continue"
                })?;
                if let Some(label) = label {
                    write!(context, " {label}")?;
                }
                Self::end_simple(context, &mut layout)?;
            }
            Statement::Labeled { label, body } => {
                context.indent()?;
                write!(context, "{label}:")?;
                context.pln()?;
                layout.declaration = false;
                layout = self.fmt_stmt(context, body, layout)?;
            }
            Statement::Expression(expr) => {
                context.indent()?;
                self.fmt_expr(context, expr, Precedence::BASE)?;
                Self::end_simple(context, &mut layout)?;
            }
            Statement::Assert { condition, message } => {
                context.indent()?;
                context.write_str("assert ")?;
                self.fmt_expr(context, condition, Precedence::BASE)?;
                if let Some(message) = message {
                    context.write_str(" : ")?;
                    self.fmt_expr(context, message, Precedence::BASE)?;
                }
                Self::end_simple(context, &mut layout)?;
            }
            Statement::Empty => {
                context.indent()?;
                Self::end_simple(context, &mut layout)?;
            }
        }
        Self::close(context, &mut layout, nested);
        Ok(layout)
    }

    /// Terminates a statement that fits on one line.
    fn end_simple<W: Write>(context: &mut Context<W>, layout: &mut Layout) -> FmtResult<()> {
        context.write_char(';')?;
        context.pln()?;
        layout.open_line = false;
        Ok(())
    }

    /// Prints the body of a compound statement.
    fn fmt_nested<W: Write>(
        &self,
        context: &mut Context<W>,
        body: &Statement,
        mut layout: Layout,
    ) -> FmtResult<Layout> {
        layout.prepare_nested();
        self.fmt_stmt(context, body, layout)
    }

    fn fmt_switch_clause<W: Write>(
        &self,
        context: &mut Context<W>,
        clause: &SwitchClause,
        mut layout: Layout,
    ) -> FmtResult<Layout> {
        let (opening, nested) = layout.start_statement(StatementKind::Any);
        Self::open(context, opening)?;
        context.indent_less()?;
        match clause {
            SwitchClause::Case { label, .. } => {
                context.write_str("case ")?;
                self.fmt_expr(context, label, Precedence::CONSTANT)?;
                context.write_char(':')?;
            }
            SwitchClause::Default(_) => context.write_str("default:")?,
        }
        context.pln()?;
        layout.open_line = false;
        layout.nested = false;
        layout.if_else = false;
        let mut package = None;
        for item in clause.items() {
            layout = match item {
                Item::Decl(decl) => self.fmt_decl(context, decl, layout, &mut package)?,
                Item::Stmt(stmt) => self.fmt_stmt(context, stmt, layout)?,
            };
            if layout.open_line {
                context.pln()?;
                layout.open_line = false;
            }
        }
        Self::close(context, &mut layout, nested);
        Ok(layout)
    }

    fn fmt_for_control<W: Write>(&self, context: &mut Context<W>, control: &ForControl) -> FmtResult<()> {
        match control {
            ForControl::Basic {
                modifiers,
                ty,
                init,
                condition,
                update,
            } => {
                self.fmt_modifiers(context, modifiers)?;
                if let Some(ty) = ty {
                    self.fmt_type(context, ty)?;
                    context.write_char(' ')?;
                }
                match init {
                    Some(ForInit::Declarators(declarators)) => {
                        self.fmt_declarators(context, declarators)?;
                    }
                    Some(ForInit::Expressions(exprs)) => self.fmt_expr_list(context, exprs)?,
                    None => {}
                }
                context.write_str("; ")?;
                if let Some(condition) = condition {
                    // An assignment as condition is most likely a typo,
                    // so make it stand out.
                    if matches!(condition, Expression::Assignment { .. }) {
                        context.write_char('(')?;
                        self.fmt_expr(context, condition, Precedence::BASE)?;
                        context.write_char(')')?;
                    } else {
                        self.fmt_expr(context, condition, Precedence::BASE)?;
                    }
                }
                context.write_str("; ")?;
                self.fmt_expr_list(context, update)?;
            }
            ForControl::Enhanced {
                modifiers,
                ty,
                name,
                iterable,
            } => {
                self.fmt_modifiers(context, modifiers)?;
                self.fmt_type(context, ty)?;
                write!(context, " {name} : ")?;
                self.fmt_expr(context, iterable, Precedence::BASE)?;
            }
        }
        Ok(())
    }

    fn fmt_modifiers<W: Write>(&self, context: &mut Context<W>, modifiers: &Modifiers) -> FmtResult<()> {
        for modifier in &modifiers.0 {
            match modifier {
                Modifier::Keyword(keyword) => context.write_str(keyword)?,
                Modifier::Annotation(annotation) => self.fmt_annotation(context, annotation)?,
            }
            context.write_char(' ')?;
        }
        Ok(())
    }

    fn fmt_annotation<W: Write>(&self, context: &mut Context<W>, annotation: &Annotation) -> FmtResult<()> {
        write!(context, "@{}", annotation.name.join("."))?;
        match &annotation.value {
            None => {}
            Some(AnnotationValue::Single(value)) => {
                context.write_char('(')?;
                self.fmt_element_value(context, value)?;
                context.write_char(')')?;
            }
            Some(AnnotationValue::Pairs(pairs)) => {
                context.write_char('(')?;
                for (idx, (name, value)) in pairs.iter().enumerate() {
                    if idx > 0 {
                        context.write_str(", ")?;
                    }
                    write!(context, "{name} = ")?;
                    self.fmt_element_value(context, value)?;
                }
                context.write_char(')')?;
            }
        }
        Ok(())
    }

    fn fmt_element_value<W: Write>(&self, context: &mut Context<W>, value: &ElementValue) -> FmtResult<()> {
        match value {
            ElementValue::Expr(expr) => self.fmt_expr(context, expr, Precedence::LIST),
            ElementValue::Annotation(annotation) => self.fmt_annotation(context, annotation),
        }
    }

    fn fmt_declarators<W: Write>(
        &self,
        context: &mut Context<W>,
        declarators: &[Declarator],
    ) -> FmtResult<()> {
        for (idx, declarator) in declarators.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            context.write_str(&declarator.name)?;
            fmt_dims(context, declarator.dims)?;
            if let Some(init) = &declarator.init {
                context.write_str(" = ")?;
                self.fmt_expr(context, init, Precedence::LIST)?;
            }
        }
        Ok(())
    }

    fn fmt_params<W: Write>(&self, context: &mut Context<W>, params: &[FormalParameter]) -> FmtResult<()> {
        context.write_char('(')?;
        for (idx, param) in params.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            self.fmt_param(context, param)?;
        }
        context.write_char(')')?;
        Ok(())
    }

    fn fmt_param<W: Write>(&self, context: &mut Context<W>, param: &FormalParameter) -> FmtResult<()> {
        self.fmt_modifiers(context, &param.modifiers)?;
        self.fmt_type(context, &param.ty)?;
        if param.varargs {
            context.write_str("...")?;
        }
        write!(context, " {}", param.name)?;
        fmt_dims(context, param.dims)
    }

    fn fmt_args<W: Write>(&self, context: &mut Context<W>, args: &[Expression]) -> FmtResult<()> {
        context.write_char('(')?;
        self.fmt_expr_list(context, args)?;
        context.write_char(')')?;
        Ok(())
    }

    fn fmt_expr_list<W: Write>(&self, context: &mut Context<W>, exprs: &[Expression]) -> FmtResult<()> {
        for (idx, expr) in exprs.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            self.fmt_expr(context, expr, Precedence::LIST)?;
        }
        Ok(())
    }

    /// Prints an expression in a context of the given precedence,
    /// putting it in parentheses if it binds less tightly.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn fmt_expr<W: Write>(
        &self,
        context: &mut Context<W>,
        expr: &Expression,
        prec: Precedence,
    ) -> FmtResult<()> {
        let own = expr.precedence();
        let parens = own.needs_parens(prec);
        if parens {
            context.write_char('(')?;
        }
        match expr {
            Expression::Assignment {
                target,
                operator,
                value,
            } => {
                self.fmt_expr(context, target, own.stricter())?;
                write!(context, " {operator} ")?;
                self.fmt_expr(context, value, own)?;
            }
            Expression::Conditional {
                condition,
                then,
                otherwise,
            } => {
                self.fmt_expr(context, condition, own.stricter())?;
                context.write_str(" ? ")?;
                self.fmt_expr(context, then, own.stricter())?;
                context.write_str(" : ")?;
                self.fmt_expr(context, otherwise, own)?;
            }
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => {
                self.fmt_expr(context, left, own)?;
                write!(context, " {operator} ")?;
                self.fmt_expr(context, right, own.stricter())?;
            }
            Expression::InstanceOf { expr, ty } => {
                self.fmt_expr(context, expr, own)?;
                context.write_str(" instanceof ")?;
                self.fmt_type(context, ty)?;
            }
            Expression::Unary { op, operand } => {
                context.write_str(op.as_str())?;
                if op.sign().is_some()
                    && !operand.precedence().needs_parens(own)
                    && operand.leading_sign() == op.sign()
                {
                    context.write_char(' ')?;
                }
                self.fmt_expr(context, operand, own)?;
            }
            Expression::Cast { ty, operand } => {
                context.write_char('(')?;
                self.fmt_type(context, ty)?;
                context.write_char(')')?;
                // `(T)-x` would read as a subtraction
                // for any non-primitive `T`.
                let guard = !ty.is_primitive()
                    && !operand.precedence().needs_parens(own)
                    && operand.leading_sign().is_some();
                if guard {
                    context.write_char('(')?;
                    self.fmt_expr(context, operand, Precedence::BASE)?;
                    context.write_char(')')?;
                } else {
                    self.fmt_expr(context, operand, own)?;
                }
            }
            Expression::Call {
                receiver,
                type_args,
                name,
                args,
            } => {
                if let Some(receiver) = receiver {
                    self.fmt_expr(context, receiver, own)?;
                    context.write_char('.')?;
                }
                self.fmt_type_args(context, type_args)?;
                context.write_str(name)?;
                self.fmt_args(context, args)?;
            }
            Expression::Selection { expr, name } => {
                self.fmt_expr(context, expr, own)?;
                write!(context, ".{name}")?;
            }
            Expression::Subscript { expr, index } => {
                self.fmt_expr(context, expr, own)?;
                context.write_char('[')?;
                self.fmt_expr(context, index, Precedence::BASE)?;
                context.write_char(']')?;
            }
            Expression::Postfix { expr, operator } => {
                self.fmt_expr(context, expr, own)?;
                context.write_str(operator)?;
            }
            Expression::ClassLiteral(ty) => {
                self.fmt_result_type(context, ty)?;
                context.write_str(".class")?;
            }
            Expression::This(qualifier) | Expression::Super(qualifier) => {
                if let Some(qualifier) = qualifier {
                    self.fmt_expr(context, qualifier, own)?;
                    context.write_char('.')?;
                }
                context.write_str(if matches!(expr, Expression::This(_)) {
                    "this"
                } else {
                    "super"
                })?;
            }
            Expression::Identifier(name) => context.write_str(name)?,
            Expression::QualifiedIdentifier(name) => context.write_str(&name.join("."))?,
            Expression::NewClass {
                outer,
                type_args,
                ty,
                args,
                body,
            } => {
                if let Some(outer) = outer {
                    self.fmt_expr(context, outer, own)?;
                    context.write_char('.')?;
                }
                context.write_str("new ")?;
                if !type_args.is_empty() {
                    self.fmt_type_args(context, type_args)?;
                    context.write_char(' ')?;
                }
                self.fmt_type(context, ty)?;
                self.fmt_args(context, args)?;
                if let Some(body) = body {
                    let mut layout = Layout::reset();
                    layout.prepare_nested();
                    self.fmt_class_body(context, body, layout)?;
                }
            }
            Expression::NewArray {
                ty,
                dims,
                extra_dims,
                init,
            } => {
                context.write_str("new ")?;
                self.fmt_type(context, ty)?;
                for dim in dims {
                    context.write_char('[')?;
                    self.fmt_expr(context, dim, Precedence::BASE)?;
                    context.write_char(']')?;
                }
                fmt_dims(context, *extra_dims)?;
                if let Some(init) = init {
                    context.write_char(' ')?;
                    self.fmt_array_initializer(context, init)?;
                }
            }
            Expression::ArrayInitializer(elements) => {
                self.fmt_array_initializer(context, elements)?;
            }
            Expression::Literal { text, .. } => context.write_str(text)?,
            Expression::Null => context.write_str("null")?,
        }
        if parens {
            context.write_char(')')?;
        }
        Ok(())
    }

    fn fmt_array_initializer<W: Write>(
        &self,
        context: &mut Context<W>,
        elements: &[Expression],
    ) -> FmtResult<()> {
        if elements.is_empty() {
            context.write_str("{ }")?;
            return Ok(());
        }

        if self.options.array_initializers == ArrayInitializerStyle::FitOnLine {
            let mut line = String::new();
            let fits = {
                let mut probe = context.probe(&mut line);
                probe.write_str("{ ")?;
                self.fmt_expr_list(&mut probe, elements)?;
                probe.write_str(" }")?;
                // keep a column for the `;` or `,` that follows
                probe.column() < probe.line_width()
            };
            if fits && !line.contains('\n') {
                context.write_str(&line)?;
                return Ok(());
            }
        }

        context.write_char('{')?;
        context.pln()?;
        context.incr();
        context.indent()?;
        for (idx, element) in elements.iter().enumerate() {
            context.buffer(if idx == 0 { "" } else { " " })?;
            self.fmt_expr(context, element, Precedence::LIST)?;
            if idx + 1 < elements.len() {
                context.write_char(',')?;
            }
            context.fit()?;
        }
        context.pln()?;
        context.decr();
        context.indent()?;
        context.write_char('}')?;
        Ok(())
    }

    /// Prints a method result type, or any other type.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn fmt_result_type<W: Write>(&self, context: &mut Context<W>, ty: &ResultType) -> FmtResult<()> {
        match ty {
            ResultType::Void => {
                context.write_str("void")?;
                Ok(())
            }
            ResultType::Type(ty) => self.fmt_type(context, ty),
        }
    }

    fn fmt_type<W: Write>(&self, context: &mut Context<W>, ty: &Type) -> FmtResult<()> {
        match &ty.base {
            TypeName::Primitive(name) => context.write_str(name)?,
            TypeName::Qualified(name) => context.write_str(&name.join("."))?,
            TypeName::Instantiated(parts) => {
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        context.write_char('.')?;
                    }
                    context.write_str(&part.name)?;
                    self.fmt_type_args(context, &part.args)?;
                }
            }
        }
        fmt_dims(context, ty.dims)
    }

    fn fmt_type_list<W: Write>(
        &self,
        context: &mut Context<W>,
        keyword: &str,
        types: &[Type],
    ) -> FmtResult<()> {
        if types.is_empty() {
            return Ok(());
        }
        context.write_str(keyword)?;
        for (idx, ty) in types.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            self.fmt_type(context, ty)?;
        }
        Ok(())
    }

    fn fmt_type_args<W: Write>(&self, context: &mut Context<W>, args: &[TypeArgument]) -> FmtResult<()> {
        if args.is_empty() {
            return Ok(());
        }
        context.write_char('<')?;
        for (idx, arg) in args.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            match arg {
                TypeArgument::Type(ty) => self.fmt_type(context, ty)?,
                TypeArgument::Wildcard(bound) => {
                    context.write_char('?')?;
                    if let Some(bound) = bound {
                        write!(context, " {} ", bound.keyword)?;
                        self.fmt_type(context, &bound.ty)?;
                    }
                }
            }
        }
        context.write_char('>')?;
        Ok(())
    }

    fn fmt_type_params<W: Write>(
        &self,
        context: &mut Context<W>,
        params: &[TypeParameter],
    ) -> FmtResult<()> {
        if params.is_empty() {
            return Ok(());
        }
        context.write_char('<')?;
        for (idx, param) in params.iter().enumerate() {
            if idx > 0 {
                context.write_str(", ")?;
            }
            context.write_str(&param.name)?;
            for (bound_idx, bound) in param.bound.iter().enumerate() {
                context.write_str(if bound_idx == 0 { " extends " } else { " & " })?;
                self.fmt_type(context, bound)?;
            }
        }
        context.write_char('>')?;
        Ok(())
    }
}

fn fmt_dims<W: Write>(context: &mut Context<W>, dims: usize) -> FmtResult<()> {
    for _ in 0..dims {
        context.write_str("[]")?;
    }
    Ok(())
}
