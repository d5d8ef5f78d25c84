use chrono::Local;
use proxy_types::{Accessibility, PassingMode};
use std::fmt::Write;

use super::decl::{
    Arg, ClassDecl, ClassMember, CompilationUnit, CtorDecl, Declaration, DelegateDecl, Expr,
    FieldDecl, InterfaceDecl, InterfaceMember, MethodDecl, MethodSig, ParamDecl, PropertyDecl,
    PropertySig, Stmt,
};

const INDENT: &str = "    ";

pub struct CSharpRenderOptions {
    /* The generated-by header is the only non-deterministic output */
    pub emit_header_comment: bool,
}

impl Default for CSharpRenderOptions {
    fn default() -> Self {
        Self {
            emit_header_comment: true,
        }
    }
}

/* Renders a declaration tree as C# source text */
pub struct CSharpRenderer {
    options: CSharpRenderOptions,
}

impl CSharpRenderer {
    pub fn new(options: CSharpRenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, unit: &CompilationUnit) -> String {
        let mut out = String::new();

        if self.options.emit_header_comment {
            write!(
                out,
                "//\n// Generated by proxy-gen at {}\n//\n",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            )
            .unwrap();
        }

        for using in &unit.usings {
            writeln!(out, "using {};", using).unwrap();
        }
        out.push('\n');

        match &unit.namespace {
            Some(ns) => {
                writeln!(out, "namespace {}", ns).unwrap();
                out.push_str("{\n");
                self.render_declaration(&unit.declaration, 1, &mut out);
                out.push_str("}\n");
            }
            None => self.render_declaration(&unit.declaration, 0, &mut out),
        }

        out
    }

    fn render_declaration(&self, declaration: &Declaration, depth: usize, out: &mut String) {
        match declaration {
            Declaration::Class(class) => self.render_class(class, depth, out),
            Declaration::Interface(iface) => self.render_interface(iface, depth, out),
        }
    }

    fn render_class(&self, class: &ClassDecl, depth: usize, out: &mut String) {
        for attr in &class.attributes {
            indent(depth, out);
            writeln!(out, "[{}]", attr).unwrap();
        }

        indent(depth, out);
        write!(
            out,
            "{} class {}",
            accessibility_keyword(class.accessibility),
            class.name
        )
        .unwrap();
        if !class.implements.is_empty() {
            write!(out, " : {}", class.implements.join(", ")).unwrap();
        }
        out.push('\n');

        indent(depth, out);
        out.push_str("{\n");

        for (i, member) in class.members.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_class_member(member, depth + 1, out);
        }

        indent(depth, out);
        out.push_str("}\n");
    }

    fn render_class_member(&self, member: &ClassMember, depth: usize, out: &mut String) {
        match member {
            ClassMember::Field(field) => self.render_field(field, depth, out),
            ClassMember::Constructor(ctor) => self.render_ctor(ctor, depth, out),
            ClassMember::Method(method) => self.render_method(method, depth, out),
            ClassMember::Property(property) => self.render_property(property, depth, out),
            ClassMember::Delegate(delegate) => self.render_delegate(delegate, depth, out),
        }
    }

    fn render_field(&self, field: &FieldDecl, depth: usize, out: &mut String) {
        indent(depth, out);
        writeln!(
            out,
            "{} {} {};",
            accessibility_keyword(field.accessibility),
            field.field_type,
            field.name
        )
        .unwrap();
    }

    fn render_ctor(&self, ctor: &CtorDecl, depth: usize, out: &mut String) {
        indent(depth, out);
        writeln!(
            out,
            "{} {}({})",
            accessibility_keyword(ctor.accessibility),
            ctor.name,
            render_params(&ctor.params)
        )
        .unwrap();
        self.render_block(&ctor.body, depth, out);
    }

    fn render_method(&self, method: &MethodDecl, depth: usize, out: &mut String) {
        indent(depth, out);
        if let Some(accessibility) = method.accessibility {
            write!(out, "{} ", accessibility_keyword(accessibility)).unwrap();
        }
        write!(
            out,
            "{} {}{}({})",
            method.return_type.as_deref().unwrap_or("void"),
            method.name,
            render_type_params(&method.type_params),
            render_params(&method.params)
        )
        .unwrap();
        out.push('\n');
        self.render_block(&method.body, depth, out);
    }

    fn render_property(&self, property: &PropertyDecl, depth: usize, out: &mut String) {
        indent(depth, out);
        writeln!(
            out,
            "{} {} {}",
            accessibility_keyword(property.accessibility),
            property.prop_type,
            property.name
        )
        .unwrap();
        indent(depth, out);
        out.push_str("{\n");

        if let Some(getter) = &property.getter {
            indent(depth + 1, out);
            out.push_str("get\n");
            self.render_block(getter, depth + 1, out);
        }
        if let Some(setter) = &property.setter {
            indent(depth + 1, out);
            out.push_str("set\n");
            self.render_block(setter, depth + 1, out);
        }

        indent(depth, out);
        out.push_str("}\n");
    }

    fn render_delegate(&self, delegate: &DelegateDecl, depth: usize, out: &mut String) {
        for attr in &delegate.attributes {
            indent(depth, out);
            writeln!(out, "[{}]", attr).unwrap();
        }

        indent(depth, out);
        writeln!(
            out,
            "{} delegate {} {}{}({});",
            accessibility_keyword(delegate.accessibility),
            delegate.return_type.as_deref().unwrap_or("void"),
            delegate.name,
            render_type_params(&delegate.type_params),
            render_params(&delegate.params)
        )
        .unwrap();
    }

    fn render_interface(&self, iface: &InterfaceDecl, depth: usize, out: &mut String) {
        indent(depth, out);
        writeln!(
            out,
            "{} interface {}",
            accessibility_keyword(iface.accessibility),
            iface.name
        )
        .unwrap();
        indent(depth, out);
        out.push_str("{\n");

        for member in &iface.members {
            match member {
                InterfaceMember::Property(sig) => self.render_property_sig(sig, depth + 1, out),
                InterfaceMember::Method(sig) => self.render_method_sig(sig, depth + 1, out),
            }
        }

        indent(depth, out);
        out.push_str("}\n");
    }

    fn render_property_sig(&self, sig: &PropertySig, depth: usize, out: &mut String) {
        indent(depth, out);
        let mut accessors = String::new();
        if sig.has_getter {
            accessors.push_str("get; ");
        }
        if sig.has_setter {
            accessors.push_str("set; ");
        }
        writeln!(
            out,
            "{} {} {{ {}}}",
            sig.prop_type,
            sig.name,
            accessors
        )
        .unwrap();
    }

    fn render_method_sig(&self, sig: &MethodSig, depth: usize, out: &mut String) {
        indent(depth, out);
        writeln!(
            out,
            "{} {}{}({});",
            sig.return_type.as_deref().unwrap_or("void"),
            sig.name,
            render_type_params(&sig.type_params),
            render_params(&sig.params)
        )
        .unwrap();
    }

    fn render_block(&self, statements: &[Stmt], depth: usize, out: &mut String) {
        indent(depth, out);
        out.push_str("{\n");
        for statement in statements {
            self.render_stmt(statement, depth + 1, out);
        }
        indent(depth, out);
        out.push_str("}\n");
    }

    fn render_stmt(&self, statement: &Stmt, depth: usize, out: &mut String) {
        match statement {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                indent(depth, out);
                writeln!(out, "if ({})", render_expr(condition)).unwrap();
                self.render_block(then_branch, depth, out);
                if !else_branch.is_empty() {
                    indent(depth, out);
                    out.push_str("else\n");
                    self.render_block(else_branch, depth, out);
                }
            }
            Stmt::Assign { target, value } => {
                indent(depth, out);
                writeln!(out, "{} = {};", render_expr(target), render_expr(value)).unwrap();
            }
            Stmt::Return(expr) => {
                indent(depth, out);
                match expr {
                    Some(e) => writeln!(out, "return {};", render_expr(e)).unwrap(),
                    None => out.push_str("return;\n"),
                }
            }
            Stmt::Expr(expr) => {
                indent(depth, out);
                writeln!(out, "{};", render_expr(expr)).unwrap();
            }
            Stmt::Throw(expr) => {
                indent(depth, out);
                writeln!(out, "throw {};", render_expr(expr)).unwrap();
            }
        }
    }
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::StringLit(value) => format!("\"{}\"", escape_string(value)),
        Expr::Null => "null".to_string(),
        Expr::This => "this".to_string(),
        Expr::NotEquals(left, right) => {
            format!("{} != {}", render_expr(left), render_expr(right))
        }
        Expr::Access {
            target,
            member,
            type_args,
        } => {
            if type_args.is_empty() {
                format!("{}.{}", render_expr(target), member)
            } else {
                format!("{}.{}<{}>", render_expr(target), member, type_args.join(", "))
            }
        }
        Expr::Invoke { callee, args } => {
            format!("{}({})", render_expr(callee), render_args(args))
        }
        Expr::New { type_name, args } => {
            format!("new {}({})", type_name, render_args(args))
        }
    }
}

fn render_args(args: &[Arg]) -> String {
    args.iter()
        .map(|arg| format!("{}{}", mode_prefix(arg.mode), render_expr(&arg.expr)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_params(params: &[ParamDecl]) -> String {
    params
        .iter()
        .map(|p| format!("{}{} {}", mode_prefix(p.mode), p.param_type, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_type_params(type_params: &[String]) -> String {
    if type_params.is_empty() {
        String::new()
    } else {
        format!("<{}>", type_params.join(", "))
    }
}

fn mode_prefix(mode: PassingMode) -> &'static str {
    match mode {
        PassingMode::Value => "",
        PassingMode::Reference => "ref ",
        PassingMode::Output => "out ",
    }
}

fn accessibility_keyword(accessibility: Accessibility) -> &'static str {
    match accessibility {
        Accessibility::Public => "public",
        Accessibility::Internal => "internal",
        Accessibility::Protected => "protected",
        Accessibility::Private => "private",
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
