use proxy_types::{Accessibility, PassingMode};

/* Language-agnostic declaration tree. Emitters build these nodes; a
   renderer turns them into concrete source text. Type names inside the
   tree are already rendered strings. */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub usings: Vec<String>,
    /* Full dotted namespace, None for the global namespace */
    pub namespace: Option<String>,
    pub declaration: Declaration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(ClassDecl),
    Interface(InterfaceDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub accessibility: Accessibility,
    pub attributes: Vec<String>,
    pub implements: Vec<String>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Field(FieldDecl),
    Constructor(CtorDecl),
    Method(MethodDecl),
    Property(PropertyDecl),
    Delegate(DelegateDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub field_type: String,
    pub accessibility: Accessibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtorDecl {
    pub name: String,
    pub accessibility: Accessibility,
    pub params: Vec<ParamDecl>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /* None renders without an access modifier (explicit interface
       implementations) */
    pub accessibility: Option<Accessibility>,
    pub type_params: Vec<String>,
    pub params: Vec<ParamDecl>,
    /* None means void */
    pub return_type: Option<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub prop_type: String,
    pub accessibility: Accessibility,
    pub getter: Option<Vec<Stmt>>,
    pub setter: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateDecl {
    pub name: String,
    pub accessibility: Accessibility,
    pub attributes: Vec<String>,
    pub type_params: Vec<String>,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub accessibility: Accessibility,
    pub members: Vec<InterfaceMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceMember {
    Method(MethodSig),
    Property(PropertySig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    pub name: String,
    pub type_params: Vec<String>,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySig {
    pub name: String,
    pub prop_type: String,
    pub has_getter: bool,
    pub has_setter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub param_type: String,
    pub mode: PassingMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    Assign {
        target: Expr,
        value: Expr,
    },
    Return(Option<Expr>),
    Expr(Expr),
    Throw(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    StringLit(String),
    Null,
    This,
    NotEquals(Box<Expr>, Box<Expr>),
    /* target.member, optionally with generic arguments */
    Access {
        target: Box<Expr>,
        member: String,
        type_args: Vec<String>,
    },
    Invoke {
        callee: Box<Expr>,
        args: Vec<Arg>,
    },
    New {
        type_name: String,
        args: Vec<Arg>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub mode: PassingMode,
    pub expr: Expr,
}

impl Expr {
    pub fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    pub fn access(target: Expr, member: &str) -> Expr {
        Expr::Access {
            target: Box::new(target),
            member: member.to_string(),
            type_args: Vec::new(),
        }
    }

    pub fn access_generic(target: Expr, member: &str, type_args: Vec<String>) -> Expr {
        Expr::Access {
            target: Box::new(target),
            member: member.to_string(),
            type_args,
        }
    }

    pub fn invoke(callee: Expr, args: Vec<Arg>) -> Expr {
        Expr::Invoke {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn not_null(expr: Expr) -> Expr {
        Expr::NotEquals(Box::new(expr), Box::new(Expr::Null))
    }
}

impl Arg {
    pub fn plain(expr: Expr) -> Arg {
        Arg {
            mode: PassingMode::Value,
            expr,
        }
    }
}
