use proxy_types::Accessibility;

use super::decl::{
    Arg, ClassDecl, ClassMember, CompilationUnit, CtorDecl, Declaration, DelegateDecl, Expr,
    FieldDecl, MethodDecl, ParamDecl, PropertyDecl, Stmt,
};
use super::helpers::{callable_type_args, property_type, return_type_text, type_text};
use super::{
    ADAPTER_FIELD, ADAPTER_TYPE, DELEGATE_ATTRIBUTE, EXCEPTION_TYPE, IGNORE_ATTRIBUTE,
    LUA_FUNCTION, LUA_TABLE, MARKER_INTERFACE, RUNTIME_NAMESPACE,
};
use crate::model::GenerationContext;
use crate::model::classify::PropertyGroup;

/* Build the proxy class declaration for one generation item. Member
   order: adapter field, constructor, adapter accessor, delegate types,
   delegate forwarding methods, property wrappers, normal forwarding
   methods, lifecycle methods, class-name method, private slot fields. */
pub fn emit_proxy_class(ctx: &GenerationContext) -> CompilationUnit {
    let mut members = Vec::new();

    members.push(ClassMember::Field(FieldDecl {
        name: ADAPTER_FIELD.to_string(),
        field_type: ADAPTER_TYPE.to_string(),
        accessibility: Accessibility::Private,
    }));
    members.push(ClassMember::Constructor(emit_constructor(ctx)));
    members.push(ClassMember::Method(emit_adapter_accessor()));

    for &idx in &ctx.delegate_backed {
        members.push(ClassMember::Delegate(emit_delegate_decl(ctx, idx)));
    }
    for &idx in &ctx.delegate_backed {
        members.push(ClassMember::Method(emit_forward_method(ctx, idx, true)));
    }

    for group in &ctx.properties {
        members.push(ClassMember::Property(emit_property(ctx, group)));
    }

    for &idx in &ctx.normal {
        members.push(ClassMember::Method(emit_forward_method(ctx, idx, false)));
    }

    members.push(ClassMember::Method(emit_init(ctx)));
    members.push(ClassMember::Method(emit_uninit(ctx)));
    members.push(ClassMember::Method(emit_class_name_method(ctx)));

    emit_slot_fields(ctx, &mut members);

    /* The proxy re-declares every interface of the source type, plus the
       marker interface that excludes it from automatic processing */
    let mut implements = vec![MARKER_INTERFACE.to_string()];
    implements.extend(
        ctx.type_def
            .implements
            .iter()
            .map(|name| name.rsplit('.').next().unwrap_or(name).to_string()),
    );

    CompilationUnit {
        usings: vec!["System".to_string(), RUNTIME_NAMESPACE.to_string()],
        namespace: ctx.type_def.containing_namespace(),
        declaration: Declaration::Class(ClassDecl {
            name: ctx.target_name.clone(),
            accessibility: ctx.type_def.accessibility,
            attributes: vec![IGNORE_ATTRIBUTE.to_string()],
            implements,
            members,
        }),
    }
}

/* mLuaProxyAdapter.GetLuaTableSelf() */
fn adapter_self() -> Expr {
    Expr::invoke(
        Expr::access(Expr::ident(ADAPTER_FIELD), "GetLuaTableSelf"),
        Vec::new(),
    )
}

fn emit_constructor(ctx: &GenerationContext) -> CtorDecl {
    CtorDecl {
        name: ctx.target_name.clone(),
        accessibility: Accessibility::Public,
        params: Vec::new(),
        body: vec![Stmt::Assign {
            target: Expr::ident(ADAPTER_FIELD),
            value: Expr::New {
                type_name: ADAPTER_TYPE.to_string(),
                args: vec![Arg::plain(Expr::This)],
            },
        }],
    }
}

fn emit_adapter_accessor() -> MethodDecl {
    MethodDecl {
        name: "GetLuaProxyAdapter".to_string(),
        accessibility: Some(Accessibility::Public),
        type_params: Vec::new(),
        params: Vec::new(),
        return_type: Some(ADAPTER_TYPE.to_string()),
        body: vec![Stmt::Return(Some(Expr::ident(ADAPTER_FIELD)))],
    }
}

fn emit_delegate_decl(ctx: &GenerationContext, idx: usize) -> DelegateDecl {
    let member = ctx.members[idx];

    DelegateDecl {
        name: ctx.delegate_type_name(idx),
        accessibility: member.accessibility,
        attributes: vec![DELEGATE_ATTRIBUTE.to_string()],
        type_params: member.type_params.clone(),
        params: member.params.iter().map(param_decl).collect(),
        return_type: return_type_text(&member.return_type),
    }
}

fn emit_forward_method(ctx: &GenerationContext, idx: usize, delegate_call: bool) -> MethodDecl {
    let member = ctx.members[idx];

    MethodDecl {
        /* Raw declared name: overloads keep the same source name, and
           explicit interface implementations keep their dotted form */
        name: member.name.clone(),
        accessibility: if member.explicit_interface.is_some() {
            None
        } else {
            Some(member.accessibility)
        },
        type_params: member.type_params.clone(),
        params: member.params.iter().map(param_decl).collect(),
        return_type: return_type_text(&member.return_type),
        body: vec![guarded_forward(ctx, idx, delegate_call)],
    }
}

fn emit_property(ctx: &GenerationContext, group: &PropertyGroup) -> PropertyDecl {
    let getter = group.getter.map(|i| ctx.members[i]);
    let setter = group.setter.map(|i| ctx.members[i]);
    let accessibility = getter
        .or(setter)
        .map(|m| m.accessibility)
        .unwrap_or(Accessibility::Public);

    PropertyDecl {
        name: group.name.clone(),
        prop_type: property_type(getter, setter),
        accessibility,
        getter: group.getter.map(|i| vec![guarded_forward(ctx, i, false)]),
        setter: group.setter.map(|i| vec![guarded_forward(ctx, i, false)]),
    }
}

/* The null-guarded forwarding body shared by methods and accessors.
   Normal members go through the generic callable invocation with the
   implicit script-handle argument; delegate-backed members invoke the
   bound delegate directly so reference/output parameters pass through
   unchanged. */
fn guarded_forward(ctx: &GenerationContext, idx: usize, delegate_call: bool) -> Stmt {
    let member = ctx.members[idx];
    let slot = ctx.slot(idx);

    let invocation = if delegate_call {
        Expr::invoke(
            Expr::ident(slot),
            member
                .params
                .iter()
                .map(|p| Arg {
                    mode: p.mode,
                    expr: Expr::ident(&p.name),
                })
                .collect(),
        )
    } else {
        let call_name = if member.return_type.is_some() {
            "Func"
        } else {
            "Action"
        };
        let mut args = vec![Arg::plain(adapter_self())];
        args.extend(
            member
                .params
                .iter()
                .map(|p| Arg::plain(Expr::ident(&p.name))),
        );
        Expr::invoke(
            Expr::access_generic(
                Expr::ident(slot),
                call_name,
                callable_type_args(member, LUA_TABLE),
            ),
            args,
        )
    };

    let then_branch = if member.return_type.is_some() {
        vec![Stmt::Return(Some(invocation))]
    } else {
        vec![Stmt::Expr(invocation)]
    };

    let else_branch = vec![Stmt::Throw(Expr::New {
        type_name: EXCEPTION_TYPE.to_string(),
        args: vec![Arg::plain(Expr::StringLit(format!("{} NULL", slot)))],
    })];

    Stmt::If {
        condition: Expr::not_null(Expr::ident(slot)),
        then_branch,
        else_branch,
    }
}

fn emit_init(ctx: &GenerationContext) -> MethodDecl {
    let mut body = Vec::new();

    for idx in ctx.callable_members() {
        body.push(Stmt::Assign {
            target: Expr::ident(ctx.slot(idx)),
            value: Expr::invoke(
                Expr::access_generic(adapter_self(), "GetInPath", vec![LUA_FUNCTION.to_string()]),
                vec![Arg::plain(Expr::StringLit(ctx.mangled(idx).to_string()))],
            ),
        });
    }

    for &idx in &ctx.delegate_backed {
        body.push(Stmt::Assign {
            target: Expr::ident(ctx.slot(idx)),
            value: Expr::invoke(
                Expr::access_generic(adapter_self(), "Get", vec![ctx.delegate_type_name(idx)]),
                vec![Arg::plain(Expr::StringLit(ctx.mangled(idx).to_string()))],
            ),
        });
    }

    MethodDecl {
        name: "InitLuaFunctions".to_string(),
        accessibility: Some(Accessibility::Public),
        type_params: Vec::new(),
        params: Vec::new(),
        return_type: None,
        body,
    }
}

/* Releasing an already-null slot is a no-op, never an error */
fn emit_uninit(ctx: &GenerationContext) -> MethodDecl {
    let mut body = Vec::new();

    for idx in ctx.callable_members() {
        let slot = ctx.slot(idx);
        body.push(Stmt::If {
            condition: Expr::not_null(Expr::ident(slot)),
            then_branch: vec![Stmt::Expr(Expr::invoke(
                Expr::access(Expr::ident(slot), "Dispose"),
                Vec::new(),
            ))],
            else_branch: Vec::new(),
        });
    }

    MethodDecl {
        name: "UninitLuaFunctions".to_string(),
        accessibility: Some(Accessibility::Public),
        type_params: Vec::new(),
        params: Vec::new(),
        return_type: None,
        body,
    }
}

fn emit_class_name_method(ctx: &GenerationContext) -> MethodDecl {
    MethodDecl {
        name: "GetLuaClassName".to_string(),
        accessibility: Some(Accessibility::Public),
        type_params: Vec::new(),
        params: Vec::new(),
        return_type: Some("string".to_string()),
        body: vec![Stmt::Return(Some(Expr::StringLit(
            ctx.type_def.name.clone(),
        )))],
    }
}

fn emit_slot_fields(ctx: &GenerationContext, members: &mut Vec<ClassMember>) {
    for idx in ctx.callable_members() {
        members.push(ClassMember::Field(FieldDecl {
            name: ctx.slot(idx).to_string(),
            field_type: LUA_FUNCTION.to_string(),
            accessibility: Accessibility::Private,
        }));
    }

    for &idx in &ctx.delegate_backed {
        members.push(ClassMember::Field(FieldDecl {
            name: ctx.slot(idx).to_string(),
            field_type: ctx.delegate_type_name(idx),
            accessibility: Accessibility::Private,
        }));
    }
}

fn param_decl(param: &proxy_types::ParamDef) -> ParamDecl {
    ParamDecl {
        name: param.name.clone(),
        param_type: type_text(&param.param_type),
        mode: param.mode,
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod proxy_tests;
