use super::decl::{
    CompilationUnit, Declaration, InterfaceDecl, InterfaceMember, MethodSig, ParamDecl,
    PropertySig,
};
use super::helpers::{property_type, return_type_text, type_text};
use crate::model::GenerationContext;

/* Build a generated interface mirroring the type's selected surface.
   Interfaces declare shape only: no delegate-backed members, no
   lifecycle members, no slot fields. Suppressed members (those already
   satisfying an interface the source type declares) are omitted. */
pub fn emit_interface(ctx: &GenerationContext) -> CompilationUnit {
    let mut members = Vec::new();

    for group in &ctx.properties {
        let has_getter = group.getter.map(|i| !ctx.suppressed[i]).unwrap_or(false);
        let has_setter = group.setter.map(|i| !ctx.suppressed[i]).unwrap_or(false);

        if !has_getter && !has_setter {
            continue;
        }

        members.push(InterfaceMember::Property(PropertySig {
            name: group.name.clone(),
            prop_type: property_type(
                group.getter.map(|i| ctx.members[i]),
                group.setter.map(|i| ctx.members[i]),
            ),
            has_getter,
            has_setter,
        }));
    }

    for &idx in &ctx.normal {
        if ctx.suppressed[idx] {
            continue;
        }

        let member = ctx.members[idx];
        members.push(InterfaceMember::Method(MethodSig {
            name: member.simple_name().to_string(),
            type_params: member.type_params.clone(),
            params: member
                .params
                .iter()
                .map(|p| ParamDecl {
                    name: p.name.clone(),
                    param_type: type_text(&p.param_type),
                    mode: p.mode,
                })
                .collect(),
            return_type: return_type_text(&member.return_type),
        }));
    }

    CompilationUnit {
        usings: vec!["System".to_string()],
        namespace: ctx.type_def.containing_namespace(),
        declaration: Declaration::Interface(InterfaceDecl {
            name: ctx.target_name.clone(),
            accessibility: ctx.type_def.accessibility,
            members,
        }),
    }
}
