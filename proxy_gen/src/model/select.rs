use proxy_types::{Accessibility, MemberDef, MemberKind, TypeDef};

/* The ignore marker is recognized by name and namespace, never by type
   identity: the attribute type may live in generated or host code. */
pub const IGNORE_ATTRIBUTE_NAME: &str = "IgnoreAttribute";
pub const IGNORE_ATTRIBUTE_NAMESPACE: &str = "LuaBind";

/* Select the members of a type that participate in generation, in
   declared order. Declared order is load-bearing: it fixes emitted member
   order and mangled-name tie-breaking. */
pub fn select_members(type_def: &TypeDef) -> Vec<&MemberDef> {
    type_def.members.iter().filter(|m| is_eligible(m)).collect()
}

fn is_eligible(member: &MemberDef) -> bool {
    if member.accessibility != Accessibility::Public {
        return false;
    }

    match member.kind {
        MemberKind::Ordinary | MemberKind::PropertyGet | MemberKind::PropertySet => {}
        MemberKind::Constructor | MemberKind::Operator => return false,
    }

    !member.attributes.iter().any(|attr| {
        attr.name == IGNORE_ATTRIBUTE_NAME && attr.namespace == IGNORE_ATTRIBUTE_NAMESPACE
    })
}
