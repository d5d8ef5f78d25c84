use indexmap::IndexMap;
use proxy_types::{Accessibility, MemberDef, MemberKind, PassingMode, SymbolSource, TypeDef};
use std::collections::{HashSet, VecDeque};

/* A logical property, grouped back from its selected accessors.
   Indices point into the selected member list. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyGroup {
    pub name: String,
    pub getter: Option<usize>,
    pub setter: Option<usize>,
}

/* Classification result over the selected member list */
#[derive(Debug, Clone)]
pub struct Classified {
    /* Ordinary methods with value-mode parameters only */
    pub normal: Vec<usize>,

    /* Ordinary methods with at least one reference/output parameter */
    pub delegate_backed: Vec<usize>,

    /* Properties with a non-empty surviving accessor set, in first
       appearance order */
    pub properties: Vec<PropertyGroup>,

    /* Parallel to the selected list: true when the member concretely
       implements an interface member. All false when suppression is
       disabled. Consulted by interface generation only. */
    pub suppressed: Vec<bool>,
}

pub fn is_delegate_backed(member: &MemberDef) -> bool {
    member.kind == MemberKind::Ordinary
        && member.params.iter().any(|p| p.mode != PassingMode::Value)
}

/* Partition the selected members. Classification never fails: an empty
   selection yields an empty result. */
pub fn classify(
    type_def: &TypeDef,
    selected: &[&MemberDef],
    symbols: &dyn SymbolSource,
    suppress_interface_implemented: bool,
) -> Classified {
    let mut normal = Vec::new();
    let mut delegate_backed = Vec::new();
    let mut groups: IndexMap<String, PropertyGroup> = IndexMap::new();

    for (idx, member) in selected.iter().enumerate() {
        match member.kind {
            MemberKind::Ordinary => {
                if is_delegate_backed(member) {
                    delegate_backed.push(idx);
                } else {
                    normal.push(idx);
                }
            }
            MemberKind::PropertyGet | MemberKind::PropertySet => {
                let name = member
                    .property_name()
                    .unwrap_or_else(|| member.simple_name())
                    .to_string();
                let group = groups.entry(name.clone()).or_insert(PropertyGroup {
                    name,
                    getter: None,
                    setter: None,
                });
                if member.kind == MemberKind::PropertyGet {
                    group.getter = Some(idx);
                } else {
                    group.setter = Some(idx);
                }
            }
            MemberKind::Constructor | MemberKind::Operator => {}
        }
    }

    let suppressed = if suppress_interface_implemented {
        selected
            .iter()
            .map(|m| implements_interface_member(type_def, m, symbols))
            .collect()
    } else {
        vec![false; selected.len()]
    };

    Classified {
        normal,
        delegate_backed,
        properties: groups.into_values().collect(),
        suppressed,
    }
}

/* True when this member is the type's concrete implementation of some
   member of some interface the type declares */
pub fn implements_interface_member(
    type_def: &TypeDef,
    member: &MemberDef,
    symbols: &dyn SymbolSource,
) -> bool {
    for iface_name in collect_interfaces(type_def, symbols) {
        let Some(iface) = symbols.lookup(&iface_name) else {
            continue;
        };
        for iface_member in &iface.members {
            if let Some(found) = find_implementation(type_def, &iface_name, iface_member) {
                if std::ptr::eq(found, member) {
                    return true;
                }
            }
        }
    }

    false
}

/* The type's declared interfaces, expanded transitively through each
   interface's own implements chain */
pub fn collect_interfaces(type_def: &TypeDef, symbols: &dyn SymbolSource) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut pending: VecDeque<String> = type_def.implements.iter().cloned().collect();

    while let Some(name) = pending.pop_front() {
        if !seen.insert(name.clone()) {
            continue;
        }
        if let Some(def) = symbols.lookup(&name) {
            pending.extend(def.implements.iter().cloned());
        }
        out.push(name);
    }

    out
}

/* Interface-dispatch lookup: an explicit implementation wins, otherwise
   an implicit public member matching by name, kind, and signature */
fn find_implementation<'a>(
    type_def: &'a TypeDef,
    iface_name: &str,
    iface_member: &MemberDef,
) -> Option<&'a MemberDef> {
    type_def
        .members
        .iter()
        .find(|m| {
            m.explicit_interface.as_deref() == Some(iface_name)
                && m.simple_name() == iface_member.simple_name()
                && signatures_match(m, iface_member)
        })
        .or_else(|| {
            type_def.members.iter().find(|m| {
                m.explicit_interface.is_none()
                    && m.accessibility == Accessibility::Public
                    && m.kind == iface_member.kind
                    && m.name == iface_member.name
                    && signatures_match(m, iface_member)
            })
        })
}

fn signatures_match(a: &MemberDef, b: &MemberDef) -> bool {
    a.params.len() == b.params.len()
        && a.return_type == b.return_type
        && a.params
            .iter()
            .zip(&b.params)
            .all(|(x, y)| x.mode == y.mode && x.param_type == y.param_type)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
