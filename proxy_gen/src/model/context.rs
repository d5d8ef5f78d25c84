use indexmap::IndexMap;
use proxy_types::{MemberDef, SymbolSource, TypeDef};
use std::path::PathBuf;

use crate::error::ItemError;
use crate::model::classify::{PropertyGroup, classify};
use crate::model::mangle::NameMangler;
use crate::model::select::select_members;

/* Per-item generation state: the selected member list bound to its
   mangled names, slot field names, and category indices. Built during
   classification, frozen before emission, consumed by exactly one
   emitter, then discarded. */
pub struct GenerationContext<'a> {
    pub target_name: String,
    pub target_dir: PathBuf,
    pub type_def: &'a TypeDef,

    /* Selected members in declared order; every other table is indexed
       against this list */
    pub members: Vec<&'a MemberDef>,

    pub normal: Vec<usize>,
    pub delegate_backed: Vec<usize>,
    pub properties: Vec<PropertyGroup>,
    pub suppressed: Vec<bool>,

    mangled: Vec<String>,
    slots: Vec<String>,
}

impl<'a> GenerationContext<'a> {
    pub fn build(
        target_name: &str,
        target_dir: PathBuf,
        type_def: &'a TypeDef,
        symbols: &'a dyn SymbolSource,
        suppress_interface_implemented: bool,
    ) -> Result<Self, ItemError> {
        let members = select_members(type_def);
        let classified = classify(type_def, &members, symbols, suppress_interface_implemented);
        let mangler = NameMangler::new(symbols);

        let mut mangled = Vec::with_capacity(members.len());
        let mut slots = Vec::with_capacity(members.len());
        let mut seen: IndexMap<String, usize> = IndexMap::with_capacity(members.len());

        for (idx, member) in members.iter().enumerate() {
            let name = mangler.member_name(type_def, member);

            /* A collision here means the symbol model is malformed; fail
               the item instead of emitting ambiguous bindings */
            if let Some(&first) = seen.get(&name) {
                return Err(ItemError::ManglingCollision {
                    name,
                    first: members[first].name.clone(),
                    second: member.name.clone(),
                });
            }

            seen.insert(name.clone(), idx);
            slots.push(format!("m_{}", name));
            mangled.push(name);
        }

        Ok(Self {
            target_name: target_name.to_string(),
            target_dir,
            type_def,
            members,
            normal: classified.normal,
            delegate_backed: classified.delegate_backed,
            properties: classified.properties,
            suppressed: classified.suppressed,
            mangled,
            slots,
        })
    }

    /* Script-side lookup key for a selected member */
    pub fn mangled(&self, idx: usize) -> &str {
        &self.mangled[idx]
    }

    /* Private callable/delegate slot field name */
    pub fn slot(&self, idx: usize) -> &str {
        &self.slots[idx]
    }

    pub fn delegate_type_name(&self, idx: usize) -> String {
        format!("Delegate_{}", self.mangled[idx])
    }

    pub fn is_delegate_backed(&self, idx: usize) -> bool {
        self.delegate_backed.contains(&idx)
    }

    /* Members bound through the generic callable path: everything
       selected except delegate-backed methods */
    pub fn callable_members(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.members.len()).filter(|i| !self.delegate_backed.contains(i))
    }
}
