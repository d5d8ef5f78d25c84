use proxy_types::{MemberDef, PassingMode, SymbolSource, TypeDef, TypeRef};

/* Marker prefix for types defined outside the generation's own source
   set. The script-binding side matches on this exact string; it must be
   preserved bit-exactly wherever qualified names are echoed into
   generated identifiers or lookup keys. */
pub const EXTERN_PREFIX: &str = "CS.";

/* Computes canonical, overload-safe member names and qualified type
   names against a symbol source */
pub struct NameMangler<'a> {
    symbols: &'a dyn SymbolSource,
}

impl<'a> NameMangler<'a> {
    pub fn new(symbols: &'a dyn SymbolSource) -> Self {
        Self { symbols }
    }

    /* The member's script-side lookup name: the declared name verbatim
       when the containing type declares it exactly once, the mangled
       form otherwise. Explicit interface implementations always mangle;
       their raw names carry dots. */
    pub fn member_name(&self, type_def: &TypeDef, member: &MemberDef) -> String {
        if member.explicit_interface.is_none() && type_def.members_named(&member.name) == 1 {
            member.name.clone()
        } else {
            self.mangled_name(member)
        }
    }

    /* Canonical mangled form: base name, then per parameter `__`, a
       Ref_/Out_ marker for non-value modes, and the parameter's type
       name with every dot rewritten to an underscore */
    pub fn mangled_name(&self, member: &MemberDef) -> String {
        let mut out = self.base_name(member);

        for param in &member.params {
            out.push_str("__");
            match param.mode {
                PassingMode::Reference => out.push_str("Ref_"),
                PassingMode::Output => out.push_str("Out_"),
                PassingMode::Value => {}
            }
            out.push_str(&self.param_type_text(&param.param_type));
        }

        out
    }

    fn base_name(&self, member: &MemberDef) -> String {
        match &member.explicit_interface {
            Some(iface) => {
                let iface_name = self.simple_name_with_params(iface);
                format!("{}_{}", iface_name.replace('.', "_"), member.simple_name())
            }
            None => member.name.clone(),
        }
    }

    /* Simple name of a type joined with its generic parameter names by
       underscores, e.g. IRepository<T> -> IRepository_T */
    fn simple_name_with_params(&self, fully_qualified: &str) -> String {
        match self.symbols.lookup(fully_qualified) {
            Some(def) => join_with_params(def.simple_name(), &def.type_params),
            None => simple_of(fully_qualified).to_string(),
        }
    }

    fn param_type_text(&self, type_ref: &TypeRef) -> String {
        match type_ref {
            /* A generic type parameter of the enclosing construct keeps
               its own name */
            TypeRef::TypeParam(tp) => tp.name.clone(),
            TypeRef::Array(arr) => format!("Arr_{}", self.param_type_text(&arr.element)),
            TypeRef::Named(named) => self
                .qualified_type_name(&named.name, &named.type_params)
                .replace('.', "_"),
        }
    }

    /* Fully qualified, generics-aware name for a referenced type:
       namespace segments joined by dots, containing-type chain included,
       generic parameter names joined to each simple name by underscores.
       Types outside the source set get the extern prefix. */
    pub fn qualified_type_name(&self, fully_qualified: &str, ref_type_params: &[String]) -> String {
        let rendered = self.render_qualified(fully_qualified, ref_type_params);

        if self.symbols.is_source_defined(fully_qualified) {
            rendered
        } else {
            format!("{}{}", EXTERN_PREFIX, rendered)
        }
    }

    fn render_qualified(&self, fully_qualified: &str, ref_type_params: &[String]) -> String {
        let Some(def) = self.symbols.lookup(fully_qualified) else {
            /* Unknown type: derive namespace and simple name from the
               dotted reference itself */
            return match fully_qualified.rfind('.') {
                Some(i) => format!(
                    "{}.{}",
                    &fully_qualified[..i],
                    join_with_params(&fully_qualified[i + 1..], ref_type_params)
                ),
                None => join_with_params(fully_qualified, ref_type_params),
            };
        };

        let params = if ref_type_params.is_empty() {
            &def.type_params
        } else {
            ref_type_params
        };

        let mut segments = vec![join_with_params(def.simple_name(), params)];
        let mut namespace = def.containing_namespace();

        /* Walk the containing-type chain for nested types */
        let mut containing = def.containing_type.clone();
        while let Some(parent_name) = containing {
            match self.symbols.lookup(&parent_name) {
                Some(parent) => {
                    segments.insert(
                        0,
                        join_with_params(parent.simple_name(), &parent.type_params),
                    );
                    namespace = parent.containing_namespace();
                    containing = parent.containing_type.clone();
                }
                None => {
                    segments.insert(0, simple_of(&parent_name).to_string());
                    namespace = parent_name.rfind('.').map(|i| parent_name[..i].to_string());
                    containing = None;
                }
            }
        }

        match namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, segments.join(".")),
            _ => segments.join("."),
        }
    }
}

fn simple_of(fully_qualified: &str) -> &str {
    fully_qualified
        .rsplit('.')
        .next()
        .unwrap_or(fully_qualified)
}

fn join_with_params(simple: &str, params: &[String]) -> String {
    let mut out = simple.to_string();
    for param in params {
        out.push('_');
        out.push_str(param);
    }
    out
}

#[cfg(test)]
#[path = "mangle_tests.rs"]
mod mangle_tests;
