use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Default for Accessibility {
    fn default() -> Self {
        Accessibility::Public
    }
}

/* How a parameter is passed at the call site */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum PassingMode {
    Value,
    Reference,
    Output,
}

impl Default for PassingMode {
    fn default() -> Self {
        PassingMode::Value
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Ordinary,
    PropertyGet,
    PropertySet,
    Constructor,
    Operator,
}

/* An attribute applied to a member, identified by name and namespace.
   Attribute identity is textual: the marker attributes this tool honors
   may be declared in generated or host code, so they are never matched
   by type identity. */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AttributeTag {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct NamedRef {
    pub name: String,
    /* Generic parameter names of the referenced definition, e.g. ["T"]
       for List<T>. Empty for non-generic types. */
    #[serde(default)]
    pub type_params: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ArrayRef {
    pub element: Box<TypeRef>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TypeParamRef {
    pub name: String,
}

/* A reference to a type as it appears in a signature */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum TypeRef {
    Named(NamedRef),
    Array(ArrayRef),
    TypeParam(TypeParamRef),
}

impl TypeRef {
    pub fn named(name: &str) -> Self {
        TypeRef::Named(NamedRef {
            name: name.to_string(),
            type_params: Vec::new(),
        })
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array(ArrayRef {
            element: Box::new(element),
        })
    }

    pub fn type_param(name: &str) -> Self {
        TypeRef::TypeParam(TypeParamRef {
            name: name.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ParamDef {
    pub name: String,
    #[serde(default)]
    pub mode: PassingMode,
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub param_type: TypeRef,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MemberDef {
    /* Raw declared name. Explicit interface implementations carry the
       dotted form, e.g. "Game.IWeapon.Fire". Property accessors use the
       accessor form, e.g. "get_Name". */
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    /* None means void */
    #[serde(default)]
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeTag>,
    /* Fully-qualified name of the interface whose member this method
       explicitly implements, when declared explicitly */
    #[serde(default)]
    pub explicit_interface: Option<String>,
    /* Associated property identity for accessor members */
    #[serde(default)]
    pub property: Option<String>,
}

impl MemberDef {
    pub fn is_accessor(&self) -> bool {
        matches!(self.kind, MemberKind::PropertyGet | MemberKind::PropertySet)
    }

    /* Declared name with any explicit-interface qualification stripped */
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /* Associated property identity: the explicit `property` field, or the
       accessor name with its get_/set_ prefix stripped */
    pub fn property_name(&self) -> Option<&str> {
        if !self.is_accessor() {
            return None;
        }
        if let Some(p) = &self.property {
            return Some(p.as_str());
        }
        let simple = self.simple_name();
        simple
            .strip_prefix("get_")
            .or_else(|| simple.strip_prefix("set_"))
            .or(Some(simple))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TypeDef {
    /* Fully-qualified name, e.g. "Game.Combat.CombatSystem" */
    pub name: String,
    /* Dotted namespace chain. Derived from `name` (everything before the
       last dot) when absent; nested types must set it explicitly. */
    #[serde(default)]
    pub namespace: Option<String>,
    /* Fully-qualified name of the enclosing type, for nested types */
    #[serde(default)]
    pub containing_type: Option<String>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub type_params: Vec<String>,
    /* Fully-qualified names of the interfaces this type declares */
    #[serde(default)]
    pub implements: Vec<String>,
    /* True for types that live outside the generation's own source set
       (runtime and BCL types described only for reference) */
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

impl TypeDef {
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /* Dotted namespace chain, None when the type lives in the global
       namespace */
    pub fn containing_namespace(&self) -> Option<String> {
        match &self.namespace {
            Some(ns) if ns.is_empty() => None,
            Some(ns) => Some(ns.clone()),
            None => self.name.rfind('.').map(|i| self.name[..i].to_string()),
        }
    }

    /* Number of declared members sharing a raw name, selected or not.
       Overload disambiguation keys off this count. */
    pub fn members_named(&self, raw_name: &str) -> usize {
        self.members.iter().filter(|m| m.name == raw_name).count()
    }
}
