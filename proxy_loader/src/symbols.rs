use proxy_types::{SymbolSource, TypeDef};
use std::collections::HashMap;

/* The loaded symbol model: fully-qualified name -> type descriptor.
   Read-only once built; shared by every generation item of a run. */
pub struct SymbolTable {
    types: HashMap<String, TypeDef>,
}

impl SymbolTable {
    /* Build a table from collected typedefs. Duplicate fully-qualified
       names are a configuration error, never a silent overwrite. */
    pub fn from_typedefs(typedefs: Vec<TypeDef>) -> anyhow::Result<Self> {
        let mut types = HashMap::with_capacity(typedefs.len());

        for typedef in typedefs {
            let name = typedef.name.clone();
            if types.insert(name.clone(), typedef).is_some() {
                anyhow::bail!("Type '{}' is defined more than once in the symbol model", name);
            }
        }

        Ok(Self { types })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, fully_qualified: &str) -> bool {
        self.types.contains_key(fully_qualified)
    }
}

impl SymbolSource for SymbolTable {
    fn lookup(&self, fully_qualified: &str) -> Option<&TypeDef> {
        self.types.get(fully_qualified)
    }
}
