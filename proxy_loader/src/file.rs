use proxy_types::TypeDef;
use serde_derive::{Deserialize, Serialize};

/* A path import referencing another symbol file */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ImportSpec {
    /* Relative or absolute path to the imported symbol file */
    pub path: String,
}

/* One symbol file: a package of type descriptors plus its imports */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SymbolFile {
    /* Package label, informational only */
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default)]
    pub imports: Vec<ImportSpec>,

    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl SymbolFile {
    pub fn from_str(contents: &str) -> anyhow::Result<Self> {
        let file: SymbolFile = serde_yml::from_str(contents)?;
        Ok(file)
    }

    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or("<unnamed>")
    }
}
