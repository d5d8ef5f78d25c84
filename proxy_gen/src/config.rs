use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/* One requested output: a proxy class or a generated interface */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationItem {
    /* Fully-qualified name of the source type */
    pub type_name: String,

    /* Short name of the generated declaration, also the output file stem */
    pub target_name: String,

    #[serde(default)]
    pub target_dir: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct GenConfig {
    /* Symbol files to load; imports are resolved transitively */
    #[serde(default)]
    pub symbol_files: Vec<PathBuf>,

    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /* Omit the generated-by comment header (the only non-deterministic
       part of the output) */
    #[serde(default)]
    pub dont_generate_comment: bool,

    /* Suppress members that already satisfy an interface the source type
       declares. Applies to interface generation only. */
    #[serde(default)]
    pub suppress_interface_implemented: bool,

    #[serde(default)]
    pub proxy_classes: Vec<GenerationItem>,

    #[serde(default)]
    pub interfaces: Vec<GenerationItem>,
}

impl GenConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config '{}': {}", path.display(), e))?;
        Self::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> anyhow::Result<Self> {
        let config: GenConfig = serde_yml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_with_defaults() {
        let config = GenConfig::from_str(
            "symbol-files: [symbols/game.yml]\n\
             proxy-classes:\n\
             \x20 - type-name: Game.CombatSystem\n\
             \x20   target-name: CombatSystemProxy\n\
             \x20   target-dir: Generated\n",
        )
        .unwrap();

        assert_eq!(config.symbol_files, vec![PathBuf::from("symbols/game.yml")]);
        assert!(!config.dont_generate_comment);
        assert!(!config.suppress_interface_implemented);
        assert_eq!(config.proxy_classes.len(), 1);
        assert_eq!(config.proxy_classes[0].type_name, "Game.CombatSystem");
        assert_eq!(config.proxy_classes[0].target_dir, PathBuf::from("Generated"));
        assert!(config.interfaces.is_empty());
    }
}
