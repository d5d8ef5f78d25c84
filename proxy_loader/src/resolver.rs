use proxy_types::TypeDef;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::file::SymbolFile;

/* Import resolver for loading and merging symbol files */
pub struct ImportResolver {
    /* Track loaded files to detect circular imports */
    loaded_files: HashSet<PathBuf>,

    /* Include directories for searching imports */
    include_dirs: Vec<PathBuf>,

    /* All collected type definitions, in load order */
    all_types: Vec<TypeDef>,

    /* Package labels of the loaded files */
    packages: Vec<String>,
}

impl ImportResolver {
    /* Create a new import resolver with the given include directories */
    pub fn new(include_dirs: Vec<PathBuf>) -> Self {
        Self {
            loaded_files: HashSet::new(),
            include_dirs,
            all_types: Vec::new(),
            packages: Vec::new(),
        }
    }

    /* Resolve an import path relative to a base file or include directories */
    fn resolve_import_path(&self, import_path: &str, base_file: &Path) -> anyhow::Result<PathBuf> {
        /* First try relative to the base file's directory */
        if let Some(parent) = base_file.parent() {
            let relative_path = parent.join(import_path);
            if relative_path.exists() {
                return Ok(relative_path.canonicalize()?);
            }
        }

        /* Then try each include directory */
        for include_dir in &self.include_dirs {
            let include_path = include_dir.join(import_path);
            if include_path.exists() {
                return Ok(include_path.canonicalize()?);
            }
        }

        anyhow::bail!(
            "Import '{}' not found relative to '{}' or in include directories",
            import_path,
            base_file.display()
        )
    }

    /* Load a symbol file and recursively load its imports */
    pub fn load_file_with_imports(
        &mut self,
        file_path: &Path,
        verbose: bool,
    ) -> anyhow::Result<()> {
        /* Canonicalize the path to detect duplicates */
        let canonical_path = file_path.canonicalize()?;

        /* Skip if already loaded */
        if self.loaded_files.contains(&canonical_path) {
            if verbose {
                println!(
                    "    [~] Skipping already loaded file: {}",
                    file_path.display()
                );
            }
            return Ok(());
        }

        /* Mark as loaded before processing imports to detect circular
           dependencies */
        self.loaded_files.insert(canonical_path.clone());

        if verbose {
            println!("[~] Loading symbol file: {}", file_path.display());
        }

        let contents = std::fs::read_to_string(file_path)?;
        let symbol_file = SymbolFile::from_str(&contents)?;

        if verbose {
            println!("    Package: {}", symbol_file.package());
            println!("    Types: {}", symbol_file.types.len());
            if !symbol_file.imports.is_empty() {
                println!("    Imports: {}", symbol_file.imports.len());
            }
        }

        /* Recursively load imports */
        for import in &symbol_file.imports {
            if verbose {
                println!("    [~] Resolving import: {}", import.path);
            }

            let import_path = self.resolve_import_path(&import.path, file_path)?;
            self.load_file_with_imports(&import_path, verbose)?;
        }

        self.packages.push(symbol_file.package().to_string());
        self.all_types.extend(symbol_file.types);

        Ok(())
    }

    pub fn loaded_file_count(&self) -> usize {
        self.loaded_files.len()
    }

    pub fn get_packages(&self) -> &[String] {
        &self.packages
    }

    pub fn get_all_types(&self) -> &[TypeDef] {
        &self.all_types
    }

    pub fn into_types(self) -> Vec<TypeDef> {
        self.all_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "game.yml",
            "package: game\ntypes:\n  - name: Game.Sample\n",
        );

        let mut resolver = ImportResolver::new(Vec::new());
        resolver.load_file_with_imports(&path, false).unwrap();

        assert_eq!(resolver.loaded_file_count(), 1);
        assert_eq!(resolver.get_all_types().len(), 1);
        assert_eq!(resolver.get_all_types()[0].name, "Game.Sample");
    }

    #[test]
    fn test_imports_load_transitively_once() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "runtime.yml",
            "package: runtime\ntypes:\n  - name: LuaBind.LuaFunction\n    external: true\n",
        );
        write_file(
            dir.path(),
            "common.yml",
            "package: common\nimports:\n  - path: runtime.yml\ntypes:\n  - name: Game.Common\n",
        );
        let root = write_file(
            dir.path(),
            "game.yml",
            "package: game\nimports:\n  - path: common.yml\n  - path: runtime.yml\ntypes:\n  - name: Game.Sample\n",
        );

        let mut resolver = ImportResolver::new(Vec::new());
        resolver.load_file_with_imports(&root, false).unwrap();

        assert_eq!(resolver.loaded_file_count(), 3);
        /* runtime.yml imported twice but loaded once */
        let names: Vec<_> = resolver.get_all_types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["LuaBind.LuaFunction", "Game.Common", "Game.Sample"]
        );
    }

    #[test]
    fn test_circular_imports_do_not_loop() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "a.yml",
            "package: a\nimports:\n  - path: b.yml\ntypes:\n  - name: A.TypeA\n",
        );
        write_file(
            dir.path(),
            "b.yml",
            "package: b\nimports:\n  - path: a.yml\ntypes:\n  - name: B.TypeB\n",
        );

        let mut resolver = ImportResolver::new(Vec::new());
        resolver
            .load_file_with_imports(&dir.path().join("a.yml"), false)
            .unwrap();

        assert_eq!(resolver.loaded_file_count(), 2);
        assert_eq!(resolver.get_all_types().len(), 2);
    }

    #[test]
    fn test_include_dir_search() {
        let dir = tempfile::tempdir().unwrap();
        let inc = tempfile::tempdir().unwrap();
        write_file(
            inc.path(),
            "shared.yml",
            "package: shared\ntypes:\n  - name: Shared.Thing\n",
        );
        let root = write_file(
            dir.path(),
            "game.yml",
            "package: game\nimports:\n  - path: shared.yml\ntypes: []\n",
        );

        let mut resolver = ImportResolver::new(vec![inc.path().to_path_buf()]);
        resolver.load_file_with_imports(&root, false).unwrap();

        assert_eq!(resolver.get_all_types().len(), 1);
    }

    #[test]
    fn test_missing_import_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = write_file(
            dir.path(),
            "game.yml",
            "package: game\nimports:\n  - path: nope.yml\ntypes: []\n",
        );

        let mut resolver = ImportResolver::new(Vec::new());
        let err = resolver
            .load_file_with_imports(&root, false)
            .unwrap_err()
            .to_string();
        assert!(err.contains("nope.yml"));
    }
}
