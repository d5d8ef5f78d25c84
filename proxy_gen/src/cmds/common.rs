/* Shared setup for the codegen and analyze commands */

use proxy_loader::{ImportResolver, SymbolTable};

use crate::codegen::{ADAPTER_FQN, EXCEPTION_FQN, LUA_FUNCTION_FQN, LUA_TABLE_FQN};
use crate::config::GenConfig;
use crate::error::SetupError;

/* Every emission depends on these types; a missing one aborts the run
   before any item is processed */
pub const PREREQUISITE_TYPES: [&str; 4] = [
    LUA_TABLE_FQN,
    LUA_FUNCTION_FQN,
    ADAPTER_FQN,
    EXCEPTION_FQN,
];

/* Load every configured symbol file (with transitive imports) and build
   the run's symbol table */
pub fn load_symbols(config: &GenConfig, verbose: bool) -> anyhow::Result<SymbolTable> {
    let mut resolver = ImportResolver::new(config.include_dirs.clone());

    for file in &config.symbol_files {
        resolver.load_file_with_imports(file, verbose)?;
    }

    if verbose {
        println!(
            "[~] Loaded {} file(s) total (including imports)",
            resolver.loaded_file_count()
        );
        println!("[~] Packages loaded:");
        for package in resolver.get_packages() {
            println!("    - {}", package);
        }
    }

    SymbolTable::from_typedefs(resolver.into_types())
}

pub fn check_prerequisites(symbols: &SymbolTable) -> Result<(), SetupError> {
    for name in PREREQUISITE_TYPES {
        if !symbols.contains(name) {
            return Err(SetupError::MissingPrerequisite(name.to_string()));
        }
    }

    Ok(())
}
