use crate::types::TypeDef;

/* The symbol-model port. Anything able to answer fully-qualified-name
   lookups over the descriptor graph satisfies the generator's needs; the
   core never depends on how the symbols were obtained. */
pub trait SymbolSource {
    /* Look up a type descriptor by its fully-qualified name */
    fn lookup(&self, fully_qualified: &str) -> Option<&TypeDef>;

    /* Whether the named type belongs to the generation's own source set.
       Types outside it (unknown, or loaded with `external: true`) are
       rendered with the extern disambiguation prefix. */
    fn is_source_defined(&self, fully_qualified: &str) -> bool {
        self.lookup(fully_qualified)
            .map(|t| !t.external)
            .unwrap_or(false)
    }
}

/* An empty symbol source, useful for tests and for mangling names that
   never resolve against a loaded model */
pub struct EmptySymbols;

impl SymbolSource for EmptySymbols {
    fn lookup(&self, _fully_qualified: &str) -> Option<&TypeDef> {
        None
    }
}
