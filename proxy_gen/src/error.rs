use thiserror::Error;

/* Failures that abort the whole run before any item is processed */
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("prerequisite type '{0}' not found in the symbol model")]
    MissingPrerequisite(String),
}

/* Per-item failures: the item is reported and skipped, sibling items
   continue */
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("type '{0}' not found in the symbol model")]
    TypeNotFound(String),

    #[error("mangled name '{name}' is produced by both '{first}' and '{second}'")]
    ManglingCollision {
        name: String,
        first: String,
        second: String,
    },
}
