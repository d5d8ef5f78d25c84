pub mod classify;
pub mod context;
pub mod mangle;
pub mod select;

/* Re-export main public types */
pub use classify::{Classified, PropertyGroup, classify, is_delegate_backed};
pub use context::GenerationContext;
pub use mangle::NameMangler;
pub use select::select_members;
