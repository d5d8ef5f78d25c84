//! Lua-binding proxy generator
//!
//! Inspects a type's public surface (delivered as a symbol model) and
//! emits a companion proxy class whose members forward to named,
//! lazily-bound Lua callables, plus optional generated interfaces
//! mirroring a type's selected surface.

pub mod cmds;
pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
