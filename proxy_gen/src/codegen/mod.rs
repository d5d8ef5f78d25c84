pub mod csharp;
pub mod decl;
pub mod helpers;
pub mod interface;
pub mod proxy;

/* Re-export main public functions */
pub use csharp::{CSharpRenderOptions, CSharpRenderer};
pub use interface::emit_interface;
pub use proxy::emit_proxy_class;

/* Well-known runtime types. The fully-qualified forms are resolved
   against the symbol model before any item is processed; the simple
   forms appear in emitted code under `using LuaBind;`. */
pub const LUA_TABLE_FQN: &str = "LuaBind.LuaTable";
pub const LUA_FUNCTION_FQN: &str = "LuaBind.LuaFunction";
pub const ADAPTER_FQN: &str = "LuaBind.LuaProxyAdapter";
pub const EXCEPTION_FQN: &str = "System.Exception";

pub const LUA_TABLE: &str = "LuaTable";
pub const LUA_FUNCTION: &str = "LuaFunction";
pub const ADAPTER_TYPE: &str = "LuaProxyAdapter";
pub const EXCEPTION_TYPE: &str = "Exception";

pub const RUNTIME_NAMESPACE: &str = "LuaBind";
pub const ADAPTER_FIELD: &str = "mLuaProxyAdapter";

/* The marker interface tells the script-binding toolchain to exclude
   generated proxies from further automatic processing; the attribute
   form marks them for the translator the same way. */
pub const MARKER_INTERFACE: &str = "ILuaProxy";
pub const IGNORE_ATTRIBUTE: &str = "LuaBind.Ignore";
pub const DELEGATE_ATTRIBUTE: &str = "LuaCallback";

pub const SOURCE_FILE_EXTENSION: &str = "cs";
