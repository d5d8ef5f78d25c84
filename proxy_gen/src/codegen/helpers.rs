use proxy_types::{MemberDef, TypeRef};

/* Render a type reference as C# source text */
pub fn type_text(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Named(named) => {
            let base = simplify_system_type(&named.name);
            if named.type_params.is_empty() {
                base.to_string()
            } else {
                format!("{}<{}>", base, named.type_params.join(", "))
            }
        }
        TypeRef::Array(arr) => format!("{}[]", type_text(&arr.element)),
        TypeRef::TypeParam(tp) => tp.name.clone(),
    }
}

/* None means void */
pub fn return_type_text(return_type: &Option<TypeRef>) -> Option<String> {
    return_type.as_ref().map(type_text)
}

/* Reduce well-known System types to their C# keywords; everything else
   keeps its qualified name */
pub fn simplify_system_type(name: &str) -> &str {
    match name {
        "System.Boolean" => "bool",
        "System.Byte" => "byte",
        "System.SByte" => "sbyte",
        "System.Int16" => "short",
        "System.UInt16" => "ushort",
        "System.Int32" => "int",
        "System.UInt32" => "uint",
        "System.Int64" => "long",
        "System.UInt64" => "ulong",
        "System.Single" => "float",
        "System.Double" => "double",
        "System.Decimal" => "decimal",
        "System.Char" => "char",
        "System.String" => "string",
        "System.Object" => "object",
        "System.Void" => "void",
        other => other,
    }
}

/* A property's type: the getter's return type, falling back to the
   setter's value parameter */
pub fn property_type(getter: Option<&MemberDef>, setter: Option<&MemberDef>) -> String {
    if let Some(g) = getter {
        if let Some(ret) = &g.return_type {
            return type_text(ret);
        }
    }
    if let Some(s) = setter {
        if let Some(p) = s.params.first() {
            return type_text(&p.param_type);
        }
    }
    "object".to_string()
}

/* The generic argument list for the callable invocation: the script
   handle type, the declared parameter types in order, and the return
   type when the member has one */
pub fn callable_type_args(member: &MemberDef, lua_table: &str) -> Vec<String> {
    let mut args = vec![lua_table.to_string()];
    for param in &member.params {
        args.push(type_text(&param.param_type));
    }
    if let Some(ret) = &member.return_type {
        args.push(type_text(ret));
    }
    args
}
