use super::*;
use crate::model::select::select_members;
use proxy_loader::SymbolTable;
use proxy_types::{AttributeTag, ParamDef, TypeRef};

fn method(name: &str, params: Vec<ParamDef>, return_type: Option<TypeRef>) -> MemberDef {
    MemberDef {
        name: name.to_string(),
        kind: MemberKind::Ordinary,
        accessibility: Accessibility::Public,
        params,
        return_type,
        type_params: Vec::new(),
        attributes: Vec::new(),
        explicit_interface: None,
        property: None,
    }
}

fn accessor(kind: MemberKind, property: &str, prop_type: TypeRef) -> MemberDef {
    let (prefix, params, return_type) = match kind {
        MemberKind::PropertyGet => ("get_", Vec::new(), Some(prop_type)),
        MemberKind::PropertySet => (
            "set_",
            vec![ParamDef {
                name: "value".to_string(),
                mode: PassingMode::Value,
                param_type: prop_type,
            }],
            None,
        ),
        _ => panic!("not an accessor kind"),
    };

    MemberDef {
        name: format!("{}{}", prefix, property),
        kind,
        accessibility: Accessibility::Public,
        params,
        return_type,
        type_params: Vec::new(),
        attributes: Vec::new(),
        explicit_interface: None,
        property: Some(property.to_string()),
    }
}

fn ref_param(name: &str) -> ParamDef {
    ParamDef {
        name: name.to_string(),
        mode: PassingMode::Reference,
        param_type: TypeRef::named("System.Int32"),
    }
}

fn type_with_members(name: &str, members: Vec<MemberDef>) -> TypeDef {
    TypeDef {
        name: name.to_string(),
        namespace: None,
        containing_type: None,
        accessibility: Accessibility::Public,
        type_params: Vec::new(),
        implements: Vec::new(),
        external: false,
        members,
    }
}

fn empty_symbols() -> SymbolTable {
    SymbolTable::from_typedefs(Vec::new()).unwrap()
}

#[test]
fn test_ref_overload_is_delegate_backed_no_arg_is_normal() {
    let type_def = type_with_members(
        "Game.Sample",
        vec![
            method("foo", Vec::new(), None),
            method("foo", vec![ref_param("x")], None),
        ],
    );

    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &empty_symbols(), false);

    assert_eq!(classified.normal, vec![0]);
    assert_eq!(classified.delegate_backed, vec![1]);
}

#[test]
fn test_ignored_member_never_selected() {
    let mut ignored = method("Hidden", Vec::new(), None);
    ignored.attributes.push(AttributeTag {
        name: "IgnoreAttribute".to_string(),
        namespace: "LuaBind".to_string(),
    });
    /* Same marker name from another namespace does not count */
    let mut other_ns = method("Visible", Vec::new(), None);
    other_ns.attributes.push(AttributeTag {
        name: "IgnoreAttribute".to_string(),
        namespace: "Somewhere.Else".to_string(),
    });

    let type_def = type_with_members("Game.Sample", vec![ignored, other_ns]);
    let selected = select_members(&type_def);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Visible");
}

#[test]
fn test_non_public_and_non_method_kinds_not_selected() {
    let mut internal = method("InternalOnly", Vec::new(), None);
    internal.accessibility = Accessibility::Internal;

    let mut ctor = method(".ctor", Vec::new(), None);
    ctor.kind = MemberKind::Constructor;

    let type_def = type_with_members(
        "Game.Sample",
        vec![internal, ctor, method("Visible", Vec::new(), None)],
    );
    let selected = select_members(&type_def);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Visible");
}

#[test]
fn test_accessor_grouping_get_only() {
    let type_def = type_with_members(
        "Game.Sample",
        vec![accessor(
            MemberKind::PropertyGet,
            "Name",
            TypeRef::named("System.String"),
        )],
    );

    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &empty_symbols(), false);

    assert_eq!(classified.properties.len(), 1);
    assert_eq!(classified.properties[0].name, "Name");
    assert_eq!(classified.properties[0].getter, Some(0));
    assert_eq!(classified.properties[0].setter, None);
    assert!(classified.normal.is_empty());
}

#[test]
fn test_accessor_grouping_get_and_set() {
    let type_def = type_with_members(
        "Game.Sample",
        vec![
            accessor(MemberKind::PropertyGet, "Name", TypeRef::named("System.String")),
            method("Unrelated", Vec::new(), None),
            accessor(MemberKind::PropertySet, "Name", TypeRef::named("System.String")),
        ],
    );

    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &empty_symbols(), false);

    assert_eq!(classified.properties.len(), 1);
    assert_eq!(classified.properties[0].getter, Some(0));
    assert_eq!(classified.properties[0].setter, Some(2));
}

#[test]
fn test_suppression_disabled_suppresses_nothing() {
    let iface = type_with_members("Game.IWeapon", vec![method("Fire", Vec::new(), None)]);
    let mut type_def = type_with_members("Game.Pistol", vec![method("Fire", Vec::new(), None)]);
    type_def.implements.push("Game.IWeapon".to_string());

    let symbols = SymbolTable::from_typedefs(vec![iface]).unwrap();
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &symbols, false);

    assert_eq!(classified.suppressed, vec![false]);
}

#[test]
fn test_suppression_detects_implicit_implementation() {
    let iface = type_with_members("Game.IWeapon", vec![method("Fire", Vec::new(), None)]);
    let mut type_def = type_with_members(
        "Game.Pistol",
        vec![
            method("Fire", Vec::new(), None),
            method("Reload", Vec::new(), None),
        ],
    );
    type_def.implements.push("Game.IWeapon".to_string());

    let symbols = SymbolTable::from_typedefs(vec![iface]).unwrap();
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &symbols, true);

    assert_eq!(classified.suppressed, vec![true, false]);
}

#[test]
fn test_suppression_requires_matching_signature() {
    let iface = type_with_members(
        "Game.IWeapon",
        vec![method("Fire", vec![ref_param("force")], None)],
    );
    /* Same name, different signature: not an implementation */
    let mut type_def = type_with_members("Game.Pistol", vec![method("Fire", Vec::new(), None)]);
    type_def.implements.push("Game.IWeapon".to_string());

    let symbols = SymbolTable::from_typedefs(vec![iface]).unwrap();
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &symbols, true);

    assert_eq!(classified.suppressed, vec![false]);
}

#[test]
fn test_suppression_walks_inherited_interfaces() {
    let base = type_with_members("Game.IBase", vec![method("Tick", Vec::new(), None)]);
    let mut derived = type_with_members("Game.IDerived", Vec::new());
    derived.implements.push("Game.IBase".to_string());

    let mut type_def = type_with_members("Game.System", vec![method("Tick", Vec::new(), None)]);
    type_def.implements.push("Game.IDerived".to_string());

    let symbols = SymbolTable::from_typedefs(vec![base, derived]).unwrap();
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &symbols, true);

    assert_eq!(classified.suppressed, vec![true]);
}

#[test]
fn test_suppression_prefers_explicit_implementation() {
    let iface = type_with_members("Game.IWeapon", vec![method("Fire", Vec::new(), None)]);

    let mut explicit = method("Game.IWeapon.Fire", Vec::new(), None);
    explicit.explicit_interface = Some("Game.IWeapon".to_string());

    /* The implicit Fire is shadowed by the explicit implementation and
       must not be suppressed */
    let mut type_def = type_with_members(
        "Game.Pistol",
        vec![explicit, method("Fire", Vec::new(), None)],
    );
    type_def.implements.push("Game.IWeapon".to_string());

    let symbols = SymbolTable::from_typedefs(vec![iface]).unwrap();
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &symbols, true);

    assert_eq!(classified.suppressed, vec![true, false]);
}

#[test]
fn test_empty_selection_classifies_to_empty_result() {
    let type_def = type_with_members("Game.Empty", Vec::new());
    let selected = select_members(&type_def);
    let classified = classify(&type_def, &selected, &empty_symbols(), true);

    assert!(classified.normal.is_empty());
    assert!(classified.delegate_backed.is_empty());
    assert!(classified.properties.is_empty());
    assert!(classified.suppressed.is_empty());
}
