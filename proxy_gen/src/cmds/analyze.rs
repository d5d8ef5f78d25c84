/* Analyze command - inspect one type's selection, classification, and
   mangled names without writing anything */

use proxy_types::{MemberKind, SymbolSource};
use std::path::PathBuf;

use super::common::load_symbols;
use crate::codegen::csharp::{CSharpRenderOptions, CSharpRenderer};
use crate::codegen::emit_proxy_class;
use crate::config::GenConfig;
use crate::model::GenerationContext;

pub fn run(
    config: &GenConfig,
    type_name: &str,
    print_source: bool,
    json: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let symbols = load_symbols(config, verbose)?;

    let Some(type_def) = symbols.lookup(type_name) else {
        anyhow::bail!("Cannot find type '{}' in the symbol model", type_name);
    };

    let context = GenerationContext::build(
        type_def.simple_name(),
        PathBuf::new(),
        type_def,
        &symbols,
        config.suppress_interface_implemented,
    )?;

    if json {
        let members: Vec<_> = (0..context.members.len())
            .map(|idx| {
                let member = context.members[idx];
                serde_json::json!({
                    "name": member.name,
                    "kind": kind_label(member.kind),
                    "classification": classification_label(&context, idx),
                    "mangled": context.mangled(idx),
                    "slot": context.slot(idx),
                    "suppressed": context.suppressed[idx],
                })
            })
            .collect();

        let report = serde_json::json!({
            "type": type_def.name,
            "selected": context.members.len(),
            "properties": context.properties.iter().map(|p| &p.name).collect::<Vec<_>>(),
            "members": members,
        });

        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "[*] {}: {} selected member(s), {} property group(s), {} delegate-backed",
        type_def.name,
        context.members.len(),
        context.properties.len(),
        context.delegate_backed.len()
    );

    for idx in 0..context.members.len() {
        let member = context.members[idx];
        let suppressed = if context.suppressed[idx] {
            " (suppressed)"
        } else {
            ""
        };
        println!(
            "    {:<18} {:<32} -> {} [{}]{}",
            classification_label(&context, idx),
            member.name,
            context.mangled(idx),
            context.slot(idx),
            suppressed
        );
    }

    if print_source {
        let renderer = CSharpRenderer::new(CSharpRenderOptions {
            emit_header_comment: false,
        });
        let unit = emit_proxy_class(&context);
        println!("\n{}", renderer.render(&unit));
    }

    Ok(())
}

fn kind_label(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Ordinary => "ordinary",
        MemberKind::PropertyGet => "property-get",
        MemberKind::PropertySet => "property-set",
        MemberKind::Constructor => "constructor",
        MemberKind::Operator => "operator",
    }
}

fn classification_label(context: &GenerationContext, idx: usize) -> &'static str {
    if context.is_delegate_backed(idx) {
        "delegate-backed"
    } else if context.members[idx].is_accessor() {
        "property-accessor"
    } else {
        "normal"
    }
}
