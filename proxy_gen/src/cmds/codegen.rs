/* Codegen command - generate proxy classes and interfaces from the
   symbol model */

use proxy_loader::SymbolTable;
use proxy_types::SymbolSource;
use std::path::PathBuf;

use super::common::{check_prerequisites, load_symbols};
use crate::codegen::csharp::{CSharpRenderOptions, CSharpRenderer};
use crate::codegen::{SOURCE_FILE_EXTENSION, emit_interface, emit_proxy_class};
use crate::config::{GenConfig, GenerationItem};
use crate::error::ItemError;
use crate::model::GenerationContext;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ItemKind {
    ProxyClass,
    Interface,
}

#[derive(Debug)]
pub enum ItemStatus {
    Generated {
        path: PathBuf,
        delegate_count: usize,
    },
    Skipped {
        reason: ItemError,
    },
}

#[derive(Debug)]
pub struct ItemReport {
    pub target_name: String,
    pub type_name: String,
    pub status: ItemStatus,
}

/* Result of a full run. `needs_delegate_regen` is the observable signal
   that downstream script-binding metadata must be regenerated: it is set
   whenever any generated proxy contains a delegate-backed member. */
#[derive(Debug)]
pub struct RunOutcome {
    pub reports: Vec<ItemReport>,
    pub needs_delegate_regen: bool,
}

/* Execute the codegen command. Per-item failures are reported and
   skipped; prerequisite failures and write failures abort the run. */
pub fn run(config: &GenConfig, verbose: bool) -> anyhow::Result<RunOutcome> {
    let symbols = load_symbols(config, verbose)?;
    check_prerequisites(&symbols)?;

    if verbose {
        println!("[~] Symbol model ready: {} type(s)", symbols.len());
        println!(
            "[*] Starting code generation for {} item(s)...",
            config.proxy_classes.len() + config.interfaces.len()
        );
    }

    let renderer = CSharpRenderer::new(CSharpRenderOptions {
        emit_header_comment: !config.dont_generate_comment,
    });

    let mut outcome = RunOutcome {
        reports: Vec::new(),
        needs_delegate_regen: false,
    };

    for item in &config.proxy_classes {
        if verbose {
            println!(
                "[~] Generating proxy class {} for {}",
                item.target_name, item.type_name
            );
        }

        let report = generate_item(&symbols, &renderer, item, config, ItemKind::ProxyClass)?;

        if let ItemStatus::Generated { delegate_count, .. } = &report.status {
            if *delegate_count > 0 {
                outcome.needs_delegate_regen = true;
            }
        }

        outcome.reports.push(report);
    }

    for item in &config.interfaces {
        if verbose {
            println!(
                "[~] Generating interface {} for {}",
                item.target_name, item.type_name
            );
        }

        let report = generate_item(&symbols, &renderer, item, config, ItemKind::Interface)?;
        outcome.reports.push(report);
    }

    Ok(outcome)
}

fn generate_item(
    symbols: &SymbolTable,
    renderer: &CSharpRenderer,
    item: &GenerationItem,
    config: &GenConfig,
    kind: ItemKind,
) -> anyhow::Result<ItemReport> {
    let Some(type_def) = symbols.lookup(&item.type_name) else {
        return Ok(ItemReport {
            target_name: item.target_name.clone(),
            type_name: item.type_name.clone(),
            status: ItemStatus::Skipped {
                reason: ItemError::TypeNotFound(item.type_name.clone()),
            },
        });
    };

    /* Interface-satisfaction suppression applies to interface items only */
    let suppress = kind == ItemKind::Interface && config.suppress_interface_implemented;

    let context = match GenerationContext::build(
        &item.target_name,
        item.target_dir.clone(),
        type_def,
        symbols,
        suppress,
    ) {
        Ok(context) => context,
        Err(reason) => {
            return Ok(ItemReport {
                target_name: item.target_name.clone(),
                type_name: item.type_name.clone(),
                status: ItemStatus::Skipped { reason },
            });
        }
    };

    let unit = match kind {
        ItemKind::ProxyClass => emit_proxy_class(&context),
        ItemKind::Interface => emit_interface(&context),
    };

    let source = renderer.render(&unit);

    if !item.target_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&item.target_dir)?;
    }

    let path = item
        .target_dir
        .join(format!("{}.{}", item.target_name, SOURCE_FILE_EXTENSION));
    std::fs::write(&path, &source)?;

    let delegate_count = match kind {
        ItemKind::ProxyClass => context.delegate_backed.len(),
        ItemKind::Interface => 0,
    };

    Ok(ItemReport {
        target_name: item.target_name.clone(),
        type_name: item.type_name.clone(),
        status: ItemStatus::Generated {
            path,
            delegate_count,
        },
    })
}
