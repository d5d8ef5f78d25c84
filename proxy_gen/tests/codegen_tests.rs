use proxy_gen::cmds::codegen::{self, ItemStatus};
use proxy_gen::config::GenConfig;
use std::io::Write;
use std::path::{Path, PathBuf};

const RUNTIME_SYMBOLS: &str = "\
package: luabind-runtime
types:
  - name: LuaBind.LuaTable
    external: true
  - name: LuaBind.LuaFunction
    external: true
  - name: LuaBind.LuaProxyAdapter
    external: true
  - name: System.Exception
    external: true
";

const GAME_SYMBOLS: &str = "\
package: game
imports:
  - path: runtime.yml
types:
  - name: Game.Sample
    members:
      - name: Add
        kind: ordinary
        return-type:
          named:
            name: System.Int32
        params:
          - name: a
            param-type:
              named:
                name: System.Int32
          - name: b
            param-type:
              named:
                name: System.Int32
      - name: TryGet
        kind: ordinary
        return-type:
          named:
            name: System.Boolean
        params:
          - name: key
            param-type:
              named:
                name: System.String
          - name: value
            mode: output
            param-type:
              named:
                name: System.Int32
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

fn config_for(dir: &Path, out_dir: &Path, extra_items: &str) -> GenConfig {
    let yaml = format!(
        "symbol-files: [{}]\n\
         dont-generate-comment: true\n\
         proxy-classes:\n\
         \x20 - type-name: Game.Sample\n\
         \x20   target-name: SampleProxy\n\
         \x20   target-dir: {}\n\
         {}",
        dir.join("game.yml").display(),
        out_dir.display(),
        extra_items
    );
    GenConfig::from_str(&yaml).unwrap()
}

#[test]
fn test_full_run_generates_proxy_and_signals_delegate_regen() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runtime.yml", RUNTIME_SYMBOLS);
    write_file(dir.path(), "game.yml", GAME_SYMBOLS);
    let out_dir = dir.path().join("generated");

    let config = config_for(dir.path(), &out_dir, "");
    let outcome = codegen::run(&config, false).unwrap();

    assert_eq!(outcome.reports.len(), 1);
    assert!(matches!(
        outcome.reports[0].status,
        ItemStatus::Generated {
            delegate_count: 1,
            ..
        }
    ));
    /* TryGet has an out parameter: the binding-metadata regeneration
       signal must be raised */
    assert!(outcome.needs_delegate_regen);

    let source = std::fs::read_to_string(out_dir.join("SampleProxy.cs")).unwrap();
    assert!(source.contains("public class SampleProxy : ILuaProxy"));
    assert!(source.contains("private LuaFunction m_Add;"));
    assert!(source.contains("public delegate bool Delegate_TryGet(string key, out int value);"));
}

#[test]
fn test_runs_are_byte_identical_without_header() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runtime.yml", RUNTIME_SYMBOLS);
    write_file(dir.path(), "game.yml", GAME_SYMBOLS);
    let out_dir = dir.path().join("generated");

    let config = config_for(dir.path(), &out_dir, "");

    codegen::run(&config, false).unwrap();
    let first = std::fs::read_to_string(out_dir.join("SampleProxy.cs")).unwrap();

    codegen::run(&config, false).unwrap();
    let second = std::fs::read_to_string(out_dir.join("SampleProxy.cs")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_prerequisite_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    /* runtime.yml without LuaBind.LuaFunction */
    write_file(
        dir.path(),
        "runtime.yml",
        "package: luabind-runtime\n\
         types:\n\
         \x20 - name: LuaBind.LuaTable\n\
         \x20   external: true\n\
         \x20 - name: LuaBind.LuaProxyAdapter\n\
         \x20   external: true\n\
         \x20 - name: System.Exception\n\
         \x20   external: true\n",
    );
    write_file(dir.path(), "game.yml", GAME_SYMBOLS);
    let out_dir = dir.path().join("generated");

    let config = config_for(dir.path(), &out_dir, "");
    let err = codegen::run(&config, false).unwrap_err().to_string();

    assert!(err.contains("LuaBind.LuaFunction"));
    assert!(!out_dir.join("SampleProxy.cs").exists());
}

#[test]
fn test_unresolved_item_is_skipped_but_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runtime.yml", RUNTIME_SYMBOLS);
    write_file(dir.path(), "game.yml", GAME_SYMBOLS);
    let out_dir = dir.path().join("generated");

    let extra = format!(
        "interfaces:\n\
         \x20 - type-name: Game.DoesNotExist\n\
         \x20   target-name: IMissingGen\n\
         \x20   target-dir: {}\n",
        out_dir.display()
    );
    let config = config_for(dir.path(), &out_dir, &extra);
    let outcome = codegen::run(&config, false).unwrap();

    assert_eq!(outcome.reports.len(), 2);
    assert!(matches!(
        outcome.reports[0].status,
        ItemStatus::Generated { .. }
    ));
    assert!(matches!(
        outcome.reports[1].status,
        ItemStatus::Skipped { .. }
    ));
    assert!(out_dir.join("SampleProxy.cs").exists());
    assert!(!out_dir.join("IMissingGen.cs").exists());
}

#[test]
fn test_interface_item_generates_signature_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runtime.yml", RUNTIME_SYMBOLS);
    write_file(dir.path(), "game.yml", GAME_SYMBOLS);
    let out_dir = dir.path().join("generated");

    let extra = format!(
        "interfaces:\n\
         \x20 - type-name: Game.Sample\n\
         \x20   target-name: ISampleGen\n\
         \x20   target-dir: {}\n",
        out_dir.display()
    );
    let config = config_for(dir.path(), &out_dir, &extra);
    let outcome = codegen::run(&config, false).unwrap();

    assert_eq!(outcome.reports.len(), 2);

    let source = std::fs::read_to_string(out_dir.join("ISampleGen.cs")).unwrap();
    assert!(source.contains("public interface ISampleGen"));
    assert!(source.contains("int Add(int a, int b);"));
    /* Delegate-backed members never appear in interfaces */
    assert!(!source.contains("TryGet"));
}
