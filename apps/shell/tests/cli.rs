use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const SEED: &str = r#"
[a]
x = "1"

[a.y]
z = "2"

[env]
mode = "dev"
optional = "@null"
"#;

struct Fixture {
    dir: TempDir,
    seed: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().expect("temp dir");
        let seed = dir.path().join("tree.toml");
        fs::write(&seed, SEED).expect("write seed");
        Self { dir, seed }
    }

    fn jview(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_jview"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn prints_text_listing_for_path() {
    let fx = Fixture::new();

    fx.jview()
        .arg("--seed")
        .arg(&fx.seed)
        .arg("/a")
        .assert()
        .success()
        .stdout("/a/x = 1\n/a/y/z = 2\n");
}

#[test]
fn prints_json_with_null_values() {
    let fx = Fixture::new();

    let output = fx.jview().arg("-s").arg(&fx.seed).args(["-f", "json", "/env"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "path": "/env/mode", "name": "mode", "value": "dev" },
            { "path": "/env/optional", "name": "optional", "value": null }
        ])
    );
}

#[test]
fn lists_several_paths_in_order() {
    let fx = Fixture::new();

    fx.jview()
        .arg("-s")
        .arg(&fx.seed)
        .args(["/env", "/a/y"])
        .assert()
        .success()
        .stdout("/env/mode = dev\n/env/optional = null\n/a/y/z = 2\n");
}

#[test]
fn config_file_supplies_seed_and_root() {
    let fx = Fixture::new();
    let config = fx.dir.path().join("viewer.toml");
    fs::write(
        &config,
        format!(
            "[naming]\nroot = \"/a/y\"\n\n[registry]\nseed = {:?}\n\n[logging]\nlevel = \"warn\"\n",
            fx.seed.display().to_string()
        ),
    )
    .unwrap();

    fx.jview().arg("--config").arg(&config).assert().success().stdout("/a/y/z = 2\n");
}

#[test]
fn logs_loaded_configuration() {
    let fx = Fixture::new();

    fx.jview()
        .arg("-s")
        .arg(&fx.seed)
        .arg("/a")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded"));
}

#[test]
fn missing_path_prints_nothing() {
    let fx = Fixture::new();

    fx.jview().arg("-s").arg(&fx.seed).arg("/nope").assert().success().stdout("");
}

#[test]
fn unsupported_loader_degrades_to_empty_listing() {
    let fx = Fixture::new();

    fx.jview()
        .env("JVIEW__NAMING__LOADER", "system")
        .arg("-s")
        .arg(&fx.seed)
        .arg("/a")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("listings disabled"));
}

#[test]
fn unreadable_seed_fails() {
    let fx = Fixture::new();

    fx.jview()
        .args(["-s", "absent.toml", "/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read seed file"));
}

#[test]
fn missing_explicit_config_fails() {
    let fx = Fixture::new();

    fx.jview()
        .args(["-c", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
