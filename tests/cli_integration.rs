//! CLI Integration Tests
//!
//! Tests the migration command-line interface end-to-end against
//! synthetic home directories.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get the binary to test, rooted in a synthetic home directory.
fn dpp(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dpp").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_CACHE_HOME");
    cmd
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration CLI for dpp.vim"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_migrate_help() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .args(["migrate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrate from other plugin managers"));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_unsupported_manager_is_rejected() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .args(["migrate", "--from", "pathogen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported plugin manager: pathogen"))
        .stderr(predicate::str::contains("dein, vim-plug, packer"));
}

#[test]
fn test_unsupported_format_is_rejected_before_extraction() {
    let home = TempDir::new().unwrap();
    // No source file exists either; the format error must win.
    dpp(&home)
        .args(["migrate", "--from", "dein", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format: yaml"))
        .stderr(predicate::str::contains("ts, toml, lua, vim"));
}

// ============================================================================
// Source Detection Tests
// ============================================================================

#[test]
fn test_missing_explicit_config_fails_without_output() {
    let home = TempDir::new().unwrap();

    dpp(&home)
        .args(["migrate", "--from", "dein", "--config", "/nonexistent/init.vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    home.child(".config/nvim/dpp.ts").assert(predicate::path::missing());
}

#[test]
fn test_undetectable_config_suggests_config_flag() {
    let home = TempDir::new().unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find vim-plug configuration file"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_auto_detects_vimrc() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc").write_str("Plug 'tpope/vim-fugitive'\n").unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".vimrc"));
}

// ============================================================================
// Migration Tests
// ============================================================================

#[test]
fn test_dry_run_prints_and_writes_nothing() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc").write_str("Plug 'tpope/vim-fugitive'\n").unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN - Generated configuration:"))
        .stdout(predicate::str::contains(r#"{ repo: "tpope/vim-fugitive" },"#))
        .stdout(predicate::str::contains(r#"{ repo: "Shougo/dpp.vim" },"#));

    home.child(".config/nvim/dpp.ts").assert(predicate::path::missing());
}

#[test]
fn test_migration_writes_toml_output() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc")
        .write_str(
            "call dein#add('Shougo/ddu.vim')\ncall dein#add('a/b', {'on_cmd': ['Cmd1','Cmd2']})\n",
        )
        .unwrap();

    dpp(&home)
        .args(["migrate", "--from", "dein", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 plugins"))
        .stdout(predicate::str::contains("Migration complete"));

    home.child(".config/nvim/dpp.toml")
        .assert(predicate::str::contains("repo = \"Shougo/dpp.vim\""))
        .assert(predicate::str::contains("repo = \"a/b\"\non_cmd = [\"Cmd1\",\"Cmd2\"]"));
}

#[test]
fn test_existing_output_is_never_overwritten() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc").write_str("Plug 'tpope/vim-fugitive'\n").unwrap();
    home.child(".config/nvim/dpp.toml").write_str("# hand-edited\n").unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug", "--format", "toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output file already exists"))
        .stderr(predicate::str::contains("backup or remove"));

    home.child(".config/nvim/dpp.toml").assert("# hand-edited\n");
}

#[test]
fn test_zero_plugins_is_a_warning_not_an_error() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc").write_str("set number\nset expandtab\n").unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugins found in configuration"));

    home.child(".config/nvim/dpp.ts").assert(predicate::path::missing());
}

#[test]
fn test_packer_migration_from_plugins_lua() {
    let home = TempDir::new().unwrap();
    home.child(".config/nvim/lua/plugins.lua")
        .write_str("use 'wbthomason/packer.nvim'\nuse {'owner/x', cmd = 'X'}\n")
        .unwrap();

    dpp(&home)
        .args(["migrate", "--from", "packer", "--dry-run", "--format", "lua"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{ repo = \"owner/x\" },"))
        .stdout(predicate::str::contains("{ repo = \"wbthomason/packer.nvim\" },"));
}

#[test]
fn test_vim_format_includes_bootstrap_boilerplate() {
    let home = TempDir::new().unwrap();
    home.child(".vimrc").write_str("Plug 'tpope/vim-fugitive'\n").unwrap();

    dpp(&home)
        .args(["migrate", "--from", "vim-plug", "--dry-run", "--format", "vim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("call dpp#begin(s:dpp_base)"))
        .stdout(predicate::str::contains("call dpp#add('tpope/vim-fugitive')"))
        .stdout(predicate::str::contains("call dpp#end()"));
}

// ============================================================================
// Other Commands
// ============================================================================

#[test]
fn test_config_path_flag() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    dpp(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dpp"));
}
