use std::path::Path;

use anyhow::Result;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn nav_command(nav_home: &Path) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("nav")?;
    cmd.env("NAV_HOME", nav_home);
    Ok(cmd)
}

#[test]
fn help_lists_keybindings_and_terminal_detection() -> Result<()> {
    let nav_home = TempDir::new()?;
    nav_command(nav_home.path())?
        .arg("--help")
        .assert()
        .success()
        .stdout(
            contains("KEYBINDINGS:")
                .and(contains("Open selected item in new terminal"))
                .and(contains("TERMINAL DETECTION:"))
                .and(contains("$TERM_PROGRAM"))
                .and(contains("appends `--working-directory <dir>`"))
                .and(contains("--cwd").not()),
        );
    Ok(())
}

#[test]
fn missing_start_directory_exits_with_error() -> Result<()> {
    let nav_home = TempDir::new()?;
    let missing = nav_home.path().join("non").join("existent");
    nav_command(nav_home.path())?
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(contains(format!(
            "Cannot read directory '{}'",
            missing.display()
        )));
    Ok(())
}

#[test]
fn malformed_config_is_reported() -> Result<()> {
    let nav_home = TempDir::new()?;
    std::fs::write(nav_home.path().join("config.toml"), "terminal = [")?;
    nav_command(nav_home.path())?
        .arg(nav_home.path())
        .assert()
        .failure()
        .stderr(contains("invalid config"));
    Ok(())
}

#[test]
fn log_file_is_created_in_nav_home() -> Result<()> {
    let nav_home = TempDir::new()?;
    let missing = nav_home.path().join("gone");
    nav_command(nav_home.path())?
        .arg(&missing)
        .env("RUST_LOG", "nav_tui=info")
        .assert()
        .failure();
    assert!(nav_home.path().join("log").join("nav-tui.log").exists());
    Ok(())
}
