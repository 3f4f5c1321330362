use std::fs;

use anyhow::Result;
use nav_core::Navigator;
use nav_core::NavigatorError;
use nav_core::OpenOutcome;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_tree() -> Result<TempDir> {
    let tmp = TempDir::new()?;
    fs::create_dir_all(tmp.path().join("dir1"))?;
    fs::create_dir_all(tmp.path().join("dir2"))?;
    fs::write(tmp.path().join("file1.txt"), "content")?;
    fs::write(tmp.path().join(".hidden_file"), "content")?;
    fs::write(tmp.path().join("dir1").join("nested.md"), "content")?;
    Ok(tmp)
}

fn names(nav: &Navigator) -> Vec<String> {
    nav.entries().iter().map(|e| e.name.clone()).collect()
}

#[test]
fn scan_lists_real_directory_in_listing_order() -> Result<()> {
    let tmp = sample_tree()?;
    let mut nav = Navigator::new(tmp.path())?;
    nav.scan()?;

    assert_eq!(
        names(&nav),
        vec!["../", "dir1", "dir2", ".hidden_file", "file1.txt"]
    );
    let hidden: Vec<&str> = nav
        .entries()
        .iter()
        .filter(|e| e.is_hidden)
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(hidden, vec![".hidden_file"]);
    assert_eq!(nav.entries()[1].path, nav.current_path().join("dir1"));
    Ok(())
}

#[test]
fn relative_start_path_is_made_absolute() -> Result<()> {
    let nav = Navigator::new(".")?;
    assert!(nav.current_path().is_absolute());
    assert_eq!(nav.current_path(), std::env::current_dir()?.as_path());
    Ok(())
}

#[test]
fn missing_directory_fails_to_scan() -> Result<()> {
    let tmp = TempDir::new()?;
    let missing = tmp.path().join("non").join("existent");
    let mut nav = Navigator::new(&missing)?;
    let err = match nav.scan() {
        Ok(()) => panic!("scan of a missing directory succeeded"),
        Err(err) => err,
    };
    assert!(matches!(err, NavigatorError::Scan { .. }));
    assert_eq!(err.path(), missing.as_path());
    Ok(())
}

#[test]
fn descend_and_climb_back() -> Result<()> {
    let tmp = sample_tree()?;
    let mut nav = Navigator::new(tmp.path())?;
    nav.scan()?;
    let root = nav.current_path().to_path_buf();

    nav.move_selection(1);
    assert_eq!(nav.open_selected()?, OpenOutcome::Descended);
    assert_eq!(nav.current_path(), root.join("dir1").as_path());
    assert_eq!(names(&nav), vec!["../", "nested.md"]);

    nav.move_selection(1);
    assert_eq!(
        nav.open_selected()?,
        OpenOutcome::LaunchTerminal(root.join("dir1"))
    );

    nav.move_selection(-1);
    assert_eq!(nav.open_selected()?, OpenOutcome::Descended);
    assert_eq!(nav.current_path(), root.as_path());
    Ok(())
}

#[test]
fn search_over_real_listing() -> Result<()> {
    let tmp = sample_tree()?;
    let mut nav = Navigator::new(tmp.path())?;
    nav.scan()?;

    nav.toggle_search();
    nav.set_search_term("FILE");
    assert_eq!(names(&nav), vec![".hidden_file", "file1.txt"]);

    // A rescan keeps the active filter.
    fs::write(tmp.path().join("another_file.log"), "x")?;
    nav.scan()?;
    assert_eq!(
        names(&nav),
        vec![".hidden_file", "another_file.log", "file1.txt"]
    );

    nav.toggle_search();
    assert_eq!(nav.entries().len(), 6);
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_directory_reports_permission_denied() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let tmp = sample_tree()?;
    let locked = tmp.path().join("dir2");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    // Root ignores permission bits; nothing to assert in that case.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let mut nav = Navigator::new(tmp.path())?;
    nav.scan()?;
    nav.move_selection(2);
    let result = nav.open_selected();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    let err = match result {
        Ok(outcome) => panic!("expected permission error, got {outcome:?}"),
        Err(err) => err,
    };
    assert!(err.is_permission_denied());
    assert_eq!(
        err.to_string(),
        format!(
            "Permission denied: Cannot access directory '{}'",
            locked.display()
        )
    );
    assert_eq!(nav.current_path(), tmp.path());
    Ok(())
}

#[cfg(unix)]
#[test]
fn non_utf8_directory_can_be_entered() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new()?;
    let raw = OsStr::from_bytes(b"caf\xe9_dir");
    let dir = tmp.path().join(raw);
    // Some filesystems only accept UTF-8 names.
    if fs::create_dir(&dir).is_err() {
        return Ok(());
    }
    fs::write(dir.join("inside.txt"), "x")?;

    let mut nav = Navigator::new(tmp.path())?;
    nav.scan()?;
    assert_eq!(names(&nav), vec!["../", "caf\u{FFFD}_dir"]);

    nav.move_selection(1);
    assert_eq!(nav.open_selected_in_terminal(), Some(dir.clone()));
    assert_eq!(nav.open_selected()?, OpenOutcome::Descended);
    assert_eq!(nav.current_path(), dir.as_path());
    assert_eq!(names(&nav), vec!["../", "inside.txt"]);
    Ok(())
}
