use super::*;

/// Tests adding and removing users in memory.
///
/// Expected: set semantics, no duplicates, removal of non-members is a no-op
#[tokio::test]
async fn add_and_remove_have_set_semantics() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let opt_in = OptInService::load(test.opt_in_path()).await?;

    assert!(opt_in.add("1001").await);
    assert!(!opt_in.add("1001").await);
    assert_eq!(opt_in.len().await, 1);

    assert!(!opt_in.remove("2002").await);
    assert!(opt_in.remove("1001").await);
    assert_eq!(opt_in.len().await, 0);

    Ok(())
}

/// Tests that in-memory mutations do not touch the file.
///
/// Expected: file unchanged until `persist`
#[tokio::test]
async fn add_does_not_write_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let opt_in = OptInService::load(test.opt_in_path()).await?;

    opt_in.add("1001").await;

    assert_eq!(test.read_opt_in_file().unwrap(), "[]");

    Ok(())
}

/// Tests that `opt_in` flushes to disk immediately.
///
/// Expected: Ok with the user in the file
#[tokio::test]
async fn opt_in_writes_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let opt_in = OptInService::load(test.opt_in_path()).await?;

    opt_in.opt_in("1001").await?;
    opt_in.opt_in("1001").await?;

    assert_eq!(test.read_opt_in_file().unwrap(), r#"["1001"]"#);

    Ok(())
}

/// Tests that clones share the same registry.
///
/// Expected: a change through one clone is visible through the other
#[tokio::test]
async fn clones_share_state() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let opt_in = OptInService::load(test.opt_in_path()).await?;
    let clone = opt_in.clone();

    clone.opt_in("1001").await?;

    assert!(opt_in.contains("1001").await);

    Ok(())
}

/// Tests a failed write during `opt_in`.
///
/// The in-memory change is kept even though it could not be persisted.
///
/// Expected: Err(AppError::IoErr) and the user still opted in
#[tokio::test]
async fn failed_write_keeps_memory_change() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let opt_in = OptInService::load(test.opt_in_path()).await?;

    // Replacing the file with a directory makes every write fail
    std::fs::remove_file(test.opt_in_path()).unwrap();
    std::fs::create_dir(test.opt_in_path()).unwrap();

    let result = opt_in.opt_in("1001").await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert!(opt_in.contains("1001").await);

    Ok(())
}
