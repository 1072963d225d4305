use super::*;

/// Tests loading when no opt-in file exists.
///
/// Verifies that the repository creates an empty JSON array file and returns an
/// empty set.
///
/// Expected: Ok with empty set and `[]` written to disk
#[tokio::test]
async fn creates_missing_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    let loaded = repo.load().await?;

    assert!(loaded.is_empty());
    assert_eq!(test.read_opt_in_file().unwrap(), "[]");

    Ok(())
}

/// Tests loading a file holding user ids.
///
/// Expected: Ok with every stored id
#[tokio::test]
async fn loads_stored_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_opted_in_users(["1002", "1001"])
        .build()
        .unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    let loaded = repo.load().await?;

    assert_eq!(loaded, users(&["1001", "1002"]));

    Ok(())
}

/// Tests loading a file containing duplicate ids.
///
/// Expected: Ok with duplicates collapsed
#[tokio::test]
async fn collapses_duplicate_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_opted_in_users(["1001", "1001"])
        .build()
        .unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    assert_eq!(repo.load().await?, users(&["1001"]));

    Ok(())
}

/// Tests loading a file containing JSON `null`.
///
/// Expected: Ok with empty set
#[tokio::test]
async fn null_file_loads_as_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raw_opt_in_file("null").build().unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    assert!(repo.load().await?.is_empty());

    Ok(())
}

/// Tests loading a file that is not a JSON array of strings.
///
/// Expected: Err(AppError::JsonErr)
#[tokio::test]
async fn fails_on_malformed_file() {
    let test = TestBuilder::new()
        .with_raw_opt_in_file(r#"{"users": 1}"#)
        .build()
        .unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    let result = repo.load().await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));
}
