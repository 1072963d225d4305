use super::*;

/// Tests saving a set of user ids.
///
/// Expected: Ok with a sorted JSON array written
#[tokio::test]
async fn writes_sorted_json_array() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    repo.save(&users(&["300", "100", "200"])).await?;

    assert_eq!(test.read_opt_in_file().unwrap(), r#"["100","200","300"]"#);

    Ok(())
}

/// Tests that saving overwrites the previous contents.
///
/// Expected: Ok with only the new set on disk
#[tokio::test]
async fn overwrites_previous_contents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_opted_in_users(["1001", "1002", "1003"])
        .build()
        .unwrap();
    let repo = OptInRepository::new(test.opt_in_path());

    repo.save(&users(&["1002"])).await?;

    assert_eq!(test.read_opt_in_file().unwrap(), r#"["1002"]"#);

    Ok(())
}

/// Tests that a saved set loads back unchanged.
///
/// Expected: Ok with the reloaded set equal to the saved one
#[tokio::test]
async fn saved_set_reloads_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = OptInRepository::new(test.opt_in_path());
    let saved = users(&["42", "7", "123456789012345678"]);

    repo.save(&saved).await?;

    assert_eq!(repo.load().await?, saved);

    Ok(())
}

/// Tests saving into a directory that does not exist.
///
/// Expected: Err(AppError::IoErr)
#[tokio::test]
async fn fails_when_directory_missing() {
    let test = TestBuilder::new().build().unwrap();
    let repo = OptInRepository::new(test.path().join("missing").join("opt_in.json"));

    let result = repo.save(&users(&["1001"])).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
}
