use tracksync_testing::TestWorld;
use tracksync_testing::fixtures::INVALID_VERSION_TRACKER;

#[test]
fn test_validate_reports_issues_as_json() {
    let world = TestWorld::new().with_tracker(INVALID_VERSION_TRACKER);

    let result = world.run(&["validate", "--format", "json"]).unwrap();
    assert_eq!(result.code(), Some(1));

    let json = result.json().unwrap();
    assert_eq!(json["valid"], false);
    let issues = serde_json::to_string_pretty(&json["issues"]).unwrap();
    insta::assert_snapshot!(issues, @r#"
    [
      {
        "location": "project.version",
        "message": "'invalid.version' does not match MAJOR.MINOR.PATCH"
      }
    ]
    "#);
}

#[test]
fn test_validate_plain_lists_locations() {
    let world = TestWorld::new().with_tracker(INVALID_VERSION_TRACKER);

    let result = world.run(&["validate"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().contains("Invalid:"));
    assert!(result.stdout().contains("- project.version:"));
    assert!(result.stderr().contains("1 schema issue(s)"));
}
