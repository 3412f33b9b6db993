use tracksync_testing::TestWorld;

#[test]
fn test_init_then_validate() {
    let world = TestWorld::new();

    let result = world.run(&["init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Created tracker"));

    let tracker = world.read_tracker().unwrap();
    assert!(tracker.contains("name: project"));
    assert!(tracker.contains("package_manager: uv"));
    assert!(tracker.contains("ruff.toml"));

    let result = world.run(&["validate"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Valid:"));
}

#[test]
fn test_init_keeps_existing_tracker() {
    let world = TestWorld::new().with_tracker("project: {name: mine}\n");

    let result = world.run(&["init"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("already exists"));
    assert_eq!(world.read_tracker().unwrap(), "project: {name: mine}\n");

    let result = world.run(&["init", "--force"]).unwrap();
    assert!(result.success());
    assert!(world.read_tracker().unwrap().contains("version: 0.1.0"));
}

#[test]
fn test_init_then_sync_round_trip() {
    let world = TestWorld::new().with_file("src/app.py", "");

    assert!(world.run(&["init"]).unwrap().success());
    assert!(world.run(&["sync"]).unwrap().success());

    let result = world.run(&["sync", "--check"]).unwrap();
    assert_eq!(result.code(), Some(0), "stderr: {}", result.stderr());
}
