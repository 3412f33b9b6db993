use tracksync_testing::TestWorld;
use tracksync_testing::fixtures::MINIMAL_TRACKER;

#[test]
fn test_scan_lists_sections_in_path_order() {
    let world = TestWorld::new()
        .with_file("src/b.py", "")
        .with_file("src/a.py", "")
        .with_file("src/__pycache__/a.cpython-312.pyc", "")
        .with_file("tests/test_a.py", "")
        .with_file("README.md", "");

    let result = world.run(&["scan", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let files: Vec<(String, String)> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                f["section"].as_str().unwrap().to_string(),
                f["path"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        files,
        vec![
            ("source_code".to_string(), "src/a.py".to_string()),
            ("source_code".to_string(), "src/b.py".to_string()),
            ("tests".to_string(), "tests/test_a.py".to_string()),
        ]
    );
}

#[test]
fn test_scan_empty_project() {
    let world = TestWorld::new();
    let result = world.run(&["scan"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No tracked files found"));
}

#[test]
fn test_docs_status_and_sync() {
    let world = TestWorld::new().with_tracker(MINIMAL_TRACKER);

    let result = world.run(&["docs", "status"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Generated: no"));

    world.write_file("docs/index.html", "<html></html>\n").unwrap();

    let result = world.run(&["docs", "status", "--format", "json"]).unwrap();
    assert_eq!(result.json().unwrap()["generated"], true);

    assert!(world.run(&["sync"]).unwrap().success());
    assert!(world.read_tracker().unwrap().contains("generated: true"));
}

#[test]
fn test_docs_normalize() {
    let world = TestWorld::new()
        .with_file("docs/index.html", "<p>hi</p>   \r\n\r\n\r\n")
        .with_file("docs/search.js", "let x = 1;")
        .with_file("docs/notes.txt", "keep  \r\n");

    let result = world.run(&["docs", "normalize"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Checked 2 file(s), normalized 2"));

    let read = |rel: &str| std::fs::read_to_string(world.root().join(rel)).unwrap();
    assert_eq!(read("docs/index.html"), "<p>hi</p>\n");
    assert_eq!(read("docs/search.js"), "let x = 1;\n");
    assert_eq!(read("docs/notes.txt"), "keep  \r\n");
}
