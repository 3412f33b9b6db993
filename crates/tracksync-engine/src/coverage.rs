/// Source file a test file is assumed to exercise.
///
/// `tests/test_foo.py` maps to `src/foo.py` and `foo_test.py` to `foo.py`.
/// Paths that follow neither convention are returned unchanged.
pub fn infer_covered_source(test_path: &str) -> String {
    test_path
        .replace("tests/test_", "src/")
        .replace("_test.py", ".py")
}
