//! Tracker documents shared by integration tests.

/// 2024-01-15 12:00:00 UTC, used to pin file modification times
pub const PINNED_MTIME: i64 = 1_705_320_000;

/// Smallest tracker the reader accepts
pub const MINIMAL_TRACKER: &str = "\
project:
  name: demo
  version: 0.1.0
source_code:
  files: []
tests:
  files: []
";

/// Tracker whose version fails schema validation
pub const INVALID_VERSION_TRACKER: &str = "\
project:
  name: test
  version: invalid.version
source_code:
  files: []
tests:
  files: []
";

/// Not parseable as YAML
pub const MALFORMED_TRACKER: &str = "project: {name: demo\nsource_code: [\n";
