// Engine module - pure tracker logic (merge, validation, derived sections)
// No filesystem access happens here; the runtime layer feeds scan results in
// and decides whether the merged document gets written.

mod coverage;
pub mod docs;
mod merge;
pub mod structure;
mod validate;

pub use coverage::infer_covered_source;
pub use docs::normalize_text;
pub use merge::{MergePolicy, MergeReport, SectionPolicy, SectionReport, StalePolicy, merge_scan};
pub use structure::build_structure;
pub use validate::{ValidationIssue, validate, validate_section};
