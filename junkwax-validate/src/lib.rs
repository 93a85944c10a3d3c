//! Attribute-dictionary consistency validation for release files.
//!
//! Read-only: the validator reports per-file closed-mapping violations and
//! cross-file note inconsistencies, with suggested dictionary entries for
//! missing codes. It never rewrites an input.

pub mod attributes;
pub mod runner;

pub use attributes::{
    AttributeCorpus, CrossFileFinding, FileReport, UNDEFINED_NOTE, validate_file,
};
pub use runner::{ValidateError, ValidationOutcome, validate_paths};
