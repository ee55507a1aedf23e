//! The metadata repair pipeline
//!
//! Repair never fails: whatever shape the submission has, a mapping with
//! canonical keys comes out. Order matters and mirrors the marketplace's
//! historical behavior: the repository context is resolved from the raw
//! metadata before alias folding, then aliases are folded, missing fields are
//! generated, and tags are coerced last.

use super::diagnostics::Diagnostics;
use super::{Metadata, aliases, autofill, tags};
use autofill::RepoContext;

/// Validate and repair plugin metadata.
///
/// `repo_hint` is an optional "owner/name" repository identifier and
/// `ref_hint` an optional version-control ref (e.g. `refs/tags/v1.0.0`),
/// both typically supplied by the CI environment. Empty strings mean absent.
pub fn validate_and_fix(
    mut metadata: Metadata,
    repo_hint: &str,
    ref_hint: &str,
    diag: &mut Diagnostics,
) -> Metadata {
    let ctx = RepoContext::resolve(&metadata, repo_hint);

    let mut changed = aliases::fold(&mut metadata, diag);
    changed |= autofill::fill(&mut metadata, &ctx, repo_hint, ref_hint, diag);
    changed |= tags::normalize(&mut metadata, diag);

    if !changed {
        diag.note("Metadata is complete, nothing to repair");
    }
    metadata
}
