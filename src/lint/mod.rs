pub mod runner;

use crate::error::{DocklintError, Result};
use crate::types::lint::LintResults;

/// Decode the linter's captured stdout. Anything that is not a JSON
/// document in the expected shape is a hard failure; there is no
/// partial recovery from a half-broken lint run.
pub fn parse_results(raw: &str) -> Result<LintResults> {
    serde_json::from_str(raw).map_err(DocklintError::MalformedOutput)
}
