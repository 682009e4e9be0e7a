use crate::error::{DocklintError, Result};
use std::process::Command;
use tracing::debug;

/// Run the linter against `target` with JSON output requested and
/// return its captured stdout. Blocks until the linter exits.
///
/// A missing binary, a non-zero exit, or non-UTF-8 stdout all surface
/// as `LinterExec`; stderr is folded into the error detail so the CI
/// log shows what the linter actually said.
pub fn capture_output(linter_bin: &str, target: &str) -> Result<String> {
    let command = format!("{linter_bin} {target} -j");
    debug!("running linter: {command}");

    let output = Command::new(linter_bin)
        .arg(target)
        .arg("-j")
        .output()
        .map_err(|e| DocklintError::LinterExec {
            command: command.clone(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DocklintError::LinterExec {
            command,
            detail: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| DocklintError::LinterExec {
        command,
        detail: format!("stdout is not valid UTF-8: {e}"),
    })
}
