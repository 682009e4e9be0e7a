use serde::Deserialize;

/// The linter's `-j` output, decoded as-is. All numeric-looking fields
/// arrive as strings; they are parsed downstream where their meaning is
/// decided, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct LintResults {
    #[serde(rename = "totalIssues")]
    pub total_issues: String,
    pub files: Vec<LintFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LintFile {
    pub file: String,
    pub issues: Vec<LintIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LintIssue {
    pub line: String,
    pub category: String,
    pub title: String,
    pub content: String,
}
