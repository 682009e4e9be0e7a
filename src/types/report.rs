use serde::Serialize;

/// Severity tiers accepted by the check-run API, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

/// One single-line inline comment attached to a file in the check-run
/// report. Field names match the check-run API payload.
///
/// Columns are signed: `end_column` is the issue content length minus
/// one, which is -1 for empty content and is sent through unclamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub path: String,
    pub start_line: i64,
    pub end_line: i64,
    pub start_column: i64,
    pub end_column: i64,
    pub annotation_level: AnnotationLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Success => "success",
            Verdict::Failure => "failure",
        }
    }
}

/// Output of the report builder: the conclusion for the check run plus
/// the annotation set attached to it. `skipped` counts issues dropped
/// because their line number did not parse; it never feeds the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub summary: String,
    pub annotations: Vec<Annotation>,
    pub skipped: usize,
}
