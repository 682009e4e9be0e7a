pub mod json;
pub mod text;

use crate::error::DocklintError;
use crate::types::lint::LintResults;
use crate::types::report::{Annotation, AnnotationLevel, CheckReport, Verdict};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Build the check-run report from decoded lint results. Pure, one
/// pass, no I/O.
///
/// Annotations keep the input traversal order: files as the linter
/// listed them, issues in file order. There is no sorting and no
/// deduplication. The verdict comes from `totalIssues` alone; the
/// annotation count is sourced independently from the per-file
/// breakdown and the two are never reconciled.
pub fn build(results: &LintResults) -> CheckReport {
    let mut annotations = Vec::new();
    let mut skipped = 0usize;

    for file in &results.files {
        for issue in &file.issues {
            // The linter ships line numbers as strings; one that does
            // not parse drops the single issue, never the whole report.
            let line: i64 = match issue.line.trim().parse() {
                Ok(line) => line,
                Err(_) => {
                    warn!(
                        "skipping issue with unparsable line {:?} in {}",
                        issue.line, file.file
                    );
                    skipped += 1;
                    continue;
                }
            };

            annotations.push(Annotation {
                path: file.file.clone(),
                start_line: line,
                end_line: line,
                start_column: 0,
                end_column: issue.content.chars().count() as i64 - 1,
                annotation_level: AnnotationLevel::Failure,
                message: format!("[{}] {}", issue.category, issue.title),
            });
        }
    }

    CheckReport {
        verdict: verdict_from_total(&results.total_issues),
        summary: format!("{} issue(s) found", results.total_issues),
        annotations,
        skipped,
    }
}

// A totalIssues value that does not parse as an integer resolves to
// success, matching the upstream action's `parseInt(...) > 0` check
// where NaN compares false.
fn verdict_from_total(total_issues: &str) -> Verdict {
    match total_issues.trim().parse::<i64>() {
        Ok(n) if n > 0 => Verdict::Failure,
        _ => Verdict::Success,
    }
}

pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String, DocklintError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(DocklintError::Json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lint::{LintFile, LintIssue};

    fn issue(line: &str, category: &str, title: &str, content: &str) -> LintIssue {
        LintIssue {
            line: line.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn results(total: &str, files: Vec<LintFile>) -> LintResults {
        LintResults {
            total_issues: total.to_string(),
            files,
        }
    }

    #[test]
    fn clean_run_is_success_with_no_annotations() {
        let report = build(&results("0", vec![]));
        assert_eq!(report.verdict, Verdict::Success);
        assert_eq!(report.summary, "0 issue(s) found");
        assert!(report.annotations.is_empty());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn issues_produce_failure_verdict_and_mapped_annotations() {
        let report = build(&results(
            "2",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![
                    issue("3", "legacy", "FROM uses latest", "latest tag"),
                    issue("7", "security", "no USER", ""),
                ],
            }],
        ));

        assert_eq!(report.verdict, Verdict::Failure);
        assert_eq!(report.summary, "2 issue(s) found");
        assert_eq!(report.annotations.len(), 2);

        let first = &report.annotations[0];
        assert_eq!(first.path, "Dockerfile");
        assert_eq!(first.start_line, 3);
        assert_eq!(first.end_line, 3);
        assert_eq!(first.start_column, 0);
        assert_eq!(first.end_column, 9);
        assert_eq!(first.message, "[legacy] FROM uses latest");

        let second = &report.annotations[1];
        assert_eq!(second.start_line, 7);
        assert_eq!(second.end_column, -1);
        assert_eq!(second.message, "[security] no USER");
    }

    #[test]
    fn empty_content_keeps_end_column_at_minus_one() {
        let report = build(&results(
            "1",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![issue("1", "cat", "t", "")],
            }],
        ));
        assert_eq!(report.annotations[0].end_column, -1);
    }

    #[test]
    fn end_column_counts_characters_not_bytes() {
        let report = build(&results(
            "1",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![issue("2", "style", "label not ascii", "maïs café")],
            }],
        ));
        // 9 characters, 11 bytes; column arithmetic follows characters.
        assert_eq!(report.annotations[0].end_column, 8);
    }

    #[test]
    fn every_annotation_is_top_tier_regardless_of_category() {
        let report = build(&results(
            "3",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![
                    issue("1", "notice", "a", "x"),
                    issue("2", "warning", "b", "x"),
                    issue("3", "style", "c", "x"),
                ],
            }],
        ));
        assert!(report
            .annotations
            .iter()
            .all(|a| a.annotation_level == AnnotationLevel::Failure));
    }

    #[test]
    fn annotation_order_follows_input_traversal() {
        let report = build(&results(
            "3",
            vec![
                LintFile {
                    file: "b/Dockerfile".to_string(),
                    issues: vec![issue("9", "c", "first", "x"), issue("2", "c", "second", "x")],
                },
                LintFile {
                    file: "a/Dockerfile".to_string(),
                    issues: vec![issue("5", "c", "third", "x")],
                },
            ],
        ));

        let order: Vec<(&str, i64)> = report
            .annotations
            .iter()
            .map(|a| (a.path.as_str(), a.start_line))
            .collect();
        assert_eq!(
            order,
            vec![("b/Dockerfile", 9), ("b/Dockerfile", 2), ("a/Dockerfile", 5)]
        );
    }

    #[test]
    fn annotation_count_is_independent_of_total_issues() {
        let report = build(&results(
            "0",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![issue("1", "c", "t", "x"), issue("2", "c", "t", "x")],
            }],
        ));
        // totalIssues says clean, the breakdown says two; no cross-check.
        assert_eq!(report.verdict, Verdict::Success);
        assert_eq!(report.annotations.len(), 2);
    }

    #[test]
    fn non_numeric_total_issues_resolves_to_success() {
        let report = build(&results("many", vec![]));
        assert_eq!(report.verdict, Verdict::Success);
        assert_eq!(report.summary, "many issue(s) found");
    }

    #[test]
    fn summary_preserves_original_total_string() {
        let report = build(&results("007", vec![]));
        assert_eq!(report.summary, "007 issue(s) found");
        assert_eq!(report.verdict, Verdict::Failure);
    }

    #[test]
    fn unparsable_line_skips_only_that_issue() {
        let report = build(&results(
            "2",
            vec![LintFile {
                file: "Dockerfile".to_string(),
                issues: vec![issue("oops", "c", "bad line", "x"), issue("4", "c", "kept", "x")],
            }],
        ));
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].start_line, 4);
        assert_eq!(report.skipped, 1);
    }
}
