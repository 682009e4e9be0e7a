use crate::types::report::CheckReport;

pub fn to_text(report: &CheckReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("verdict: {}\n", report.verdict.as_str()));
    output.push_str(&format!("summary: {}\n", report.summary));

    output.push_str("annotations:\n");
    if report.annotations.is_empty() {
        output.push_str("- none\n");
    } else {
        for annotation in &report.annotations {
            output.push_str(&format!(
                "- {}:{} {}\n",
                annotation.path, annotation.start_line, annotation.message
            ));
        }
    }

    if report.skipped > 0 {
        output.push_str(&format!(
            "skipped {} issue(s) with unparsable line numbers\n",
            report.skipped
        ));
    }

    output
}
