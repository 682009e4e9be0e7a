use crate::types::report::CheckReport;

pub fn to_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
