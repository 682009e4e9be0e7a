use crate::config::GithubContext;
use crate::error::{DocklintError, Result};
use crate::types::report::{Annotation, CheckReport, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const APP_USER_AGENT: &str = concat!("docklint-check/", env!("CARGO_PKG_VERSION"));

/// Client for the commit check-run lifecycle: open one pending check
/// before linting, complete it once with the verdict and annotations.
pub struct CheckClient {
    http: reqwest::blocking::Client,
    ctx: GithubContext,
}

#[derive(Debug, Serialize)]
struct CreatePayload<'a> {
    name: &'a str,
    head_sha: &'a str,
    status: &'a str,
    started_at: String,
}

#[derive(Debug, Serialize)]
struct UpdatePayload<'a> {
    status: &'a str,
    conclusion: &'a str,
    completed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<CheckOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    title: &'a str,
    summary: &'a str,
    annotations: &'a [Annotation],
}

#[derive(Debug, Deserialize)]
struct CheckRunCreated {
    id: u64,
}

impl CheckClient {
    pub fn new(ctx: GithubContext) -> Self {
        CheckClient {
            http: reqwest::blocking::Client::new(),
            ctx,
        }
    }

    /// Open a check run in `in_progress` state against the current
    /// commit and return its id.
    pub fn create(&self, check_name: &str) -> Result<u64> {
        let url = format!(
            "{}/repos/{}/check-runs",
            self.ctx.api_url, self.ctx.repository
        );
        let payload = CreatePayload {
            name: check_name,
            head_sha: &self.ctx.sha,
            status: "in_progress",
            started_at: chrono::Utc::now().to_rfc3339(),
        };

        debug!("creating check run at {url}");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.ctx.token)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, APP_USER_AGENT)
            .json(&payload)
            .send()?;

        let response = Self::require_success("create", response)?;
        let created: CheckRunCreated = response.json()?;
        info!("created check run {}", created.id);
        Ok(created.id)
    }

    /// Complete the check run with the report's verdict, summary, and
    /// annotations attached.
    pub fn complete(&self, id: u64, check_name: &str, report: &CheckReport) -> Result<()> {
        self.update(
            id,
            report.verdict,
            Some(CheckOutput {
                title: check_name,
                summary: &report.summary,
                annotations: &report.annotations,
            }),
        )
    }

    /// Complete the check run as failed with no detailed output. Used
    /// on the error path so the check never stays `in_progress`.
    pub fn complete_as_failed(&self, id: u64) -> Result<()> {
        self.update(id, Verdict::Failure, None)
    }

    fn update(&self, id: u64, verdict: Verdict, output: Option<CheckOutput<'_>>) -> Result<()> {
        let url = format!(
            "{}/repos/{}/check-runs/{}",
            self.ctx.api_url, self.ctx.repository, id
        );
        let payload = UpdatePayload {
            status: "completed",
            conclusion: verdict.as_str(),
            completed_at: chrono::Utc::now().to_rfc3339(),
            output,
        };

        debug!("completing check run {id} as {}", verdict.as_str());
        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.ctx.token)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, APP_USER_AGENT)
            .json(&payload)
            .send()?;

        Self::require_success("update", response)?;
        Ok(())
    }

    fn require_success(
        action: &str,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(DocklintError::Reporting(format!(
            "check-run {action} returned {status}: {}",
            body.trim()
        )))
    }
}
