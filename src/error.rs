use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocklintError {
    #[error("missing environment variable: {0}")]
    MissingEnv(String),

    #[error("no lint target: pass TARGET or set INPUT_TARGET")]
    MissingTarget,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("failed to run linter `{command}`: {detail}")]
    LinterExec { command: String, detail: String },

    #[error("malformed linter output: {0}")]
    MalformedOutput(serde_json::Error),

    #[error("check-run reporting failed: {0}")]
    Reporting(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DocklintError>;
