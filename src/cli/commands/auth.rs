use anyhow::Context;
use serde_json::json;

use crate::auth::{self, TokenService};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config;

/// For seeding users directly in the database.
pub fn hash_password(password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let digest = auth::hash_password(password);
    output_success(&output_format, &digest, Some(json!({ "digest": digest })))
}

pub fn issue_token(username: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let tokens = TokenService::new(&config::config().security.secret_key).context("SECRET_KEY is not usable")?;
    let token = format!("Bearer {}", tokens.issue(username)?);
    output_success(&output_format, &token, Some(json!({ "token": token })))
}
