use chrono::Utc;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::catalog::{MenuCatalog, MenuItem};

const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        };
        write!(f, "{}", value)
    }
}

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub schema_version: &'static str,
    pub execution_id: String,
    pub tool: &'static str,
    pub timestamp: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
    pub message: String,
    pub remediation: Option<String>,
}

#[derive(Serialize)]
pub struct MenuResponse<'a> {
    pub items: &'a [MenuItem],
    pub total_count: u64,
}

impl<'a> MenuResponse<'a> {
    pub fn from_catalog(catalog: &'a MenuCatalog) -> Self {
        Self {
            items: catalog.list(),
            total_count: catalog.len() as u64,
        }
    }
}

pub fn json_response<T>(data: T) -> JsonResponse<T> {
    JsonResponse {
        schema_version: SCHEMA_VERSION,
        execution_id: execution_id(),
        tool: "coffeeshop",
        timestamp: Utc::now().to_rfc3339(),
        data,
    }
}

fn execution_id() -> String {
    format!("{:x}-{:x}", Utc::now().timestamp(), std::process::id())
}
