use crate::domain::model::{LayoutId, Page, RequestContext};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "page-context")]
#[command(about = "Resolve the page layout a request would be rendered with")]
pub struct CliArgs {
    /// Path to TOML configuration file (modules, view cookie, layouts)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page as a JSON file
    #[arg(long, conflicts_with = "mobile_layout")]
    pub page: Option<PathBuf>,

    /// Mobile layout id of an ad-hoc page
    #[arg(long)]
    pub mobile_layout: Option<u32>,

    /// Request cookie, NAME=VALUE
    #[arg(long = "cookie", value_parser = parse_key_value)]
    pub cookies: Vec<(String, String)>,

    /// Request header, NAME=VALUE
    #[arg(long = "header", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// Skip client-hint detection and treat the device as mobile (or not)
    #[arg(long)]
    pub mobile: Option<bool>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.trim().is_empty() {
        return Err(format!("missing name in '{}'", raw));
    }
    Ok((name.trim().to_string(), value.to_string()))
}

impl CliArgs {
    pub fn request_context(&self) -> RequestContext {
        let request = self
            .cookies
            .iter()
            .fold(RequestContext::new(), |request, (name, value)| {
                request.with_cookie(name.clone(), value.clone())
            });
        self.headers
            .iter()
            .fold(request, |request, (name, value)| {
                request.with_header(name, value.clone())
            })
    }

    pub fn page(&self) -> Result<Page> {
        match &self.page {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            None => Ok(Page {
                mobile_layout: self.mobile_layout.map(LayoutId),
                ..Page::default()
            }),
        }
    }
}
