// File export of analysis results.
// Writes member lists as CSV or JSON and the summary as JSON.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::analytics::Summary;
use crate::error::{Result, TrackerError};
use crate::github::Member;

/// Output format for member lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(TrackerError::Other(format!("unknown export format: {}", other))),
        }
    }
}

/// Flattened member row written to export files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedUser {
    pub login: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl From<&Member> for ExportedUser {
    fn from(member: &Member) -> Self {
        Self {
            login: member.login.clone(),
            name: member.name.clone().unwrap_or_default(),
            url: member.html_url.clone().unwrap_or_default(),
            account_type: member.account_type.clone().unwrap_or_default(),
            public_repos: member.public_repos.unwrap_or(0),
            followers: member.followers.unwrap_or(0),
            following: member.following.unwrap_or(0),
        }
    }
}

/// Export a member list to `path`.
///
/// Returns `Ok(false)` without writing when a CSV export has no rows.
pub fn export_user_list(users: &[Member], path: &Path, format: ExportFormat) -> Result<bool> {
    let rows: Vec<ExportedUser> = users.iter().map(ExportedUser::from).collect();

    match format {
        ExportFormat::Json => {
            write_json(&rows, path)?;
            Ok(true)
        }
        ExportFormat::Csv => {
            if rows.is_empty() {
                return Ok(false);
            }
            ensure_parent(path)?;
            let mut writer = csv::Writer::from_path(path)?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            Ok(true)
        }
    }
}

/// Export the summary as pretty JSON, adding a `.json` extension if missing.
///
/// Returns the path actually written.
pub fn export_summary(summary: &Summary, path: &Path) -> Result<PathBuf> {
    let path = if path.extension().is_some_and(|ext| ext == "json") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".json");
        PathBuf::from(name)
    };

    write_json(summary, &path)?;
    Ok(path)
}

fn write_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
