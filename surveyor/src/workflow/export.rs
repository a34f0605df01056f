use anyhow::Context;
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use trenchcore::ProfileReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

impl ReportFormat {
    /// `.json` files are always written as JSON.
    pub fn for_path(path: &Path, fallback: ReportFormat) -> ReportFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => fallback,
        }
    }
}

pub fn render(report: &ProfileReport, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Table => Ok(report.render_table()),
        ReportFormat::Json => report.to_json().context("serializing profile report"),
    }
}

pub fn write_report<P: AsRef<Path>>(
    report: &ProfileReport,
    format: ReportFormat,
    path: P,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let format = ReportFormat::for_path(path, format);
    let body = render(report, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
