use crate::math::precision::PrecisionHelper;
use crate::prelude::{Action, ProfileResult, TrenchConfig};
use crate::profile::summary::ProfileSummary;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One presentation row, with every figure already rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub distance: String,
    pub surface: String,
    pub trench_base: String,
    pub depth: String,
    /// Magnitude of the cut or fill.
    pub magnitude: String,
    pub action: Action,
}

impl ReportRow {
    pub fn from_result(result: &ProfileResult) -> Self {
        Self {
            distance: PrecisionHelper::display(result.distance),
            surface: PrecisionHelper::display(result.surface_elevation),
            trench_base: PrecisionHelper::display(result.trench_base_elevation),
            depth: PrecisionHelper::display(result.depth),
            magnitude: PrecisionHelper::display(result.depth.abs()),
            action: result.action,
        }
    }

    pub fn action_label(&self) -> String {
        format!("{}m {}", self.magnitude, self.action)
    }
}

/// Everything a caller needs to render or export a computed profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub config: TrenchConfig,
    pub summary: ProfileSummary,
    pub rows: Vec<ReportRow>,
    pub results: Vec<ProfileResult>,
}

impl ProfileReport {
    pub fn new(
        name: Option<String>,
        config: &TrenchConfig,
        results: Vec<ProfileResult>,
        slope: f64,
    ) -> Self {
        let summary = ProfileSummary::from_results(&results, slope);
        let rows = results.iter().map(ReportRow::from_result).collect();
        Self {
            name,
            config: config.clone(),
            summary,
            rows,
            results,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain text table: distance, surface, trench base and required action.
    pub fn render_table(&self) -> String {
        let origin = self.config.direction.label();
        let mut out = String::new();
        if let Some(name) = &self.name {
            let _ = writeln!(out, "{}", name);
        }
        let _ = writeln!(
            out,
            "{:>12} {:>12} {:>12}  {}",
            format!("Dist. ({})", origin),
            "Surface",
            "Trench base",
            "Action required"
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>12} {:>12} {:>12}  {}",
                format!("{}m", row.distance),
                format!("{}m", row.surface),
                format!("{}m", row.trench_base),
                row.action_label()
            );
        }
        let _ = writeln!(
            out,
            "slope {} m/m | excavate {} (max {}m) | fill {} (max {}m)",
            PrecisionHelper::display(self.summary.slope),
            self.summary.excavate_count,
            PrecisionHelper::display(self.summary.max_cut),
            self.summary.fill_count,
            PrecisionHelper::display(self.summary.max_fill)
        );
        out
    }
}
