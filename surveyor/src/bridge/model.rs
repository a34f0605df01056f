use serde::{Deserialize, Serialize};
use trenchcore::telemetry::ProfileCounters;
use trenchcore::ProfileReport;

/// State served to report viewers: the latest profile and request counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportModel {
    pub report: Option<ProfileReport>,
    #[serde(flatten)]
    pub counters: ProfileCounters,
}
