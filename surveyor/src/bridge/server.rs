use crate::bridge::model::ReportModel;
use crate::workflow::config::JobConfig;
use crate::workflow::runner::Runner;
use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
};
use tokio::signal;
use trenchcore::telemetry::{LogManager, MetricsRecorder};
use trenchcore::ProfileReport;
use warp::{http::StatusCode, Filter};

pub fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Bridge that hosts the report HTTP endpoint and computes posted jobs.
#[derive(Clone)]
pub struct ReportBridge {
    latest: Arc<RwLock<Option<ProfileReport>>>,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl ReportBridge {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(RwLock::new(None)),
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new("bridge"),
        }
    }

    pub fn publish(&self, report: &ProfileReport) -> Result<()> {
        let mut guard = self
            .latest
            .write()
            .map_err(|_| anyhow!("report state lock poisoned"))?;
        *guard = Some(report.clone());
        self.metrics.record_profile(report.results.len());
        println!(
            "[bridge] profile points: {}, excavate: {}, fill: {}",
            report.summary.point_count, report.summary.excavate_count, report.summary.fill_count
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    /// Runs a posted job and makes its report the latest one.
    pub fn submit(&self, job: JobConfig) -> Result<ProfileReport> {
        match Runner::new(job).execute() {
            Ok(result) => {
                self.publish(&result.report)?;
                Ok(result.report)
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger.warn(&format!("compute request failed: {:#}", err));
                Err(err)
            }
        }
    }

    pub fn snapshot(&self) -> ReportModel {
        let counters = self.metrics.snapshot();
        let report = self
            .latest
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        ReportModel { report, counters }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone + Send + Sync + 'static
    {
        let bridge = self.clone();
        let bridge_filter = warp::any().map(move || bridge.clone());

        let get_route = warp::path("profile")
            .and(warp::path::end())
            .and(warp::get())
            .and(bridge_filter.clone())
            .map(|bridge: ReportBridge| warp::reply::json(&bridge.snapshot()));

        let post_route = warp::path("compute")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(bridge_filter)
            .map(|job: JobConfig, bridge: ReportBridge| match bridge.submit(job) {
                Ok(report) => {
                    warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)
                }
                Err(err) => warp::reply::with_status(
                    warp::reply::json(&json!({
                        "status": "error",
                        "message": format!("{:#}", err),
                    })),
                    StatusCode::BAD_REQUEST,
                ),
            });

        get_route.or(post_route)
    }

    /// Serves the routes until Ctrl+C.
    pub async fn serve(&self, addr: SocketAddr) -> Result<()> {
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                let _ = signal::ctrl_c().await;
            })
            .with_context(|| format!("binding report bridge on {}", addr))?;
        self.publish_status(&format!(
            "HTTP bridge listening on http://{} (Ctrl+C to stop)...",
            bound
        ));
        server.await;

        let counters = self.metrics.snapshot();
        self.logger.record(&format!(
            "bridge stopped after {} profiles ({} points), {} errors",
            counters.profiles, counters.points, counters.errors
        ));
        Ok(())
    }
}

impl Default for ReportBridge {
    fn default() -> Self {
        Self::new()
    }
}
