//! Rollup background daemon.
//!
//! Decouples triggering from execution: callers enqueue a trigger through
//! the handle and the daemon's loop performs the run. A bounded channel of
//! capacity one coalesces triggers — retrying a trigger while a run is
//! already pending enqueues nothing, so a retried request never executes
//! the computation twice. Scheduled runs tick on a fixed interval
//! independent of triggers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info, warn};

use crate::domain::models::RollupConfig;
use crate::services::rollup_engine::RollupEngine;

/// Configuration for the rollup daemon.
#[derive(Debug, Clone)]
pub struct RollupDaemonConfig {
    /// Interval between scheduled runs.
    pub run_interval: Duration,
    /// Whether to run on startup.
    pub run_on_startup: bool,
    /// Maximum consecutive failures before stopping.
    pub max_consecutive_failures: u32,
}

impl Default for RollupDaemonConfig {
    fn default() -> Self {
        Self {
            run_interval: Duration::from_secs(3600),
            run_on_startup: false,
            max_consecutive_failures: 5,
        }
    }
}

impl From<&RollupConfig> for RollupDaemonConfig {
    fn from(config: &RollupConfig) -> Self {
        Self {
            run_interval: Duration::from_secs(config.interval_secs),
            run_on_startup: config.run_on_startup,
            max_consecutive_failures: config.max_consecutive_failures,
        }
    }
}

/// Reason the daemon stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Requested to stop.
    Requested,
    /// Too many consecutive failures.
    TooManyFailures,
}

/// Status of the rollup daemon.
#[derive(Debug, Clone, Default)]
pub struct DaemonStatus {
    pub running: bool,
    pub total_runs: u64,
    pub successful_runs: u64,
    pub failed_runs: u64,
}

/// Handle to control the rollup daemon.
#[derive(Clone)]
pub struct DaemonHandle {
    stop_flag: Arc<AtomicBool>,
    trigger_tx: mpsc::Sender<()>,
    status: Arc<RwLock<DaemonStatus>>,
}

impl DaemonHandle {
    /// Enqueue a rollup run without executing it inline.
    ///
    /// Safe to retry: when a run is already pending the trigger is
    /// dropped instead of queueing a duplicate.
    pub fn trigger(&self) {
        match self.trigger_tx.try_send(()) {
            Ok(()) => info!("rollup run enqueued"),
            Err(mpsc::error::TrySendError::Full(())) => {
                info!("rollup run already pending, trigger coalesced");
            }
            Err(mpsc::error::TrySendError::Closed(())) => {
                warn!("rollup daemon is not running, trigger dropped");
            }
        }
    }

    /// Request the daemon to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Release);
    }

    /// Get current daemon status.
    pub async fn status(&self) -> DaemonStatus {
        self.status.read().await.clone()
    }
}

/// Rollup background daemon.
pub struct RollupDaemon {
    engine: Arc<RollupEngine>,
    config: RollupDaemonConfig,
}

impl RollupDaemon {
    pub fn new(engine: Arc<RollupEngine>, config: RollupDaemonConfig) -> Self {
        Self { engine, config }
    }

    /// Spawn the daemon loop, returning its control handle.
    pub fn spawn(self) -> (DaemonHandle, JoinHandle<StopReason>) {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let status = Arc::new(RwLock::new(DaemonStatus::default()));
        let (trigger_tx, trigger_rx) = mpsc::channel(1);

        let handle = DaemonHandle {
            stop_flag: stop_flag.clone(),
            trigger_tx,
            status: status.clone(),
        };

        let join = tokio::spawn(run_loop(
            self.engine,
            self.config,
            stop_flag,
            status,
            trigger_rx,
        ));

        (handle, join)
    }
}

async fn run_loop(
    engine: Arc<RollupEngine>,
    config: RollupDaemonConfig,
    stop_flag: Arc<AtomicBool>,
    status: Arc<RwLock<DaemonStatus>>,
    mut trigger_rx: mpsc::Receiver<()>,
) -> StopReason {
    {
        let mut status = status.write().await;
        status.running = true;
    }
    info!(interval_secs = config.run_interval.as_secs(), "rollup daemon started");

    let mut consecutive_failures = 0u32;
    let mut interval_timer = interval(config.run_interval);
    // The first tick of a tokio interval fires immediately; consume it so
    // the schedule starts one full interval out unless run_on_startup.
    interval_timer.tick().await;

    if config.run_on_startup {
        run_once(&engine, &status, &mut consecutive_failures).await;
    }

    let reason = loop {
        if stop_flag.load(Ordering::Acquire) {
            break StopReason::Requested;
        }

        tokio::select! {
            _ = interval_timer.tick() => {
                run_once(&engine, &status, &mut consecutive_failures).await;
            }
            received = trigger_rx.recv() => {
                if received.is_none() {
                    break StopReason::Requested;
                }
                run_once(&engine, &status, &mut consecutive_failures).await;
            }
            _ = tokio::time::sleep(Duration::from_millis(200)) => {
                // Re-check the stop flag between long waits.
                continue;
            }
        }

        if consecutive_failures >= config.max_consecutive_failures {
            error!(
                failures = consecutive_failures,
                "rollup daemon stopping after repeated failures"
            );
            break StopReason::TooManyFailures;
        }
    };

    {
        let mut status = status.write().await;
        status.running = false;
    }
    info!(?reason, "rollup daemon stopped");

    reason
}

async fn run_once(
    engine: &Arc<RollupEngine>,
    status: &Arc<RwLock<DaemonStatus>>,
    consecutive_failures: &mut u32,
) {
    {
        let mut status = status.write().await;
        status.total_runs += 1;
    }

    match engine.run().await {
        Ok(_) => {
            *consecutive_failures = 0;
            let mut status = status.write().await;
            status.successful_runs += 1;
        }
        Err(error) => {
            *consecutive_failures += 1;
            error!(%error, "rollup run failed");
            let mut status = status.write().await;
            status.failed_runs += 1;
        }
    }
}
