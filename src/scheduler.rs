// src/scheduler.rs

//! Periodic triggers driving a [`TitleAnimator`].
//!
//! [`Scheduler::start`] plays the role of the page-ready hook: it arms a
//! title-cycle trigger and a cursor-flicker trigger, each first firing one
//! full period after start. Title cycles are spawned per firing and are not
//! serialized here; overlap is handled by the animator's in-flight guard.
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::animator::{CycleOutcome, TitleAnimator};
use crate::config::AnimatorConfig;
use crate::surface::{CursorSurface, TextSurface};

pub struct Scheduler;

/// Running triggers. Dropping the handle without [`SchedulerHandle::shutdown`]
/// leaves them running until the runtime exits; only an explicit shutdown stops them.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn start<S>(animator: Arc<TitleAnimator<S>>, config: &AnimatorConfig) -> SchedulerHandle
    where
        S: TextSurface + CursorSurface + 'static,
    {
        let (shutdown, shutdown_rx) = watch::channel(false);

        let title_task = tokio::spawn(run_title_trigger(
            animator.clone(),
            config.title_switch_interval(),
            shutdown_rx.clone(),
        ));
        let cursor_task = tokio::spawn(run_cursor_trigger(
            animator,
            config.cursor_flicker_period(),
            shutdown_rx,
        ));

        tracing::info!(
            "Scheduler started: title every {:?}, cursor every {:?}",
            config.title_switch_interval(),
            config.cursor_flicker_period()
        );

        SchedulerHandle {
            shutdown,
            tasks: vec![title_task, cursor_task],
        }
    }
}

impl SchedulerHandle {
    /// Stop both triggers, abort any cycle still animating and wait for them.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for task in self.tasks {
            if let Err(e) = task.await {
                tracing::error!("Scheduler task failed: {}", e);
            }
        }
        tracing::info!("Scheduler stopped");
    }
}

fn periodic(period: Duration) -> time::Interval {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

async fn run_title_trigger<S>(
    animator: Arc<TitleAnimator<S>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    S: TextSurface + CursorSurface + 'static,
{
    let mut ticker = periodic(period);
    let mut cycles: JoinSet<CycleOutcome> = JoinSet::new();

    loop {
        tokio::select! {
            // A dropped handle makes `changed()` fail, which only disables this arm
            Ok(()) = shutdown.changed() => break,
            _ = ticker.tick() => {
                let animator = animator.clone();
                cycles.spawn(async move { animator.advance_to_next_title().await });
            }
            Some(result) = cycles.join_next(), if !cycles.is_empty() => {
                match result {
                    Ok(outcome) => tracing::debug!("Title cycle finished: {:?}", outcome),
                    Err(e) => tracing::error!("Title cycle panicked: {}", e),
                }
            }
        }
    }

    cycles.shutdown().await;
}

async fn run_cursor_trigger<S>(
    animator: Arc<TitleAnimator<S>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    S: TextSurface + CursorSurface + 'static,
{
    let mut ticker = periodic(period);

    loop {
        tokio::select! {
            Ok(()) = shutdown.changed() => break,
            _ = ticker.tick() => {
                animator.toggle_cursor();
            }
        }
    }
}
