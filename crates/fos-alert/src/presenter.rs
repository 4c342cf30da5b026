//! Presenter
//!
//! Defers alert display onto the UI thread's executor so `present` never
//! blocks the caller.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use smol::LocalExecutor;

use crate::alert::PermissionAlert;

/// Single-threaded executor bound to the UI thread.
///
/// Tasks run in the order they were spawned.
#[derive(Clone)]
pub struct UiScheduler {
    executor: Rc<LocalExecutor<'static>>,
}

impl Default for UiScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl UiScheduler {
    pub fn new() -> Self {
        Self {
            executor: Rc::new(LocalExecutor::new()),
        }
    }

    /// Queue a task; it runs on a later tick
    pub fn spawn(&self, future: impl Future<Output = ()> + 'static) {
        self.executor.spawn(future).detach();
    }

    /// Run one ready task; false if none was ready
    pub fn tick(&self) -> bool {
        self.executor.try_tick()
    }

    /// Run ready tasks until none remain; returns how many ran
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.executor.try_tick() {
            ran += 1;
        }
        ran
    }

    /// Drive the executor until `future` completes
    pub fn block_on<T>(&self, future: impl Future<Output = T>) -> T {
        smol::block_on(self.executor.run(future))
    }
}

/// Schedules alerts for display
#[derive(Clone, Default)]
pub struct Presenter {
    scheduler: UiScheduler,
    presented: Rc<Cell<u64>>,
}

impl Presenter {
    pub fn new(scheduler: UiScheduler) -> Self {
        Self {
            scheduler,
            presented: Rc::new(Cell::new(0)),
        }
    }

    pub fn scheduler(&self) -> &UiScheduler {
        &self.scheduler
    }

    /// Number of alerts handed to `present` so far
    pub fn presented(&self) -> u64 {
        self.presented.get()
    }

    /// Schedule `alert` for display and return immediately.
    ///
    /// The dialog is built and shown on a later scheduler tick. Presenting a
    /// second alert before the first is answered is the caller's problem; the
    /// host decides whether dialogs stack or queue.
    pub fn present(&self, alert: PermissionAlert) {
        let seq = self.presented.get();
        self.presented.set(seq + 1);

        tracing::debug!("Scheduling {:?} alert #{}", alert.variant(), seq);
        self.scheduler.spawn(async move {
            alert.show();
        });
    }
}
