//! Bounded-concurrency batch scheduler.
//!
//! Single-threaded polling loop: start jobs until `max_concurrent_jobs` are
//! in progress, sleep, reap the ones that have finished, start one pending
//! job per freed slot, and repeat until nothing is pending or running.
//! Parallelism comes entirely from the SOG subprocesses.

use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::thread;
use std::time::Duration;

use tracing::{error, info};

use super::Job;
use crate::run::{self, ProcessHandle, RunError};

/// A started job that can be polled without blocking.
pub trait JobHandle {
    fn pid(&self) -> u32;

    /// `Some(exit code)` once the job has finished.
    fn try_wait(&mut self) -> io::Result<Option<i32>>;
}

/// Starts jobs.
pub trait JobLauncher {
    type Handle: JobHandle;

    fn launch(&mut self, job: &Job) -> Result<Self::Handle, RunError>;
}

/// Runs each job as a `nice`d SOG subprocess.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl JobLauncher for ProcessLauncher {
    type Handle = ProcessHandle;

    fn launch(&mut self, job: &Job) -> Result<ProcessHandle, RunError> {
        run::launch(&job.run_options())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub name: String,
    pub returncode: i32,
}

/// Outcomes in completion order, and the largest absolute exit code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
    pub returncode: i32,
}

impl BatchReport {
    fn record(&mut self, name: String, returncode: i32) {
        self.returncode = self.returncode.max(returncode.saturating_abs());
        self.outcomes.push(JobOutcome { name, returncode });
    }
}

struct Running<H> {
    name: String,
    handle: H,
}

#[derive(Debug, Clone, Copy)]
pub struct BatchScheduler {
    max_concurrent_jobs: usize,
    poll_interval: Duration,
}

impl BatchScheduler {
    pub fn new(max_concurrent_jobs: usize, poll_interval: Duration) -> Self {
        Self {
            max_concurrent_jobs: max_concurrent_jobs.max(1),
            poll_interval,
        }
    }

    /// Run every job and report how they ended.
    ///
    /// A job that fails to start counts as exit code 1; the other jobs
    /// still run.
    pub fn run<L: JobLauncher>(&self, jobs: Vec<Job>, launcher: &mut L) -> BatchReport {
        let mut pending: VecDeque<Job> = jobs.into();
        let mut in_progress: BTreeMap<u32, Running<L::Handle>> = BTreeMap::new();
        let mut report = BatchReport::default();

        self.fill(&mut pending, &mut in_progress, launcher, &mut report);
        while !(pending.is_empty() && in_progress.is_empty()) {
            thread::sleep(self.poll_interval);
            Self::reap(&mut in_progress, &mut report);
            self.fill(&mut pending, &mut in_progress, launcher, &mut report);
        }

        info!(
            jobs = report.outcomes.len(),
            returncode = report.returncode,
            "Batch finished"
        );
        report
    }

    /// Start pending jobs until every slot is taken.
    fn fill<L: JobLauncher>(
        &self,
        pending: &mut VecDeque<Job>,
        in_progress: &mut BTreeMap<u32, Running<L::Handle>>,
        launcher: &mut L,
        report: &mut BatchReport,
    ) {
        while in_progress.len() < self.max_concurrent_jobs {
            let Some(job) = pending.pop_front() else {
                break;
            };
            match launcher.launch(&job) {
                Ok(handle) => {
                    let pid = handle.pid();
                    info!(job = %job.name, pid, "Started job");
                    in_progress.insert(pid, Running { name: job.name, handle });
                }
                Err(e) => {
                    error!(job = %job.name, error = %e, "Job failed to start");
                    report.record(job.name, 1);
                }
            }
        }
    }

    /// Remove finished jobs, folding their exit codes into the report.
    fn reap<H: JobHandle>(in_progress: &mut BTreeMap<u32, Running<H>>, report: &mut BatchReport) {
        let mut finished = Vec::new();
        for (pid, running) in in_progress.iter_mut() {
            match running.handle.try_wait() {
                Ok(Some(code)) => {
                    info!(job = %running.name, returncode = code, "Finished job");
                    finished.push((*pid, code));
                }
                Ok(None) => {}
                Err(e) => {
                    error!(job = %running.name, pid, error = %e, "Lost track of job");
                    finished.push((*pid, 1));
                }
            }
        }
        for (pid, code) in finished {
            if let Some(running) = in_progress.remove(&pid) {
                report.record(running.name, code);
            }
        }
    }
}
