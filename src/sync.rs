// Clone-or-update decision, per-module execution, result types

use crate::git::VcsClient;
use crate::registry::ModuleEntry;
use std::path::Path;
use std::time::{Duration, Instant};

/// Steps of a single module sync, reported through the callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    Started,
    Cloning,
    Fetching,
    Pulling,
    Completed,
}

/// Action chosen for a module based on the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Clone,
    Update,
}

#[derive(Debug)]
pub struct SyncResult {
    pub name: String,
    pub action: SyncAction,
    pub outcome: SyncOutcome,
    pub duration: Duration,
}

#[derive(Debug)]
pub enum SyncOutcome {
    Success,
    Failed(SyncFailure),
}

#[derive(Debug)]
pub struct SyncFailure {
    pub error: String,
    pub step: SyncStep,
}

#[derive(Debug)]
struct SyncError {
    source: anyhow::Error,
    step: SyncStep,
}

/// Callbacks observing a sync run. Implemented by the progress and
/// logging layers in `output`.
pub trait SyncCallbacks {
    fn on_module_start(&self, entry: &ModuleEntry, action: SyncAction);
    fn on_step(&self, entry: &ModuleEntry, step: SyncStep);
    fn on_module_complete(&self, result: &SyncResult);
}

fn at_step<T>(step: SyncStep, result: anyhow::Result<T>) -> Result<T, SyncError> {
    result.map_err(|e| SyncError { source: e, step })
}

/// Chooses clone or update for `name`, depending on whether a filesystem
/// entry with that name already exists under `root`.
///
/// Any existing entry selects the update path, even a plain file; git
/// itself reports the failure in that case.
pub fn plan_action(root: &Path, name: &str) -> SyncAction {
    if root.join(name).exists() {
        SyncAction::Update
    } else {
        SyncAction::Clone
    }
}

/// Synchronizes a single module. Failures are captured in the returned
/// result rather than propagated.
pub fn sync_module<C>(
    client: &C,
    root: &Path,
    entry: &ModuleEntry,
    callbacks: &impl SyncCallbacks,
) -> SyncResult
where
    C: VcsClient,
{
    let started = Instant::now();
    let action = plan_action(root, &entry.name);
    callbacks.on_module_start(entry, action);

    let outcome = match do_sync(client, root, entry, action, &|step| {
        callbacks.on_step(entry, step);
    }) {
        Ok(()) => SyncOutcome::Success,
        Err(err) => SyncOutcome::Failed(SyncFailure {
            error: format!("{:#}", err.source),
            step: err.step,
        }),
    };

    let result = SyncResult {
        name: entry.name.clone(),
        action,
        outcome,
        duration: started.elapsed(),
    };
    callbacks.on_module_complete(&result);
    result
}

fn do_sync<C, F>(
    client: &C,
    root: &Path,
    entry: &ModuleEntry,
    action: SyncAction,
    on_step: &F,
) -> Result<(), SyncError>
where
    C: VcsClient,
    F: Fn(SyncStep),
{
    on_step(SyncStep::Started);

    match action {
        SyncAction::Clone => {
            on_step(SyncStep::Cloning);
            at_step(
                SyncStep::Cloning,
                client.clone_repo(root, &entry.url, &entry.name),
            )?;
        }
        SyncAction::Update => {
            on_step(SyncStep::Fetching);
            at_step(SyncStep::Fetching, client.fetch(root, &entry.name))?;

            on_step(SyncStep::Pulling);
            at_step(SyncStep::Pulling, client.pull(root, &entry.name))?;
        }
    }

    on_step(SyncStep::Completed);
    Ok(())
}

/// Synchronizes every entry in registry order.
///
/// Entries are processed strictly sequentially; a failing entry is
/// recorded in its result and the run continues with the next one.
pub fn sync_all<C>(
    client: &C,
    root: &Path,
    entries: &[ModuleEntry],
    callbacks: &impl SyncCallbacks,
) -> Vec<SyncResult>
where
    C: VcsClient,
{
    entries
        .iter()
        .map(|entry| sync_module(client, root, entry, callbacks))
        .collect()
}
