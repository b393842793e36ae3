//! Single-threaded async runtime for the tracking commands.

use crate::errors::AppResult;
use std::future::Future;
use std::time::Duration;
use tokio::task::LocalSet;

/// Run `fut` on a current-thread runtime inside a `LocalSet`, then keep
/// running until every task it spawned (in-flight proximity checks) is done.
pub fn run_local<F, T>(fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let local = LocalSet::new();
    let out = local.block_on(&rt, fut);
    rt.block_on(local);

    // A blocked stdin read must not keep the process alive.
    rt.shutdown_timeout(Duration::from_millis(200));
    out
}
