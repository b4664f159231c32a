// src/lib.rs

pub mod cli;
pub mod diff;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod snapshot;
pub mod stream;

use anyhow::Result;
use tokio::process::ChildStdout;
use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{Runtime, RuntimeOptions};
use crate::normalize::{NeatNormalizer, Normalizer, Passthrough};
use crate::report::Paint;
use crate::snapshot::BaselinePolicy;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the kubectl watch subprocess
/// - the decode → normalize → diff → report loop
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    info!(
        resource = %args.resource_type,
        name = %args.resource_name,
        "starting watchdiff"
    );

    // Startup failure here is fatal; everything after it is per-item.
    let (child, stdout) = exec::spawn_watch(&args.resource_type, &args.resource_name)?;

    let options = RuntimeOptions {
        policy: if args.diff_with_first {
            BaselinePolicy::First
        } else {
            BaselinePolicy::Previous
        },
        paint: Paint::auto(args.no_color),
    };

    let finished = if args.raw {
        drive(stdout, Passthrough, options).await?
    } else {
        drive(stdout, NeatNormalizer, options).await?
    };

    if finished {
        exec::wait_and_report(child).await?;
    }
    // On interrupt the child is dropped here instead, and kill_on_drop
    // terminates the kubectl watch.

    Ok(())
}

/// Run the loop until the stream ends (`true`) or Ctrl-C lands (`false`).
async fn drive<N: Normalizer>(
    stdout: ChildStdout,
    normalizer: N,
    options: RuntimeOptions,
) -> Result<bool> {
    let runtime = Runtime::new(stdout, normalizer, options, std::io::stdout());

    tokio::select! {
        res = runtime.run() => {
            res?;
            Ok(true)
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, stopping watch");
            Ok(false)
        }
    }
}
