// src/exec/command.rs

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::{Child, ChildStdout, Command};
use tracing::{info, warn};

/// Spawn `kubectl get -w <type> <name> -o=json` with stdout piped back to us.
///
/// kubectl's own stderr passes straight through to the operator's terminal.
/// `kill_on_drop` makes dropping the child (e.g. on Ctrl-C) terminate the
/// watch instead of leaving it orphaned.
pub fn spawn_watch(resource_type: &str, resource_name: &str) -> Result<(Child, ChildStdout)> {
    let mut cmd = Command::new("kubectl");
    cmd.arg("get")
        .arg("-w")
        .arg(resource_type)
        .arg(resource_name)
        .arg("-o=json")
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd.spawn().with_context(|| {
        format!("spawning `kubectl get -w {resource_type} {resource_name} -o=json`")
    })?;

    let stdout = child
        .stdout
        .take()
        .context("kubectl stdout pipe missing after spawn")?;

    info!(resource = %resource_type, name = %resource_name, "kubectl watch started");
    Ok((child, stdout))
}

/// Wait for the watch subprocess after its stream has ended and log an
/// abnormal exit. kubectl failing is not a crash of this program.
pub async fn wait_and_report(mut child: Child) -> Result<()> {
    let status = child
        .wait()
        .await
        .context("waiting for kubectl watch process")?;

    if !status.success() {
        warn!(
            exit_code = status.code().unwrap_or(-1),
            "kubectl watch exited abnormally"
        );
    }
    Ok(())
}
