//! Directory resolution: decides and creates the project directory.

use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::domain::{ProjectSpecifier, StageError, StageOutcome, TargetDirectory};
use crate::ports::{CommandRunner, Invocation};

/// Resolve the project specifier into a target directory, creating or
/// cloning it unless it is the invocation directory itself.
///
/// In debug mode only the directory name is derived; nothing is touched.
pub async fn resolve(
    runner: &impl CommandRunner,
    invocation_dir: &Path,
    specifier: &ProjectSpecifier,
    debug: bool,
) -> StageOutcome<TargetDirectory> {
    if *specifier == ProjectSpecifier::CurrentDir {
        return Ok(TargetDirectory::current());
    }

    let target = specifier.directory_name();
    if debug {
        return Ok(target);
    }

    let path = target.resolve_from(invocation_dir);
    if matches!(fs::try_exists(&path).await, Ok(true)) {
        return Err(StageError::DirectoryExists { path: target.as_path().to_path_buf() });
    }

    match specifier {
        ProjectSpecifier::Remote(remote) => {
            if !remote_reachable(runner, invocation_dir, remote).await {
                return Err(StageError::RemoteUnreachable { remote: remote.clone() });
            }
            clone(runner, invocation_dir, remote, &target).await?;
            info!(remote = %remote, target = %target, "cloned repository");
        }
        _ => {
            fs::create_dir_all(&path).await.map_err(|source| StageError::DirectoryCreate {
                path: target.as_path().to_path_buf(),
                source,
            })?;
            info!(target = %target, "created project directory");
        }
    }

    Ok(target)
}

/// Lightweight existence check of a remote repository, without cloning it.
pub async fn remote_reachable(runner: &impl CommandRunner, cwd: &Path, remote: &str) -> bool {
    let check = Invocation::new("git", ["ls-remote", "--exit-code", remote], cwd);
    match runner.run(&check).await {
        Ok(output) => output.success,
        Err(err) => {
            debug!(error = %err, "remote check could not run");
            false
        }
    }
}

async fn clone(
    runner: &impl CommandRunner,
    cwd: &Path,
    remote: &str,
    target: &TargetDirectory,
) -> StageOutcome<()> {
    let destination = target.as_path().to_string_lossy();
    let invocation = Invocation::new("git", ["clone", remote, &*destination], cwd);

    let output = runner.run(&invocation).await.map_err(|err| StageError::CloneFailed {
        remote: remote.to_string(),
        details: err.to_string(),
    })?;

    if !output.success {
        return Err(StageError::CloneFailed {
            remote: remote.to_string(),
            details: output.failure_details(),
        });
    }
    Ok(())
}
