use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const GIT_PROGRAM: &str = "git";

pub struct GitCli {
    program: &'static str,
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            program: GIT_PROGRAM,
            workspace_root,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_program(program: &'static str, workspace_root: PathBuf) -> Self {
        Self {
            program,
            workspace_root,
        }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn numstat(&self) -> AppResult<String> {
        debug!(
            program = self.program,
            workspace = %self.workspace_root.display(),
            "running git diff --numstat"
        );

        let output = Command::new(self.program)
            .args(["diff", "--numstat"])
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!("failed to run {}: {err}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git diff exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
