use tracing::debug;

use crate::domain::change::total_changed_lines;
use crate::domain::diff_size::DiffSizeResult;
use crate::services::VersionControlService;

/// Measures the pending change set and classifies it.
///
/// Fails open: when the change summary cannot be read the result is the
/// same as an empty diff.
pub async fn check_diff_size(version_control: &dyn VersionControlService) -> DiffSizeResult {
    let raw = match version_control.numstat().await {
        Ok(raw) => raw,
        Err(err) => {
            debug!(error = %err, "change summary unavailable, reporting no changes");
            return DiffSizeResult::empty();
        }
    };

    let result = DiffSizeResult::classify(total_changed_lines(&raw));
    debug!(
        lines = result.lines,
        severity = result.severity.as_str(),
        "diff size checked"
    );
    result
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::diff_size::Severity;
    use crate::error::{AppError, AppResult};

    struct FakeGit(Option<&'static str>);

    #[async_trait]
    impl VersionControlService for FakeGit {
        async fn numstat(&self) -> AppResult<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| AppError::VersionControl("not a git repository".to_string()))
        }
    }

    async fn check(raw: &'static str) -> DiffSizeResult {
        check_diff_size(&FakeGit(Some(raw))).await
    }

    #[tokio::test]
    async fn small_diff_is_ok() {
        let result = check("10\t5\tfile1.ts\n20\t0\tfile2.ts").await;
        assert_eq!(result.lines, 35);
        assert_eq!(result.severity, Severity::Ok);
        assert_eq!(result.message, None);
    }

    #[tokio::test]
    async fn medium_diff_warns() {
        let result = check("60\t50\tfile1.ts").await;
        assert_eq!(result.lines, 110);
        assert_eq!(result.severity, Severity::Warn);
        assert!(result.message.is_some());
    }

    #[tokio::test]
    async fn large_diff_is_critical() {
        let result = check("150\t60\tfile1.ts").await;
        assert_eq!(result.lines, 210);
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.message.is_some_and(|msg| msg.contains("STOP!")));
    }

    #[tokio::test]
    async fn empty_output_is_ok() {
        assert_eq!(check("").await, DiffSizeResult::empty());
    }

    #[tokio::test]
    async fn binary_rows_contribute_nothing() {
        let result = check("-\t-\tbinary.png\n5\t5\tfile.ts").await;
        assert_eq!(result.lines, 10);
        assert_eq!(result.severity, Severity::Ok);
    }

    #[tokio::test]
    async fn boundaries_through_the_pipeline() {
        assert_eq!(check("50\t50\ta.rs").await.severity, Severity::Ok);
        assert_eq!(check("51\t50\ta.rs").await.severity, Severity::Warn);
        assert_eq!(check("100\t50\ta.rs\n50\t0\tb.rs").await.severity, Severity::Warn);
        assert_eq!(check("200\t1\ta.rs").await.severity, Severity::Critical);
    }

    #[tokio::test]
    async fn adapter_failure_fails_open() {
        let result = check_diff_size(&FakeGit(None)).await;
        assert_eq!(
            result,
            DiffSizeResult {
                lines: 0,
                severity: Severity::Ok,
                message: None,
            }
        );
    }

    #[tokio::test]
    async fn missing_git_binary_fails_open() {
        let git = crate::infra::git::GitCli::with_program("diffsize-no-such-git", std::env::temp_dir());
        assert_eq!(check_diff_size(&git).await, DiffSizeResult::empty());
    }
}
