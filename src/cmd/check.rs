use crate::domain::diff_size::{DiffSizeResult, Severity};
use crate::error::AppResult;
use crate::services::VersionControlService;
use crate::workflow::diff_size::check_diff_size;

#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub json: bool,
    pub fail_on: Option<Severity>,
}

pub struct CheckOutcome {
    pub result: DiffSizeResult,
    pub report: String,
    pub tripped: bool,
}

pub async fn run(
    version_control: &dyn VersionControlService,
    args: CheckCommandArgs,
) -> AppResult<CheckOutcome> {
    let result = check_diff_size(version_control).await;
    let report = if args.json {
        serde_json::to_string(&result)?
    } else {
        render_text(&result)
    };
    let tripped = exceeds(&result, args.fail_on);

    Ok(CheckOutcome {
        result,
        report,
        tripped,
    })
}

fn render_text(result: &DiffSizeResult) -> String {
    let mut report = format!(
        "Diff size: {} lines ({})",
        result.lines,
        result.severity.as_str()
    );
    if let Some(message) = result.message {
        report.push('\n');
        report.push_str(message);
    }
    report
}

fn exceeds(result: &DiffSizeResult, fail_on: Option<Severity>) -> bool {
    fail_on.is_some_and(|threshold| result.severity >= threshold)
}
