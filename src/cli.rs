use crate::error::{Error, Result};

/// Which reports this invocation should run, validated before any network
/// activity. Replaces mode flags scattered through argument handling with
/// one value the command handler consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub week_stats: bool,
    /// Stuck-PR threshold in days; `None` means the report was not requested.
    pub stuck_threshold: Option<i64>,
}

impl RunPlan {
    /// Build a plan from raw option values. At least one mode must be
    /// requested and the stuck threshold must be non-negative.
    pub fn new(week_stats: bool, stuck_prs: Option<i64>) -> Result<Self> {
        if !week_stats && stuck_prs.is_none() {
            return Err(Error::NoModeSelected);
        }
        if let Some(days) = stuck_prs {
            if days < 0 {
                return Err(Error::NegativeThreshold(days));
            }
        }

        Ok(RunPlan {
            week_stats,
            stuck_threshold: stuck_prs,
        })
    }
}
