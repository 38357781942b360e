//! Parsing of the upgrade job's `progress` field.

/// Number of stages in the upgrade job. The last stage is 100%.
pub const MAX_STAGE: u8 = 9;

/// Stage and human description derived from a progress string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpgradeProgress {
    pub stage: u8,
    pub description: String,
}

impl UpgradeProgress {
    /// Parse `"<stage>_<words_joined_by_underscore>"`.
    ///
    /// An absent progress, or a stage that is not a number, yields stage 0.
    /// Stages above [`MAX_STAGE`] are clamped.
    pub fn parse(progress: Option<&str>) -> Self {
        let Some(progress) = progress else {
            return Self::default();
        };

        let mut parts = progress.split('_');
        let stage = match parts.next().map(str::trim).map(str::parse::<u8>) {
            Some(Ok(stage)) => stage.min(MAX_STAGE),
            _ => {
                tracing::debug!(
                    event = "core.upgrade.progress_unparseable",
                    progress = progress,
                    "Progress stage is not a number, falling back to 0"
                );
                0
            }
        };
        let description = parts.collect::<Vec<_>>().join(" ");

        Self { stage, description }
    }

    /// Completion as a percentage with two decimals, e.g. `"33.33"`.
    pub fn percentage(&self) -> String {
        format!("{:.2}", f64::from(self.stage) / f64::from(MAX_STAGE) * 100.0)
    }
}
