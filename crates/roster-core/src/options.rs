//! Options for import and export calls.

use chrono::NaiveDate;
use roster_transform::BuildContext;
use roster_validate::{GenderPolicy, ValidationOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Treatment of unrecognized gender cells.
    pub gender_policy: GenderPolicy,
    /// Default for blank enrollment and joined dates; the local date when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl ImportOptions {
    #[must_use]
    pub fn with_gender_policy(mut self, policy: GenderPolicy) -> Self {
        self.gender_policy = policy;
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub(crate) fn validation(&self) -> ValidationOptions {
        ValidationOptions::default().with_gender_policy(self.gender_policy)
    }

    pub(crate) fn build_context(&self) -> BuildContext {
        self.today.map_or_else(BuildContext::today, BuildContext::new)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Date stamped into the export file name; the local date when unset.
    pub date: Option<NaiveDate>,
}

impl ExportOptions {
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
