use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{DateRange, Report, ReportFormat, ReportType};

/// Repository trait for report descriptors. Reports are append-only.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn list_reports(&self) -> RepositoryResult<Vec<Report>>;

    /// Append a report with the next sequential id.
    async fn insert_report(
        &self,
        report_type: ReportType,
        format: ReportFormat,
        date_range: DateRange,
        generated_by: &str,
    ) -> RepositoryResult<Report>;
}
