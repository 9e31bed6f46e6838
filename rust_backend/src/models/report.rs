use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id_type!(
    /// Identifier of a generated report.
    ReportId
);

crate::define_label_enum!(
    ReportType {
        Inventory => "inventory",
        Maintenance => "maintenance",
        Performance => "performance",
    }
);

crate::define_label_enum!(
    ReportFormat {
        Csv => "csv",
        Pdf => "pdf",
        Excel => "excel",
    }
);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Descriptor of a generated report. No file is ever produced; the download
/// link is a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub date_range: DateRange,
    pub generated_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}
