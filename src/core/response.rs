use serde::Serialize;

use crate::core::engine::{PageInfo, ShareEntry};
use crate::core::format::{format_currency, format_percentage};

/// JSON envelope wrapping every report payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Envelope for paginated payloads, carrying the pagination block alongside.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn ok(message: impl Into<String>, data: Vec<T>, pagination: PageInfo) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            pagination,
        }
    }
}

/// Display form of a [`ShareEntry`]: formatted value and `NN.NN%` share,
/// rendered verbatim by the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEntryView {
    pub label: String,
    pub revenue: String,
    pub percentage: String,
}

impl From<ShareEntry> for ShareEntryView {
    fn from(entry: ShareEntry) -> Self {
        Self {
            label: entry.label,
            revenue: format_currency(entry.value),
            percentage: format_percentage(entry.percentage),
        }
    }
}
