//! Response envelopes for the snippet API.

use serde::Serialize;
use snipbox_core::SnippetRecord;

pub const CREATED_MESSAGE: &str = "Snippet created successfully";
pub const UPDATED_MESSAGE: &str = "Snippet updated successfully";
pub const DELETED_MESSAGE: &str = "Snippet deleted successfully";

/// `{"data": [...], "count": n}`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<SnippetRecord>,
    pub count: usize,
}

impl From<Vec<SnippetRecord>> for ListResponse {
    fn from(data: Vec<SnippetRecord>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// `{"data": {...}}`
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: SnippetRecord,
}

/// `{"data": {...}, "message": "..."}`
#[derive(Debug, Serialize)]
pub struct DataMessageResponse {
    pub data: SnippetRecord,
    pub message: &'static str,
}

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
