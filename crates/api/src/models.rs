use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextListResponse {
    pub current_context: String,
    pub resource_context: ResourceContextInfo,
    pub contexts: Vec<ContextInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContextInfo {
    pub path: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextInfo {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body returned when the tag stores its result in a variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributesResponse {
    pub attributes: BTreeMap<String, String>,
    pub scope: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
