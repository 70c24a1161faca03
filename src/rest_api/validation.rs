//! # Request Validation
//!
//! Shape and range checks for everything crossing the boundary. The core
//! only ever sees parameters that passed through here: page/pageSize are
//! positive integers, sort fields are restricted to their enumerations,
//! ids are normalized numeric strings, and body fields satisfy the record
//! invariants.

use std::collections::HashMap;

use serde_json::Value;

use crate::application::{ApplicationPatch, NewApplication, QueryParams, SortBy, SortOrder, Status};

use super::errors::{ApiError, ApiResult};

/// Maximum accepted description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Parse and validate listing query parameters.
///
/// Absent parameters take their documented defaults (page 1, pageSize 10,
/// sort by name ascending). Unknown parameters are ignored.
pub fn parse_list_query(raw: &HashMap<String, String>) -> ApiResult<QueryParams> {
    let mut params = QueryParams::default();

    if let Some(value) = raw.get("page") {
        params.page = parse_positive("page", value)?;
    }
    if let Some(value) = raw.get("pageSize") {
        params.page_size = parse_positive("pageSize", value)?;
    }
    if let Some(value) = raw.get("sortBy") {
        params.sort_by = match value.as_str() {
            "name" => SortBy::Name,
            "status" => SortBy::Status,
            other => {
                return Err(ApiError::validation(format!(
                    "sortBy must be one of: name, status (got '{}')",
                    other
                )))
            }
        };
    }
    if let Some(value) = raw.get("sortOrder") {
        params.sort_order = match value.as_str() {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => {
                return Err(ApiError::validation(format!(
                    "sortOrder must be one of: asc, desc (got '{}')",
                    other
                )))
            }
        };
    }
    if let Some(value) = raw.get("filterByName") {
        params.filter_by_name = Some(value.clone());
    }
    if let Some(value) = raw.get("filterByStatus") {
        params.filter_by_status = Some(value.clone());
    }

    Ok(params)
}

/// Validate and normalize a path id.
///
/// Ids must be non-empty numeric strings; leading zeros are stripped so
/// "01" addresses the same record as "1".
pub fn validate_id(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("ID cannot be empty"));
    }

    trimmed
        .parse::<u64>()
        .map(|id| id.to_string())
        .map_err(|_| ApiError::validation("ID must be a numeric value"))
}

/// Validate a create request body into the store's input shape.
pub fn validate_create(body: &Value) -> ApiResult<NewApplication> {
    let obj = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidBody("expected a JSON object".to_string()))?;

    let name = require_string(obj, "name")?;
    let description = require_string(obj, "description")?;

    validate_name(&name)?;
    validate_description(&description)?;

    Ok(NewApplication { name, description })
}

/// Validate a patch request body. At least one updatable field must be
/// present; provided fields are held to the same constraints as create.
pub fn validate_patch(body: &Value) -> ApiResult<ApplicationPatch> {
    let obj = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidBody("expected a JSON object".to_string()))?;

    let mut patch = ApplicationPatch::default();

    if let Some(value) = obj.get("name") {
        let name = as_string(value, "name")?;
        validate_name(&name)?;
        patch.name = Some(name);
    }
    if let Some(value) = obj.get("description") {
        let description = as_string(value, "description")?;
        validate_description(&description)?;
        patch.description = Some(description);
    }
    if let Some(value) = obj.get("status") {
        let raw = as_string(value, "status")?;
        patch.status = Some(Status::parse(&raw).ok_or_else(|| {
            ApiError::validation("Status must be one of: in_review, approved, or rejected")
        })?);
    }

    if patch.is_empty() {
        return Err(ApiError::validation(
            "At least one field (name, description or status) must be provided.",
        ));
    }

    Ok(patch)
}

fn parse_positive(field: &str, value: &str) -> ApiResult<usize> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} cannot be empty", field)));
    }

    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a numeric value", field)))?;

    if parsed < 1 {
        return Err(ApiError::validation(format!("{} must be at least 1", field)));
    }

    Ok(parsed)
}

fn require_string(obj: &serde_json::Map<String, Value>, field: &str) -> ApiResult<String> {
    let value = obj
        .get(field)
        .ok_or_else(|| ApiError::validation(format!("{} is required", field)))?;
    as_string(value, field)
}

fn as_string(value: &Value, field: &str) -> ApiResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ApiError::validation(format!("{} must be a string", field)))
}

fn validate_name(name: &str) -> ApiResult<()> {
    if name.is_empty() {
        return Err(ApiError::validation("Name cannot be empty"));
    }
    Ok(())
}

fn validate_description(description: &str) -> ApiResult<()> {
    if description.is_empty() {
        return Err(ApiError::validation("Description cannot be empty"));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ApiError::validation(
            "Description must be at most 500 characters long",
        ));
    }
    Ok(())
}
