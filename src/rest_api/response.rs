//! # Response Formatting
//!
//! Maps the service layer's outcome envelope onto HTTP responses. Every
//! outcome serializes as the same envelope; 204 is the one exception and
//! carries no body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ServiceResponse;

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Page;

    #[test]
    fn test_success_maps_to_its_status() {
        let response = ServiceResponse::success_with_status("Application created", 1u32, 201);
        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ServiceResponse<Page> = ServiceResponse::failure("Application not found", 404);
        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_no_content_has_empty_body() {
        let response: ServiceResponse<()> = ServiceResponse::success_empty("Application deleted", 204);
        let http = response.into_response();
        assert_eq!(http.status(), StatusCode::NO_CONTENT);
    }
}
