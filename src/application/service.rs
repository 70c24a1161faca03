//! # Application Service
//!
//! Wraps the store, runs the query processor for listings, and classifies
//! every result into the outcome envelope the boundary serializes. Store
//! faults are logged here and surface only as a generic internal-error
//! message; details never leak to callers.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use super::model::{Application, ApplicationPatch, NewApplication};
use super::query::{paginate, Page, QueryParams};
use super::store::ApplicationStore;

/// Uniform outcome envelope returned by every service operation.
///
/// `status_code` carries the HTTP classification of the outcome
/// (200/201/204/404/500); the boundary maps it onto the transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    pub status_code: u16,
}

impl<T> ServiceResponse<T> {
    /// Success with a payload (200).
    pub fn success(message: impl Into<String>, object: T) -> Self {
        Self::success_with_status(message, object, 200)
    }

    /// Success with a payload and an explicit status, e.g. 201 for create.
    pub fn success_with_status(message: impl Into<String>, object: T, status_code: u16) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: Some(object),
            status_code,
        }
    }

    /// Success with no payload, e.g. 204 for delete.
    pub fn success_empty(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: None,
            status_code,
        }
    }

    /// Failure with a classification status (404, 500, ...).
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code,
        }
    }
}

/// Service layer over the application store.
pub struct ApplicationService {
    store: Arc<ApplicationStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<ApplicationStore>) -> Self {
        Self { store }
    }

    /// List applications: filter, sort, and paginate the full record set.
    pub fn find_all(&self, params: QueryParams) -> ServiceResponse<Page> {
        match self.store.find_all() {
            Ok(records) => ServiceResponse::success("Success", paginate(&records, &params)),
            Err(err) => {
                error!(error = %err, "error finding all applications");
                ServiceResponse::failure("An error occurred while retrieving applications.", 500)
            }
        }
    }

    /// Fetch a single application by id.
    pub fn find_by_id(&self, id: &str) -> ServiceResponse<Application> {
        match self.store.find_by_id(id) {
            Ok(Some(application)) => ServiceResponse::success("Application found", application),
            Ok(None) => ServiceResponse::failure("Application not found", 404),
            Err(err) => {
                error!(error = %err, id, "error finding application");
                ServiceResponse::failure("An error occurred while finding application.", 500)
            }
        }
    }

    /// Create a new application with default status.
    pub fn create(&self, fields: NewApplication) -> ServiceResponse<Application> {
        match self.store.create(fields) {
            Ok(application) => {
                ServiceResponse::success_with_status("Application created", application, 201)
            }
            Err(err) => {
                error!(error = %err, "error creating application");
                ServiceResponse::failure("An error occurred while creating the application.", 500)
            }
        }
    }

    /// Apply a partial update to an existing application.
    ///
    /// The existence pre-check is what turns the store's silent no-op on a
    /// missing id into an explicit not-found outcome.
    pub fn update(&self, id: &str, patch: ApplicationPatch) -> ServiceResponse<Application> {
        let existing = match self.store.find_by_id(id) {
            Ok(Some(application)) => application,
            Ok(None) => return ServiceResponse::failure("Application not found", 404),
            Err(err) => {
                error!(error = %err, id, "error updating application");
                return ServiceResponse::failure(
                    "An error occurred while updating the application.",
                    500,
                );
            }
        };

        let updated = patch.apply_to(&existing);
        match self.store.update(id, updated.clone()) {
            Ok(()) => ServiceResponse::success("Application updated", updated),
            Err(err) => {
                error!(error = %err, id, "error updating application");
                ServiceResponse::failure("An error occurred while updating the application.", 500)
            }
        }
    }

    /// Delete an application by id.
    pub fn delete(&self, id: &str) -> ServiceResponse<Application> {
        match self.store.find_by_id(id) {
            Ok(Some(_)) => {}
            Ok(None) => return ServiceResponse::failure("Application not found", 404),
            Err(err) => {
                error!(error = %err, id, "error deleting application");
                return ServiceResponse::failure(
                    "An error occurred while deleting the application.",
                    500,
                );
            }
        }

        match self.store.delete(id) {
            Ok(()) => ServiceResponse::success_empty("Application deleted", 204),
            Err(err) => {
                error!(error = %err, id, "error deleting application");
                ServiceResponse::failure("An error occurred while deleting the application.", 500)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::model::Status;

    fn service_with(records: Vec<Application>) -> ApplicationService {
        ApplicationService::new(Arc::new(ApplicationStore::with_records(records)))
    }

    fn app(id: &str, name: &str, status: Status) -> Application {
        Application {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            status,
        }
    }

    #[test]
    fn test_find_all_wraps_page_in_success() {
        let service = service_with(vec![
            app("1", "Zeta", Status::Approved),
            app("2", "Alpha", Status::Approved),
        ]);

        let response = service.find_all(QueryParams::default());
        assert!(response.success);
        assert_eq!(response.status_code, 200);

        let page = response.response_object.unwrap();
        assert_eq!(page.records[0].name, "Alpha");
    }

    #[test]
    fn test_find_by_id_not_found() {
        let service = service_with(vec![]);
        let response = service.find_by_id("42");

        assert!(!response.success);
        assert_eq!(response.status_code, 404);
        assert!(response.response_object.is_none());
    }

    #[test]
    fn test_create_returns_created_outcome() {
        let service = service_with(vec![app("40", "Existing", Status::Approved)]);

        let response = service.create(NewApplication {
            name: "X".to_string(),
            description: "Y".to_string(),
        });

        assert!(response.success);
        assert_eq!(response.status_code, 201);
        let created = response.response_object.unwrap();
        assert_eq!(created.id, "41");
        assert_eq!(created.status, Status::InReview);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let service = service_with(vec![app("1", "Original", Status::InReview)]);

        let response = service.update(
            "1",
            ApplicationPatch {
                status: Some(Status::Approved),
                ..Default::default()
            },
        );

        assert!(response.success);
        let updated = response.response_object.unwrap();
        assert_eq!(updated.name, "Original");
        assert_eq!(updated.status, Status::Approved);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let service = service_with(vec![]);
        let response = service.update("7", ApplicationPatch::default());

        assert!(!response.success);
        assert_eq!(response.status_code, 404);
    }

    #[test]
    fn test_delete_is_success_empty() {
        let service = service_with(vec![app("1", "A", Status::Approved)]);

        let response = service.delete("1");
        assert!(response.success);
        assert_eq!(response.status_code, 204);
        assert!(response.response_object.is_none());

        // Second delete hits the not-found path.
        let response = service.delete("1");
        assert!(!response.success);
        assert_eq!(response.status_code, 404);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let response: ServiceResponse<()> = ServiceResponse::failure("Application not found", 404);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Application not found");
        assert!(json["responseObject"].is_null());
        assert_eq!(json["statusCode"], 404);
    }
}
