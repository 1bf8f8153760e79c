//! Email Template Types Controller
//!
//! Backs the template type list page: the full collection is fetched once,
//! paginated client-side, and refetched after every create or delete.

use std::sync::Arc;

use crate::domain::alert::Alert;
use crate::domain::email_template::EmailTemplateType;
use crate::error::Result;
use crate::eventing::AlertSink;
use crate::features::describe;
use crate::features::email_templates::TemplateTypeWizard;
use crate::services::BackendApi;
use crate::states::PaginatedView;

pub struct EmailTemplateTypesController {
    backend: Arc<dyn BackendApi>,
    alerts: Arc<dyn AlertSink>,
    view: PaginatedView<EmailTemplateType>,
}

impl EmailTemplateTypesController {
    /// Create a controller whose list starts at `item_limit` rows per page
    pub fn new(
        backend: Arc<dyn BackendApi>,
        alerts: Arc<dyn AlertSink>,
        item_limit: usize,
    ) -> Result<Self> {
        Ok(Self {
            backend,
            alerts,
            view: PaginatedView::with_limit(item_limit)?,
        })
    }

    // ==================== Getters ====================

    pub fn view(&self) -> &PaginatedView<EmailTemplateType> {
        &self.view
    }

    /// Rows on the current page
    pub fn visible(&self) -> &[EmailTemplateType] {
        self.view.visible_slice()
    }

    pub fn total_pages(&self) -> Result<usize> {
        self.view.total_pages()
    }

    pub fn total_items(&self) -> usize {
        self.view.len()
    }

    // ==================== Actions ====================

    /// Refetch the whole collection. On failure the previous rows are kept.
    pub fn refresh(&mut self) -> Result<()> {
        match self.backend.email_template_types() {
            Ok(types) => {
                tracing::debug!(count = types.len(), "Email template types loaded");
                self.view.set_collection(types);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load email template types");
                Err(e)
            }
        }
    }

    pub fn on_page_change(&mut self, page: usize) -> Result<()> {
        self.view.go_to_page(page)
    }

    /// Change the page size. The offset is intentionally not realigned.
    pub fn on_items_per_page_change(&mut self, limit: usize) -> Result<()> {
        self.view.set_limit(limit)
    }

    /// Delete a template type, report the outcome, then refetch the list
    pub fn delete_template_type(&mut self, type_id: &str) -> Result<()> {
        let outcome = self.backend.delete_email_template_type(type_id);

        match &outcome {
            Ok(()) => {
                tracing::info!(type_id, "Email template type deleted");
                self.alerts.add_alert(Alert::success(
                    "Delete successful",
                    "Successfully deleted the email template type",
                ));
            }
            Err(e) => {
                tracing::error!(type_id, error = %e, "Failed to delete email template type");
                self.alerts.add_alert(Alert::error(
                    "Email Template Type Delete Error",
                    describe(e, "An error occurred while deleting the email template type"),
                ));
            }
        }

        let refreshed = self.refresh();
        outcome?;
        refreshed
    }

    /// Create the type collected by `wizard`, report the outcome, then refetch
    pub fn create_template_type(
        &mut self,
        wizard: &TemplateTypeWizard,
    ) -> Result<EmailTemplateType> {
        let request = wizard.finish()?;

        let created = match self.backend.create_email_template_type(&request) {
            Ok(created) => created,
            Err(e) => {
                tracing::error!(display_name = %request.display_name, error = %e, "Failed to create email template type");
                self.alerts.add_alert(Alert::error(
                    "Email Template Type Create Error",
                    describe(&e, "An error occurred while creating the email template type"),
                ));
                return Err(e);
            }
        };

        tracing::info!(id = %created.id, "Email template type created");
        self.alerts.add_alert(Alert::success(
            "Create successful",
            "Successfully created the email template type",
        ));
        self.refresh()?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertLevel;
    use crate::error::Error;
    use crate::eventing::ChannelAlertSink;
    use crate::features::testing::MockBackend;
    use crossbeam_channel::Receiver;

    fn controller(
        names: &[&str],
        limit: usize,
    ) -> (
        EmailTemplateTypesController,
        Arc<MockBackend>,
        Receiver<Alert>,
    ) {
        let backend = Arc::new(MockBackend::with_template_types(names));
        let (sink, rx) = ChannelAlertSink::unbounded();
        let controller =
            EmailTemplateTypesController::new(backend.clone(), Arc::new(sink), limit)
                .expect("valid limit");
        (controller, backend, rx)
    }

    fn visible_names(controller: &EmailTemplateTypesController) -> Vec<&str> {
        controller
            .visible()
            .iter()
            .map(|t| t.display_name.as_str())
            .collect()
    }

    #[test]
    fn refresh_paginates_collection() {
        let (mut controller, _, _) = controller(&["a", "b", "c", "d", "e"], 2);
        controller.refresh().expect("refresh");

        assert_eq!(controller.total_items(), 5);
        assert_eq!(controller.total_pages().expect("configured"), 3);
        assert_eq!(visible_names(&controller), vec!["a", "b"]);

        controller.on_page_change(3).expect("page 3");
        assert_eq!(visible_names(&controller), vec!["e"]);
    }

    #[test]
    fn items_per_page_change_keeps_offset() {
        let (mut controller, _, _) = controller(&["a", "b", "c", "d", "e"], 2);
        controller.refresh().expect("refresh");
        controller.on_page_change(2).expect("page 2");

        controller.on_items_per_page_change(3).expect("limit 3");
        assert_eq!(visible_names(&controller), vec!["c", "d", "e"]);
    }

    #[test]
    fn delete_success_alerts_and_refetches() {
        let (mut controller, backend, rx) = controller(&["a", "b", "c"], 10);
        controller.refresh().expect("refresh");

        controller.delete_template_type("id-b").expect("delete");

        let alerts: Vec<_> = rx.try_iter().collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Success);
        assert_eq!(backend.list_calls(), 2);
        assert_eq!(visible_names(&controller), vec!["a", "c"]);
    }

    #[test]
    fn delete_failure_uses_backend_description_and_still_refetches() {
        let (mut controller, backend, rx) = controller(&["a"], 10);
        controller.refresh().expect("refresh");
        backend.fail_next(Some("Template type is in use"));

        let err = controller.delete_template_type("id-a").expect_err("fails");
        assert!(matches!(err, Error::Backend { status: 500, .. }));

        let alerts: Vec<_> = rx.try_iter().collect();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].is_error());
        assert_eq!(alerts[0].description, "Template type is in use");
        assert_eq!(backend.list_calls(), 2);
        assert_eq!(controller.total_items(), 1);
    }

    #[test]
    fn delete_failure_without_description_uses_fallback() {
        let (mut controller, backend, rx) = controller(&["a"], 10);
        backend.fail_next(None);

        let _ = controller.delete_template_type("id-a");
        let alert = rx.try_recv().expect("one alert");
        assert_eq!(
            alert.description,
            "An error occurred while deleting the email template type"
        );
    }

    #[test]
    fn create_from_wizard_refetches() {
        let (mut controller, backend, rx) = controller(&["a"], 10);
        let mut wizard = TemplateTypeWizard::new();
        wizard.submit_basic_details("AccountLocked").expect("valid");

        let created = controller.create_template_type(&wizard).expect("create");
        assert_eq!(created.display_name, "AccountLocked");
        assert_eq!(controller.total_items(), 2);
        assert_eq!(backend.list_calls(), 1);
        assert_eq!(rx.try_recv().expect("alert").level, AlertLevel::Success);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let backend = Arc::new(MockBackend::default());
        let (sink, _rx) = ChannelAlertSink::unbounded();
        assert!(EmailTemplateTypesController::new(backend, Arc::new(sink), 0).is_err());
    }
}
