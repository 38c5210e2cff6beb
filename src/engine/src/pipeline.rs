use crate::error::{PipelineError, RenderError};
use crate::provisioner::{EngineHandle, EngineProvisioner, PageHandle, PageSpec};
use log::debug;
use std::sync::Arc;

/// Drives one document through an engine: acquire, open a page, load,
/// capture a single-page PDF. Handles are closed on every exit path,
/// in reverse order of acquisition.
pub struct PdfPipeline {
    provisioner: Arc<dyn EngineProvisioner>,
    page_spec: PageSpec,
}

impl PdfPipeline {
    pub fn new(provisioner: Arc<dyn EngineProvisioner>) -> Self {
        PdfPipeline {
            provisioner,
            page_spec: PageSpec::default(),
        }
    }

    /// Renders a self-contained document to PDF bytes. A provision
    /// failure short-circuits before any page work happens.
    pub fn render_document(&self, document: &str) -> Result<Vec<u8>, PipelineError> {
        let mut engine = self.provisioner.acquire()?;
        let result = Self::capture(engine.as_mut(), document, &self.page_spec);
        engine.close();

        let bytes = result?;
        debug!("rendered {} byte PDF", bytes.len());
        Ok(bytes)
    }

    fn capture(
        engine: &mut dyn EngineHandle,
        document: &str,
        spec: &PageSpec,
    ) -> Result<Vec<u8>, RenderError> {
        let mut page = engine.new_page()?;
        let result = Self::capture_page(page.as_mut(), document, spec);
        page.close();
        result
    }

    fn capture_page(
        page: &mut dyn PageHandle,
        document: &str,
        spec: &PageSpec,
    ) -> Result<Vec<u8>, RenderError> {
        page.set_content(document)?;

        let bytes = page.print_pdf(spec)?;
        if bytes.is_empty() {
            // An empty payload must never masquerade as a rendered card.
            return Err(RenderError::EmptyOutput);
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionError;
    use crate::mock::{FailurePoint, MockProvisioner};

    fn pipeline(provisioner: MockProvisioner) -> PdfPipeline {
        PdfPipeline::new(Arc::new(provisioner))
    }

    #[test]
    fn test_successful_render_returns_bytes_and_releases_handles() {
        let provisioner = MockProvisioner::succeeding();
        let state = provisioner.state();

        let bytes = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(state.acquire_calls(), 1);
        assert_eq!(state.new_page_calls(), 1);
        assert!(state.page_closed());
        assert!(state.engine_closed());
    }

    #[test]
    fn test_provision_failure_short_circuits_before_page_work() {
        let provisioner = MockProvisioner::failing_at(FailurePoint::Acquire);
        let state = provisioner.state();

        let error = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap_err();

        assert!(matches!(
            error,
            PipelineError::Provision(ProvisionError::RemoteUnreachable(_))
        ));
        assert_eq!(state.new_page_calls(), 0);
    }

    #[test]
    fn test_page_open_failure_still_closes_engine() {
        let provisioner = MockProvisioner::failing_at(FailurePoint::NewPage);
        let state = provisioner.state();

        let error = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap_err();

        assert!(matches!(
            error,
            PipelineError::Render(RenderError::PageOpen(_))
        ));
        assert!(state.engine_closed());
    }

    #[test]
    fn test_content_load_failure_closes_page_and_engine() {
        let provisioner = MockProvisioner::failing_at(FailurePoint::SetContent);
        let state = provisioner.state();

        let error = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap_err();

        assert!(matches!(
            error,
            PipelineError::Render(RenderError::ContentLoad(_))
        ));
        assert!(state.page_closed());
        assert!(state.engine_closed());
    }

    #[test]
    fn test_capture_failure_closes_page_and_engine() {
        let provisioner = MockProvisioner::failing_at(FailurePoint::Capture);
        let state = provisioner.state();

        let error = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap_err();

        assert!(matches!(
            error,
            PipelineError::Render(RenderError::Capture(_))
        ));
        assert!(state.page_closed());
        assert!(state.engine_closed());
    }

    #[test]
    fn test_empty_capture_is_an_error_not_an_empty_payload() {
        let provisioner = MockProvisioner::failing_at(FailurePoint::EmptyCapture);
        let state = provisioner.state();

        let error = pipeline(provisioner)
            .render_document("<html></html>")
            .unwrap_err();

        assert!(matches!(
            error,
            PipelineError::Render(RenderError::EmptyOutput)
        ));
        assert!(state.page_closed());
        assert!(state.engine_closed());
    }
}
