//! In-memory engine double for pipeline and handler tests. No
//! browser involved; failures are injected at a chosen step and every
//! lifecycle transition is observable through [`MockState`].

use crate::error::{ProvisionError, RenderError};
use crate::provisioner::{EngineHandle, EngineProvisioner, PageHandle, PageSpec};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Which step of the pipeline should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    None,
    Acquire,
    NewPage,
    SetContent,
    Capture,
    /// Capture succeeds but yields zero bytes.
    EmptyCapture,
}

/// Shared observation point for assertions.
#[derive(Debug, Default)]
pub struct MockState {
    pub acquire_calls: AtomicUsize,
    pub new_page_calls: AtomicUsize,
    pub engine_closed: AtomicBool,
    pub page_closed: AtomicBool,
}

impl MockState {
    pub fn acquire_calls(&self) -> usize {
        self.acquire_calls.load(Ordering::SeqCst)
    }

    pub fn new_page_calls(&self) -> usize {
        self.new_page_calls.load(Ordering::SeqCst)
    }

    pub fn engine_closed(&self) -> bool {
        self.engine_closed.load(Ordering::SeqCst)
    }

    pub fn page_closed(&self) -> bool {
        self.page_closed.load(Ordering::SeqCst)
    }
}

pub struct MockProvisioner {
    state: Arc<MockState>,
    failure: FailurePoint,
    /// Blocks `acquire` to simulate an unresponsive engine.
    acquire_delay: Duration,
    pdf_bytes: Vec<u8>,
}

impl MockProvisioner {
    pub fn succeeding() -> Self {
        Self::failing_at(FailurePoint::None)
    }

    pub fn failing_at(failure: FailurePoint) -> Self {
        MockProvisioner {
            state: Arc::new(MockState::default()),
            failure,
            acquire_delay: Duration::ZERO,
            pdf_bytes: b"%PDF-1.4 mock".to_vec(),
        }
    }

    pub fn with_acquire_delay(mut self, delay: Duration) -> Self {
        self.acquire_delay = delay;
        self
    }

    pub fn state(&self) -> Arc<MockState> {
        Arc::clone(&self.state)
    }
}

impl EngineProvisioner for MockProvisioner {
    fn acquire(&self) -> Result<Box<dyn EngineHandle>, ProvisionError> {
        self.state.acquire_calls.fetch_add(1, Ordering::SeqCst);

        if !self.acquire_delay.is_zero() {
            std::thread::sleep(self.acquire_delay);
        }

        if self.failure == FailurePoint::Acquire {
            return Err(ProvisionError::RemoteUnreachable(
                "simulated unreachable endpoint".to_string(),
            ));
        }

        Ok(Box::new(MockEngine {
            state: Arc::clone(&self.state),
            failure: self.failure,
            pdf_bytes: self.pdf_bytes.clone(),
        }))
    }
}

struct MockEngine {
    state: Arc<MockState>,
    failure: FailurePoint,
    pdf_bytes: Vec<u8>,
}

impl EngineHandle for MockEngine {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, RenderError> {
        self.state.new_page_calls.fetch_add(1, Ordering::SeqCst);

        if self.failure == FailurePoint::NewPage {
            return Err(RenderError::PageOpen("simulated page failure".to_string()));
        }

        Ok(Box::new(MockPage {
            state: Arc::clone(&self.state),
            failure: self.failure,
            pdf_bytes: self.pdf_bytes.clone(),
        }))
    }

    fn close(&mut self) {
        self.state.engine_closed.store(true, Ordering::SeqCst);
    }
}

struct MockPage {
    state: Arc<MockState>,
    failure: FailurePoint,
    pdf_bytes: Vec<u8>,
}

impl PageHandle for MockPage {
    fn set_content(&mut self, _document: &str) -> Result<(), RenderError> {
        if self.failure == FailurePoint::SetContent {
            return Err(RenderError::ContentLoad(
                "simulated load failure".to_string(),
            ));
        }
        Ok(())
    }

    fn print_pdf(&mut self, _spec: &PageSpec) -> Result<Vec<u8>, RenderError> {
        match self.failure {
            FailurePoint::Capture => {
                Err(RenderError::Capture("simulated capture failure".to_string()))
            }
            FailurePoint::EmptyCapture => Ok(Vec::new()),
            _ => Ok(self.pdf_bytes.clone()),
        }
    }

    fn close(&mut self) {
        self.state.page_closed.store(true, Ordering::SeqCst);
    }
}
