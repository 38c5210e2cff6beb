use crate::error::{ProvisionError, RenderError};

/// Physical page parameters for the capture. The card is a one-page
/// letter-size portrait form; even an overflowing document is clipped
/// to its first page.
#[derive(Debug, Clone)]
pub struct PageSpec {
    /// Paper width in inches.
    pub paper_width: f64,
    /// Paper height in inches.
    pub paper_height: f64,
    /// Pages to keep, in print-dialog syntax.
    pub page_ranges: String,
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec {
            paper_width: 8.5,
            paper_height: 11.0,
            page_ranges: "1".to_string(),
        }
    }
}

/// One page (tab) of an acquired engine. Pages are the unit of
/// request isolation; an engine may serve pages to several requests.
pub trait PageHandle: Send {
    /// Loads a self-contained document into the page. The document
    /// must not reference external resources.
    fn set_content(&mut self, document: &str) -> Result<(), RenderError>;

    /// Captures the page as PDF bytes.
    fn print_pdf(&mut self, spec: &PageSpec) -> Result<Vec<u8>, RenderError>;

    /// Releases the page. Idempotent: a second call is a no-op.
    fn close(&mut self);
}

/// A live rendering engine instance.
pub trait EngineHandle: Send {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, RenderError>;

    /// Releases the engine (kills a launched process or hangs up a
    /// remote connection). Idempotent.
    fn close(&mut self);
}

/// Acquires rendering engines for the strategy fixed at construction
/// time. Shared across requests behind an `Arc`.
pub trait EngineProvisioner: Send + Sync {
    fn acquire(&self) -> Result<Box<dyn EngineHandle>, ProvisionError>;
}
