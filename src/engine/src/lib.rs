pub mod chrome;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod provisioner;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use chrome::ChromeProvisioner;
pub use config::{DeploymentEnvironment, EngineConfig};
pub use error::{PipelineError, ProvisionError, RenderError};
pub use pipeline::PdfPipeline;
pub use provisioner::{EngineHandle, EngineProvisioner, PageHandle, PageSpec};
