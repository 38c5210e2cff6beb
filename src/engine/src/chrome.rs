use crate::config::{DeploymentEnvironment, EngineConfig};
use crate::error::{ProvisionError, RenderError};
use crate::provisioner::{EngineHandle, EngineProvisioner, PageHandle, PageSpec};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(target_os = "windows")]
const DEFAULT_BROWSER_PATH: &str =
    "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe";
#[cfg(target_os = "linux")]
const DEFAULT_BROWSER_PATH: &str = "/usr/bin/google-chrome";
#[cfg(not(any(target_os = "windows", target_os = "linux")))]
const DEFAULT_BROWSER_PATH: &str =
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";

/// Where the managed runtime's layer unpacks the bundled binary.
const SANDBOX_BROWSER_PATH: &str = "/opt/chromium";

/// Launch arguments for the restricted execution sandbox: no GPU, no
/// zygote/child processes, no /dev/shm. `--no-sandbox` itself comes
/// from the `sandbox(false)` launch option.
const SANDBOX_ARGS: &[&str] = &[
    "--disable-gpu",
    "--single-process",
    "--no-zygote",
    "--disable-dev-shm-usage",
    "--hide-scrollbars",
    "--mute-audio",
];

/// Chromium-backed provisioner. The strategy is fixed by the injected
/// configuration; `acquire` never inspects the environment itself.
pub struct ChromeProvisioner {
    config: EngineConfig,
}

impl ChromeProvisioner {
    pub fn new(config: EngineConfig) -> Self {
        ChromeProvisioner { config }
    }

    fn launch_local(&self) -> Result<Browser, ProvisionError> {
        let path = self.binary_path(DEFAULT_BROWSER_PATH);
        if !path.exists() {
            return Err(ProvisionError::LocalUnavailable(format!(
                "no browser binary at {}",
                path.display()
            )));
        }

        debug!("launching local browser at {}", path.display());

        let options = LaunchOptions::default_builder()
            .path(Some(path))
            .idle_browser_timeout(self.config.acquire_timeout)
            .build()
            .map_err(|e| ProvisionError::LocalUnavailable(e.to_string()))?;

        Browser::new(options).map_err(|e| ProvisionError::LocalUnavailable(e.to_string()))
    }

    fn launch_sandboxed(&self) -> Result<Browser, ProvisionError> {
        let path = self.binary_path(SANDBOX_BROWSER_PATH);
        if !path.exists() {
            return Err(ProvisionError::LocalUnavailable(format!(
                "no bundled browser binary at {}",
                path.display()
            )));
        }

        debug!("launching sandboxed browser at {}", path.display());

        let options = LaunchOptions::default_builder()
            .path(Some(path))
            .sandbox(false)
            .args(SANDBOX_ARGS.iter().map(OsStr::new).collect())
            .idle_browser_timeout(self.config.acquire_timeout)
            .build()
            .map_err(|e| ProvisionError::LocalUnavailable(e.to_string()))?;

        Browser::new(options).map_err(|e| ProvisionError::LocalUnavailable(e.to_string()))
    }

    fn connect_remote(&self) -> Result<Browser, ProvisionError> {
        let endpoint = self.config.remote_endpoint.clone().ok_or_else(|| {
            ProvisionError::RemoteUnreachable("RENDERER_WS_URL is not configured".to_string())
        })?;

        debug!("connecting to remote rendering service at {}", endpoint);

        Browser::connect_with_timeout(endpoint, self.config.acquire_timeout)
            .map_err(|e| ProvisionError::RemoteUnreachable(e.to_string()))
    }

    fn binary_path(&self, default: &str) -> PathBuf {
        self.config
            .browser_path
            .clone()
            .unwrap_or_else(|| Path::new(default).to_path_buf())
    }
}

impl EngineProvisioner for ChromeProvisioner {
    fn acquire(&self) -> Result<Box<dyn EngineHandle>, ProvisionError> {
        let browser = match self.config.environment {
            DeploymentEnvironment::Local => self.launch_local()?,
            DeploymentEnvironment::Sandboxed => self.launch_sandboxed()?,
            DeploymentEnvironment::Remote => self.connect_remote()?,
        };

        Ok(Box::new(ChromeEngine {
            browser: Some(browser),
        }))
    }
}

struct ChromeEngine {
    browser: Option<Browser>,
}

impl EngineHandle for ChromeEngine {
    fn new_page(&mut self) -> Result<Box<dyn PageHandle>, RenderError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| RenderError::PageOpen("engine already closed".to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::PageOpen(e.to_string()))?;

        Ok(Box::new(ChromePage { tab: Some(tab) }))
    }

    fn close(&mut self) {
        // Dropping the handle kills a launched process or hangs up a
        // remote connection. Taking twice is a no-op.
        self.browser.take();
    }
}

struct ChromePage {
    tab: Option<Arc<Tab>>,
}

impl ChromePage {
    fn tab(&self) -> Result<&Arc<Tab>, RenderError> {
        self.tab
            .as_ref()
            .ok_or_else(|| RenderError::PageOpen("page already closed".to_string()))
    }
}

impl PageHandle for ChromePage {
    fn set_content(&mut self, document: &str) -> Result<(), RenderError> {
        // The document is self-contained, so a data URL navigation is
        // enough; nothing is fetched over the network.
        let url = format!("data:text/html;base64,{}", STANDARD.encode(document));

        let tab = self.tab()?;
        tab.navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| RenderError::ContentLoad(e.to_string()))?;

        Ok(())
    }

    fn print_pdf(&mut self, spec: &PageSpec) -> Result<Vec<u8>, RenderError> {
        let options = PrintToPdfOptions {
            paper_width: Some(spec.paper_width),
            paper_height: Some(spec.paper_height),
            page_ranges: Some(spec.page_ranges.clone()),
            print_background: Some(true),
            ..PrintToPdfOptions::default()
        };

        self.tab()?
            .print_to_pdf(Some(options))
            .map_err(|e| RenderError::Capture(e.to_string()))
    }

    fn close(&mut self) {
        if let Some(tab) = self.tab.take() {
            if let Err(e) = tab.close(true) {
                warn!("failed to close page: {}", e);
            }
        }
    }
}
