//! Host Bridge
//!
//! Fire-and-forget calls into the shell hosting the view.

use telegram_webapp::{web_app, WebApp};

/// Capabilities the hosting shell exposes to the view
pub trait HostBridge {
    /// Ask the host to expand the view
    fn expand(&self);
    /// Ask the host to close the view
    fn close(&self);
}

/// Bridge to `window.Telegram.WebApp`.
///
/// Looks the object up on every call, so a page opened outside Telegram
/// degrades to logged no-ops instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramBridge;

impl TelegramBridge {
    fn web_app(&self, action: &str) -> Option<WebApp> {
        let app = web_app();
        if app.is_none() {
            tracing::warn!("[BRIDGE] Telegram WebApp unavailable, skipping {}", action);
        }
        app
    }

    /// The launch parameter (`initDataUnsafe.start_param`), if any
    pub fn launch_param(&self) -> Option<String> {
        let app = self.web_app("launch parameter lookup")?;
        tracing::debug!("[BRIDGE] Telegram WebApp {} on {}", app.version(), app.platform());

        match app.init_data_unsafe() {
            Ok(init) => {
                if let Some(user) = &init.user {
                    tracing::debug!("[BRIDGE] Opened by user {}", user.id);
                }
                init.start_param
            }
            Err(e) => {
                tracing::warn!("[BRIDGE] Unreadable initDataUnsafe: {}", e);
                None
            }
        }
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        if let Some(app) = self.web_app("expand") {
            app.expand();
        }
    }

    fn close(&self) {
        if let Some(app) = self.web_app("close") {
            app.close();
        }
    }
}
