//! List Session
//!
//! The page-load handler: expand the view, load the launch data, render it.
//! The host bridge is injected so the whole flow runs against a stub in tests.

use crate::bridge::HostBridge;
use crate::launch::{load_launch_data, LaunchData};
use crate::render::{render_list, ListContainer};

#[derive(Debug, Clone, Copy)]
pub struct ListSession<B: HostBridge> {
    bridge: B,
}

impl<B: HostBridge> ListSession<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// Run the startup pass. Never fails: every outcome ends up rendered.
    pub fn start<C: ListContainer + ?Sized>(&self, launch_param: Option<&str>, container: &mut C) {
        self.bridge.expand();

        let outcome = load_launch_data(launch_param);
        match &outcome {
            Ok(LaunchData::Missing) => tracing::info!("[SESSION] No launch parameter"),
            Ok(LaunchData::Items(items)) => tracing::info!("[SESSION] Loaded {} items", items.len()),
            Err(e) => tracing::error!("[SESSION] Failed to load list data: {}", e),
        }

        render_list(container, &outcome);
    }

    pub fn close(&self) {
        tracing::info!("[SESSION] Closing view");
        self.bridge.close();
    }
}
