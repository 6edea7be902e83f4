//! Records client context provider for Daylog.
//!
//! Provides the RecordsClient instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let client: Signal<SharedClient> =
//!     use_signal(|| Arc::new(RecordsClient::new(get_api_url())));
//! use_context_provider(|| client);
//!
//! // In child components
//! let records = use_records();
//! let list = records().list_schedules().await?;
//! ```

use std::sync::Arc;

use daylog_core::RecordsClient;
use dioxus::prelude::*;

/// Shared client type for context.
///
/// The client is wrapped in Arc so handlers can move a cheap clone into
/// spawned tasks; reqwest pools connections behind it.
pub type SharedClient = Arc<RecordsClient>;

/// Hook to access the RecordsClient from context.
///
/// Returns a Signal containing the shared client.
pub fn use_records() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}
