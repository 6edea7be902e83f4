//! Root application component.

use std::sync::Arc;

use daylog_core::RecordsClient;
use dioxus::prelude::*;

use crate::context::SharedClient;
use crate::get_api_url;
use crate::pages::Schedule;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Schedule journal (entry list plus the add-entry modal)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Schedule {},
}

/// Root application component.
///
/// Provides global styles, the shared records client, and routing.
#[component]
pub fn App() -> Element {
    let client: Signal<SharedClient> =
        use_signal(|| Arc::new(RecordsClient::new(get_api_url())));

    // Provide client context to all child components
    use_context_provider(|| client);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
