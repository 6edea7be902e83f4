//! Schedule journal page.
//!
//! Lists stored entries and hosts the add-entry modal.

use daylog_core::{ScheduleRecord, ScheduleTag};
use dioxus::prelude::*;

use crate::components::{AddScheduleModal, ScheduleCard};
use crate::context::use_records;

/// Main journal view component.
#[component]
pub fn Schedule() -> Element {
    // Get shared records client from context (provided in App)
    let records = use_records();

    // Local UI state
    let mut schedules: Signal<Vec<ScheduleRecord>> = use_signal(Vec::new);
    let mut load_error: Signal<Option<String>> = use_signal(|| None);

    // Modal state: visibility plus the tab the modal should open on
    let mut show_modal: Signal<bool> = use_signal(|| false);
    let mut initial_tab: Signal<ScheduleTag> = use_signal(|| ScheduleTag::Diet);

    // Load the journal on mount
    use_effect(move || {
        spawn(async move {
            let client = records();
            match client.list_schedules().await {
                Ok(list) => {
                    load_error.set(None);
                    schedules.set(list);
                }
                Err(e) => {
                    tracing::warn!("failed to load schedules: {e}");
                    load_error.set(Some(format!("Failed to load schedules: {e}")));
                }
            }
        });
    });

    // Handler for the per-tab add buttons
    let open_for = move |tag: ScheduleTag| {
        initial_tab.set(tag);
        show_modal.set(true);
    };

    rsx! {
        div { class: "schedule-page",
            header { class: "schedule-header",
                h1 { class: "schedule-title", "Daylog" }
                div { class: "add-buttons",
                    button {
                        class: "add-button",
                        onclick: move |_| open_for(ScheduleTag::Diet),
                        "+ Diet"
                    }
                    button {
                        class: "add-button add-button--exercise",
                        onclick: move |_| open_for(ScheduleTag::Exercise),
                        "+ Exercise"
                    }
                }
            }

            if let Some(err) = load_error() {
                div { class: "load-error", "{err}" }
            }

            div { class: "schedule-list",
                if schedules.read().is_empty() {
                    p { class: "empty-hint", "No entries yet. Log a meal or a workout." }
                }
                for record in schedules() {
                    ScheduleCard { key: "{record.id}", record: record.clone() }
                }
            }

            AddScheduleModal {
                visible: show_modal(),
                initial_tab: initial_tab(),
                on_added: move |record: ScheduleRecord| {
                    schedules.write().insert(0, record);
                    show_modal.set(false);
                },
                on_close: move |_| show_modal.set(false),
            }
        }
    }
}
