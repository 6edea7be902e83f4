//! Schedule Card - read-only rendering of a stored entry.

use daylog_core::{ScheduleRecord, ScheduleTag};
use dioxus::prelude::*;

/// Props for ScheduleCard component
#[derive(Props, Clone, PartialEq)]
pub struct ScheduleCardProps {
    pub record: ScheduleRecord,
}

/// One journal entry: tag badge, timestamp, content, attached photo.
#[component]
pub fn ScheduleCard(props: ScheduleCardProps) -> Element {
    let record = &props.record;

    let badge_class = match record.tag {
        ScheduleTag::Diet => "tag-badge",
        ScheduleTag::Exercise => "tag-badge tag-badge--exercise",
    };
    let logged_at = record.created_at.format("%b %e, %H:%M").to_string();

    rsx! {
        div { class: "schedule-card",
            div { class: "schedule-card__meta",
                span { class: badge_class, "{record.tag.label()}" }
                span { class: "schedule-card__date", "{logged_at}" }
            }
            p { class: "schedule-card__content", "{record.content}" }
            if let Some(ref image) = record.image {
                img { class: "schedule-card__image", src: "{image}" }
            }
        }
    }
}
