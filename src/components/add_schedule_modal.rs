//! Add Schedule Modal - form for logging a diet or exercise entry
//!
//! Two-tab category selector, multi-line text, optional photo. A picked
//! photo is previewed immediately and uploaded in the background; the save
//! goes to the records API and the parent is told via `on_added`.

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use daylog_core::{ScheduleDraft, ScheduleRecord, ScheduleTag};
use dioxus::prelude::*;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};
use rfd::{AsyncMessageDialog, FileDialog, MessageButtons, MessageLevel};

use crate::context::use_records;

/// Target aspect ratio for attached photos (width : height)
const PHOTO_ASPECT: (u32, u32) = (4, 3);

/// Props for AddScheduleModal component
#[derive(Props, Clone, PartialEq)]
pub struct AddScheduleModalProps {
    /// Whether the modal is visible
    pub visible: bool,
    /// Tab selected each time the modal opens
    pub initial_tab: ScheduleTag,
    /// Handler called with the stored record after a successful save.
    /// Closing after success is the caller's decision; the modal only
    /// reports the new record.
    pub on_added: EventHandler<ScheduleRecord>,
    /// Handler for the cancel/close controls
    pub on_close: EventHandler<()>,
}

/// Add Schedule Modal
///
/// Modal form for creating a schedule entry:
/// - Diet / Exercise tab (resets to `initial_tab` on every open)
/// - Free text, required non-empty after trimming
/// - Optional photo, cropped to 4:3 and uploaded before the save
///
/// # Example
///
/// ```ignore
/// rsx! {
///     AddScheduleModal {
///         visible: show_modal(),
///         initial_tab: ScheduleTag::Diet,
///         on_added: move |record| {
///             schedules.write().insert(0, record);
///             show_modal.set(false);
///         },
///         on_close: move |_| show_modal.set(false),
///     }
/// }
/// ```
#[component]
pub fn AddScheduleModal(props: AddScheduleModalProps) -> Element {
    let records = use_records();

    let mut draft = use_signal(|| ScheduleDraft::new(props.initial_tab));
    let mut uploading = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Re-apply the caller's initial tab each time the modal opens.
    // Content and photo deliberately survive a close/reopen; they are only
    // cleared after a successful save.
    use_effect(move || {
        if props.visible {
            draft.write().reset_tab(props.initial_tab);
        }
    });

    let pick_photo = move |_| {
        if uploading() {
            return;
        }
        let tag = draft.read().tag();

        spawn(async move {
            // File picker is blocking; run it off the UI loop
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Photo")
                    .pick_file()
            })
            .await;

            let path = match picked {
                Ok(Some(path)) => path,
                // User cancelled: nothing changes
                Ok(None) => return,
                Err(e) => {
                    show_error(format!("File picker error: {e}")).await;
                    return;
                }
            };

            uploading.set(true);

            let prepared = tokio::task::spawn_blocking(move || prepare_photo(&path)).await;
            let jpeg = match prepared {
                Ok(Ok(bytes)) => bytes,
                Ok(Err(e)) => {
                    uploading.set(false);
                    show_error(format!("Failed to load image: {e}")).await;
                    return;
                }
                Err(e) => {
                    uploading.set(false);
                    show_error(format!("Failed to load image: {e}")).await;
                    return;
                }
            };

            // Optimistic preview first, then the upload
            let preview = format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg));
            let generation = draft.write().begin_upload(preview);

            let client = records();
            match client.upload_record_image("photo.jpg", jpeg, tag).await {
                Ok(url) => {
                    if draft.write().complete_upload(generation, url.as_str()) {
                        tracing::debug!(%url, "photo attached");
                    }
                    uploading.set(false);
                }
                Err(e) => {
                    // A stale attempt (photo removed or replaced meanwhile)
                    // is dropped without bothering the user
                    let current = draft.write().fail_upload(generation);
                    uploading.set(false);
                    if current {
                        tracing::warn!("photo upload failed: {e}");
                        show_error(failure_message(&e, "Failed to upload the photo.")).await;
                    }
                }
            }
        });
    };

    let remove_photo = move |_| {
        draft.write().remove_image();
    };

    let handle_submit = move |_| {
        if saving() {
            return;
        }

        let payload = match draft.read().submit() {
            Ok(payload) => payload,
            Err(e) => {
                spawn(async move {
                    show_error(e.to_string()).await;
                });
                return;
            }
        };

        saving.set(true);
        let on_added = props.on_added;

        spawn(async move {
            let client = records();
            match client.create_schedule(&payload).await {
                Ok(record) => {
                    draft.write().clear_after_save();
                    saving.set(false);
                    on_added.call(record);
                }
                Err(e) => {
                    saving.set(false);
                    tracing::warn!("failed to save schedule: {e}");
                    show_error(failure_message(&e, "Failed to save the entry.")).await;
                }
            }
        });
    };

    if !props.visible {
        return rsx! {};
    }

    let current_tag = draft.read().tag();
    let content = draft.read().content().to_string();
    let photo = draft.read().image().reference().map(str::to_string);

    rsx! {
        div { class: "modal-overlay",
            div { class: "schedule-modal",

                // Header
                div { class: "modal-header",
                    h2 { class: "modal-title", "Add Entry" }
                    button {
                        class: "modal-close",
                        onclick: move |_| props.on_close.call(()),
                        "aria-label": "Close",
                        "✕"
                    }
                }

                // Category tabs
                div { class: "tab-row",
                    for tab in ScheduleTag::all() {
                        {
                            let tab_val = *tab;
                            let is_active = current_tag == tab_val;
                            rsx! {
                                button {
                                    key: "{tab_val.as_str()}",
                                    class: if is_active { "tab tab--active" } else { "tab" },
                                    r#type: "button",
                                    onclick: move |_| draft.write().set_tag(tab_val),
                                    "{tab_val.label()}"
                                }
                            }
                        }
                    }
                }

                // Content + photo
                div { class: "modal-body",
                    textarea {
                        class: "content-input",
                        value: "{content}",
                        oninput: move |e| draft.write().set_content(e.value()),
                        placeholder: "What did you do?",
                        autofocus: true,
                    }

                    button {
                        class: "photo-button",
                        r#type: "button",
                        onclick: pick_photo,
                        disabled: uploading(),
                        if uploading() {
                            "Uploading..."
                        } else {
                            "Add Photo"
                        }
                    }

                    if let Some(photo) = photo {
                        div { class: "photo-preview",
                            img { class: "photo-preview__image", src: "{photo}" }
                            button {
                                class: "photo-remove",
                                r#type: "button",
                                onclick: remove_photo,
                                "aria-label": "Remove photo",
                                "✕"
                            }
                        }
                    }
                }

                // Actions
                div { class: "modal-actions",
                    button {
                        class: "btn btn-cancel",
                        r#type: "button",
                        onclick: move |_| props.on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-save",
                        r#type: "button",
                        onclick: handle_submit,
                        disabled: saving(),
                        if saving() {
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    }
}

/// Blocking error dialog, standing in for the mobile app's alert.
async fn show_error(message: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// The failure's own message, or the fallback when it has none.
fn failure_message(err: &dyn std::fmt::Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Load a picked file, center-crop it to 4:3 and encode as max-quality JPEG.
fn prepare_photo(path: &Path) -> image::ImageResult<Vec<u8>> {
    let img = image::open(path)?;
    let cropped = crop_to_aspect(img, PHOTO_ASPECT);

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut Cursor::new(&mut buffer), 100);
    cropped.write_with_encoder(encoder)?;
    Ok(buffer)
}

/// Center-crop an image to the given aspect ratio.
fn crop_to_aspect(img: DynamicImage, (ratio_w, ratio_h): (u32, u32)) -> DynamicImage {
    let (width, height) = img.dimensions();

    // u64 math keeps huge dimensions from overflowing
    let full_width_h = (width as u64 * ratio_h as u64 / ratio_w as u64) as u32;
    let (target_w, target_h) = if full_width_h <= height {
        (width, full_width_h)
    } else {
        ((height as u64 * ratio_w as u64 / ratio_h as u64) as u32, height)
    };

    let x = (width.saturating_sub(target_w)) / 2;
    let y = (height.saturating_sub(target_h)) / 2;
    img.crop_imm(x, y, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_keeps_4_3_image_intact() {
        let img = DynamicImage::new_rgb8(400, 300);
        let cropped = crop_to_aspect(img, (4, 3));
        assert_eq!(cropped.dimensions(), (400, 300));
    }

    #[test]
    fn test_crop_narrows_wide_image() {
        let img = DynamicImage::new_rgb8(1000, 300);
        let cropped = crop_to_aspect(img, (4, 3));
        assert_eq!(cropped.dimensions(), (400, 300));
    }

    #[test]
    fn test_crop_shortens_tall_image() {
        let img = DynamicImage::new_rgb8(400, 900);
        let cropped = crop_to_aspect(img, (4, 3));
        assert_eq!(cropped.dimensions(), (400, 300));
    }

    #[test]
    fn test_failure_message_falls_back_when_empty() {
        assert_eq!(failure_message(&"", "generic"), "generic");
        assert_eq!(failure_message(&"boom", "generic"), "boom");
    }
}
