//! Schedule draft state machine backing the add-entry form.
//!
//! The draft lives for as long as the form is mounted: opening the modal
//! re-applies the caller's initial tab, but content and photo survive a
//! close/reopen and are only cleared after a successful save. Photo attach
//! attempts are numbered so a late upload result (success or failure) from
//! an attempt the user has since replaced or removed is discarded instead
//! of overwriting newer state.

use crate::error::DraftError;
use crate::types::{NewSchedule, ScheduleTag};

/// Image attachment state for a draft
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageAttachment {
    /// No photo attached
    #[default]
    None,
    /// Local preview (data URI) shown while the upload is in flight
    Preview(String),
    /// Canonical URL returned by the records API
    Uploaded(String),
}

impl ImageAttachment {
    /// The reference a submit would carry: preview or canonical URL
    pub fn reference(&self) -> Option<&str> {
        match self {
            ImageAttachment::None => None,
            ImageAttachment::Preview(uri) => Some(uri),
            ImageAttachment::Uploaded(url) => Some(url),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ImageAttachment::None)
    }
}

/// In-progress schedule entry held by the form
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    tag: ScheduleTag,
    content: String,
    image: ImageAttachment,
    /// Attach-attempt counter; results carrying an older value are stale
    generation: u64,
}

impl ScheduleDraft {
    pub fn new(initial_tab: ScheduleTag) -> Self {
        Self {
            tag: initial_tab,
            content: String::new(),
            image: ImageAttachment::None,
            generation: 0,
        }
    }

    pub fn tag(&self) -> ScheduleTag {
        self.tag
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image(&self) -> &ImageAttachment {
        &self.image
    }

    /// Select a category tab. Instantaneous, no validation.
    pub fn set_tag(&mut self, tag: ScheduleTag) {
        self.tag = tag;
    }

    /// Replace the free-text content. Whitespace is only trimmed at submit.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Applied on every hidden -> visible transition of the form.
    /// Content and photo are deliberately left alone.
    pub fn reset_tab(&mut self, initial_tab: ScheduleTag) {
        self.tag = initial_tab;
    }

    /// Start a photo attach attempt: the preview is shown immediately and
    /// the returned token identifies the upload now in flight.
    pub fn begin_upload(&mut self, preview_uri: impl Into<String>) -> u64 {
        self.generation += 1;
        self.image = ImageAttachment::Preview(preview_uri.into());
        self.generation
    }

    /// Swap the preview for the uploaded image's canonical URL.
    ///
    /// Returns false (and leaves the draft alone) when the attempt is no
    /// longer current, i.e. the photo was removed or replaced meanwhile.
    pub fn complete_upload(&mut self, generation: u64, url: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.image = ImageAttachment::Uploaded(url.into());
        true
    }

    /// Drop the preview after a failed upload.
    ///
    /// Stale attempts are ignored, same as [`complete_upload`].
    ///
    /// [`complete_upload`]: ScheduleDraft::complete_upload
    pub fn fail_upload(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.image = ImageAttachment::None;
        true
    }

    /// Explicitly remove the attached/previewed photo. Any in-flight upload
    /// becomes stale and its result will be discarded.
    pub fn remove_image(&mut self) {
        self.generation += 1;
        self.image = ImageAttachment::None;
    }

    /// Validate and produce the save payload. The draft itself is left
    /// untouched; callers clear it via [`clear_after_save`] once the save
    /// capability has resolved.
    ///
    /// [`clear_after_save`]: ScheduleDraft::clear_after_save
    pub fn submit(&self) -> Result<NewSchedule, DraftError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(NewSchedule {
            content: content.to_string(),
            tag: self.tag,
            image: self.image.reference().map(str::to_string),
        })
    }

    /// Reset after a successful save: content cleared, photo removed, tab
    /// back to Diet regardless of what was selected or initially requested.
    pub fn clear_after_save(&mut self) {
        self.content.clear();
        self.generation += 1;
        self.image = ImageAttachment::None;
        self.tag = ScheduleTag::Diet;
    }
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self::new(ScheduleTag::Diet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopen_resets_tab_to_callers_initial_value() {
        let mut draft = ScheduleDraft::new(ScheduleTag::Diet);
        draft.set_tag(ScheduleTag::Exercise);
        draft.set_content("lunch");

        // Modal hidden then reopened with Diet as the initial tab
        draft.reset_tab(ScheduleTag::Diet);
        assert_eq!(draft.tag(), ScheduleTag::Diet);
        // Content survives the reopen
        assert_eq!(draft.content(), "lunch");

        // Reopened again while the caller's initial tab is Exercise
        draft.reset_tab(ScheduleTag::Exercise);
        assert_eq!(draft.tag(), ScheduleTag::Exercise);
    }

    #[test]
    fn test_whitespace_only_content_blocks_submit() {
        let mut draft = ScheduleDraft::default();
        draft.set_content("   ");
        assert_eq!(draft.submit(), Err(DraftError::EmptyContent));

        // Failed validation leaves the draft untouched
        assert_eq!(draft.content(), "   ");
        assert!(draft.image().is_none());
    }

    #[test]
    fn test_submit_payload_without_image() {
        let mut draft = ScheduleDraft::new(ScheduleTag::Exercise);
        draft.set_content("  ran 5k  ");

        let payload = draft.submit().unwrap();
        assert_eq!(payload.content, "ran 5k");
        assert_eq!(payload.tag, ScheduleTag::Exercise);
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_upload_success_swaps_preview_for_canonical_url() {
        let mut draft = ScheduleDraft::default();
        draft.set_content("breakfast");

        let generation = draft.begin_upload("data:image/jpeg;base64,abcd");
        assert_eq!(
            draft.image().reference(),
            Some("data:image/jpeg;base64,abcd")
        );

        assert!(draft.complete_upload(generation, "https://cdn/x.jpg"));
        assert_eq!(draft.image().reference(), Some("https://cdn/x.jpg"));

        let payload = draft.submit().unwrap();
        assert_eq!(payload.image.as_deref(), Some("https://cdn/x.jpg"));
    }

    #[test]
    fn test_upload_failure_reverts_to_no_image() {
        let mut draft = ScheduleDraft::default();
        draft.set_content("breakfast");

        let generation = draft.begin_upload("data:image/jpeg;base64,abcd");
        assert!(draft.fail_upload(generation));
        assert!(draft.image().is_none());

        let payload = draft.submit().unwrap();
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_submit_carries_preview_while_upload_in_flight() {
        let mut draft = ScheduleDraft::default();
        draft.set_content("breakfast");
        draft.begin_upload("data:image/jpeg;base64,abcd");

        let payload = draft.submit().unwrap();
        assert_eq!(payload.image.as_deref(), Some("data:image/jpeg;base64,abcd"));
    }

    #[test]
    fn test_clear_after_save_resets_everything_to_diet() {
        let mut draft = ScheduleDraft::new(ScheduleTag::Exercise);
        draft.set_content("ran 5k");
        let generation = draft.begin_upload("data:...");
        draft.complete_upload(generation, "https://cdn/x.jpg");

        draft.clear_after_save();
        assert_eq!(draft.content(), "");
        assert!(draft.image().is_none());
        // Diet, not the Exercise tab that was active at submit time
        assert_eq!(draft.tag(), ScheduleTag::Diet);
    }

    #[test]
    fn test_failed_submit_leaves_draft_for_retry() {
        let mut draft = ScheduleDraft::new(ScheduleTag::Exercise);
        draft.set_content("ran 5k");
        let generation = draft.begin_upload("data:...");
        draft.complete_upload(generation, "https://cdn/x.jpg");

        let before = draft.clone();
        // The save capability failing means the caller simply does not
        // clear the draft; submit() itself never mutates.
        let _ = draft.submit().unwrap();
        assert_eq!(draft, before);
    }

    #[test]
    fn test_stale_completion_after_removal_is_discarded() {
        let mut draft = ScheduleDraft::default();
        let generation = draft.begin_upload("data:...");

        // User removes the photo while the upload is still in flight
        draft.remove_image();
        assert!(!draft.complete_upload(generation, "https://cdn/late.jpg"));
        assert!(draft.image().is_none());
    }

    #[test]
    fn test_stale_failure_after_new_attempt_is_discarded() {
        let mut draft = ScheduleDraft::default();
        let first = draft.begin_upload("data:first");
        let second = draft.begin_upload("data:second");

        // The first attempt failing must not clear the second preview
        assert!(!draft.fail_upload(first));
        assert_eq!(draft.image().reference(), Some("data:second"));

        assert!(draft.complete_upload(second, "https://cdn/second.jpg"));
        assert_eq!(draft.image().reference(), Some("https://cdn/second.jpg"));
    }

    #[test]
    fn test_stale_completion_after_save_is_discarded() {
        let mut draft = ScheduleDraft::default();
        draft.set_content("breakfast");
        let generation = draft.begin_upload("data:...");

        draft.clear_after_save();
        assert!(!draft.complete_upload(generation, "https://cdn/late.jpg"));
        assert!(draft.image().is_none());
    }
}
