//! Daylog Core Library
//!
//! Headless core for the Daylog diet & exercise journal: schedule domain
//! types, the draft state machine behind the add-entry form, and the HTTP
//! client for the remote records service.
//!
//! ## Overview
//!
//! Daylog entries ("schedules") are short free-text logs tagged as diet or
//! exercise, optionally carrying one photo. Photos are uploaded to the
//! records service ahead of the save; the entry then references the
//! canonical URL the service returned.
//!
//! ## Quick Start
//!
//! ```ignore
//! use daylog_core::{RecordsClient, ScheduleDraft, ScheduleTag};
//!
//! let client = RecordsClient::new("http://localhost:3000/api");
//!
//! let mut draft = ScheduleDraft::new(ScheduleTag::Exercise);
//! draft.set_content("ran 5k");
//!
//! let record = client.create_schedule(&draft.submit()?).await?;
//! println!("saved entry {}", record.id);
//! draft.clear_after_save();
//! ```

pub mod draft;
pub mod error;
pub mod records;
pub mod types;

// Re-exports
pub use draft::{ImageAttachment, ScheduleDraft};
pub use error::{DraftError, RecordsError, RecordsResult};
pub use records::{RecordsClient, MAX_UPLOAD_SIZE};
pub use types::{NewSchedule, ScheduleRecord, ScheduleTag};
