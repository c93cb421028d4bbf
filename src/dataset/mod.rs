//! Dataset store.
//!
//! Holds the validated records of one decision session. Raw criterion values
//! arrive as user-entered text and are parsed into finite numbers at the
//! insertion boundary; once a [`Record`] exists it always carries exactly one
//! value per configured criterion, in criterion order.
//!
//! Records are kept in insertion order. That order is meaningful for stable
//! display and for tie-breaking in the final ranking, not for scoring.

mod store;
mod types;

pub use store::DatasetStore;
pub use types::Record;
