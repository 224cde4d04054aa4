//! Local storage for the single [`UserData`] record.
//!
//! [`UserPreferences`] sits on top of a [`UserDataStore`] and adds the
//! observable view: every successful write is published to subscribers, and
//! subscribers always see the most recently persisted record.

mod preferences;

pub use preferences::UserPreferences;
