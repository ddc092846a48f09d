//! Platform-independent core of the portfolio site: content, theme state,
//! contact form, reveal latches and the animated network model.
//!
//! Nothing in this crate touches the DOM. The browser glue lives in
//! `folio-browser` and the views in the `frontend` app.

pub mod clock;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod network;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod typewriter;

pub use contact::{ContactForm, ContactMessage, ContactTransport, FormError, FormStatus, SubmitError};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use theme::{Theme, ThemeContext};
