//! Toast notifications for eventdeck.
//!
//! A toast is a transient message that hides itself after a fixed delay
//! unless the user dismisses it first. This crate provides:
//! - `Toast` - the Hidden/Visible state machine, one session per show
//! - `DismissTimer` - a cancellable one-shot delay backed by a tokio task
//! - `ToastController` - ties the two together for a single-threaded UI loop
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use eventdeck_toast::{ToastConfig, ToastController};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ToastConfig::new().with_dismiss_after(Duration::from_millis(10));
//!     let mut toast = ToastController::current(config).unwrap();
//!
//!     toast.show("Saved");
//!     assert!(toast.is_visible());
//!
//!     // The UI loop calls poll() once per tick.
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!     toast.poll();
//!     assert!(!toast.is_visible());
//! }
//! ```
//!
//! # Lifecycle
//!
//! Every exit from the Visible state (dismiss, re-show, drop of the
//! controller) cancels the pending timer. A timer that already fired before
//! it could be cancelled is recognised by its session id and ignored.

pub mod config;
pub mod controller;
pub mod error;
pub mod timer;
pub mod toast;

pub use config::{ToastConfig, DEFAULT_DISMISS_AFTER};
pub use controller::ToastController;
pub use error::{Result, ToastError};
pub use timer::{DismissTimer, TimerFired};
pub use toast::{SessionId, Toast, ToastState};
