//! Reactive page state shared through context.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s: `form` mirrors the settings inputs and
//! `toast` queues notifications.

pub mod form;
pub mod toast;
