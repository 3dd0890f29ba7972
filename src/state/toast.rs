//! Transient notification queue.
//!
//! A toast is appended in `Entering`, turns `Visible` after
//! [`SHOW_DELAY_MS`], is `Dismissed` after [`VISIBLE_MS`] and removed
//! [`REMOVE_DELAY_MS`] later. Timers live in `components::toast_host`; this
//! module only owns the transitions.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::settings::surface::Severity;

pub const SHOW_DELAY_MS: u32 = 100;
pub const VISIBLE_MS: u32 = 3000;
pub const REMOVE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Dismissed,
}

impl ToastPhase {
    /// How long a toast stays in this phase before advancing.
    #[must_use]
    pub fn dwell_ms(self) -> u32 {
        match self {
            Self::Entering => SHOW_DELAY_MS,
            Self::Visible => VISIBLE_MS,
            Self::Dismissed => REMOVE_DELAY_MS,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Entering => Some(Self::Visible),
            Self::Visible => Some(Self::Dismissed),
            Self::Dismissed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    /// Element class: `notification <severity>`, plus `show` while visible.
    #[must_use]
    pub fn class(&self) -> String {
        let base = format!("notification {}", self.severity.css_class());
        if self.phase == ToastPhase::Visible {
            format!("{base} show")
        } else {
            base
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.to_owned(),
            severity,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Move a toast to its next phase, removing it after `Dismissed`.
    ///
    /// Returns the new phase, or `None` once the toast is gone.
    pub fn advance(&mut self, id: u64) -> Option<ToastPhase> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        match self.toasts[index].phase.next() {
            Some(phase) => {
                self.toasts[index].phase = phase;
                Some(phase)
            }
            None => {
                self.toasts.remove(index);
                None
            }
        }
    }

    #[must_use]
    pub fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.toasts.iter().find(|t| t.id == id).map(|t| t.phase)
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
