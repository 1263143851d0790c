//! Notices
//!
//! Transient messages shown in the toast after group mutations.

use crate::group::GroupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NoticeKind {
    /// CSS classes for the toast container
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Warning => "toast toast-warning",
            NoticeKind::Error => "toast toast-error",
            NoticeKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number so a timer only hides the notice it was started for
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(id: u32, kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

/// Kind and text for the outcome of adding `name`
pub fn added(name: &str, outcome: &Result<(), GroupError>) -> (NoticeKind, String) {
    match outcome {
        Ok(()) => (NoticeKind::Success, format!("{} added to group!", name)),
        Err(GroupError::Full(max)) => (
            NoticeKind::Warning,
            format!("You cannot add more than {} drinks to the group!", max),
        ),
        Err(GroupError::AlreadyPresent) => (
            NoticeKind::Warning,
            format!("{} is already in your group!", name),
        ),
    }
}

/// Kind and text for removing `name`
pub fn removed(name: &str, was_present: bool) -> (NoticeKind, String) {
    if was_present {
        (NoticeKind::Error, "Drink removed from group!".to_string())
    } else {
        (NoticeKind::Info, format!("{} is not in your group", name))
    }
}
