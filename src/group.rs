//! Drink Group
//!
//! Bounded, ordered, duplicate-free list of selected drink names.

use thiserror::Error;

use crate::config::MAX_GROUP_SIZE;

/// Why an add was refused
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("group is full ({0} drinks)")]
    Full(usize),
    #[error("drink is already in the group")]
    AlreadyPresent,
}

/// Selected drinks, keyed by display name
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    names: Vec<String>,
    capacity: usize,
}

impl Default for Group {
    fn default() -> Self {
        Self::with_capacity(MAX_GROUP_SIZE)
    }
}

impl Group {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `name`. The capacity check runs before the duplicate check.
    pub fn add(&mut self, name: &str) -> Result<(), GroupError> {
        if self.is_full() {
            return Err(GroupError::Full(self.capacity));
        }
        if self.contains(name) {
            return Err(GroupError::AlreadyPresent);
        }
        self.names.push(name.to_string());
        Ok(())
    }

    /// Remove `name` if present; returns whether anything was removed
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= self.capacity
    }

    /// Counter shown next to the group heading, e.g. `3/7`
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.len(), self.capacity)
    }
}
