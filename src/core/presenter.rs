//! Per-field visibility and placement policy

use super::field::Field;
use std::collections::HashSet;

/// Well-known key identifying the agent that emitted a line.
///
/// Hidden from uncolored text output by [`FieldPresenter::plain`].
pub const AGENT_NAME_FIELD: &str = "agent_name";

/// Decides whether a field is rendered and whether it leads the line.
pub trait Presenter: Send + Sync {
    /// Should this field be rendered at all
    fn is_visible(&self, field: &Field) -> bool;

    /// Should this field render as a bare tag right after the level
    fn is_prefix(&self, field: &Field) -> bool;
}

/// Shows every field as a trailing `key=value` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPresenter;

impl Presenter for DefaultPresenter {
    fn is_visible(&self, _field: &Field) -> bool {
        true
    }

    fn is_prefix(&self, _field: &Field) -> bool {
        false
    }
}

/// Key-based presenter.
///
/// # Example
///
/// ```
/// use agent_logger::{Field, FieldPresenter, Presenter};
///
/// let presenter = FieldPresenter::new().hide("internal").prefix("job");
/// assert!(presenter.is_prefix(&Field::new("job", 1).unwrap()));
/// assert!(!presenter.is_visible(&Field::new("internal", "x").unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldPresenter {
    hidden: HashSet<String>,
    prefixed: HashSet<String>,
}

impl FieldPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default policy for uncolored text: everything but the agent name.
    pub fn plain() -> Self {
        Self::new().hide(AGENT_NAME_FIELD)
    }

    #[must_use]
    pub fn hide(mut self, key: impl Into<String>) -> Self {
        self.hidden.insert(key.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, key: impl Into<String>) -> Self {
        self.prefixed.insert(key.into());
        self
    }
}

impl Presenter for FieldPresenter {
    fn is_visible(&self, field: &Field) -> bool {
        !self.hidden.contains(field.key())
    }

    fn is_prefix(&self, field: &Field) -> bool {
        self.prefixed.contains(field.key())
    }
}
