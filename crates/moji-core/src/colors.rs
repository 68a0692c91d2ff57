//! Terminal styling for `moji dump` and the compile trace.
//!
//! Output is tagged by [`Role`] and styled only when [`Colors`] is enabled,
//! so callers never juggle escape codes themselves.

use std::fmt;

/// What a piece of output is, independent of how it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Category and fragment names.
    Name,
    /// Pattern text and canonical keys.
    Literal,
    /// Counts, sizes, encodings.
    Meta,
}

impl Role {
    /// SGR parameter from the 16-color set.
    fn sgr(self) -> &'static str {
        match self {
            Role::Name => "36",
            Role::Literal => "33",
            Role::Meta => "2",
        }
    }
}

/// Whether output gets ANSI styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Wrap `value` so it displays styled as `role`.
    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            role: self.enabled.then_some(role),
            value,
        }
    }
}

/// A value displayed with an optional style. Built by [`Colors::paint`].
#[derive(Clone, Copy, Debug)]
pub struct Painted<T> {
    role: Option<Role>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "\x1b[{}m{}\x1b[0m", role.sgr(), self.value),
            None => fmt::Display::fmt(&self.value, f),
        }
    }
}
