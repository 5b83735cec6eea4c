//! Named combining functions
//!
//! The engine accepts any `Fn(f64, f64) -> f64` called as `f(old, new)`.
//! [`CellFunction`] names the common ones so they can be picked from
//! configuration.

use crate::error::ModifyError;
use std::fmt;
use std::str::FromStr;

/// Built-in combining functions for modify
///
/// # Examples
///
/// ```
/// use celltensor_exec::CellFunction;
///
/// assert_eq!(CellFunction::Replace.apply(1.0, 5.0), 5.0);
/// assert_eq!(CellFunction::Add.apply(1.0, 5.0), 6.0);
/// assert_eq!("MAX".parse::<CellFunction>().unwrap(), CellFunction::Max);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellFunction {
    /// Keep the update value (default)
    #[default]
    Replace,
    /// Add the update to the existing value
    Add,
    /// Multiply the existing value by the update
    Multiply,
    /// Larger of existing and update values
    Max,
    /// Smaller of existing and update values
    Min,
}

impl CellFunction {
    /// Every built-in function
    pub const ALL: [CellFunction; 5] = [
        CellFunction::Replace,
        CellFunction::Add,
        CellFunction::Multiply,
        CellFunction::Max,
        CellFunction::Min,
    ];

    /// Combine an existing value with an update value
    #[inline]
    pub fn apply(self, old: f64, new: f64) -> f64 {
        match self {
            CellFunction::Replace => new,
            CellFunction::Add => old + new,
            CellFunction::Multiply => old * new,
            CellFunction::Max => old.max(new),
            CellFunction::Min => old.min(new),
        }
    }

    /// This function as a closure for [`modify`](crate::modify)
    pub fn as_fn(self) -> impl Fn(f64, f64) -> f64 + Copy + Send + Sync {
        move |old, new| self.apply(old, new)
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            CellFunction::Replace => "replace",
            CellFunction::Add => "add",
            CellFunction::Multiply => "multiply",
            CellFunction::Max => "max",
            CellFunction::Min => "min",
        }
    }
}

impl fmt::Display for CellFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellFunction {
    type Err = ModifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellFunction::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModifyError::UnknownFunction {
                name: s.to_string(),
            })
    }
}
