//! Modify options and configuration

use crate::error::ModifyResult;
use crate::function::CellFunction;

/// Options for [`modify_with_options`](crate::modify_with_options)
///
/// # Examples
///
/// ```
/// use celltensor_exec::{CellFunction, ModifyOptions};
///
/// let options = ModifyOptions::new()
///     .with_function(CellFunction::Add)
///     .with_strict(true);
/// assert!(options.strict);
///
/// let parsed = ModifyOptions::new().with_function_name("min").unwrap();
/// assert_eq!(parsed.function, CellFunction::Min);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifyOptions {
    /// Combining function
    pub function: CellFunction,
    /// Fail with [`ModifyError::Rejected`](crate::ModifyError::Rejected)
    /// instead of discarding cells
    pub strict: bool,
}

impl ModifyOptions {
    /// Create new options with defaults (replace, non-strict)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the combining function
    pub fn with_function(mut self, function: CellFunction) -> Self {
        self.function = function;
        self
    }

    /// Set the combining function by name
    pub fn with_function_name(mut self, name: &str) -> ModifyResult<Self> {
        self.function = name.parse()?;
        Ok(self)
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
