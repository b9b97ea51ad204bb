// File: src/surface.rs
// Purpose: Host abstraction over the live signup inputs

use crate::error::Result;
use crate::field::{FieldName, FieldStatus};

/// The live inputs a [`FieldValidator`](crate::FieldValidator) reads and marks.
///
/// Implemented over DOM elements by the WASM crate and in memory by
/// [`MemoryForm`](crate::memory::MemoryForm).
pub trait FormSurface {
    /// Current raw value of the field
    fn value(&self, field: FieldName) -> Result<String>;

    /// Removes both the valid and invalid markers from the field
    fn clear_status(&mut self, field: FieldName) -> Result<()>;

    /// Applies the marker for `status`; `Unset` applies nothing
    fn mark(&mut self, field: FieldName, status: FieldStatus) -> Result<()>;

    /// Status as currently shown by the field's markers
    fn status(&self, field: FieldName) -> Result<FieldStatus>;

    /// Moves input focus to the field
    fn focus(&mut self, field: FieldName) -> Result<()>;
}
