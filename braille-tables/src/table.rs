//! Braille table descriptors.

use serde::Serialize;

use crate::error::{BrailleTableError, Result};

/// Information about a braille translation table.
///
/// A table that supports neither output nor input is useless, so
/// [`TableDescriptor::new`] rejects that combination. Descriptors are plain
/// data: registering one does not touch the table file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    /// File name of the table, unique within a registry.
    pub file_name: String,
    /// Name shown to the user, already localized.
    pub display_name: String,
    /// True for contracted braille codes (grade 2 and above).
    pub contracted: bool,
    /// True if the table can be used to render text as braille.
    pub output: bool,
    /// True if the table can be used to interpret braille input.
    pub input: bool,
}

impl TableDescriptor {
    /// Create a new descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`BrailleTableError::InvalidDescriptor`] when both `output`
    /// and `input` are false.
    pub fn new(
        file_name: impl Into<String>,
        display_name: impl Into<String>,
        contracted: bool,
        output: bool,
        input: bool,
    ) -> Result<Self> {
        let file_name = file_name.into();
        if !output && !input {
            return Err(BrailleTableError::InvalidDescriptor { file_name });
        }
        Ok(Self {
            file_name,
            display_name: display_name.into(),
            contracted,
            output,
            input,
        })
    }
}
