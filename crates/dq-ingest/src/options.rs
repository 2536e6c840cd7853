//! Load options.

/// Cell texts treated as null when loading, in addition to empty cells.
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "NA", "N/A", "NaN", "nan", "NULL", "null", "None", "#N/A",
];

/// Options controlling how a table is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field separator override for delimited files.
    pub delimiter: Option<u8>,
    /// Worksheet to read (first sheet when `None`).
    pub sheet: Option<String>,
    /// Infer column types for delimited files instead of reading text.
    pub infer_types: bool,
    /// Cell texts normalized to null.
    pub null_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            sheet: None,
            infer_types: false,
            null_values: DEFAULT_NULL_VALUES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    #[must_use]
    pub fn with_infer_types(mut self, enable: bool) -> Self {
        self.infer_types = enable;
        self
    }

    #[must_use]
    pub fn with_null_values(mut self, values: Vec<String>) -> Self {
        self.null_values = values;
        self
    }

    /// True when the cell text stands for a missing value.
    pub fn is_null_marker(&self, value: &str) -> bool {
        value.is_empty() || self.null_values.iter().any(|marker| marker == value)
    }
}
