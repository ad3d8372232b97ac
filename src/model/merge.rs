//! Merge source binding of a label document

/// Id written for (and read back as) the absence of a merge source
pub const NONE_ID: &str = "None";

/// Merge source ids known to the application
pub const KNOWN_IDS: &[&str] = &[
    "Text/Comma",
    "Text/Comma/Line1Keys",
    "Text/Tab",
    "Text/Tab/Line1Keys",
    "Text/Colon",
    "Text/Colon/Line1Keys",
    "Text/Semicolon",
    "Text/Semicolon/Line1Keys",
];

/// Where per-record field values come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MergeSource {
    /// The document is not merged
    #[default]
    None,
    /// A merge source implementation selected by `id`, reading from `source`
    ///
    /// `id` is never [`NONE_ID`]; the writer refuses such a value.
    External { id: String, source: String },
}

impl MergeSource {
    /// An external source; the id [`NONE_ID`] yields [`MergeSource::None`]
    pub fn external(id: impl Into<String>, source: impl Into<String>) -> Self {
        let id = id.into();
        if id == NONE_ID {
            return Self::None;
        }
        Self::External {
            id,
            source: source.into(),
        }
    }

    /// Comma separated text file, optionally keyed by its first line
    pub fn csv(path: impl Into<String>, line1_keys: bool) -> Self {
        let id = if line1_keys {
            "Text/Comma/Line1Keys"
        } else {
            "Text/Comma"
        };
        Self::external(id, path)
    }

    pub fn id(&self) -> &str {
        match self {
            Self::None => NONE_ID,
            Self::External { id, .. } => id,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::None => "",
            Self::External { source, .. } => source,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the id names a merge source the application ships
    pub fn is_known(&self) -> bool {
        match self {
            Self::None => true,
            Self::External { id, .. } => KNOWN_IDS.contains(&id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_accessors() {
        let merge = MergeSource::default();
        assert!(merge.is_none());
        assert_eq!(merge.id(), "None");
        assert_eq!(merge.source(), "");
    }

    #[test]
    fn test_csv_ids() {
        assert_eq!(MergeSource::csv("a.csv", false).id(), "Text/Comma");
        let keyed = MergeSource::csv("a.csv", true);
        assert_eq!(keyed.id(), "Text/Comma/Line1Keys");
        assert_eq!(keyed.source(), "a.csv");
        assert!(keyed.is_known());
        assert!(!MergeSource::external("Database/Odbc", "dsn").is_known());
    }

    #[test]
    fn test_external_none_id_is_no_merge() {
        assert_eq!(MergeSource::external("None", "x.csv"), MergeSource::None);
    }
}
