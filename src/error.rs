use thiserror::Error;

// ---------------------------------------------------------------------------
// Typed domain errors, carried through anyhow chains
// ---------------------------------------------------------------------------

/// A `--filter` / `--aggregate` configuration string with the wrong number of
/// comma-separated fields.  The display text is shown to the user verbatim;
/// nothing is printed to stdout after this is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {what} format. Use '{expected}'")]
pub struct ConfigFormatError {
    pub what: &'static str,
    pub expected: &'static str,
}

/// A requested column that is absent from a record.  Fatal: filtering and
/// aggregation stop at the first record lacking the column, and this is never
/// converted into the soft "no result" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Column '{0}' not found in the data")]
pub struct MissingColumnError(pub String);
