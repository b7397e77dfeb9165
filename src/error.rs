//! Error classification shared across subsystems.
//!
//! Each subsystem owns its own error enum; `ErrorKind` folds them into the
//! four categories callers branch on.

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed caller input (address, signature, transaction fields).
    /// Returned before any network activity and never worth retrying.
    Validation,
    /// The transport session could not be established or is gone.
    Connection,
    /// The node or the transport failed while serving a request.
    Rpc,
    /// The signature is well-formed but does not recover to a key.
    Recovery,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Connection => "connection",
            ErrorKind::Rpc => "rpc",
            ErrorKind::Recovery => "recovery",
        };
        f.write_str(name)
    }
}
