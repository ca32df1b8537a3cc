use thiserror::Error;

/// Failures talking to the hosted table store. No variant is retried;
/// every failure is terminal for the call that produced it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing or empty deploy-time configuration. Fatal at initialization.
    #[error("store configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connect, timeout, body decode).
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status} for {table}: {body}")]
    UnexpectedStatus {
        table: &'static str,
        status: u16,
        body: String,
    },

    /// An insert with `return=representation` came back empty.
    #[error("store returned no row for insert into {table}")]
    MissingRow { table: &'static str },
}
