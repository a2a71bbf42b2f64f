#![forbid(unsafe_code)]

use cb_core::HistoryError;
use cb_storage::StoreError;

#[derive(Debug)]
pub enum TrackError {
    Store(StoreError),
    History(HistoryError),
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "store: {err}"),
            Self::History(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TrackError {}

impl From<StoreError> for TrackError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<HistoryError> for TrackError {
    fn from(value: HistoryError) -> Self {
        Self::History(value)
    }
}
