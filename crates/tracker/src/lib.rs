#![forbid(unsafe_code)]

mod error;
mod replay;
mod requests;
mod workbench;

pub use error::TrackError;
pub use requests::{
    CatalogStepPatch, DataRowCellsUpdate, DataRowPatch, MembershipOrderUpdate, MembershipPatch,
    TestCasePatch,
};
pub use workbench::Workbench;
