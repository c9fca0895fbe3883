//! Round lifecycle
//!
//! Starting, resuming and playing a round, plus the snapshot storage and root
//! selection it depends on.

mod error;
pub mod persistence;
mod selector;
mod snapshot;
mod state;

pub use error::{ResumeError, RoundError, SubmitError};
pub use persistence::{JsonFileStore, MemoryStore, PersistenceError, PersistenceGateway};
pub use selector::{FnSelector, RandomSelector, RootSelector};
pub use snapshot::{CURRENT_SNAPSHOT_VERSION, Snapshot};
pub use state::{RoundOrigin, RoundState};
