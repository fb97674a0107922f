//! Kennel core: pure state machine and the breed matcher.
mod breeds;
mod effect;
mod msg;
mod program;
mod state;
mod update;

pub use breeds::{Breeds, Classification, Probe};
pub use effect::{Effect, NoticeLevel};
pub use msg::Msg;
pub use program::{Dispatch, Program, Subscription, Task};
pub use state::{AppState, Picture, Remote, SearchOutcome};
pub use update::{init, update};
