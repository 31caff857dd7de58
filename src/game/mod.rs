//! Game session state and the word submission protocol

pub mod session;
pub mod state;
pub mod submit;

pub use session::{Session, StartReport, StartSource, Submitted};
pub use state::GameState;
pub use submit::{SubmitResult, submit};
