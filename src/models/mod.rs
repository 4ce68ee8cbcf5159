pub mod user;

pub use user::{UserInput, UserRecord, UserStatus};
