pub mod account;
pub mod dto;
pub mod error;
pub use account::{Account, AccountDraft, ValidationError};
pub use error::Error;
