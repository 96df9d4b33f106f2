mod account;
mod shared;

pub use account::{Account, AccountFields};
pub use shared::entity::{Entity, InvalidIDError, ID};
