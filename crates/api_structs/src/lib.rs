mod account;
mod status;

pub mod dtos {
    pub use crate::account::dtos::*;
}

pub use crate::account::api::*;
pub use crate::status::api::*;
