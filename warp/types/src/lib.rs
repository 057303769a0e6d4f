mod buffer;
mod bytes;
mod context;
mod contract_error;
mod encoding;
mod error;
mod math;
mod mock;
mod payout;
mod response;
mod result;
mod signature;
mod storage;

pub mod erc20_bridge;
pub mod portal;
pub mod receiver;
pub mod token;
pub mod typed_data;
pub mod wrapped_cat;
pub mod wrapped_native;

pub use {
    buffer::*, bytes::*, context::*, contract_error::*, encoding::*, error::*, math::*,
    mock::*, payout::*, response::*, result::*, signature::*, storage::*,
};
