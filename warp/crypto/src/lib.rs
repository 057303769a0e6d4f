mod error;
mod secp256k1;
mod utils;

pub use {error::*, secp256k1::*, utils::*};
