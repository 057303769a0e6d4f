mod bound;
mod codec;
mod counter;
mod item;
mod key;
mod map;
mod path;
mod set;
mod utils;

pub use {bound::*, codec::*, counter::*, item::*, key::*, map::*, path::*, set::*, utils::*};
