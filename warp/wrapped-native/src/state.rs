use warp_storage::Item;

/// Native units per wrapped unit.
pub const RATIO: Item<u128> = Item::new("ratio");
