use {
    anyhow::ensure,
    warp_storage::Item,
    warp_types::{Addr, ContractError, MutableCtx},
};

pub const OWNER: Item<Addr> = Item::new("owner");

/// Default and maximum number of entries returned by paginated queries.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;
pub const MAX_PAGE_LIMIT: u32 = 100;

pub fn ensure_owner(ctx: &MutableCtx) -> anyhow::Result<Addr> {
    let owner = OWNER.load(ctx.storage)?;

    ensure!(ctx.sender == owner, ContractError::Unauthorized {
        sender: ctx.sender,
    });

    Ok(owner)
}

pub(crate) fn page_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize
}
