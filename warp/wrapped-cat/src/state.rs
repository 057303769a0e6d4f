use {
    anyhow::ensure,
    warp_storage::Item,
    warp_types::{
        wrapped_cat::{Config, PuzzleHashes},
        ContractError, MutableCtx, Storage,
    },
};

pub const CONFIG: Item<Config> = Item::new("config");

/// Set once by the owner after deployment.
pub const PUZZLE_HASHES: Item<PuzzleHashes> = Item::new("puzzle_hashes");

pub fn load_puzzle_hashes(storage: &dyn Storage) -> anyhow::Result<PuzzleHashes> {
    PUZZLE_HASHES
        .may_load(storage)?
        .ok_or_else(|| ContractError::NotInitialized.into())
}

/// Load the config, erroring if the sender isn't the owner.
pub fn load_config_as_owner(ctx: &MutableCtx) -> anyhow::Result<Config> {
    let cfg = CONFIG.load(ctx.storage)?;

    ensure!(ctx.sender == cfg.owner, ContractError::Unauthorized {
        sender: ctx.sender,
    });

    Ok(cfg)
}
