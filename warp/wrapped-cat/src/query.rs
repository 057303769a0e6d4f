use {
    crate::{CONFIG, PUZZLE_HASHES},
    warp_token::{allowance_of, balance_of, TOKEN_INFO},
    warp_types::{wrapped_cat::QueryMsg, ImmutableCtx, Json, JsonSerExt, StdResult},
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
    match msg {
        QueryMsg::Config {} => CONFIG.load(ctx.storage)?.to_json(),
        QueryMsg::PuzzleHashes {} => PUZZLE_HASHES.may_load(ctx.storage)?.to_json(),
        QueryMsg::TokenInfo {} => TOKEN_INFO.load(ctx.storage)?.to_json(),
        QueryMsg::Balance { address } => balance_of(ctx.storage, address)?.to_json(),
        QueryMsg::Allowance { owner, spender } => {
            allowance_of(ctx.storage, owner, spender)?.to_json()
        },
        QueryMsg::TotalSupply {} => TOKEN_INFO.load(ctx.storage)?.total_supply.to_json(),
    }
}
