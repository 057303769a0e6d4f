use {
    crate::{CONFIG, PUZZLE_HASHES},
    warp_types::{erc20_bridge::QueryMsg, ImmutableCtx, Json, JsonSerExt, StdResult},
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
    match msg {
        QueryMsg::Config {} => CONFIG.load(ctx.storage)?.to_json(),
        QueryMsg::PuzzleHashes {} => PUZZLE_HASHES.may_load(ctx.storage)?.to_json(),
    }
}
