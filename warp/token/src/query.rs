use {
    crate::{allowance_of, balance_of, PERMIT_NONCES, TOKEN_INFO},
    warp_types::{token::QueryMsg, ImmutableCtx, Json, JsonSerExt, StdResult},
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
    match msg {
        QueryMsg::TokenInfo {} => TOKEN_INFO.load(ctx.storage)?.to_json(),
        QueryMsg::Balance { address } => balance_of(ctx.storage, address)?.to_json(),
        QueryMsg::Allowance { owner, spender } => {
            allowance_of(ctx.storage, owner, spender)?.to_json()
        },
        QueryMsg::Nonce { owner } => PERMIT_NONCES
            .may_load(ctx.storage, owner)?
            .unwrap_or_default()
            .to_json(),
        QueryMsg::TotalSupply {} => TOKEN_INFO.load(ctx.storage)?.total_supply.to_json(),
    }
}
