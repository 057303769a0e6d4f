use {
    crate::{
        AppCtx, AppError, AppResult, QuerierProvider, StorageProvider, BALANCES, CONTRACTS,
        CONTRACT_NAMESPACE,
    },
    warp_types::{Addr, ImmutableCtx, Json, Storage},
};

/// Maximum depth of nested queries, i.e. a contract querying a contract that
/// queries another contract, and so on.
pub const MAX_QUERY_DEPTH: usize = 3;

pub fn do_query_wasm_smart<S>(
    ctx: AppCtx<S>,
    contract: Addr,
    msg: &Json,
    query_depth: usize,
) -> AppResult<Json>
where
    S: Storage + Clone,
{
    if query_depth > MAX_QUERY_DEPTH {
        return Err(AppError::ExceedMaxQueryDepth);
    }

    let code_id = CONTRACTS
        .may_load(&ctx.storage, contract)?
        .ok_or(AppError::ContractNotFound { address: contract })?;
    let code = ctx
        .codes
        .get(code_id as usize)
        .ok_or(AppError::CodeNotFound { code_id })?;

    let storage = StorageProvider::new(ctx.storage.clone(), &[
        CONTRACT_NAMESPACE,
        contract.as_slice(),
    ]);
    let querier = QuerierProvider::new(ctx.clone(), query_depth + 1);

    let imm_ctx = ImmutableCtx {
        storage: &storage,
        querier: &querier,
        chain_id: ctx.chain_id,
        block: ctx.block,
        contract,
    };

    code.query(imm_ctx, msg)?.map_err(|msg| AppError::Guest {
        address: contract,
        name: "query",
        msg,
    })
}

pub fn do_query_balance(storage: &dyn Storage, address: Addr) -> AppResult<u128> {
    Ok(BALANCES.may_load(storage, address)?.unwrap_or_default())
}
