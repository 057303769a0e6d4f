use {
    crate::{
        current_outbound_nonce, is_consumed, is_signer, list_signers, list_supported_chains,
        MESSAGE_TOLL, OWNER, SIGNATURE_THRESHOLD, SIGNER_COUNT, SUPPORTED_CHAINS,
    },
    warp_types::{
        portal::{Config, QueryMsg},
        typed_data::message_digest,
        ImmutableCtx, Json, JsonSerExt, StdResult,
    },
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
    match msg {
        QueryMsg::Config {} => query_config(&ctx)?.to_json(),
        QueryMsg::MessageToll {} => MESSAGE_TOLL.load(ctx.storage)?.to_json(),
        QueryMsg::SignatureThreshold {} => SIGNATURE_THRESHOLD.load(ctx.storage)?.to_json(),
        QueryMsg::IsSigner { signer } => is_signer(ctx.storage, signer).to_json(),
        QueryMsg::Signers { start_after, limit } => {
            list_signers(ctx.storage, start_after, limit)?.to_json()
        },
        QueryMsg::SupportedChains { start_after, limit } => {
            list_supported_chains(ctx.storage, start_after, limit)?.to_json()
        },
        QueryMsg::IsSupportedChain { chain } => SUPPORTED_CHAINS.has(ctx.storage, chain).to_json(),
        QueryMsg::OutboundNonce {} => current_outbound_nonce(ctx.storage)?.to_json(),
        QueryMsg::NonceUsed {
            source_chain,
            nonce,
        } => is_consumed(ctx.storage, source_chain, nonce).to_json(),
        QueryMsg::Digest { message } => {
            message_digest(ctx.chain_id, ctx.contract, &message).to_json()
        },
    }
}

#[inline]
fn query_config(ctx: &ImmutableCtx) -> StdResult<Config> {
    Ok(Config {
        owner: OWNER.load(ctx.storage)?,
        message_toll: MESSAGE_TOLL.load(ctx.storage)?,
        signature_threshold: SIGNATURE_THRESHOLD.load(ctx.storage)?,
        signer_count: SIGNER_COUNT.load(ctx.storage)?,
        outbound_nonce: current_outbound_nonce(ctx.storage)?,
    })
}
