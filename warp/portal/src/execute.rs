use {
    crate::{
        asset_rescues, consume, ensure_destination_supported, ensure_owner,
        ensure_source_supported, ensure_toll_paid, ensure_unconsumed, fee_withdrawals,
        next_outbound_nonce, set_chain_supported, set_message_toll, set_signature_threshold,
        set_signer, verify_signatures, MESSAGE_TOLL, OWNER,
    },
    anyhow::ensure,
    warp_types::{
        portal::{
            ExecuteMsg, FeesWithdrawn, InstantiateMsg, Message, MessageReceived, MessageSent,
            MessageTollUpdated, OwnershipTransferred, SignatureThresholdUpdated, SignerUpdated,
            SupportedChainUpdated,
        },
        receiver::{self, ReceiverMsg},
        typed_data::message_digest,
        Addr, ChainCode, ContractError, Hash256, HexBinary, MutableCtx, Response,
    },
};

pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> anyhow::Result<Response> {
    OWNER.save(ctx.storage, &ctx.sender)?;
    MESSAGE_TOLL.save(ctx.storage, &msg.message_toll)?;

    for signer in msg.signers {
        set_signer(ctx.storage, signer, true)?;
    }

    set_signature_threshold(ctx.storage, msg.signature_threshold)?;

    for chain in msg.supported_chains {
        set_chain_supported(ctx.storage, chain, true)?;
    }

    Ok(Response::new())
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> anyhow::Result<Response> {
    match msg {
        ExecuteMsg::SendMessage {
            destination_chain,
            destination,
            payload,
        } => send_message(ctx, destination_chain, destination, payload),
        ExecuteMsg::ReceiveMessage {
            nonce,
            source_chain,
            source,
            destination,
            payload,
            signatures,
        } => receive_message(
            ctx,
            Message {
                nonce,
                source_chain,
                source,
                destination,
                payload,
            },
            signatures,
        ),
        ExecuteMsg::WithdrawFees {
            recipients,
            amounts,
        } => withdraw_fees(ctx, recipients, amounts),
        ExecuteMsg::RescueAsset {
            token,
            recipients,
            amounts,
        } => rescue_asset(ctx, token, recipients, amounts),
        ExecuteMsg::UpdateSigner { signer, is_signer } => update_signer(ctx, signer, is_signer),
        ExecuteMsg::UpdateSignatureThreshold { threshold } => {
            update_signature_threshold(ctx, threshold)
        },
        ExecuteMsg::UpdateMessageToll { toll } => update_message_toll(ctx, toll),
        ExecuteMsg::UpdateSupportedChain {
            chain,
            is_supported,
        } => update_supported_chain(ctx, chain, is_supported),
        ExecuteMsg::TransferOwnership { new_owner } => transfer_ownership(ctx, new_owner),
    }
}

/// Accept native currency sent without a message, e.g. native tips routed
/// here by the adapters.
pub fn receive(_ctx: MutableCtx) -> anyhow::Result<Response> {
    Ok(Response::new())
}

#[inline]
fn send_message(
    ctx: MutableCtx,
    destination_chain: ChainCode,
    destination: Hash256,
    payload: Vec<Hash256>,
) -> anyhow::Result<Response> {
    ensure_destination_supported(ctx.storage, destination_chain)?;
    ensure_toll_paid(ctx.storage, ctx.funds)?;

    let nonce = next_outbound_nonce(ctx.storage)?;

    Ok(Response::new().add_event(MessageSent {
        nonce,
        sender: ctx.sender,
        destination_chain,
        destination,
        payload,
    })?)
}

#[inline]
fn receive_message(
    ctx: MutableCtx,
    message: Message,
    signatures: HexBinary,
) -> anyhow::Result<Response> {
    ensure_source_supported(ctx.storage, message.source_chain)?;
    ensure_unconsumed(ctx.storage, message.source_chain, message.nonce)?;

    let digest = message_digest(ctx.chain_id, ctx.contract, &message);
    verify_signatures(ctx.storage, digest, &signatures)?;

    consume(ctx.storage, message.source_chain, message.nonce);

    Ok(Response::new()
        .add_message(warp_types::Message::execute(
            message.destination,
            &receiver::ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
                nonce: message.nonce,
                source_chain: message.source_chain,
                source: message.source,
                payload: message.payload.clone(),
            }),
            0,
        )?)
        .add_event(MessageReceived {
            nonce: message.nonce,
            source_chain: message.source_chain,
            source: message.source,
            destination: message.destination,
            payload: message.payload,
        })?)
}

#[inline]
fn withdraw_fees(
    ctx: MutableCtx,
    recipients: Vec<Addr>,
    amounts: Vec<u128>,
) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    Ok(Response::new()
        .add_messages(fee_withdrawals(&recipients, &amounts)?)
        .add_event(FeesWithdrawn {
            recipients,
            amounts,
        })?)
}

#[inline]
fn rescue_asset(
    ctx: MutableCtx,
    token: Addr,
    recipients: Vec<Addr>,
    amounts: Vec<u128>,
) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    Ok(Response::new().add_messages(asset_rescues(token, &recipients, &amounts)?))
}

#[inline]
fn update_signer(ctx: MutableCtx, signer: Addr, is_signer: bool) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    set_signer(ctx.storage, signer, is_signer)?;

    Ok(Response::new().add_event(SignerUpdated { signer, is_signer })?)
}

#[inline]
fn update_signature_threshold(ctx: MutableCtx, threshold: u32) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    let old_threshold = set_signature_threshold(ctx.storage, threshold)?;

    Ok(Response::new().add_event(SignatureThresholdUpdated {
        old_threshold,
        new_threshold: threshold,
    })?)
}

#[inline]
fn update_message_toll(ctx: MutableCtx, toll: u128) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    let old_toll = set_message_toll(ctx.storage, toll)?;

    Ok(Response::new().add_event(MessageTollUpdated {
        old_toll,
        new_toll: toll,
    })?)
}

#[inline]
fn update_supported_chain(
    ctx: MutableCtx,
    chain: ChainCode,
    is_supported: bool,
) -> anyhow::Result<Response> {
    ensure_owner(&ctx)?;

    set_chain_supported(ctx.storage, chain, is_supported)?;

    Ok(Response::new().add_event(SupportedChainUpdated {
        chain,
        is_supported,
    })?)
}

#[inline]
fn transfer_ownership(ctx: MutableCtx, new_owner: Addr) -> anyhow::Result<Response> {
    let previous_owner = ensure_owner(&ctx)?;

    ensure!(!new_owner.is_zero(), ContractError::ZeroAddress { what: "owner" });
    ensure!(new_owner != previous_owner, ContractError::NoChange { what: "owner" });

    OWNER.save(ctx.storage, &new_owner)?;

    Ok(Response::new().add_event(OwnershipTransferred {
        previous_owner,
        new_owner,
    })?)
}

// ----------------------------------- tests -----------------------------------
