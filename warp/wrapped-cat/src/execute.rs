use {
    crate::{load_config_as_owner, load_puzzle_hashes, CONFIG, PUZZLE_HASHES},
    anyhow::ensure,
    warp_token::{approve, burn, mint, spend_allowance, transfer},
    warp_types::{
        portal,
        receiver::{payload_words, ReceiverMsg},
        scale_up, tip_of, tip_with_minimum, validate_tip_bps,
        wrapped_cat::{
            BridgedBack, Config, ExecuteMsg, InstantiateMsg, Minted, PuzzleHashes,
            DEFAULT_DECIMALS,
        },
        ChainCode, ContractError, Hash256, Message, MutableCtx, QuerierExt, Response, StdError,
    },
};

pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> anyhow::Result<Response> {
    ensure!(!msg.portal.is_zero(), ContractError::ZeroPortal);

    validate_tip_bps(msg.tip_bps)?;

    ensure!(msg.mojo_to_token_ratio > 0, ContractError::NonPositiveAmount {
        reason: "mojo to token ratio must be positive",
    });

    warp_token::initialize(ctx.storage, msg.name, msg.symbol, DEFAULT_DECIMALS)?;

    CONFIG.save(ctx.storage, &Config {
        owner: ctx.sender,
        portal: msg.portal,
        tip_bps: msg.tip_bps,
        mojo_to_token_ratio: msg.mojo_to_token_ratio,
        other_chain: msg.other_chain,
    })?;

    Ok(Response::new())
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> anyhow::Result<Response> {
    match msg {
        ExecuteMsg::InitializePuzzleHashes {
            locker_puzzle_hash,
            unlocker_puzzle_hash,
        } => initialize_puzzle_hashes(ctx, PuzzleHashes {
            locker_puzzle_hash,
            unlocker_puzzle_hash,
        }),
        ExecuteMsg::BridgeBack { receiver, amount } => bridge_back(ctx, receiver, amount),
        ExecuteMsg::Transfer { to, amount } => {
            let event = transfer(ctx.storage, ctx.sender, to, amount)?;
            Ok(Response::new().add_event(event)?)
        },
        ExecuteMsg::TransferFrom { from, to, amount } => {
            spend_allowance(ctx.storage, from, ctx.sender, amount)?;
            let event = transfer(ctx.storage, from, to, amount)?;
            Ok(Response::new().add_event(event)?)
        },
        ExecuteMsg::Approve { spender, amount } => {
            let event = approve(ctx.storage, ctx.sender, spender, amount)?;
            Ok(Response::new().add_event(event)?)
        },
        ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
            nonce,
            source_chain,
            source,
            payload,
        }) => receive_message(ctx, nonce, source_chain, source, payload),
    }
}

#[inline]
fn initialize_puzzle_hashes(
    ctx: MutableCtx,
    puzzle_hashes: PuzzleHashes,
) -> anyhow::Result<Response> {
    load_config_as_owner(&ctx)?;

    ensure!(
        !PUZZLE_HASHES.exists(ctx.storage),
        ContractError::AlreadyInitialized
    );

    PUZZLE_HASHES.save(ctx.storage, &puzzle_hashes)?;

    Ok(Response::new())
}

#[inline]
fn bridge_back(ctx: MutableCtx, receiver: Hash256, amount: u128) -> anyhow::Result<Response> {
    let cfg = CONFIG.load(ctx.storage)?;
    let puzzle_hashes = load_puzzle_hashes(ctx.storage)?;

    let toll: u128 = ctx
        .querier
        .query_wasm_smart(cfg.portal, &portal::QueryMsg::MessageToll {})?;

    ensure!(ctx.funds == toll, ContractError::IncorrectToll {
        expect: toll,
        actual: ctx.funds,
    });

    ensure!(amount > 0, ContractError::NonPositiveAmount {
        reason: "amount must be positive",
    });

    // Unlike inbound transfers, the tip here is never rounded down to zero.
    let tip = tip_with_minimum(amount, cfg.tip_bps)?;

    ensure!(amount > tip, ContractError::NonPositiveAmount {
        reason: "nothing left after the tip",
    });

    let burned = burn(
        ctx.storage,
        ctx.sender,
        scale_up(amount, cfg.mojo_to_token_ratio)?,
    )?;
    let tipped = mint(
        ctx.storage,
        cfg.portal,
        scale_up(tip, cfg.mojo_to_token_ratio)?,
    )?;

    Ok(Response::new()
        .add_message(Message::execute(
            cfg.portal,
            &portal::ExecuteMsg::SendMessage {
                destination_chain: cfg.other_chain,
                destination: puzzle_hashes.unlocker_puzzle_hash,
                payload: vec![receiver, Hash256::from_u128(amount - tip)],
            },
            toll,
        )?)
        .add_event(burned)?
        .add_event(tipped)?
        .add_event(BridgedBack {
            sender: ctx.sender,
            receiver,
            amount: amount - tip,
            tip,
        })?)
}

#[inline]
fn receive_message(
    ctx: MutableCtx,
    nonce: Hash256,
    source_chain: ChainCode,
    source: Hash256,
    payload: Vec<Hash256>,
) -> anyhow::Result<Response> {
    let cfg = CONFIG.load(ctx.storage)?;

    ensure_from_locker(&ctx, &cfg, source_chain, source)?;

    let [receiver, amount] = payload_words(&payload)?;
    let receiver = receiver.to_addr().map_err(malformed_payload)?;
    let amount = amount.to_u128().map_err(malformed_payload)?;

    ensure!(amount > 0, ContractError::NonPositiveAmount {
        reason: "amount must be positive",
    });

    let tip = tip_of(amount, cfg.tip_bps)?;
    let net = amount - tip;

    let mut response = Response::new()
        .add_event(mint(
            ctx.storage,
            receiver,
            scale_up(net, cfg.mojo_to_token_ratio)?,
        )?)?;

    if tip > 0 {
        response = response.add_event(mint(
            ctx.storage,
            cfg.portal,
            scale_up(tip, cfg.mojo_to_token_ratio)?,
        )?)?;
    }

    Ok(response.add_event(Minted {
        nonce,
        receiver,
        amount: net,
        tip,
    })?)
}

fn ensure_from_locker(
    ctx: &MutableCtx,
    cfg: &Config,
    source_chain: ChainCode,
    source: Hash256,
) -> anyhow::Result<()> {
    ensure!(ctx.sender == cfg.portal, ContractError::MessageMismatch {
        reason: "sender is not the portal",
    });

    ensure!(source_chain == cfg.other_chain, ContractError::MessageMismatch {
        reason: "unexpected source chain",
    });

    let puzzle_hashes = load_puzzle_hashes(ctx.storage)?;

    ensure!(
        source == puzzle_hashes.locker_puzzle_hash,
        ContractError::MessageMismatch {
            reason: "unexpected source",
        }
    );

    Ok(())
}

fn malformed_payload(err: StdError) -> ContractError {
    ContractError::MalformedPayload {
        reason: err.to_string(),
    }
}

// ----------------------------------- tests -----------------------------------
