use {
    crate::{load_config_as_owner, load_puzzle_hashes, CONFIG, PUZZLE_HASHES},
    anyhow::ensure,
    warp_types::{
        erc20_bridge::{
            Asset, BridgedFromChia, BridgedToChia, Config, ExecuteMsg, InstantiateMsg,
            PuzzleHashes,
        },
        payouts, portal,
        receiver::{payload_words, ReceiverMsg},
        scale_down_exact, scale_factor, scale_up, tip_of,
        token::{self, TokenInfo},
        validate_tip_bps, wrapped_native, Addr, ChainCode, ContractError, Hash256, Message,
        MutableCtx, Querier, QuerierExt, Response, StdError, StdResult, OTHER_CHAIN_DECIMALS,
    },
};

pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> anyhow::Result<Response> {
    validate_tip_bps(msg.tip_bps)?;

    ensure!(!msg.portal.is_zero(), ContractError::ZeroAddress {
        what: "portal",
    });

    ensure!(!msg.wrapped_native.is_zero(), ContractError::ZeroAddress {
        what: "wrapped native",
    });

    let wrapped_native_ratio: u128 = ctx
        .querier
        .query_wasm_smart(msg.wrapped_native, &wrapped_native::QueryMsg::Ratio {})?;
    let wrapped_native_factor = query_scale_factor(ctx.querier, msg.wrapped_native)?;

    CONFIG.save(ctx.storage, &Config {
        owner: ctx.sender,
        tip_bps: msg.tip_bps,
        portal: msg.portal,
        other_chain: msg.other_chain,
        wrapped_native: msg.wrapped_native,
        wrapped_native_ratio,
        wrapped_native_factor,
    })?;

    Ok(Response::new())
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> anyhow::Result<Response> {
    match msg {
        ExecuteMsg::InitializePuzzleHashes {
            burn_puzzle_hash,
            mint_puzzle_hash,
        } => initialize_puzzle_hashes(ctx, PuzzleHashes {
            burn_puzzle_hash,
            mint_puzzle_hash,
        }),
        ExecuteMsg::BridgeToChia {
            token,
            receiver,
            amount,
        } => bridge_to_chia(ctx, token, receiver, amount, None),
        ExecuteMsg::BridgeToChiaWithPermit {
            token,
            receiver,
            amount,
            deadline,
            v,
            r,
            s,
        } => bridge_to_chia(
            ctx,
            token,
            receiver,
            amount,
            Some(PermitSignature { deadline, v, r, s }),
        ),
        ExecuteMsg::BridgeEtherToChia { receiver, max_toll } => {
            bridge_ether_to_chia(ctx, receiver, max_toll)
        },
        ExecuteMsg::RescueAsset {
            token,
            recipients,
            amounts,
        } => rescue_asset(ctx, token, recipients, amounts),
        ExecuteMsg::RescueEther {
            recipients,
            amounts,
        } => rescue_ether(ctx, recipients, amounts),
        ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
            nonce,
            source_chain,
            source,
            payload,
        }) => receive_message(ctx, nonce, source_chain, source, payload),
    }
}

/// Native currency may only come from the wrapped native contract, when it
/// pays out a withdrawal.
pub fn receive(ctx: MutableCtx) -> anyhow::Result<Response> {
    let cfg = CONFIG.load(ctx.storage)?;

    ensure!(ctx.sender == cfg.wrapped_native, ContractError::UnexpectedSender {
        sender: ctx.sender,
    });

    Ok(Response::new())
}

struct PermitSignature {
    deadline: u64,
    v: u8,
    r: Hash256,
    s: Hash256,
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
fn bridge_to_chia(
    ctx: MutableCtx,
    token: Addr,
    receiver: Hash256,
    amount: u128,
    permit: Option<PermitSignature>,
) -> anyhow::Result<Response> {
    let cfg = CONFIG.load(ctx.storage)?;
    let puzzle_hashes = load_puzzle_hashes(ctx.storage)?;

    let toll = query_message_toll(ctx.querier, cfg.portal)?;

    ensure!(ctx.funds == toll, ContractError::IncorrectToll {
        expect: toll,
        actual: ctx.funds,
    });

    ensure!(amount > 0, ContractError::NonPositiveAmount {
        reason: "amount must be positive",
    });

    let factor = query_scale_factor(ctx.querier, token)?;
    let token_amount = scale_up(amount, factor)?;
    let (bridged, tip) = deduct_tip(amount, cfg.tip_bps)?;

    let permit_msg = permit
        .map(|permit| {
            Message::execute(
                token,
                &token::ExecuteMsg::Permit {
                    owner: ctx.sender,
                    spender: ctx.contract,
                    value: token_amount,
                    deadline: permit.deadline,
                    v: permit.v,
                    r: permit.r,
                    s: permit.s,
                },
                0,
            )
        })
        .transpose()?;

    // 1. Consume the permit, if one is given.
    // 2. Pull the tokens into the adapter.
    // 3. Pay the tip, in token units, to the Portal.
    // 4. Send the message, forwarding the toll.
    Ok(Response::new()
        .may_add_message(permit_msg)
        .add_message(Message::execute(
            token,
            &token::ExecuteMsg::TransferFrom {
                from: ctx.sender,
                to: ctx.contract,
                amount: token_amount,
            },
            0,
        )?)
        .may_add_message(token_transfer(token, cfg.portal, scale_up(tip, factor)?)?)
        .add_message(send_message(
            &cfg,
            puzzle_hashes.mint_puzzle_hash,
            token,
            receiver,
            bridged,
            toll,
        )?)
        .add_event(BridgedToChia {
            sender: ctx.sender,
            token,
            receiver,
            amount: bridged,
            tip,
        })?)
}

#[inline]
fn bridge_ether_to_chia(
    ctx: MutableCtx,
    receiver: Hash256,
    max_toll: u128,
) -> anyhow::Result<Response> {
    let cfg = CONFIG.load(ctx.storage)?;
    let puzzle_hashes = load_puzzle_hashes(ctx.storage)?;

    let toll = query_message_toll(ctx.querier, cfg.portal)?;

    ensure!(toll <= max_toll, ContractError::TollTooHigh { toll, max_toll });

    ensure!(ctx.funds > toll, ContractError::NonPositiveAmount {
        reason: "attached value must exceed the message toll",
    });

    // The smallest amount of native currency that is worth one unit on the
    // other chain.
    let native = ctx.funds - toll;
    let native_per_mojo = scale_up(cfg.wrapped_native_ratio, cfg.wrapped_native_factor)?;
    let amount =
        scale_down_exact(native, native_per_mojo)?.ok_or(ContractError::NonPositiveAmount {
            reason: "value must be a whole multiple of the smallest bridgeable unit",
        })?;

    let (bridged, tip) = deduct_tip(amount, cfg.tip_bps)?;

    Ok(Response::new()
        .add_message(Message::execute(
            cfg.wrapped_native,
            &wrapped_native::ExecuteMsg::Deposit {},
            native,
        )?)
        .may_add_message(token_transfer(
            cfg.wrapped_native,
            cfg.portal,
            scale_up(tip, cfg.wrapped_native_factor)?,
        )?)
        .add_message(send_message(
            &cfg,
            puzzle_hashes.mint_puzzle_hash,
            cfg.wrapped_native,
            receiver,
            bridged,
            toll,
        )?)
        .add_event(BridgedToChia {
            sender: ctx.sender,
            token: cfg.wrapped_native,
            receiver,
            amount: bridged,
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

    ensure!(ctx.sender == cfg.portal, ContractError::MessageMismatch {
        reason: "sender is not the portal",
    });

    ensure!(source_chain == cfg.other_chain, ContractError::MessageMismatch {
        reason: "unexpected source chain",
    });

    let puzzle_hashes = load_puzzle_hashes(ctx.storage)?;

    ensure!(
        source == puzzle_hashes.burn_puzzle_hash,
        ContractError::MessageMismatch {
            reason: "unexpected source",
        }
    );

    let [asset, receiver, amount] = payload_words(&payload)?;
    let asset = asset.to_addr().map_err(malformed_payload)?;
    let receiver = receiver.to_addr().map_err(malformed_payload)?;
    let amount = amount.to_u128().map_err(malformed_payload)?;

    ensure!(amount > 0, ContractError::NonPositiveAmount {
        reason: "amount must be positive",
    });

    let (net, tip) = deduct_tip(amount, cfg.tip_bps)?;

    let (msgs, payout, tip_payout) = match resolve_asset(&cfg, asset) {
        // Unwrap into the adapter, then pay out native currency.
        Asset::WrappedNative => {
            let factor = cfg.wrapped_native_factor;
            let payout = scale_up(scale_up(net, factor)?, cfg.wrapped_native_ratio)?;
            let tip_payout = scale_up(scale_up(tip, factor)?, cfg.wrapped_native_ratio)?;

            let msgs = [
                Some(Message::execute(
                    cfg.wrapped_native,
                    &wrapped_native::ExecuteMsg::Withdraw {
                        amount: scale_up(amount, factor)?,
                    },
                    0,
                )?),
                native_transfer(receiver, payout),
                native_transfer(cfg.portal, tip_payout),
            ];

            (msgs, payout, tip_payout)
        },
        Asset::Token(token) => {
            let factor = query_scale_factor(ctx.querier, token)?;
            let payout = scale_up(net, factor)?;
            let tip_payout = scale_up(tip, factor)?;

            let msgs = [
                token_transfer(token, receiver, payout)?,
                token_transfer(token, cfg.portal, tip_payout)?,
                None,
            ];

            (msgs, payout, tip_payout)
        },
    };

    Ok(Response::new()
        .add_messages(msgs.into_iter().flatten())
        .add_event(BridgedFromChia {
            nonce,
            token: asset,
            receiver,
            amount: payout,
            tip: tip_payout,
        })?)
}

#[inline]
fn rescue_asset(
    ctx: MutableCtx,
    token: Addr,
    recipients: Vec<Addr>,
    amounts: Vec<u128>,
) -> anyhow::Result<Response> {
    load_config_as_owner(&ctx)?;

    let msgs = payouts(&recipients, &amounts)?
        .map(|(to, amount)| token_transfer(token, to, amount))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new().add_messages(msgs.into_iter().flatten()))
}

#[inline]
fn rescue_ether(
    ctx: MutableCtx,
    recipients: Vec<Addr>,
    amounts: Vec<u128>,
) -> anyhow::Result<Response> {
    load_config_as_owner(&ctx)?;

    Ok(Response::new().add_messages(
        payouts(&recipients, &amounts)?.filter_map(|(to, amount)| native_transfer(to, amount)),
    ))
}

// ---------------------------------- helpers ----------------------------------

pub fn resolve_asset(cfg: &Config, asset: Addr) -> Asset {
    if asset == cfg.wrapped_native {
        Asset::WrappedNative
    } else {
        Asset::Token(asset)
    }
}

/// Split an amount into what's bridged and the tip.
fn deduct_tip(amount: u128, tip_bps: u16) -> anyhow::Result<(u128, u128)> {
    let tip = tip_of(amount, tip_bps)?;
    let net = amount - tip;

    ensure!(net > 0, ContractError::NonPositiveAmount {
        reason: "nothing left after the tip",
    });

    Ok((net, tip))
}

fn query_message_toll(querier: &dyn Querier, portal: Addr) -> StdResult<u128> {
    querier.query_wasm_smart(portal, &portal::QueryMsg::MessageToll {})
}

/// Token units per unit of the other chain.
fn query_scale_factor(querier: &dyn Querier, token: Addr) -> anyhow::Result<u128> {
    let info: TokenInfo = querier.query_wasm_smart(token, &token::QueryMsg::TokenInfo {})?;

    scale_factor(info.decimals).ok_or_else(|| {
        ContractError::UnsupportedDecimals {
            decimals: info.decimals,
            other: OTHER_CHAIN_DECIMALS,
        }
        .into()
    })
}

fn send_message(
    cfg: &Config,
    destination: Hash256,
    asset: Addr,
    receiver: Hash256,
    amount: u128,
    toll: u128,
) -> StdResult<Message> {
    Message::execute(
        cfg.portal,
        &portal::ExecuteMsg::SendMessage {
            destination_chain: cfg.other_chain,
            destination,
            payload: vec![
                Hash256::from_addr(asset),
                receiver,
                Hash256::from_u128(amount),
            ],
        },
        toll,
    )
}

fn token_transfer(token: Addr, to: Addr, amount: u128) -> StdResult<Option<Message>> {
    if amount == 0 {
        return Ok(None);
    }

    Message::execute(token, &token::ExecuteMsg::Transfer { to, amount }, 0).map(Some)
}

fn native_transfer(to: Addr, amount: u128) -> Option<Message> {
    (amount > 0).then(|| Message::transfer(to, amount))
}

fn malformed_payload(err: StdError) -> ContractError {
    ContractError::MalformedPayload {
        reason: err.to_string(),
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        test_case::test_case,
        warp_types::{
            BlockInfo, Json, JsonDeExt, JsonSerExt, MockQuerier, MockStorage, ResultExt,
        },
    };

    const ADAPTER: Addr = Addr::mock(0xad);
    const OWNER: Addr = Addr::mock(0x01);
    const USER: Addr = Addr::mock(0x02);
    const PORTAL: Addr = Addr::mock(0xaa);
    const WETH: Addr = Addr::mock(0xee);
    const TOKEN: Addr = Addr::mock(0x70);
    const COARSE_TOKEN: Addr = Addr::mock(0x71);
    const XCH: ChainCode = ChainCode::from_inner(*b"xch");
    const BURN_PUZZLE_HASH: Hash256 = Hash256::mock(0xb0);
    const MINT_PUZZLE_HASH: Hash256 = Hash256::mock(0xb1);
    const RECEIVER: Hash256 = Hash256::mock(0xcc);

    const TOLL: u128 = 1_000_000_000_000_000;
    const TIP_BPS: u16 = 30;
    const FACTOR: u128 = 1_000_000_000_000_000;

    fn token_info(decimals: u8) -> TokenInfo {
        TokenInfo {
            name: "Token".to_string(),
            symbol: "TKN".to_string(),
            decimals,
            total_supply: 0,
        }
    }

    fn handle_query(contract: Addr, msg: &Json) -> StdResult<Json> {
        match contract {
            PORTAL => match msg.deserialize_json::<portal::QueryMsg>()? {
                portal::QueryMsg::MessageToll {} => TOLL.to_json(),
                _ => unreachable!("unexpected portal query"),
            },
            WETH => match msg.deserialize_json::<wrapped_native::QueryMsg>()? {
                wrapped_native::QueryMsg::Ratio {} => 1_u128.to_json(),
                wrapped_native::QueryMsg::TokenInfo {} => token_info(18).to_json(),
                _ => unreachable!("unexpected wrapped native query"),
            },
            TOKEN => token_info(18).to_json(),
            COARSE_TOKEN => token_info(2).to_json(),
            _ => Err(StdError::query(contract, "no such contract")),
        }
    }

    struct Suite {
        storage: MockStorage,
        querier: MockQuerier,
    }

    impl Suite {
        fn new() -> Self {
            let mut suite = Self::uninitialized();

            suite
                .execute(
                    OWNER,
                    ExecuteMsg::InitializePuzzleHashes {
                        burn_puzzle_hash: BURN_PUZZLE_HASH,
                        mint_puzzle_hash: MINT_PUZZLE_HASH,
                    },
                    0,
                )
                .should_succeed();

            suite
        }

        fn uninitialized() -> Self {
            let mut suite = Self {
                storage: MockStorage::new(),
                querier: MockQuerier::new().with_smart_query_handler(handle_query),
            };

            instantiate(suite.ctx(OWNER, 0), InstantiateMsg {
                tip_bps: TIP_BPS,
                portal: PORTAL,
                wrapped_native: WETH,
                other_chain: XCH,
            })
            .should_succeed();

            suite
        }

        fn ctx(&mut self, sender: Addr, funds: u128) -> MutableCtx {
            MutableCtx {
                storage: &mut self.storage,
                querier: &self.querier,
                chain_id: 1,
                block: BlockInfo {
                    height: 1,
                    timestamp: 0,
                },
                contract: ADAPTER,
                sender,
                funds,
            }
        }

        fn execute(
            &mut self,
            sender: Addr,
            msg: ExecuteMsg,
            funds: u128,
        ) -> anyhow::Result<Response> {
            execute(self.ctx(sender, funds), msg)
        }
    }

    fn inbound(source: Hash256, payload: Vec<Hash256>) -> ExecuteMsg {
        ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
            nonce: Hash256::from_u128(1),
            source_chain: XCH,
            source,
            payload,
        })
    }

    fn transfer(token: Addr, to: Addr, amount: u128) -> Message {
        Message::execute(token, &token::ExecuteMsg::Transfer { to, amount }, 0).unwrap()
    }

    #[test_case(0; "zero")]
    #[test_case(10_001; "above one whole")]
    fn rejecting_invalid_tips(tip_bps: u16) {
        let mut storage = MockStorage::new();
        let querier = MockQuerier::new().with_smart_query_handler(handle_query);

        let ctx = MutableCtx {
            storage: &mut storage,
            querier: &querier,
            chain_id: 1,
            block: BlockInfo {
                height: 1,
                timestamp: 0,
            },
            contract: ADAPTER,
            sender: OWNER,
            funds: 0,
        };

        instantiate(ctx, InstantiateMsg {
            tip_bps,
            portal: PORTAL,
            wrapped_native: WETH,
            other_chain: XCH,
        })
        .should_fail_with_error("!tip");
    }

    #[test]
    fn initializing_puzzle_hashes_once() {
        let mut suite = Suite::uninitialized();

        suite
            .execute(
                USER,
                ExecuteMsg::BridgeToChia {
                    token: TOKEN,
                    receiver: RECEIVER,
                    amount: 10_000,
                },
                TOLL,
            )
            .should_fail_with_error("!init");

        let msg = ExecuteMsg::InitializePuzzleHashes {
            burn_puzzle_hash: BURN_PUZZLE_HASH,
            mint_puzzle_hash: MINT_PUZZLE_HASH,
        };

        suite
            .execute(USER, msg.clone(), 0)
            .should_fail_with_error("!auth");

        suite.execute(OWNER, msg.clone(), 0).should_succeed();

        suite.execute(OWNER, msg, 0).should_fail_with_error("nope");
    }

    #[test]
    fn bridging_tokens_out() {
        let mut suite = Suite::new();

        let response = suite
            .execute(
                USER,
                ExecuteMsg::BridgeToChia {
                    token: TOKEN,
                    receiver: RECEIVER,
                    amount: 10_000,
                },
                TOLL,
            )
            .should_succeed();

        assert_eq!(response.messages, vec![
            Message::execute(
                TOKEN,
                &token::ExecuteMsg::TransferFrom {
                    from: USER,
                    to: ADAPTER,
                    amount: 10_000 * FACTOR,
                },
                0,
            )
            .unwrap(),
            transfer(TOKEN, PORTAL, 30 * FACTOR),
            Message::execute(
                PORTAL,
                &portal::ExecuteMsg::SendMessage {
                    destination_chain: XCH,
                    destination: MINT_PUZZLE_HASH,
                    payload: vec![
                        Hash256::from_addr(TOKEN),
                        RECEIVER,
                        Hash256::from_u128(9_970),
                    ],
                },
                TOLL,
            )
            .unwrap(),
        ]);
    }

    #[test]
    fn bridging_tokens_out_with_permit() {
        let mut suite = Suite::new();

        let response = suite
            .execute(
                USER,
                ExecuteMsg::BridgeToChiaWithPermit {
                    token: TOKEN,
                    receiver: RECEIVER,
                    amount: 1_000,
                    deadline: 100,
                    v: 27,
                    r: Hash256::mock(1),
                    s: Hash256::mock(2),
                },
                TOLL,
            )
            .should_succeed();

        assert_eq!(
            response.messages[0],
            Message::execute(
                TOKEN,
                &token::ExecuteMsg::Permit {
                    owner: USER,
                    spender: ADAPTER,
                    value: 1_000 * FACTOR,
                    deadline: 100,
                    v: 27,
                    r: Hash256::mock(1),
                    s: Hash256::mock(2),
                },
                0,
            )
            .unwrap()
        );
    }

    #[test_case(TOKEN, 10_000, TOLL - 1 => "!toll"; "toll too low")]
    #[test_case(TOKEN, 10_000, TOLL + 1 => "!toll"; "toll too high")]
    #[test_case(TOKEN, 0, TOLL => "!amnt"; "zero amount")]
    #[test_case(COARSE_TOKEN, 10_000, TOLL => "!decimals"; "token less precise than the other chain")]
    fn rejecting_bad_outbound_transfers(token: Addr, amount: u128, funds: u128) -> &'static str {
        let mut suite = Suite::new();

        let err = suite
            .execute(
                USER,
                ExecuteMsg::BridgeToChia {
                    token,
                    receiver: RECEIVER,
                    amount,
                },
                funds,
            )
            .should_fail();

        err.downcast_ref::<ContractError>().unwrap().tag()
    }

    #[test]
    fn bridging_ether_out() {
        let mut suite = Suite::new();

        // 10.000 ether plus the toll.
        let value = 10 * 10_u128.pow(18);
        let response = suite
            .execute(
                USER,
                ExecuteMsg::BridgeEtherToChia {
                    receiver: RECEIVER,
                    max_toll: TOLL,
                },
                value + TOLL,
            )
            .should_succeed();

        assert_eq!(response.messages, vec![
            Message::execute(WETH, &wrapped_native::ExecuteMsg::Deposit {}, value).unwrap(),
            transfer(WETH, PORTAL, 30 * FACTOR),
            Message::execute(
                PORTAL,
                &portal::ExecuteMsg::SendMessage {
                    destination_chain: XCH,
                    destination: MINT_PUZZLE_HASH,
                    payload: vec![
                        Hash256::from_addr(WETH),
                        RECEIVER,
                        Hash256::from_u128(9_970),
                    ],
                },
                TOLL,
            )
            .unwrap(),
        ]);
    }

    #[test_case(TOLL - 1, TOLL + FACTOR => "!toll"; "toll above the maximum")]
    #[test_case(TOLL, TOLL => "!amnt"; "nothing but the toll")]
    #[test_case(TOLL, TOLL + FACTOR + 1 => "!amnt"; "not a whole mojo")]
    fn rejecting_bad_ether_transfers(max_toll: u128, funds: u128) -> &'static str {
        let mut suite = Suite::new();

        let err = suite
            .execute(
                USER,
                ExecuteMsg::BridgeEtherToChia {
                    receiver: RECEIVER,
                    max_toll,
                },
                funds,
            )
            .should_fail();

        err.downcast_ref::<ContractError>().unwrap().tag()
    }

    #[test]
    fn releasing_tokens() {
        let mut suite = Suite::new();
        let receiver = Addr::mock(0x0f);

        let response = suite
            .execute(
                PORTAL,
                inbound(BURN_PUZZLE_HASH, vec![
                    Hash256::from_addr(TOKEN),
                    Hash256::from_addr(receiver),
                    Hash256::from_u128(10_000),
                ]),
                0,
            )
            .should_succeed();

        assert_eq!(response.messages, vec![
            transfer(TOKEN, receiver, 9_970 * FACTOR),
            transfer(TOKEN, PORTAL, 30 * FACTOR),
        ]);
    }

    #[test]
    fn releasing_ether() {
        let mut suite = Suite::new();
        let receiver = Addr::mock(0x0f);

        let response = suite
            .execute(
                PORTAL,
                inbound(BURN_PUZZLE_HASH, vec![
                    Hash256::from_addr(WETH),
                    Hash256::from_addr(receiver),
                    Hash256::from_u128(100),
                ]),
                0,
            )
            .should_succeed();

        // 30 bps of 100 mojos rounds down to zero, so there's no tip.
        assert_eq!(response.messages, vec![
            Message::execute(
                WETH,
                &wrapped_native::ExecuteMsg::Withdraw {
                    amount: 100 * FACTOR,
                },
                0,
            )
            .unwrap(),
            Message::transfer(receiver, 100 * FACTOR),
        ]);
    }

    #[test_case(
        USER,
        BURN_PUZZLE_HASH,
        vec![Hash256::from_addr(TOKEN), Hash256::mock(0), Hash256::from_u128(1)]
        => "!msg";
        "sender is not the portal"
    )]
    #[test_case(
        PORTAL,
        MINT_PUZZLE_HASH,
        vec![Hash256::from_addr(TOKEN), Hash256::mock(0), Hash256::from_u128(1)]
        => "!msg";
        "wrong source"
    )]
    #[test_case(
        PORTAL,
        BURN_PUZZLE_HASH,
        vec![Hash256::from_addr(TOKEN), Hash256::mock(0)]
        => "!payload";
        "too few words"
    )]
    #[test_case(
        PORTAL,
        BURN_PUZZLE_HASH,
        vec![Hash256::mock(0xff), Hash256::mock(0), Hash256::from_u128(1)]
        => "!payload";
        "asset is not an address"
    )]
    #[test_case(
        PORTAL,
        BURN_PUZZLE_HASH,
        vec![Hash256::from_addr(TOKEN), Hash256::mock(0), Hash256::mock(0xff)]
        => "!payload";
        "amount overflows"
    )]
    #[test_case(
        PORTAL,
        BURN_PUZZLE_HASH,
        vec![Hash256::from_addr(TOKEN), Hash256::mock(0), Hash256::from_u128(0)]
        => "!amnt";
        "zero amount"
    )]
    fn rejecting_bad_inbound_messages(
        sender: Addr,
        source: Hash256,
        payload: Vec<Hash256>,
    ) -> &'static str {
        let mut suite = Suite::new();

        let err = suite
            .execute(sender, inbound(source, payload), 0)
            .should_fail();

        err.downcast_ref::<ContractError>().unwrap().tag()
    }

    #[test]
    fn inbound_messages_from_other_chains_are_rejected() {
        let mut suite = Suite::new();

        suite
            .execute(
                PORTAL,
                ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
                    nonce: Hash256::from_u128(1),
                    source_chain: ChainCode::from_inner(*b"eth"),
                    source: BURN_PUZZLE_HASH,
                    payload: vec![],
                }),
                0,
            )
            .should_fail_with_error("!msg");
    }

    #[test]
    fn native_only_from_wrapped_native() {
        let mut suite = Suite::new();

        receive(suite.ctx(WETH, 5)).should_succeed();
        receive(suite.ctx(USER, 5)).should_fail_with_error("!sender");
    }

    #[test]
    fn rescuing_is_owner_only() {
        let mut suite = Suite::new();

        suite
            .execute(
                USER,
                ExecuteMsg::RescueEther {
                    recipients: vec![USER],
                    amounts: vec![1],
                },
                0,
            )
            .should_fail_with_error("!auth");

        suite
            .execute(
                USER,
                ExecuteMsg::RescueAsset {
                    token: TOKEN,
                    recipients: vec![USER],
                    amounts: vec![1],
                },
                0,
            )
            .should_fail_with_error("!auth");
    }

    #[test]
    fn rescuing_in_batches() {
        let mut suite = Suite::new();

        let response = suite
            .execute(
                OWNER,
                ExecuteMsg::RescueAsset {
                    token: TOKEN,
                    recipients: vec![OWNER, USER, PORTAL],
                    amounts: vec![5, 7, 0],
                },
                0,
            )
            .should_succeed();

        assert_eq!(response.messages, vec![
            transfer(TOKEN, OWNER, 5),
            transfer(TOKEN, USER, 7),
        ]);

        let response = suite
            .execute(
                OWNER,
                ExecuteMsg::RescueEther {
                    recipients: vec![OWNER, USER],
                    amounts: vec![3, 4],
                },
                0,
            )
            .should_succeed();

        assert_eq!(response.messages, vec![
            Message::transfer(OWNER, 3),
            Message::transfer(USER, 4),
        ]);
    }

    #[test_case(vec![OWNER, USER], vec![5]; "fewer amounts")]
    #[test_case(vec![OWNER], vec![5, 6]; "fewer recipients")]
    fn rescuing_needs_matching_lengths(recipients: Vec<Addr>, amounts: Vec<u128>) {
        let mut suite = Suite::new();

        suite
            .execute(
                OWNER,
                ExecuteMsg::RescueAsset {
                    token: TOKEN,
                    recipients: recipients.clone(),
                    amounts: amounts.clone(),
                },
                0,
            )
            .should_fail_with_error("!len");

        suite
            .execute(
                OWNER,
                ExecuteMsg::RescueEther {
                    recipients,
                    amounts,
                },
                0,
            )
            .should_fail_with_error("!len");
    }
}
