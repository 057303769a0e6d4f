use {
    crate::{
        constants::{
            BURN_PUZZLE_HASH, LOCKER_PUZZLE_HASH, MESSAGE_TOLL, MINT_PUZZLE_HASH,
            MOCK_CHAIN_ID, MOCK_GENESIS_BLOCK, MOJO_TO_TOKEN_RATIO, ONE_ETHER, TIP_BPS, TST,
            UNLOCKER_PUZZLE_HASH, XCH,
        },
        generate_signers, setup_tracing_subscriber, sign_message, upload_codes,
        mocks::{mock_receiver, native_rejecter},
        BalanceTracker, Codes, Denom, TestAccount,
    },
    std::{
        collections::{BTreeMap, BTreeSet},
        ops::{Deref, DerefMut},
    },
    tracing::Level,
    warp_app::{App, AppResult, TraceOption, TxOutcome},
    warp_types::{
        erc20_bridge, portal, token, typed_data::message_digest, wrapped_cat, wrapped_native,
        Addr, Empty, Hash256, HexBinary,
    },
};

/// Native currency every user account starts with.
pub const INITIAL_NATIVE_BALANCE: u128 = 1_000 * ONE_ETHER;

/// Test tokens every user account starts with.
pub const INITIAL_TOKEN_BALANCE: u128 = 1_000_000 * ONE_ETHER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrappedNativeKind {
    /// 1:1, 18 decimals.
    Weth,
    /// 1:10^12, 3 decimals.
    MilliEth,
}

#[derive(Debug, Clone)]
pub struct TestOption {
    pub signer_count: usize,
    pub signature_threshold: u32,
    pub message_toll: u128,
    pub tip_bps: u16,
    pub wrapped_native: WrappedNativeKind,
    /// Log transactions at this level. `None` to keep tests quiet.
    pub tracing_level: Option<Level>,
}

impl Default for TestOption {
    fn default() -> Self {
        Self {
            signer_count: 3,
            signature_threshold: 2,
            message_toll: MESSAGE_TOLL,
            tip_bps: TIP_BPS,
            wrapped_native: WrappedNativeKind::Weth,
            tracing_level: Some(Level::INFO),
        }
    }
}

pub struct Accounts {
    pub owner: TestAccount,
    pub user: TestAccount,
    pub relayer: TestAccount,
}

#[derive(Debug, Clone, Copy)]
pub struct Contracts {
    pub portal: Addr,
    pub token: Addr,
    pub wrapped_native: Addr,
    pub erc20_bridge: Addr,
    pub wrapped_cat: Addr,
    pub mock_receiver: Addr,
}

/// An [`App`] with the bridge deployed, plus the accounts and keys that
/// operate it.
pub struct TestSuite {
    pub app: App,
    pub codes: Codes,
    pub accounts: Accounts,
    /// Sorted by ascending address.
    pub signers: Vec<TestAccount>,
    pub contracts: Contracts,
    pub(crate) balances: BTreeMap<Addr, BTreeMap<Denom, u128>>,
}

impl Deref for TestSuite {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}

impl DerefMut for TestSuite {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.app
    }
}

pub fn setup_test(opt: TestOption) -> TestSuite {
    let trace_opt = match opt.tracing_level {
        Some(level) => {
            setup_tracing_subscriber(level);
            TraceOption::LOUD
        },
        None => TraceOption::MUTE,
    };

    let mut app = App::new(MOCK_CHAIN_ID, MOCK_GENESIS_BLOCK).with_trace_option(trace_opt);
    let codes = upload_codes(&mut app);

    let accounts = Accounts {
        owner: TestAccount::new_random("owner"),
        user: TestAccount::new_random("user"),
        relayer: TestAccount::new_random("relayer"),
    };

    for account in [&accounts.owner, &accounts.user, &accounts.relayer] {
        app.mint_native(account.address, INITIAL_NATIVE_BALANCE)
            .unwrap();
    }

    let signers = generate_signers(opt.signer_count);
    let owner = accounts.owner.address;

    let portal = app
        .instantiate(
            owner,
            codes.portal,
            &portal::InstantiateMsg {
                signers: signers.iter().map(|signer| signer.address).collect(),
                signature_threshold: opt.signature_threshold,
                message_toll: opt.message_toll,
                supported_chains: BTreeSet::from([XCH, TST]),
            },
            b"portal",
            0,
        )
        .unwrap();

    let wrapped_native = app
        .instantiate(
            owner,
            codes.wrapped_native,
            &match opt.wrapped_native {
                WrappedNativeKind::Weth => wrapped_native::InstantiateMsg::weth(),
                WrappedNativeKind::MilliEth => wrapped_native::InstantiateMsg::milli_eth(),
            },
            b"wrapped_native",
            0,
        )
        .unwrap();

    let token = app
        .instantiate(
            owner,
            codes.token,
            &token::InstantiateMsg {
                name: "Test Token".to_string(),
                symbol: "TST".to_string(),
                decimals: 18,
                minter: Some(owner),
                initial_balances: BTreeMap::from([(accounts.user.address, INITIAL_TOKEN_BALANCE)]),
            },
            b"token",
            0,
        )
        .unwrap();

    let erc20_bridge = app
        .instantiate(
            owner,
            codes.erc20_bridge,
            &erc20_bridge::InstantiateMsg {
                tip_bps: opt.tip_bps,
                portal,
                wrapped_native,
                other_chain: XCH,
            },
            b"erc20_bridge",
            0,
        )
        .unwrap();

    app.execute(
        owner,
        erc20_bridge,
        &erc20_bridge::ExecuteMsg::InitializePuzzleHashes {
            burn_puzzle_hash: BURN_PUZZLE_HASH,
            mint_puzzle_hash: MINT_PUZZLE_HASH,
        },
        0,
    )
    .unwrap();

    let wrapped_cat = app
        .instantiate(
            owner,
            codes.wrapped_cat,
            &wrapped_cat::InstantiateMsg {
                name: "Wrapped CAT".to_string(),
                symbol: "wCAT".to_string(),
                portal,
                tip_bps: opt.tip_bps,
                mojo_to_token_ratio: MOJO_TO_TOKEN_RATIO,
                other_chain: XCH,
            },
            b"wrapped_cat",
            0,
        )
        .unwrap();

    app.execute(
        owner,
        wrapped_cat,
        &wrapped_cat::ExecuteMsg::InitializePuzzleHashes {
            locker_puzzle_hash: LOCKER_PUZZLE_HASH,
            unlocker_puzzle_hash: UNLOCKER_PUZZLE_HASH,
        },
        0,
    )
    .unwrap();

    let mock_receiver = app
        .instantiate(owner, codes.mock_receiver, &Empty {}, b"mock_receiver", 0)
        .unwrap();

    TestSuite {
        app,
        codes,
        accounts,
        signers,
        contracts: Contracts {
            portal,
            token,
            wrapped_native,
            erc20_bridge,
            wrapped_cat,
            mock_receiver,
        },
        balances: BTreeMap::new(),
    }
}

impl TestSuite {
    pub fn balances(&mut self) -> BalanceTracker<'_> {
        BalanceTracker { suite: self }
    }

    /// The digest signers sign to authorize `message`, as the Portal computes
    /// it.
    pub fn message_digest(&self, message: &portal::Message) -> Hash256 {
        message_digest(self.chain_id(), self.contracts.portal, message)
    }

    /// Signatures of the signers at the given indexes, packed in the order
    /// the Portal expects.
    pub fn sign(&self, message: &portal::Message, signers: &[usize]) -> HexBinary {
        sign_message(
            signers.iter().map(|i| &self.signers[*i]),
            self.chain_id(),
            self.contracts.portal,
            message,
        )
    }

    /// Have `relayer` submit a message with the given signatures.
    pub fn relay(
        &mut self,
        relayer: Addr,
        message: &portal::Message,
        signatures: HexBinary,
    ) -> AppResult<TxOutcome> {
        let portal = self.contracts.portal;

        self.app.execute(
            relayer,
            portal,
            &portal::ExecuteMsg::ReceiveMessage {
                nonce: message.nonce,
                source_chain: message.source_chain,
                source: message.source,
                destination: message.destination,
                payload: message.payload.clone(),
                signatures,
            },
            0,
        )
    }

    /// Deliver a message signed by just enough signers, through the relayer.
    pub fn deliver(&mut self, message: &portal::Message) -> AppResult<TxOutcome> {
        let threshold = self
            .query_wasm_smart::<_, u32>(
                self.contracts.portal,
                &portal::QueryMsg::SignatureThreshold {},
            )
            .unwrap();
        let indexes = (0..threshold as usize).collect::<Vec<_>>();
        let signatures = self.sign(message, &indexes);
        let relayer = self.accounts.relayer.address;

        self.relay(relayer, message, signatures)
    }

    /// Balance of a token-like contract, in its own units.
    pub fn token_balance(&self, token: Addr, owner: Addr) -> u128 {
        self.query_wasm_smart(token, &token::QueryMsg::Balance { address: owner })
            .unwrap()
    }

    pub fn instantiate_native_rejecter(&mut self) -> Addr {
        let owner = self.accounts.owner.address;
        let code_id = self.codes.native_rejecter;
        let wrapped_native = self.contracts.wrapped_native;

        self.app
            .instantiate(
                owner,
                code_id,
                &native_rejecter::InstantiateMsg { wrapped_native },
                b"native_rejecter",
                0,
            )
            .unwrap()
    }

    /// Number of messages the mock receiver has been handed.
    pub fn mock_receiver_count(&self) -> u32 {
        self.query_wasm_smart(
            self.contracts.mock_receiver,
            &mock_receiver::QueryMsg::Received {},
        )
        .unwrap()
    }
}
