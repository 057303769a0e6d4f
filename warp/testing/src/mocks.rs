//! Contracts that only exist to exercise the bridge contracts in tests.

/// Accepts any message delivered by the Portal and records how many it got.
pub mod mock_receiver {
    use {
        serde::{Deserialize, Serialize},
        warp_storage::Counter,
        warp_types::{
            receiver::{ExecuteMsg, ReceiverMsg},
            ChainCode, Empty, Hash256, ImmutableCtx, Json, JsonSerExt, MutableCtx, Response,
            StdResult,
        },
    };

    pub const RECEIVED: Counter<u32> = Counter::new("received", 0, 1);

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct Received {
        pub nonce: Hash256,
        pub source_chain: ChainCode,
        pub source: Hash256,
        pub payload: Vec<Hash256>,
    }

    warp_types::event_name!(Received => "mock_received");

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    #[serde(deny_unknown_fields, rename_all = "snake_case")]
    pub enum QueryMsg {
        /// Returns `u32`.
        Received {},
    }

    pub fn instantiate(_ctx: MutableCtx, _msg: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> StdResult<Response> {
        let ExecuteMsg::Receiver(ReceiverMsg::ReceiveMessage {
            nonce,
            source_chain,
            source,
            payload,
        }) = msg;

        RECEIVED.increment(ctx.storage)?;

        Response::new().add_event(Received {
            nonce,
            source_chain,
            source,
            payload,
        })
    }

    pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
        match msg {
            QueryMsg::Received {} => RECEIVED.current(ctx.storage)?.to_json(),
        }
    }
}

/// Holds wrapped native tokens but has no `receive` entry point, so any native
/// currency sent to it is refused.
pub mod native_rejecter {
    use {
        serde::{Deserialize, Serialize},
        warp_storage::Item,
        warp_types::{wrapped_native, Addr, Message, MutableCtx, Response, StdResult},
    };

    pub const WRAPPED_NATIVE: Item<Addr> = Item::new("wrapped_native");

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct InstantiateMsg {
        pub wrapped_native: Addr,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    #[serde(deny_unknown_fields, rename_all = "snake_case")]
    pub enum ExecuteMsg {
        /// Wrap the attached native currency.
        Wrap {},
        /// Unwrap; the native currency bounces back.
        Unwrap { amount: u128 },
    }

    pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> StdResult<Response> {
        WRAPPED_NATIVE.save(ctx.storage, &msg.wrapped_native)?;

        Ok(Response::new())
    }

    pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> StdResult<Response> {
        let wrapped_native = WRAPPED_NATIVE.load(ctx.storage)?;

        let msg = match msg {
            ExecuteMsg::Wrap {} => Message::execute(
                wrapped_native,
                &wrapped_native::ExecuteMsg::Deposit {},
                ctx.funds,
            )?,
            ExecuteMsg::Unwrap { amount } => Message::execute(
                wrapped_native,
                &wrapped_native::ExecuteMsg::Withdraw { amount },
                0,
            )?,
        };

        Ok(Response::new().add_message(msg))
    }
}
