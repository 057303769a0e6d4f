use {
    crate::RATIO,
    anyhow::ensure,
    warp_token::{approve, burn, mint, spend_allowance, transfer},
    warp_types::{
        scale_up,
        wrapped_native::{Deposited, ExecuteMsg, InstantiateMsg, Withdrawn},
        ContractError, Message, MutableCtx, Response,
    },
};

pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> anyhow::Result<Response> {
    ensure!(msg.ratio > 0, ContractError::NonPositiveAmount {
        reason: "ratio must be positive",
    });

    warp_token::initialize(ctx.storage, msg.name, msg.symbol, msg.decimals)?;

    RATIO.save(ctx.storage, &msg.ratio)?;

    Ok(Response::new())
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> anyhow::Result<Response> {
    match msg {
        ExecuteMsg::Deposit {} => deposit(ctx),
        ExecuteMsg::Withdraw { amount } => withdraw(ctx, amount),
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
    }
}

/// Plain native transfers are deposits.
pub fn receive(ctx: MutableCtx) -> anyhow::Result<Response> {
    deposit(ctx)
}

#[inline]
fn deposit(ctx: MutableCtx) -> anyhow::Result<Response> {
    let ratio = RATIO.load(ctx.storage)?;

    ensure!(
        ctx.funds >= ratio && ctx.funds % ratio == 0,
        ContractError::InvalidDeposit {
            value: ctx.funds,
            ratio,
        }
    );

    let units = ctx.funds / ratio;

    Ok(Response::new()
        .add_event(mint(ctx.storage, ctx.sender, units)?)?
        .add_event(Deposited {
            owner: ctx.sender,
            value: ctx.funds,
            units,
        })?)
}

#[inline]
fn withdraw(ctx: MutableCtx, amount: u128) -> anyhow::Result<Response> {
    ensure!(amount > 0, ContractError::ZeroWithdrawal);

    let ratio = RATIO.load(ctx.storage)?;
    let value = scale_up(amount, ratio)?;

    // The whole call reverts if the sender refuses the native currency, so
    // burning first is safe.
    Ok(Response::new()
        .add_message(Message::transfer(ctx.sender, value))
        .add_event(burn(ctx.storage, ctx.sender, amount)?)?
        .add_event(Withdrawn {
            owner: ctx.sender,
            units: amount,
            value,
        })?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::query,
        test_case::test_case,
        warp_token::balance_of,
        warp_types::{
            token::TokenInfo, wrapped_native::QueryMsg, Addr, BlockInfo, ImmutableCtx, JsonDeExt,
            MockQuerier, MockStorage, ResultExt,
        },
    };

    const WRAPPER: Addr = Addr::mock(0xee);
    const USER: Addr = Addr::mock(0x02);
    const MILLI: u128 = 1_000_000_000_000;

    struct Suite {
        storage: MockStorage,
        querier: MockQuerier,
    }

    impl Suite {
        fn new(msg: InstantiateMsg) -> Self {
            let mut suite = Self {
                storage: MockStorage::new(),
                querier: MockQuerier::new(),
            };

            instantiate(suite.ctx(USER, 0), msg).should_succeed();

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
                contract: WRAPPER,
                sender,
                funds,
            }
        }

        fn token_info(&self) -> TokenInfo {
            query(
                ImmutableCtx {
                    storage: &self.storage,
                    querier: &self.querier,
                    chain_id: 1,
                    block: BlockInfo {
                        height: 1,
                        timestamp: 0,
                    },
                    contract: WRAPPER,
                },
                QueryMsg::TokenInfo {},
            )
            .unwrap()
            .deserialize_json()
            .unwrap()
        }
    }

    #[test]
    fn depositing_and_withdrawing_milli_eth() {
        let mut suite = Suite::new(InstantiateMsg::milli_eth());

        execute(suite.ctx(USER, 5 * MILLI), ExecuteMsg::Deposit {}).should_succeed();
        receive(suite.ctx(USER, 2 * MILLI)).should_succeed();

        assert_eq!(balance_of(&suite.storage, USER).unwrap(), 7);
        assert_eq!(suite.token_info().total_supply, 7);
        assert_eq!(suite.token_info().decimals, 3);

        let response = execute(suite.ctx(USER, 0), ExecuteMsg::Withdraw { amount: 3 })
            .should_succeed();

        assert_eq!(response.messages, vec![Message::transfer(USER, 3 * MILLI)]);
        assert_eq!(balance_of(&suite.storage, USER).unwrap(), 4);
        assert_eq!(suite.token_info().total_supply, 4);
    }

    #[test_case(0; "nothing")]
    #[test_case(MILLI - 1; "less than one unit")]
    #[test_case(MILLI + 1; "not a whole number of units")]
    fn rejecting_bad_deposits(value: u128) {
        let mut suite = Suite::new(InstantiateMsg::milli_eth());

        execute(suite.ctx(USER, value), ExecuteMsg::Deposit {})
            .should_fail_with_error("!msg.value");
    }

    #[test]
    fn weth_is_one_to_one() {
        let mut suite = Suite::new(InstantiateMsg::weth());

        receive(suite.ctx(USER, 1)).should_succeed();

        assert_eq!(balance_of(&suite.storage, USER).unwrap(), 1);
        assert_eq!(suite.token_info().decimals, 18);
    }

    #[test]
    fn rejecting_bad_withdrawals() {
        let mut suite = Suite::new(InstantiateMsg::weth());

        receive(suite.ctx(USER, 10)).should_succeed();

        execute(suite.ctx(USER, 0), ExecuteMsg::Withdraw { amount: 0 })
            .should_fail_with_error("!amount");

        execute(suite.ctx(USER, 0), ExecuteMsg::Withdraw { amount: 11 })
            .should_fail_with_error("!balance");
    }
}
