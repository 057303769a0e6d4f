use {
    std::collections::BTreeMap,
    warp_testing::{
        constants::ONE_ETHER, mocks::native_rejecter, setup_test, BalanceChange, Denom,
        TestOption, WrappedNativeKind,
    },
    warp_types::{wrapped_native, ResultExt},
};

const MILLI_ETH_RATIO: u128 = wrapped_native::MILLI_ETH_RATIO;

#[test]
fn wrapping_and_unwrapping_milli_eth() {
    let mut suite = setup_test(TestOption {
        wrapped_native: WrappedNativeKind::MilliEth,
        ..Default::default()
    });
    let user = suite.accounts.user.address;
    let milli_eth = suite.contracts.wrapped_native;

    suite.balances().record_many([user, milli_eth]);

    suite
        .execute(user, milli_eth, &wrapped_native::ExecuteMsg::Deposit {}, ONE_ETHER)
        .should_succeed();

    suite.balances().should_change(
        user,
        BTreeMap::from([
            (Denom::Native, BalanceChange::Decreased(ONE_ETHER)),
            (Denom::Token(milli_eth), BalanceChange::Increased(1_000_000)),
        ]),
    );

    // Sending native currency directly wraps it too.
    suite.transfer(user, milli_eth, MILLI_ETH_RATIO).should_succeed();
    assert_eq!(suite.token_balance(milli_eth, user), 1_000_001);

    // Not a whole unit.
    suite
        .execute(
            user,
            milli_eth,
            &wrapped_native::ExecuteMsg::Deposit {},
            MILLI_ETH_RATIO + 1,
        )
        .should_fail_with_error("!msg.value");

    suite
        .transfer(user, milli_eth, MILLI_ETH_RATIO - 1)
        .should_fail_with_error("!msg.value");

    suite.balances().refresh_all();

    suite
        .execute(
            user,
            milli_eth,
            &wrapped_native::ExecuteMsg::Withdraw { amount: 1_000_001 },
            0,
        )
        .should_succeed();

    suite.balances().should_change(
        user,
        BTreeMap::from([
            (Denom::Native, BalanceChange::Increased(ONE_ETHER + MILLI_ETH_RATIO)),
            (Denom::Token(milli_eth), BalanceChange::Decreased(1_000_001)),
        ]),
    );
    suite.balances().should_change(
        milli_eth,
        BTreeMap::from([(
            Denom::Native,
            BalanceChange::Decreased(ONE_ETHER + MILLI_ETH_RATIO),
        )]),
    );

    suite
        .execute(user, milli_eth, &wrapped_native::ExecuteMsg::Withdraw { amount: 0 }, 0)
        .should_fail_with_error("!amount");

    suite
        .execute(user, milli_eth, &wrapped_native::ExecuteMsg::Withdraw { amount: 1 }, 0)
        .should_fail_with_error("!balance");
}

#[test]
fn wrapping_weth() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let weth = suite.contracts.wrapped_native;

    let ratio: u128 = suite
        .query_wasm_smart(weth, &wrapped_native::QueryMsg::Ratio {})
        .unwrap();
    assert_eq!(ratio, 1);

    suite
        .execute(user, weth, &wrapped_native::ExecuteMsg::Deposit {}, 12_345)
        .should_succeed();
    assert_eq!(suite.token_balance(weth, user), 12_345);

    suite
        .execute(user, weth, &wrapped_native::ExecuteMsg::Deposit {}, 0)
        .should_fail_with_error("!msg.value");

    let total_supply: u128 = suite
        .query_wasm_smart(weth, &wrapped_native::QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 12_345);
}

#[test]
fn unwrapping_to_a_rejecting_contract() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let weth = suite.contracts.wrapped_native;
    let rejecter = suite.instantiate_native_rejecter();

    suite
        .execute(user, rejecter, &native_rejecter::ExecuteMsg::Wrap {}, ONE_ETHER)
        .should_succeed();
    assert_eq!(suite.token_balance(weth, rejecter), ONE_ETHER);

    suite.balances().record_many([rejecter, weth]);

    // The native currency can't be delivered, so the burn is undone as well.
    suite
        .execute(
            user,
            rejecter,
            &native_rejecter::ExecuteMsg::Unwrap { amount: ONE_ETHER },
            0,
        )
        .should_fail();

    suite.balances().should_not_change(rejecter);
    suite.balances().should_not_change(weth);
}
