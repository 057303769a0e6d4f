use {
    std::collections::BTreeMap,
    test_case::test_case,
    warp_testing::{
        constants::{
            LOCKER_PUZZLE_HASH, MESSAGE_TOLL, MOJO_TO_TOKEN_RATIO, UNLOCKER_PUZZLE_HASH, XCH,
        },
        setup_test, BalanceChange, Denom, TestSuite,
    },
    warp_types::{
        portal::{Message, MessageSent},
        token::TokenInfo,
        wrapped_cat::{self, BridgedBack, Minted},
        Addr, Hash256, ResultExt,
    },
};

const CHIA_RECEIVER: Hash256 = Hash256::mock(0xc4);

fn locked(suite: &TestSuite, nonce: u128, receiver: Addr, amount: u128) -> Message {
    Message {
        nonce: Hash256::from_u128(nonce),
        source_chain: XCH,
        source: LOCKER_PUZZLE_HASH,
        destination: suite.contracts.wrapped_cat,
        payload: vec![Hash256::from_addr(receiver), Hash256::from_u128(amount)],
    }
}

/// Mint the user some wrapped CATs by delivering a lock message.
fn mint_to_user(suite: &mut TestSuite, amount: u128) {
    let user = suite.accounts.user.address;
    let message = locked(suite, 1, user, amount);

    suite.deliver(&message).should_succeed();
}

#[test]
fn minting_wrapped_cats() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let portal = suite.contracts.portal;
    let wcat = suite.contracts.wrapped_cat;

    let message = locked(&suite, 1, user, 10_000);
    let outcome = suite.deliver(&message).should_succeed();

    assert_eq!(suite.token_balance(wcat, user), 9_970 * MOJO_TO_TOKEN_RATIO);
    assert_eq!(suite.token_balance(wcat, portal), 30 * MOJO_TO_TOKEN_RATIO);
    assert_eq!(
        outcome.search_event::<Minted>(wcat).unwrap(),
        Some(Minted {
            nonce: message.nonce,
            receiver: user,
            amount: 9_970,
            tip: 30,
        })
    );

    // Small amounts round the tip down to nothing.
    let message = locked(&suite, 2, user, 333);
    suite.deliver(&message).should_succeed();

    assert_eq!(
        suite.token_balance(wcat, user),
        (9_970 + 333) * MOJO_TO_TOKEN_RATIO
    );
    assert_eq!(suite.token_balance(wcat, portal), 30 * MOJO_TO_TOKEN_RATIO);

    let info: TokenInfo = suite
        .query_wasm_smart(wcat, &wrapped_cat::QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.decimals, wrapped_cat::DEFAULT_DECIMALS);
    assert_eq!(info.total_supply, 10_333 * MOJO_TO_TOKEN_RATIO);
}

#[test]
fn rejecting_unauthentic_locks() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let wcat = suite.contracts.wrapped_cat;

    let mut message = locked(&suite, 1, user, 10_000);
    message.source = UNLOCKER_PUZZLE_HASH;
    suite.deliver(&message).should_fail_with_error("!msg:");

    let mut message = locked(&suite, 2, user, 10_000);
    message.payload.push(Hash256::ZERO);
    suite.deliver(&message).should_fail_with_error("!payload");

    let message = locked(&suite, 3, user, 0);
    suite.deliver(&message).should_fail_with_error("!amnt");

    let info: TokenInfo = suite
        .query_wasm_smart(wcat, &wrapped_cat::QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, 0);
}

#[test]
fn bridging_back_with_minimum_tip() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let portal = suite.contracts.portal;
    let wcat = suite.contracts.wrapped_cat;

    mint_to_user(&mut suite, 10_000);

    suite.balances().record_many([user, portal]);

    let outcome = suite
        .execute(
            user,
            wcat,
            &wrapped_cat::ExecuteMsg::BridgeBack {
                receiver: CHIA_RECEIVER,
                amount: 333,
            },
            MESSAGE_TOLL,
        )
        .should_succeed();

    // floor(333 * 30 / 10000) is zero, but at least one mojo is tipped.
    suite.balances().should_change(
        user,
        BTreeMap::from([
            (Denom::Native, BalanceChange::Decreased(MESSAGE_TOLL)),
            (Denom::Token(wcat), BalanceChange::Decreased(333 * MOJO_TO_TOKEN_RATIO)),
        ]),
    );
    suite.balances().should_change(
        portal,
        BTreeMap::from([
            (Denom::Native, BalanceChange::Increased(MESSAGE_TOLL)),
            (Denom::Token(wcat), BalanceChange::Increased(MOJO_TO_TOKEN_RATIO)),
        ]),
    );

    assert_eq!(
        outcome.search_event::<MessageSent>(portal).unwrap(),
        Some(MessageSent {
            nonce: Hash256::from_u128(1),
            sender: wcat,
            destination_chain: XCH,
            destination: UNLOCKER_PUZZLE_HASH,
            payload: vec![CHIA_RECEIVER, Hash256::from_u128(332)],
        })
    );
    assert_eq!(
        outcome.search_event::<BridgedBack>(wcat).unwrap(),
        Some(BridgedBack {
            sender: user,
            receiver: CHIA_RECEIVER,
            amount: 332,
            tip: 1,
        })
    );
}

#[test_case(1_000, 0 => "!toll"; "no toll")]
#[test_case(0, MESSAGE_TOLL => "!amnt"; "zero amount")]
#[test_case(1, MESSAGE_TOLL => "!amnt"; "all tip")]
#[test_case(20_000, MESSAGE_TOLL => "!balance"; "more than owned")]
fn failing_to_bridge_back(amount: u128, toll: u128) -> &'static str {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let wcat = suite.contracts.wrapped_cat;

    mint_to_user(&mut suite, 10_000);

    suite.balances().record(user);

    let err = suite
        .execute(
            user,
            wcat,
            &wrapped_cat::ExecuteMsg::BridgeBack {
                receiver: CHIA_RECEIVER,
                amount,
            },
            toll,
        )
        .should_fail()
        .to_string();

    suite.balances().should_not_change(user);

    ["!toll", "!amnt", "!balance"]
        .into_iter()
        .find(|tag| err.contains(tag))
        .unwrap_or_else(|| panic!("unexpected error: {err}"))
}

#[test]
fn transferring_wrapped_cats() {
    let mut suite = setup_test(Default::default());
    let user = suite.accounts.user.address;
    let relayer = suite.accounts.relayer.address;
    let owner = suite.accounts.owner.address;
    let wcat = suite.contracts.wrapped_cat;

    mint_to_user(&mut suite, 10_000);

    suite
        .execute(
            user,
            wcat,
            &wrapped_cat::ExecuteMsg::Transfer {
                to: relayer,
                amount: 100,
            },
            0,
        )
        .should_succeed();

    suite
        .execute(
            owner,
            wcat,
            &wrapped_cat::ExecuteMsg::TransferFrom {
                from: user,
                to: owner,
                amount: 100,
            },
            0,
        )
        .should_fail_with_error("!allowance");

    suite
        .execute(
            user,
            wcat,
            &wrapped_cat::ExecuteMsg::Approve {
                spender: owner,
                amount: 100,
            },
            0,
        )
        .should_succeed();

    suite
        .execute(
            owner,
            wcat,
            &wrapped_cat::ExecuteMsg::TransferFrom {
                from: user,
                to: owner,
                amount: 100,
            },
            0,
        )
        .should_succeed();

    assert_eq!(suite.token_balance(wcat, relayer), 100);
    assert_eq!(suite.token_balance(wcat, owner), 100);

    // Puzzle hashes are set once.
    suite
        .execute(
            owner,
            wcat,
            &wrapped_cat::ExecuteMsg::InitializePuzzleHashes {
                locker_puzzle_hash: Hash256::mock(1),
                unlocker_puzzle_hash: Hash256::mock(2),
            },
            0,
        )
        .should_fail_with_error("nope");
}
