use {
    crate::{approve, burn, mint, spend_allowance, transfer, MINTER, PERMIT_NONCES, TOKEN_INFO},
    anyhow::ensure,
    warp_crypto::secp256k1_recover_eth_address,
    warp_types::{
        token::{ExecuteMsg, InstantiateMsg},
        typed_data::permit_digest,
        Addr, ContractError, Hash256, MutableCtx, RecoverableSignature, Response,
    },
};

pub fn instantiate(ctx: MutableCtx, msg: InstantiateMsg) -> anyhow::Result<Response> {
    crate::initialize(ctx.storage, msg.name, msg.symbol, msg.decimals)?;

    if let Some(minter) = msg.minter {
        MINTER.save(ctx.storage, &minter)?;
    }

    let mut response = Response::new();

    for (owner, amount) in msg.initial_balances {
        response = response.add_event(mint(ctx.storage, owner, amount)?)?;
    }

    Ok(response)
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> anyhow::Result<Response> {
    match msg {
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
        ExecuteMsg::Permit {
            owner,
            spender,
            value,
            deadline,
            v,
            r,
            s,
        } => permit(ctx, owner, spender, value, deadline, RecoverableSignature {
            v,
            r: r.into_inner(),
            s: s.into_inner(),
        }),
        ExecuteMsg::Mint { to, amount } => {
            ensure_minter(&ctx)?;
            let event = mint(ctx.storage, to, amount)?;
            Ok(Response::new().add_event(event)?)
        },
        ExecuteMsg::Burn { from, amount } => {
            ensure_minter(&ctx)?;
            let event = burn(ctx.storage, from, amount)?;
            Ok(Response::new().add_event(event)?)
        },
    }
}

#[inline]
fn permit(
    ctx: MutableCtx,
    owner: Addr,
    spender: Addr,
    value: u128,
    deadline: u64,
    signature: RecoverableSignature,
) -> anyhow::Result<Response> {
    ensure!(
        deadline >= ctx.block.timestamp,
        ContractError::ExpiredPermit {
            deadline,
            now: ctx.block.timestamp,
        }
    );

    let name = TOKEN_INFO.load(ctx.storage)?.name;
    let nonce = PERMIT_NONCES
        .may_load(ctx.storage, owner)?
        .unwrap_or_default();

    let digest = permit_digest(
        &name,
        ctx.chain_id,
        ctx.contract,
        owner,
        spender,
        value,
        nonce,
        deadline,
    );

    ensure!(
        recover_signer(digest, &signature) == Some(owner),
        ContractError::InvalidPermitSignature
    );

    PERMIT_NONCES.save(ctx.storage, owner, &(nonce + 1))?;

    let event = approve(ctx.storage, owner, spender, value)?;

    Ok(Response::new().add_event(event)?)
}

/// The address that produced `signature` over `digest`, or `None` if the
/// signature is malformed.
fn recover_signer(digest: Hash256, signature: &RecoverableSignature) -> Option<Addr> {
    let recovery_id = signature.recovery_id().ok()?;

    secp256k1_recover_eth_address(digest.inner(), &signature.rs(), recovery_id)
        .ok()
        .map(Addr::from_inner)
}

#[inline]
fn ensure_minter(ctx: &MutableCtx) -> anyhow::Result<()> {
    let minter = MINTER.may_load(ctx.storage)?;

    ensure!(minter == Some(ctx.sender), ContractError::Unauthorized {
        sender: ctx.sender,
    });

    Ok(())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{allowance_of, balance_of},
        k256::ecdsa::SigningKey,
        rand::rngs::OsRng,
        std::collections::BTreeMap,
        test_case::test_case,
        warp_crypto::{eth_address, secp256k1_sign_recoverable},
        warp_types::{BlockInfo, MockQuerier, MockStorage, ResultExt},
    };

    const CHAIN_ID: u64 = 1;
    const TOKEN: Addr = Addr::mock(0xee);
    const SPENDER: Addr = Addr::mock(0x55);
    const NOW: u64 = 1_700_000_000;

    fn mock_ctx<'a>(
        storage: &'a mut MockStorage,
        querier: &'a MockQuerier,
        sender: Addr,
    ) -> MutableCtx<'a> {
        MutableCtx {
            storage,
            querier,
            chain_id: CHAIN_ID,
            block: BlockInfo {
                height: 1,
                timestamp: NOW,
            },
            contract: TOKEN,
            sender,
            funds: 0,
        }
    }

    fn setup(owner: Addr) -> (MockStorage, MockQuerier) {
        let mut storage = MockStorage::new();
        let querier = MockQuerier::new();

        instantiate(mock_ctx(&mut storage, &querier, owner), InstantiateMsg {
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            decimals: 18,
            minter: Some(Addr::mock(0x99)),
            initial_balances: BTreeMap::from([(owner, 1_000)]),
        })
        .should_succeed();

        (storage, querier)
    }

    fn sign_permit(sk: &SigningKey, value: u128, nonce: u128, deadline: u64) -> ExecuteMsg {
        let owner = Addr::from_inner(eth_address(sk.verifying_key()));
        let digest = permit_digest(
            "Test Token",
            CHAIN_ID,
            TOKEN,
            owner,
            SPENDER,
            value,
            nonce,
            deadline,
        );
        let sig = secp256k1_sign_recoverable(sk, digest.inner()).unwrap();
        let sig = RecoverableSignature::from_packed(&sig);

        ExecuteMsg::Permit {
            owner,
            spender: SPENDER,
            value,
            deadline,
            v: sig.v,
            r: Hash256::from_inner(sig.r),
            s: Hash256::from_inner(sig.s),
        }
    }

    #[test]
    fn permit_sets_allowance_once() {
        let sk = SigningKey::random(&mut OsRng);
        let owner = Addr::from_inner(eth_address(sk.verifying_key()));
        let (mut storage, querier) = setup(owner);

        let msg = sign_permit(&sk, 500, 0, NOW + 60);

        // Anyone may submit the permit.
        execute(mock_ctx(&mut storage, &querier, SPENDER), msg.clone()).should_succeed();
        assert_eq!(allowance_of(&storage, owner, SPENDER).unwrap(), 500);
        assert_eq!(PERMIT_NONCES.load(&storage, owner).unwrap(), 1);

        // The nonce has moved on, so the same permit no longer verifies.
        execute(mock_ctx(&mut storage, &querier, SPENDER), msg)
            .should_fail_with_error("!permit");
    }

    #[test_case(NOW => true; "deadline is now")]
    #[test_case(NOW - 1 => false; "deadline passed")]
    fn permit_deadline(deadline: u64) -> bool {
        let sk = SigningKey::random(&mut OsRng);
        let owner = Addr::from_inner(eth_address(sk.verifying_key()));
        let (mut storage, querier) = setup(owner);

        match execute(
            mock_ctx(&mut storage, &querier, SPENDER),
            sign_permit(&sk, 1, 0, deadline),
        ) {
            Ok(_) => true,
            Err(err) => {
                assert!(err.to_string().starts_with("!deadline"));
                false
            },
        }
    }

    #[test]
    fn permit_signed_by_someone_else_is_rejected() {
        let sk = SigningKey::random(&mut OsRng);
        let (mut storage, querier) = setup(Addr::mock(1));

        let ExecuteMsg::Permit {
            spender,
            value,
            deadline,
            v,
            r,
            s,
            ..
        } = sign_permit(&sk, 1, 0, NOW)
        else {
            unreachable!();
        };

        execute(mock_ctx(&mut storage, &querier, SPENDER), ExecuteMsg::Permit {
            owner: Addr::mock(1),
            spender,
            value,
            deadline,
            v,
            r,
            s,
        })
        .should_fail_with_error("!permit");
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let (mut storage, querier) = setup(Addr::mock(1));

        execute(mock_ctx(&mut storage, &querier, Addr::mock(1)), ExecuteMsg::Approve {
            spender: SPENDER,
            amount: 300,
        })
        .should_succeed();

        execute(mock_ctx(&mut storage, &querier, SPENDER), ExecuteMsg::TransferFrom {
            from: Addr::mock(1),
            to: Addr::mock(2),
            amount: 200,
        })
        .should_succeed();

        assert_eq!(balance_of(&storage, Addr::mock(2)).unwrap(), 200);
        assert_eq!(allowance_of(&storage, Addr::mock(1), SPENDER).unwrap(), 100);

        execute(mock_ctx(&mut storage, &querier, SPENDER), ExecuteMsg::TransferFrom {
            from: Addr::mock(1),
            to: Addr::mock(2),
            amount: 101,
        })
        .should_fail_with_error("!allowance");
    }

    #[test]
    fn only_minter_mints() {
        let (mut storage, querier) = setup(Addr::mock(1));

        execute(mock_ctx(&mut storage, &querier, Addr::mock(1)), ExecuteMsg::Mint {
            to: Addr::mock(1),
            amount: 1,
        })
        .should_fail_with_error("!auth");

        execute(mock_ctx(&mut storage, &querier, Addr::mock(0x99)), ExecuteMsg::Mint {
            to: Addr::mock(1),
            amount: 1,
        })
        .should_succeed();

        assert_eq!(TOKEN_INFO.load(&storage).unwrap().total_supply, 1_001);
    }
}
