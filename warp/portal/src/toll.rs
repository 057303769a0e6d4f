use {
    anyhow::ensure,
    warp_storage::Item,
    warp_types::{payouts, token, Addr, ContractError, Message, StdResult, Storage},
};

/// Native currency that must accompany every outbound message. The tolls stay
/// in the Portal's native balance until the owner withdraws them.
pub const MESSAGE_TOLL: Item<u128> = Item::new("message_toll");

pub fn ensure_toll_paid(storage: &dyn Storage, funds: u128) -> anyhow::Result<()> {
    let toll = MESSAGE_TOLL.load(storage)?;

    ensure!(funds == toll, ContractError::IncorrectToll {
        expect: toll,
        actual: funds,
    });

    Ok(())
}

/// Replace the toll; return the old one. Errors if the toll is unchanged.
pub fn set_message_toll(storage: &mut dyn Storage, toll: u128) -> anyhow::Result<u128> {
    let old_toll = MESSAGE_TOLL.load(storage)?;

    ensure!(old_toll != toll, ContractError::NoChange {
        what: "message toll",
    });

    MESSAGE_TOLL.save(storage, &toll)?;

    Ok(old_toll)
}

/// Native transfers paying out collected fees.
pub fn fee_withdrawals(recipients: &[Addr], amounts: &[u128]) -> anyhow::Result<Vec<Message>> {
    Ok(payouts(recipients, amounts)?
        .map(|(to, amount)| Message::transfer(to, amount))
        .collect())
}

/// Token transfers moving assets held by the Portal out.
pub fn asset_rescues(
    token: Addr,
    recipients: &[Addr],
    amounts: &[u128],
) -> anyhow::Result<Vec<Message>> {
    let msgs = payouts(recipients, amounts)?
        .map(|(to, amount)| {
            Message::execute(token, &token::ExecuteMsg::Transfer { to, amount }, 0)
        })
        .collect::<StdResult<_>>()?;

    Ok(msgs)
}

// ----------------------------------- tests -----------------------------------
