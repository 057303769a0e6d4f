use {
    crate::{
        transfer_native, AppCtx, AppError, AppResult, Contract, ContractEvent, QuerierProvider,
        StorageProvider, TxStorage, CONTRACTS, CONTRACT_NAMESPACE,
    },
    warp_types::{Addr, HashExt, Json, Message, MutableCtx, Response},
};

/// Maximum number of chained messages.
///
/// E.g. contract A emits a message to execute contract B, which emits a message
/// to execute C, which emits a message to execute D... so on.
pub const MAX_MESSAGE_DEPTH: usize = 30;

/// The address of a contract instantiated by `sender` using `salt`: the last
/// 20 bytes of `keccak256(sender ‖ salt)`.
pub fn derive_address(sender: Addr, salt: &[u8]) -> Addr {
    let mut preimage = Vec::with_capacity(Addr::LENGTH + salt.len());
    preimage.extend_from_slice(sender.as_slice());
    preimage.extend_from_slice(salt);

    let hash = preimage.keccak256();
    let mut bytes = [0; Addr::LENGTH];
    bytes.copy_from_slice(&hash[12..]);

    Addr::from_inner(bytes)
}

// -------------------------------- instantiate --------------------------------

pub fn do_instantiate(
    ctx: AppCtx<TxStorage>,
    msg_depth: usize,
    sender: Addr,
    code_id: u32,
    msg: &Json,
    salt: &[u8],
    funds: u128,
) -> AppResult<(Addr, Vec<ContractEvent>)> {
    let mut storage = ctx.storage.clone();

    let code = load_code(&ctx, code_id)?;
    let address = derive_address(sender, salt);

    if CONTRACTS.has(&storage, address) {
        return Err(AppError::AccountExists { address });
    }

    CONTRACTS.save(&mut storage, address, &code_id)?;
    transfer_native(&mut storage, sender, address, funds)?;

    let response = call_mutable(&ctx, address, sender, funds, "instantiate", |mctx| {
        code.instantiate(mctx, msg)
    })?;

    tracing::debug!(code_id, address = address.to_string(), "Instantiated contract");

    let events = finish(ctx, msg_depth, address, response)?;

    Ok((address, events))
}

// ---------------------------------- execute ----------------------------------

pub fn do_execute(
    ctx: AppCtx<TxStorage>,
    msg_depth: usize,
    sender: Addr,
    contract: Addr,
    msg: &Json,
    funds: u128,
) -> AppResult<Vec<ContractEvent>> {
    let mut storage = ctx.storage.clone();

    let code = load_contract_code(&ctx, contract)?;
    transfer_native(&mut storage, sender, contract, funds)?;

    let response = call_mutable(&ctx, contract, sender, funds, "execute", |mctx| {
        code.execute(mctx, msg)
    })?;

    tracing::debug!(contract = contract.to_string(), "Executed contract");

    finish(ctx, msg_depth, contract, response)
}

// ---------------------------------- transfer ---------------------------------

/// Send native currency. If the recipient is a contract, its `receive` entry
/// point is invoked, and may reject the transfer by returning an error.
pub fn do_transfer(
    ctx: AppCtx<TxStorage>,
    msg_depth: usize,
    from: Addr,
    to: Addr,
    amount: u128,
) -> AppResult<Vec<ContractEvent>> {
    let mut storage = ctx.storage.clone();

    transfer_native(&mut storage, from, to, amount)?;

    tracing::debug!(
        from = from.to_string(),
        to = to.to_string(),
        amount,
        "Transferred native currency"
    );

    if !CONTRACTS.has(&storage, to) {
        return Ok(vec![]);
    }

    let code = load_contract_code(&ctx, to)?;
    let response = call_mutable(&ctx, to, from, amount, "receive", |mctx| code.receive(mctx))?;

    finish(ctx, msg_depth, to, response)
}

// -------------------------------- submessages --------------------------------

/// Recursively execute messages emitted in a contract response using a
/// depth-first approach.
///
/// The `sender` here is the contract that emitted the messages, not the
/// transaction's sender. All messages share the transaction's storage, so a
/// failure anywhere aborts the entire transaction.
pub fn handle_submessages(
    ctx: AppCtx<TxStorage>,
    msg_depth: usize,
    sender: Addr,
    msgs: Vec<Message>,
) -> AppResult<Vec<ContractEvent>> {
    if msg_depth > MAX_MESSAGE_DEPTH {
        return Err(AppError::ExceedMaxMessageDepth);
    }

    let mut events = vec![];

    for msg in msgs {
        tracing::debug!(sender = sender.to_string(), msg_depth, "Dispatching message");

        let sub_events = match msg {
            Message::Execute {
                contract,
                msg,
                funds,
            } => do_execute(ctx.clone(), msg_depth + 1, sender, contract, &msg, funds)?,
            Message::Transfer { to, amount } => {
                do_transfer(ctx.clone(), msg_depth + 1, sender, to, amount)?
            },
        };

        events.extend(sub_events);
    }

    Ok(events)
}

// ---------------------------------- helpers ----------------------------------

fn load_code<'a>(
    ctx: &AppCtx<'a, TxStorage>,
    code_id: u32,
) -> AppResult<&'a (dyn Contract + Send + Sync)> {
    ctx.codes
        .get(code_id as usize)
        .map(|code| &**code)
        .ok_or(AppError::CodeNotFound { code_id })
}

fn load_contract_code<'a>(
    ctx: &AppCtx<'a, TxStorage>,
    contract: Addr,
) -> AppResult<&'a (dyn Contract + Send + Sync)> {
    let code_id = CONTRACTS
        .may_load(&ctx.storage, contract)?
        .ok_or(AppError::ContractNotFound { address: contract })?;

    load_code(ctx, code_id)
}

/// Build a mutable context for `contract` and call one of its entry points.
fn call_mutable<F>(
    ctx: &AppCtx<TxStorage>,
    contract: Addr,
    sender: Addr,
    funds: u128,
    name: &'static str,
    call: F,
) -> AppResult<Response>
where
    F: FnOnce(MutableCtx) -> crate::VmResult<crate::GenericResult<Response>>,
{
    let mut storage = StorageProvider::new(ctx.storage.clone(), &[
        CONTRACT_NAMESPACE,
        contract.as_slice(),
    ]);
    let querier = QuerierProvider::new(ctx.clone(), 0);

    let mctx = MutableCtx {
        storage: &mut storage,
        querier: &querier,
        chain_id: ctx.chain_id,
        block: ctx.block,
        contract,
        sender,
        funds,
    };

    call(mctx)?.map_err(|msg| AppError::Guest {
        address: contract,
        name,
        msg,
    })
}

/// Stamp the response's events with the emitting contract, then run the
/// response's messages.
fn finish(
    ctx: AppCtx<TxStorage>,
    msg_depth: usize,
    contract: Addr,
    response: Response,
) -> AppResult<Vec<ContractEvent>> {
    let mut events = response
        .events
        .into_iter()
        .map(|event| ContractEvent {
            contract,
            ty: event.ty,
            data: event.data,
        })
        .collect::<Vec<_>>();

    events.extend(handle_submessages(ctx, msg_depth, contract, response.messages)?);

    Ok(events)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deriving_addresses() {
        let address = derive_address(Addr::mock(1), b"portal");

        // Deterministic, and depends on both the sender and the salt.
        assert_eq!(address, derive_address(Addr::mock(1), b"portal"));
        assert_ne!(address, derive_address(Addr::mock(2), b"portal"));
        assert_ne!(address, derive_address(Addr::mock(1), b"bridge"));
    }
}
