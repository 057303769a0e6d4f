use crate::{Addr, ContractError};

/// Pair up the recipients and amounts of a batch disbursement. Errors if the
/// two lists differ in length.
pub fn payouts<'a>(
    recipients: &'a [Addr],
    amounts: &'a [u128],
) -> Result<impl Iterator<Item = (Addr, u128)> + 'a, ContractError> {
    if recipients.len() != amounts.len() {
        return Err(ContractError::LengthMismatch {
            recipients: recipients.len(),
            amounts: amounts.len(),
        });
    }

    Ok(recipients.iter().copied().zip(amounts.iter().copied()))
}

// ----------------------------------- tests -----------------------------------
