//! Lamport movement out of the program-owned ethent account.
//!
//! Deposits come in through a system program transfer (the attendee signs);
//! disbursements go out by debiting the ethent account directly, since a
//! data-carrying program account cannot be the `from` side of a system
//! transfer.

use anchor_lang::prelude::*;

use crate::errors::EthentError;

/// Moves `amount` lamports from the ethent account to a recipient. Any
/// failure aborts the whole call; escrow is never left half-disbursed.
pub fn disburse<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(to.is_writable, EthentError::TransferFailed);

    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(EthentError::TransferFailed)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(EthentError::TransferFailed)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
