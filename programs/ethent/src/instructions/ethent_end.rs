use anchor_lang::prelude::*;

use crate::constants::{ETHENT_SEED, REGISTRY_SEED};
use crate::errors::EthentError;
use crate::events::EthentEnded;
use crate::state::{Ethent, Registry};

#[derive(Accounts)]
pub struct EndEthent<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The registry that created this ethent; termination has no other
    /// entry point, so the back-reference constraint below is what makes a
    /// "direct" end unconstructible.
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        close = owner,
        seeds = [ETHENT_SEED, registry.key().as_ref(), &ethent.nonce.to_le_bytes()],
        bump = ethent.bump,
        has_one = owner @ EthentError::Unauthorized,
        has_one = registry @ EthentError::Unauthorized,
    )]
    pub ethent: Account<'info, Ethent>,

    /// The registry's last tracked ethent; required whenever the ended
    /// ethent is not the last element, to take over its vacated index.
    #[account(mut)]
    pub moved_sibling: Option<Account<'info, Ethent>>,
}

/// Final termination, 24 hours after the event time at the earliest: removes
/// the ethent from the registry by swap-and-pop and closes its account to
/// the owner, forfeiting whatever escrow remains unclaimed.
pub fn end_ethent(ctx: Context<EndEthent>) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();
    let ethent_key = ctx.accounts.ethent.key();
    let now = Clock::get()?.unix_timestamp;

    let ethent = &mut ctx.accounts.ethent;
    ethent.ensure_endable(&owner_key, now)?;

    let registry = &mut ctx.accounts.registry;
    let moved = registry.untrack(ethent.registry_index, &ethent_key)?;

    if let Some(moved_key) = moved {
        let sibling = ctx
            .accounts
            .moved_sibling
            .as_mut()
            .ok_or(EthentError::InvalidRegistrySibling)?;
        require_keys_eq!(
            sibling.key(),
            moved_key,
            EthentError::InvalidRegistrySibling
        );
        sibling.registry_index = ethent.registry_index;
    }

    let forfeited = ethent.escrow_lamports;
    ethent.escrow_lamports = 0;
    ethent.terminated = true;

    emit!(EthentEnded {
        ethent: ethent_key,
        registry: registry.key(),
        owner: owner_key,
        forfeited_lamports: forfeited,
    });

    msg!("Ethent ended, {} lamports forfeited to owner", forfeited);

    Ok(())
}
