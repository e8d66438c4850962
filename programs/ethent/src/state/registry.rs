use anchor_lang::prelude::*;

use crate::constants::MAX_TRACKED_ETHENTS;
use crate::errors::EthentError;

/// Factory and index over ethents. The tracking vector plus each ethent's
/// stored `registry_index` form an index-tracked arena: removal is
/// swap-and-pop, O(1), with the moved element's index patched in the same
/// transaction.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Administrator; may pause creation.
    pub authority: Pubkey,

    pub creation_paused: bool,

    /// Monotonic counter of ethents ever created here; PDA seed nonce, so
    /// addresses never collide after removals.
    pub total_created: u64,

    #[max_len(MAX_TRACKED_ETHENTS)]
    pub ethents: Vec<Pubkey>,

    pub bump: u8,
}

impl Registry {
    pub fn ensure_can_create(&self) -> Result<()> {
        require!(!self.creation_paused, EthentError::CreationPaused);
        require!(
            self.ethents.len() < MAX_TRACKED_ETHENTS,
            EthentError::RegistryFull
        );
        Ok(())
    }

    pub fn index_of(&self, ethent: &Pubkey) -> Option<u32> {
        self.ethents.iter().position(|e| e == ethent).map(|i| i as u32)
    }

    /// Appends a new ethent and returns its index.
    pub fn track(&mut self, ethent: Pubkey) -> Result<u32> {
        self.ensure_can_create()?;
        let index = self.ethents.len() as u32;
        self.ethents.push(ethent);
        self.total_created = self
            .total_created
            .checked_add(1)
            .ok_or(EthentError::EscrowAccounting)?;
        Ok(index)
    }

    /// Swap-and-pop removal of the ethent recorded at `index`. Returns the
    /// key that moved into the vacated slot, if any; its account's
    /// `registry_index` must be patched by the caller.
    pub fn untrack(&mut self, index: u32, expected: &Pubkey) -> Result<Option<Pubkey>> {
        let i = index as usize;
        require!(
            i < self.ethents.len() && self.ethents[i] == *expected,
            EthentError::InvalidRegistrySibling
        );
        self.ethents.swap_remove(i);
        if i < self.ethents.len() {
            Ok(Some(self.ethents[i]))
        } else {
            Ok(None)
        }
    }
}
