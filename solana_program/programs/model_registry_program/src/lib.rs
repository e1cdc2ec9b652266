// Solana smart contract for the model registry.
use anchor_lang::prelude::*;

declare_id!("3Uxey2KwiZqMK2uTbqJBEqayjfo8jZFDEhZpU97RQVY6");

/// Fixed allocation for the storage locator string.
pub const MAX_URI_LEN: usize = 200;

#[program]
pub mod model_registry_program {
    use super::*;

    pub fn create_model(
        ctx: Context<CreateModel>,
        model_hash: [u8; 32],
        merkle_root: [u8; 32],
        storage_uri: String,
        price_lamports: u64,
    ) -> Result<()> {
        require!(storage_uri.len() <= MAX_URI_LEN, RegistryError::UriTooLong);

        let model = &mut ctx.accounts.model;
        model.model_hash = model_hash;
        model.merkle_root = merkle_root;
        model.storage_uri = storage_uri;
        model.price_lamports = price_lamports;
        model.uploader = ctx.accounts.uploader.key();
        Ok(())
    }

    pub fn rent_model(ctx: Context<RentModel>, model_hash: [u8; 32]) -> Result<()> {
        let model = &ctx.accounts.model;
        require!(
            model.model_hash == model_hash,
            RegistryError::HashMismatch
        );
        require_keys_eq!(
            model.uploader,
            ctx.accounts.uploader.key(),
            RegistryError::UploaderMismatch
        );

        let transfer = anchor_lang::system_program::Transfer {
            from: ctx.accounts.renter.to_account_info(),
            to: ctx.accounts.uploader.to_account_info(),
        };
        let cpi = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer);
        anchor_lang::system_program::transfer(cpi, model.price_lamports)?;
        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(model_hash: [u8; 32])]
pub struct CreateModel<'info> {
    #[account(
        init,
        payer = uploader,
        space = 8 + 32 + 32 + 4 + MAX_URI_LEN + 8 + 32,
        seeds = [b"model", model_hash.as_ref()],
        bump
    )]
    pub model: Account<'info, Model>,
    #[account(mut)]
    pub uploader: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(model_hash: [u8; 32])]
pub struct RentModel<'info> {
    #[account(mut, seeds = [b"model", model_hash.as_ref()], bump)]
    pub model: Account<'info, Model>,
    #[account(mut)]
    pub renter: Signer<'info>,
    /// CHECK: validated against the uploader recorded on the model account.
    #[account(mut)]
    pub uploader: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

#[account]
pub struct Model {
    pub model_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub storage_uri: String,
    pub price_lamports: u64,
    pub uploader: Pubkey,
}

#[error_code]
pub enum RegistryError {
    #[msg("storage uri exceeds the allocated space")]
    UriTooLong,
    #[msg("model hash does not match the stored record")]
    HashMismatch,
    #[msg("uploader account does not match the stored record")]
    UploaderMismatch,
}
