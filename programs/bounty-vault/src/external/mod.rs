pub mod swap_router;
pub mod vesting;

pub use swap_router::*;
pub use vesting::*;

use anchor_lang::solana_program::hash::hash;

/// Anchor instruction discriminator of `name` in a foreign program
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminator_is_stable_and_name_specific() {
        assert_eq!(
            instruction_discriminator("create_lock"),
            instruction_discriminator("create_lock")
        );
        assert_ne!(
            instruction_discriminator("create_lock"),
            instruction_discriminator("exact_input")
        );
    }
}
