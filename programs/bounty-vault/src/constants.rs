use anchor_lang::prelude::*;

pub const SEED_VAULT_CONFIG: &[u8] = b"vault_config";
pub const SEED_ALLOCATION_TIMELINE: &[u8] = b"allocation_timeline";
pub const SEED_POOL: &[u8] = b"pool";
pub const SEED_POOL_VAULT: &[u8] = b"pool_vault";
pub const SEED_REWARD_VAULT: &[u8] = b"reward_vault";
pub const SEED_DEPOSITOR: &[u8] = b"depositor";
pub const SEED_HACKER_HAT_REWARD: &[u8] = b"hacker_hat";

pub const DISCRIMINATOR_SIZE: usize = 8;

// Basis points: 10000 = 100%
pub const HUNDRED_PERCENT: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 200;

// Fixed-point scale of Pool::reward_per_share
pub const REWARD_PRECISION: u128 = 1_000_000_000_000;

// Multipliers are stored in hundredths (4413 = 44.13x)
pub const MULTIPLIER_SCALE: u128 = 100;
pub const MULTIPLIERS_LENGTH: usize = 24;
pub const DEFAULT_REWARD_MULTIPLIERS: [u16; MULTIPLIERS_LENGTH] = [
    4413, 4413, 8825, 7788, 6873, 6065, 5353, 4724, 4169, 3679, 3247, 2865, 2528, 2231, 1969,
    1738, 1534, 1353, 1194, 1054, 930, 821, 724, 639,
];

pub const MINIMUM_DEPOSIT: u64 = 1_000_000;

pub const MAX_REWARD_LEVELS: usize = 10;
pub const DEFAULT_REWARD_LEVELS: [u16; 4] = [2000, 4000, 6000, 8000];

pub const HOUR: i64 = 60 * 60;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;

// Anyone may dismiss a claim governance left untouched for this long
pub const CLAIM_DISMISS_DELAY: i64 = 5 * WEEK;

pub const MIN_WITHDRAW_PERIOD: i64 = HOUR;
pub const MAX_WITHDRAW_PERIOD: i64 = 90 * DAY;
pub const MAX_SAFETY_PERIOD: i64 = 6 * HOUR;
pub const MAX_WITHDRAW_REQUEST_PENDING_PERIOD: i64 = 90 * DAY;
pub const MIN_WITHDRAW_REQUEST_ENABLE_PERIOD: i64 = 6 * HOUR;
pub const MAX_POOL_VESTING_DURATION: i64 = 120 * DAY;
pub const MAX_EMISSION_VESTING_DURATION: i64 = 180 * DAY;
pub const MIN_REWARD_LEVELS_DELAY: i64 = 2 * DAY;

// Owner written into vesting locks created by the vault; nobody holds this key
pub const TOKEN_LOCK_OWNER: Pubkey = Pubkey::new_from_array([0xde; 32]);
