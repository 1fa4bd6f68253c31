use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Authorization
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Only the pool committee can perform this action")]
    NotCommittee,
    #[msg("Only governance can perform this action")]
    NotGovernance,
    #[msg("Only the fee setter can perform this action")]
    NotFeeSetter,
    #[msg("Committee already checked in")]
    CommitteeAlreadyCheckedIn,
    #[msg("Committee has not checked in yet")]
    CommitteeNotCheckedIn,

    // State conflicts
    #[msg("A claim is already pending for this pool")]
    ClaimAlreadySubmitted,
    #[msg("No claim is pending for this pool")]
    NoActiveClaim,
    #[msg("Claim approval is already in progress")]
    ReentrantApproval,
    #[msg("Deposits are paused for this pool")]
    DepositPaused,
    #[msg("Account does not match the pending claim")]
    ClaimAccountMismatch,
    #[msg("Token account does not belong to this pool")]
    PoolTokenMismatch,
    #[msg("Nothing to swap")]
    NothingToSwap,
    #[msg("Depositor has no shares")]
    NoShares,

    // Time windows
    #[msg("Claims can only be submitted during the safety period")]
    NotSafetyPeriod,
    #[msg("Operation is blocked during the safety period")]
    SafetyPeriod,
    #[msg("Withdraw request is not valid at this time")]
    WithdrawRequestInvalid,
    #[msg("A withdraw request is already pending")]
    WithdrawRequestPending,
    #[msg("No pending reward levels to activate")]
    NoPendingRewardLevels,
    #[msg("Reward levels delay has not elapsed")]
    RewardLevelsDelayNotElapsed,
    #[msg("Claim can only be dismissed by governance at this time")]
    DismissTooEarly,

    // Bounds
    #[msg("Severity is out of range")]
    SeverityOutOfRange,
    #[msg("Rewards split must sum to 10000")]
    InvalidRewardsSplit,
    #[msg("Reward level must be below 10000")]
    RewardLevelTooHigh,
    #[msg("Too many reward levels")]
    TooManyRewardLevels,
    #[msg("Deposit is below the minimum amount")]
    DepositBelowMinimum,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Fee exceeds the maximum allowed")]
    FeeTooHigh,
    #[msg("Vesting duration is too long")]
    VestingDurationTooLong,
    #[msg("Vesting periods cannot be zero")]
    VestingPeriodsZero,
    #[msg("Vesting duration is smaller than periods")]
    VestingDurationSmallerThanPeriods,
    #[msg("Withdraw period is too short")]
    WithdrawPeriodTooShort,
    #[msg("Withdraw period is too long")]
    WithdrawPeriodTooLong,
    #[msg("Safety period cannot be negative")]
    SafetyPeriodNegative,
    #[msg("Safety period is too long")]
    SafetyPeriodTooLong,
    #[msg("Withdraw request pending period cannot be negative")]
    WithdrawRequestPendingPeriodNegative,
    #[msg("Withdraw request pending period is too long")]
    WithdrawRequestPendingPeriodTooLong,
    #[msg("Withdraw request enable period is too short")]
    WithdrawRequestEnablePeriodTooShort,
    #[msg("Reward levels delay is too short")]
    RewardLevelsDelayTooShort,
    #[msg("Reward amount is too big for the pool")]
    RewardInjectionTooBig,
    #[msg("Invalid beneficiary")]
    InvalidBeneficiary,
    #[msg("Invalid committee")]
    InvalidCommittee,
    #[msg("Invalid governance")]
    InvalidGovernance,
    #[msg("Invalid reward schedule")]
    InvalidRewardSchedule,
    #[msg("Allocation checkpoint is older than the latest one")]
    StaleAllocationCheckpoint,

    // Arithmetic
    #[msg("Calculation overflow")]
    CalculationOverflow,
    #[msg("Division by zero")]
    DivisionByZero,

    // External calls
    #[msg("Swap returned less than the minimum output")]
    SwapOutputTooLow,
}
