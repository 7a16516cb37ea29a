use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Construction and access
    ConstructionError = 700,
    Unauthorized = 701,
    InvalidAmount = 702,

    // Owner funding
    InsufficientBalance = 710,
    InsufficientAllowance = 711,

    // Farming pools
    InvalidPool = 720,
    InsufficientStakedAmount = 730,

    // Collaborator failures
    CustodyTransferFailed = 740,
    LiquidityProvisioningFailed = 750,
}
