// Time constants
pub const ONE_MINUTE_SECONDS: u64 = 60;
pub const LIQUIDITY_DEADLINE_SECONDS: u64 = ONE_MINUTE_SECONDS * 30; // router must reject after 30 minutes
