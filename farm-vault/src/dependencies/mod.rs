mod farm;
pub use farm::{Client as FarmClient, PoolInfo};
mod router;
pub use router::Client as RouterClient;
