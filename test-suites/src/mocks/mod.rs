mod farm;
pub use farm::{MockFarm, MockFarmClient, MockFarmError};
mod router;
pub use router::{MockRouter, MockRouterClient, MockRouterError};
