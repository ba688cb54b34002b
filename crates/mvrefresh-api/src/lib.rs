pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::WorkspaceClient;
pub use error::{
    ClientError,
    ClientResult,
};
pub use retry::RetryPolicy;
pub use types::{
    StatementResult,
    Warehouse,
    WarehouseState,
};
