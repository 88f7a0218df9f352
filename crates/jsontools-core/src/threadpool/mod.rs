//! Lock-free MPMC ring queue (`queue`) and the bounded worker pool built on
//! top of it (`pool`).

mod pool;
mod queue;

pub use pool::{PoolState, ThreadPool};
pub use queue::MpmcQueue;
