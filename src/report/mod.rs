pub mod stuck;
pub mod week;

pub use stuck::stuck_pull_requests;
