//! HTTP shell around the solver.
//!
//! - `POST /solve` validates a [`SolveRequest`], solves it off the async
//!   workers, and answers with a [`SolveResponse`]
//! - `GET /health` answers `{"status":"ok"}`

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::*;
pub use response::*;
pub use server::*;
