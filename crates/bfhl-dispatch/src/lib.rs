//! # bfhl-dispatch
//!
//! Request dispatch (APPLICATION layer).
//!
//! Provides `Dispatcher`, which turns one parsed JSON body into a
//! `ResponseEnvelope`, and the pure numeric helpers behind the
//! `fibonacci`, `prime`, `lcm` and `hcf` operations.

pub mod dispatcher;
pub mod numeric;

pub use dispatcher::Dispatcher;
