//! Request and response bodies

pub mod fund;
