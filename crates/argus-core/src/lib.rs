pub mod client;
pub mod consts;
pub mod error;
pub mod intake;
pub mod protocol;
pub mod report;
pub mod session;
pub mod stego;
