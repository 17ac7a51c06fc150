//! UI ⇄ worker bridge: command queue and the payment settlement worker.

pub mod commands;
pub mod runtime;
