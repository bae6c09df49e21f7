#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the expense ledger, savings goal, and daily earnings
//! primitives that power the finance screens of a gig-worker companion app.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod finance;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
