//
//  mailerlite-rs
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared helpers for integration tests.

#![allow(dead_code)]

use mailerlite::MailerLite;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const API_KEY: &str = "test-api-key";

/// Installs a log subscriber once per test binary.
///
/// Set `MAILERLITE_LOG=mailerlite=debug` to see the requests being made.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("MAILERLITE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_test_writer())
        .with(filter)
        .try_init();
}

/// Builds a client pointed at a mock server.
pub fn client(server: &mockito::Server) -> MailerLite {
    init_logging();
    MailerLite::with_base_path(API_KEY, server.url()).expect("client should build")
}
