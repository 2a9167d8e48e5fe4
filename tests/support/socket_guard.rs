//! Skips socket-bound tests in sandboxes that forbid binding localhost.

use std::net::TcpListener;
use std::panic::Location;

use wiremock::MockServer;

const STRICT_ENV: &str = "BOOKFINDER_REQUIRE_SOCKET_TESTS";

fn strict_mode() -> bool {
    std::env::var(STRICT_ENV)
        .is_ok_and(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn skip_or_fail(caller: &Location<'_>) {
    let message = format!(
        "[socket-bound-test] {}:{} cannot bind a localhost socket",
        caller.file(),
        caller.line()
    );
    assert!(!strict_mode(), "{message}; unset {STRICT_ENV} to allow skipping");
    eprintln!("{message}; skipping (set {STRICT_ENV}=1 to fail instead)");
}

/// Starts a mock catalog, or returns `None` (after a note on stderr) when
/// no localhost socket can be bound. Panics instead in strict mode.
#[track_caller]
pub fn start_mock_server_or_skip() -> impl std::future::Future<Output = Option<MockServer>> {
    let caller = Location::caller();
    let can_bind = can_bind_localhost();

    async move {
        if can_bind {
            return Some(MockServer::start().await);
        }
        skip_or_fail(caller);
        None
    }
}

/// Binds a raw localhost listener for hand-written upstreams, with the same
/// skip rules as [`start_mock_server_or_skip`].
#[track_caller]
pub fn bind_local_or_skip() -> impl std::future::Future<Output = Option<tokio::net::TcpListener>> {
    let caller = Location::caller();

    async move {
        match tokio::net::TcpListener::bind("127.0.0.1:0").await {
            Ok(listener) => Some(listener),
            Err(_) => {
                skip_or_fail(caller);
                None
            }
        }
    }
}
