/*! Integration tests for the passkey store.
 *
 * Built as a single test binary:
 * - sessions: token-keyed session table semantics
 * - users: get-or-create and save semantics, including concurrent creation
 * - tokens: token generation properties
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("passkey_store=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod tokens;
