//! Courier fixtures.
//!
//! Logins share a namespace with every other run against the same
//! environment, so generated logins must not collide: each one combines the
//! process id (distinct per parallel worker process), a process-wide sequence
//! number (distinct per call), and a random suffix (distinct across hosts and
//! restarts).

use std::sync::atomic::{AtomicU64, Ordering};

use clients::scooter::v1::Courier;
use rand::{Rng, distributions::Alphanumeric, seq::SliceRandom};
use tap::Pipe;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

const SUFFIX_LEN: usize = 8;
const PASSWORD_LEN: usize = 10;
const FIRST_NAMES: &[&str] = &["Ivan", "Olga", "Naruto", "Sakura", "Pavel", "Maria"];

/// A login no other generated courier uses.
pub fn unique_login() -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let process = std::process::id();
    let suffix = random_lowercase(SUFFIX_LEN);
    format!("courier_{process}_{sequence}_{suffix}")
}

/// A random password.
pub fn password() -> String {
    random_lowercase(PASSWORD_LEN)
}

/// A random first name.
pub fn first_name() -> String {
    FIRST_NAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Courier")
        .pipe(String::from)
}

/// A valid courier with a fresh login.
pub fn courier() -> Courier {
    Courier::builder()
        .login(unique_login())
        .password(password())
        .first_name(first_name())
        .build()
}

/// A courier with no login.
pub fn courier_without_login() -> Courier {
    courier().without_login()
}

/// A courier with no password.
pub fn courier_without_password() -> Courier {
    courier().without_password()
}

fn random_lowercase(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect()
}
