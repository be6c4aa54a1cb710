//! Bearer-token gate for mutating calls.
//!
//! Token issuance lives outside this crate; the directory only needs a
//! pass/fail answer per request. The answer comes from the installed
//! [`AuthGate`], which defaults to [`ConfigTokenGate`] (SHA-256 digests listed
//! under `[auth]` in the config). Embedders with their own token service can
//! install a different gate with [`install_gate`].

use crate::{
    access::AccessError,
    config::Config,
    log,
    log::Topic,
    utils::digest::{digest_eq, sha256_hex},
};
use std::{cell::RefCell, rc::Rc};
use thiserror::Error as ThisError;

thread_local! {
    static AUTH_GATE: RefCell<Option<Rc<dyn AuthGate>>> = const { RefCell::new(None) };
}

///
/// AuthError
///

#[derive(Debug, ThisError)]
pub enum AuthError {
    #[error("bearer token is required")]
    MissingToken,

    #[error("bearer token was rejected")]
    InvalidToken,
}

///
/// AuthGate
///

pub trait AuthGate {
    /// Return true if `token` authorizes a mutating call.
    fn verify(&self, token: &str) -> bool;
}

impl<F> AuthGate for F
where
    F: Fn(&str) -> bool,
{
    fn verify(&self, token: &str) -> bool {
        self(token)
    }
}

///
/// ConfigTokenGate
///

pub struct ConfigTokenGate;

impl AuthGate for ConfigTokenGate {
    fn verify(&self, token: &str) -> bool {
        let Some(cfg) = Config::try_get() else {
            return false;
        };
        let presented = sha256_hex(token.as_bytes());

        cfg.auth
            .token_sha256
            .iter()
            .fold(false, |found, digest| found | digest_eq(digest, &presented))
    }
}

/// Replace the gate consulted by [`require_token`].
pub fn install_gate(gate: impl AuthGate + 'static) {
    AUTH_GATE.with_borrow_mut(|slot| *slot = Some(Rc::new(gate)));
}

/// Restore the default config-backed gate.
pub fn reset_gate() {
    AUTH_GATE.with_borrow_mut(|slot| *slot = None);
}

fn current_gate() -> Rc<dyn AuthGate> {
    AUTH_GATE.with_borrow(|slot| {
        slot.clone()
            .unwrap_or_else(|| Rc::new(ConfigTokenGate) as Rc<dyn AuthGate>)
    })
}

/// Require a valid bearer token for the current call.
pub fn require_token(token: Option<&str>) -> Result<(), AccessError> {
    let token = token.map(str::trim).filter(|t| !t.is_empty());

    let Some(token) = token else {
        log!(Topic::Auth, Warn, "auth failed: no bearer token presented");
        return Err(AuthError::MissingToken.into());
    };

    if current_gate().verify(token) {
        Ok(())
    } else {
        log!(Topic::Auth, Warn, "auth failed: bearer token rejected");
        Err(AuthError::InvalidToken.into())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ADMIN_TOKEN;

    #[test]
    fn config_gate_accepts_configured_token() {
        reset_gate();

        require_token(Some(ADMIN_TOKEN)).expect("configured token passes");
    }

    #[test]
    fn missing_and_blank_tokens_are_rejected() {
        reset_gate();

        for token in [None, Some(""), Some("   ")] {
            let err = require_token(token).unwrap_err();
            assert!(
                matches!(err, AccessError::Auth(AuthError::MissingToken)),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        reset_gate();

        let err = require_token(Some("not-the-admin")).unwrap_err();
        assert!(matches!(err, AccessError::Auth(AuthError::InvalidToken)));
    }

    #[test]
    fn installed_gate_replaces_config_gate() {
        install_gate(|token: &str| token == "external-session");

        require_token(Some("external-session")).expect("custom gate accepts");
        assert!(require_token(Some(ADMIN_TOKEN)).is_err());

        reset_gate();
        require_token(Some(ADMIN_TOKEN)).expect("default gate restored");
    }
}
