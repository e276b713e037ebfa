/*!
 * Process-wide Runtime Tests
 *
 * These touch the global runtime, so they run serially.
 */

use adsi::{
    ApartmentModel, ComRuntime, DelegateError, LargeInteger, NoopBridge, ObjectInterface,
    RuntimeBridge, User, UserInterface, Variant,
};
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

#[derive(Default)]
struct Transitions {
    inits: AtomicUsize,
    uninits: AtomicUsize,
}

struct StaticBridge(&'static Transitions);

impl RuntimeBridge for StaticBridge {
    fn initialize(&self, apartment: ApartmentModel) -> Result<(), DelegateError> {
        assert_eq!(apartment, ApartmentModel::Apartment);
        self.0.inits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn uninitialize(&self) {
        self.0.uninits.fetch_add(1, Ordering::SeqCst);
    }
}

/// Installs the global runtime on first use
fn transitions() -> &'static Transitions {
    static TRANSITIONS: OnceLock<&'static Transitions> = OnceLock::new();
    TRANSITIONS.get_or_init(|| {
        let transitions: &'static Transitions = Box::leak(Box::default());
        ComRuntime::install_global(StaticBridge(transitions), ApartmentModel::Apartment)
            .expect("global runtime installed before the test helper ran");
        transitions
    })
}

struct StubUser;

impl ObjectInterface for StubUser {
    fn name(&self) -> Result<String, DelegateError> {
        Ok("CN=stub".into())
    }
    fn class(&self) -> Result<String, DelegateError> {
        Ok("user".into())
    }
    fn guid(&self) -> Result<String, DelegateError> {
        Ok(String::new())
    }
    fn ads_path(&self) -> Result<String, DelegateError> {
        Ok("WinNT://EXAMPLE/stub,user".into())
    }
    fn parent(&self) -> Result<String, DelegateError> {
        Ok("WinNT://EXAMPLE".into())
    }
    fn schema(&self) -> Result<String, DelegateError> {
        Ok("WinNT://EXAMPLE/Schema/User".into())
    }
    fn get(&self, _name: &str) -> Result<Variant, DelegateError> {
        Ok(Variant::Null)
    }
    fn release(&mut self) {}
}

impl UserInterface for StubUser {
    type LargeInteger = LargeInteger;

    fn full_name(&self) -> Result<String, DelegateError> {
        Ok("Stub".into())
    }
    fn description(&self) -> Result<String, DelegateError> {
        Ok(String::new())
    }
    fn password_required(&self) -> Result<bool, DelegateError> {
        Ok(false)
    }
    fn account_disabled(&self) -> Result<bool, DelegateError> {
        Ok(false)
    }
    fn is_account_locked(&self) -> Result<bool, DelegateError> {
        Ok(false)
    }
    fn require_unique_password(&self) -> Result<bool, DelegateError> {
        Ok(false)
    }
    fn password_minimum_length(&self) -> Result<i64, DelegateError> {
        Ok(0)
    }
    fn last_login(&self) -> Result<LargeInteger, DelegateError> {
        Ok(LargeInteger::default())
    }
    fn password_expiration_date(&self) -> Result<i64, DelegateError> {
        Ok(0)
    }
}

#[test]
#[serial]
fn test_global_runtime_brackets_handles() {
    let t = transitions();
    let runtime = ComRuntime::global();
    let inits = t.inits.load(Ordering::SeqCst);
    let uninits = t.uninits.load(Ordering::SeqCst);

    let first = User::new(StubUser, runtime).unwrap();
    let second = User::new(StubUser, runtime).unwrap();
    assert_eq!(runtime.ref_count(), 2);
    assert_eq!(t.inits.load(Ordering::SeqCst), inits + 1);

    first.close();
    assert_eq!(t.uninits.load(Ordering::SeqCst), uninits);
    drop(second);
    assert_eq!(t.uninits.load(Ordering::SeqCst), uninits + 1);
    assert_eq!(runtime.ref_count(), 0);
}

#[test]
#[serial]
fn test_global_cannot_be_replaced() {
    transitions();

    let err = ComRuntime::install_global(NoopBridge, ApartmentModel::Multithreaded).unwrap_err();
    assert!(matches!(err, adsi::AdsiError::Runtime(_)));
    assert_eq!(ComRuntime::global().apartment(), ApartmentModel::Apartment);
}

#[test]
#[serial]
fn test_global_reinitializes_after_teardown() {
    let t = transitions();
    let inits = t.inits.load(Ordering::SeqCst);

    for _ in 0..3 {
        let user = User::new(StubUser, ComRuntime::global()).unwrap();
        assert_eq!(user.full_name(), Ok("Stub".to_string()));
    }

    assert_eq!(t.inits.load(Ordering::SeqCst), inits + 3);
    assert!(!ComRuntime::global().is_initialized());
}
