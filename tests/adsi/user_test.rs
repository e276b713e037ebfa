/*!
 * User Handle Tests
 */

use super::mock::{counting_runtime, MockLargeInteger, MockUser, CallLog, JDOE_PATH};
use adsi::adsi::filetime;
use adsi::{AdsiError, DelegateError, Guard, User, Variant};
use pretty_assertions::assert_eq;

#[test]
fn test_full_name_then_close() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    assert_eq!(user.full_name(), Ok("Jane Doe".to_string()));

    user.close();
    assert_eq!(user.full_name(), Err(AdsiError::Closed));
}

#[test]
fn test_accessors_forward_values() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    assert_eq!(user.description(), Ok("Staff engineer".to_string()));
    assert_eq!(user.password_required(), Ok(true));
    assert_eq!(user.account_disabled(), Ok(false));
    assert_eq!(user.is_account_locked(), Ok(false));
    assert_eq!(user.require_unique_password(), Ok(true));
    assert_eq!(user.password_minimum_length(), Ok(12));
    assert_eq!(user.password_expiration_date(), Ok(132_855_552_000_000_000));
}

#[test]
fn test_every_accessor_rejects_after_close_without_delegating() {
    let ledger = CallLog::new();
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(ledger.clone()), &runtime).unwrap();

    user.close();
    let calls_after_close = ledger.calls();

    assert_eq!(user.full_name(), Err(AdsiError::Closed));
    assert_eq!(user.description(), Err(AdsiError::Closed));
    assert_eq!(user.password_required(), Err(AdsiError::Closed));
    assert_eq!(user.account_disabled(), Err(AdsiError::Closed));
    assert_eq!(user.is_account_locked(), Err(AdsiError::Closed));
    assert_eq!(user.require_unique_password(), Err(AdsiError::Closed));
    assert_eq!(user.password_minimum_length(), Err(AdsiError::Closed));
    assert_eq!(user.last_login(), Err(AdsiError::Closed));
    assert_eq!(user.password_expiration_date(), Err(AdsiError::Closed));
    assert_eq!(user.get("sAMAccountName"), Err(AdsiError::Closed));
    assert_eq!(user.name(), Err(AdsiError::Closed));
    assert_eq!(user.ads_path(), Err(AdsiError::Closed));

    assert_eq!(ledger.calls(), calls_after_close);
}

#[test]
fn test_close_is_idempotent() {
    let ledger = CallLog::new();
    let (runtime, bridge) = counting_runtime();
    let user = User::new(MockUser::new(ledger.clone()), &runtime).unwrap();
    assert_eq!(runtime.ref_count(), 1);

    for _ in 0..5 {
        user.close();
    }

    assert!(user.is_closed());
    assert_eq!(ledger.releases(), 1);
    assert_eq!(runtime.ref_count(), 0);
    assert_eq!(bridge.inits.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(bridge.uninits.load(std::sync::atomic::Ordering::SeqCst), 1);

    drop(user);
    assert_eq!(ledger.releases(), 1);
}

#[test]
fn test_drop_closes_open_handle() {
    let ledger = CallLog::new();
    let (runtime, _bridge) = counting_runtime();

    {
        let _user = User::new(MockUser::new(ledger.clone()), &runtime).unwrap();
        assert_eq!(runtime.ref_count(), 1);
    }

    assert_eq!(ledger.releases(), 1);
    assert_eq!(runtime.ref_count(), 0);
}

#[test]
fn test_last_login_combines_large_integer() {
    let (runtime, _bridge) = counting_runtime();
    let mock = MockUser {
        last_login: MockLargeInteger {
            high: Ok(0x01D6_DFB8),
            low: Ok(-0x2000_0000),
        },
        ..MockUser::new(CallLog::new())
    };
    let user = User::new(mock, &runtime).unwrap();

    let expected = (0x01D6_DFB8_i64 << 32) | 0xE000_0000_i64;
    assert_eq!(user.last_login(), Ok(expected));
}

#[test]
fn test_last_login_is_a_filetime() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    let raw = user.last_login().unwrap();
    let when = filetime::to_datetime(raw).unwrap();
    assert_eq!(when.year(), 2021);
}

#[test]
fn test_last_login_conversion_failure_propagates() {
    let (runtime, _bridge) = counting_runtime();
    let err = DelegateError::new(DelegateError::E_FAIL, "LowPart unavailable");
    let mock = MockUser {
        last_login: MockLargeInteger {
            high: Ok(1),
            low: Err(err.clone()),
        },
        ..MockUser::new(CallLog::new())
    };
    let user = User::new(mock, &runtime).unwrap();

    assert_eq!(user.last_login(), Err(AdsiError::Delegate(err)));
    assert_eq!(user.last_login().unwrap_or_default(), 0);
}

#[test]
fn test_delegate_errors_pass_through_unchanged() {
    let (runtime, _bridge) = counting_runtime();
    let err = DelegateError::new(0x8007_052E_u32 as i32, "Logon failure");
    let mock = MockUser {
        failure: Some(err.clone()),
        ..MockUser::new(CallLog::new())
    };
    let user = User::new(mock, &runtime).unwrap();

    assert_eq!(user.full_name(), Err(AdsiError::Delegate(err.clone())));
    assert_eq!(user.password_minimum_length(), Err(AdsiError::Delegate(err.clone())));
    assert_eq!(user.get("cn"), Err(AdsiError::Delegate(err)));
    assert!(!user.is_closed());
}

#[test]
fn test_get_returns_variant_unchanged() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    assert_eq!(user.get("sAMAccountName"), Ok(Variant::from("jdoe")));
    assert_eq!(user.get("userAccountControl"), Ok(Variant::Int(512)));
    assert_eq!(
        user.get("memberOf"),
        Ok(Variant::List(vec![
            Variant::from("CN=Staff,DC=example,DC=com"),
            Variant::from("CN=VPN Users,DC=example,DC=com"),
        ]))
    );
}

#[test]
fn test_get_missing_attribute_is_delegate_error() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    let err = user.get("telephoneNumber").unwrap_err();
    assert_eq!(
        err.delegate().map(DelegateError::hresult),
        Some(DelegateError::E_ADS_PROPERTY_NOT_FOUND)
    );
}

#[test]
fn test_get_as_converts() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    let account: String = user.get_as("sAMAccountName").unwrap();
    let uac: i64 = user.get_as("userAccountControl").unwrap();
    let groups: Vec<String> = user.get_as("memberOf").unwrap();

    assert_eq!(account, "jdoe");
    assert_eq!(uac, 512);
    assert_eq!(groups.len(), 2);
    assert!(matches!(
        user.get_as::<bool>("sAMAccountName"),
        Err(AdsiError::TypeMismatch { .. })
    ));
}

#[test]
fn test_base_object_accessors() {
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(CallLog::new()), &runtime).unwrap();

    assert_eq!(user.name(), Ok("CN=Jane Doe".to_string()));
    assert_eq!(user.class(), Ok("user".to_string()));
    assert_eq!(user.ads_path(), Ok(JDOE_PATH.to_string()));
    assert_eq!(user.parent(), Ok("LDAP://OU=Staff,DC=example,DC=com".to_string()));
    assert_eq!(user.schema(), Ok("LDAP://schema/user".to_string()));
    assert!(user.guid().unwrap().starts_with('{'));

    // The object view shares the user's lifetime
    user.close();
    assert!(user.as_object().is_closed());
    assert_eq!(user.as_object().name(), Err(AdsiError::Closed));
}

#[test]
fn test_user_as_guard() {
    let ledger = CallLog::new();
    let (runtime, _bridge) = counting_runtime();
    let user = User::new(MockUser::new(ledger.clone()), &runtime).unwrap();

    let guard: &dyn Guard = &user;
    assert_eq!(guard.resource_type(), "user");
    assert!(guard.is_active());

    guard.release();
    guard.release();
    assert!(!guard.is_active());
    assert_eq!(ledger.releases(), 1);
}
