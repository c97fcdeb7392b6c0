use radsafe_core::service::auth_service::{AuthError, AuthService};
use radsafe_core::store::{EntityStore, StoreError};
use radsafe_core::{ProfileUpdate, User, UserRole};

#[test]
fn login_requires_exact_credential_match() {
    let store = EntityStore::open_in_memory().unwrap();

    let user = store.login("admin", "admin123").unwrap();
    assert_eq!(user.role, UserRole::Admin);

    assert!(matches!(
        store.login("admin", "wrong").unwrap_err(),
        StoreError::Credentials
    ));
    assert!(matches!(
        store.login("Admin", "admin123").unwrap_err(),
        StoreError::Credentials
    ));
    assert!(matches!(
        store.login("nobody", "admin123").unwrap_err(),
        StoreError::Credentials
    ));
}

#[test]
fn session_tracks_login_and_logout() {
    let store = EntityStore::open_in_memory().unwrap();
    let mut auth = AuthService::new();

    assert!(auth.current_user().is_none());
    auth.login(&store, "admin", "admin123").unwrap();
    assert_eq!(auth.current_user().unwrap().username, "admin");

    // A failed login must not clear the active session.
    let err = auth.login(&store, "admin", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::Store(StoreError::Credentials)));
    assert!(auth.current_user().is_some());

    auth.logout();
    assert!(auth.current_user().is_none());
}

#[test]
fn profile_update_merges_only_provided_fields() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let mut auth = AuthService::new();
    auth.login(&store, "admin", "admin123").unwrap();

    let before_email = auth.current_user().unwrap().email.clone();
    let updated = auth
        .update_profile(
            &mut store,
            &ProfileUpdate {
                full_name: Some("Nguyễn Quản Trị".to_string()),
                email: None,
            },
        )
        .unwrap();

    assert_eq!(updated.full_name, "Nguyễn Quản Trị");
    assert_eq!(updated.email, before_email);

    // The merge is persisted on the user record, not just the session.
    let stored = store.get::<User>(&updated.id).unwrap();
    assert_eq!(stored.full_name, "Nguyễn Quản Trị");
}

#[test]
fn profile_update_without_session_is_rejected() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let mut auth = AuthService::new();

    let err = auth
        .update_profile(&mut store, &ProfileUpdate::default())
        .unwrap_err();
    assert!(matches!(err, AuthError::NotLoggedIn));
}

#[test]
fn change_password_checks_current_and_confirmation() {
    let mut store = EntityStore::open_in_memory().unwrap();
    let mut auth = AuthService::new();
    auth.login(&store, "admin", "admin123").unwrap();

    let err = auth
        .change_password(&mut store, "admin123", "newpass", "different")
        .unwrap_err();
    assert!(matches!(err, AuthError::ConfirmationMismatch));

    let err = auth
        .change_password(&mut store, "not-current", "newpass", "newpass")
        .unwrap_err();
    assert!(matches!(err, AuthError::Store(StoreError::PasswordMismatch)));

    auth.change_password(&mut store, "admin123", "newpass", "newpass")
        .unwrap();

    assert!(matches!(
        store.login("admin", "admin123").unwrap_err(),
        StoreError::Credentials
    ));
    store.login("admin", "newpass").unwrap();
}
