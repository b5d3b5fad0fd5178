//! Authentication and permission-matrix tests through the facade.

use radiolog::prelude::*;
use std::sync::Arc;

fn full_control(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Commander | Role::ExO | Role::S6)
}

fn default_account(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Admin => ("admin", "admin123"),
        Role::Commander => ("commander", "cmd123"),
        Role::ExO => ("exo", "exo123"),
        Role::S1 => ("s1", "s1pass"),
        Role::S2 => ("s2", "s2pass"),
        Role::S3 => ("s3", "s3pass"),
        Role::S4 => ("s4", "s4pass"),
        Role::S5 => ("s5", "s5pass"),
        Role::S6 => ("s6", "s6pass"),
        Role::S7 => ("s7", "s7pass"),
        Role::Hq => ("hq", "hqpass"),
    }
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn login_accepts_sloppy_usernames_but_exact_passwords() {
    let log = RadioLog::in_memory();

    let session = log.login("ADMIN  ", "admin123").unwrap();
    assert_eq!(session.role(), Role::Admin);

    assert!(log.login("admin", "wrong").unwrap_err().is_auth_failure());
    assert!(log.login("admin", "admin123 ").unwrap_err().is_auth_failure());
}

#[test]
fn login_failure_is_uniform() {
    let log = RadioLog::in_memory();
    let unknown_user = log.login("nobody", "admin123").unwrap_err();
    let wrong_password = log.login("admin", "nope").unwrap_err();
    assert_eq!(unknown_user, wrong_password);
}

#[test]
fn every_default_account_logs_into_its_role() {
    let log = RadioLog::in_memory();
    for role in Role::ALL {
        let (user, pass) = default_account(role);
        let session = log.login(user, pass).unwrap();
        assert_eq!(session.role(), role, "account {user}");
    }
}

// ============================================================================
// Permission matrix
// ============================================================================

#[test]
fn upload_is_admin_only_and_denied_uploads_touch_nothing() {
    let log = RadioLog::in_memory();
    let mut admin = log.login("admin", "admin123").unwrap();
    log.upload(&mut admin, "Alice", "seed", Section::S1).unwrap();

    for role in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
        let (user, pass) = default_account(role);
        let mut session = log.login(user, pass).unwrap();

        let err = log.upload(&mut session, "Mallory", "sneak", Section::S1).unwrap_err();
        assert!(err.is_forbidden(), "{role} must not upload");
        assert_eq!(session.unseen(), 0);
    }

    assert_eq!(log.list(&admin).unwrap().len(), 1, "denied uploads never reach the store");
}

#[test]
fn full_control_gates_edit_delete_export() {
    let log = RadioLog::in_memory();
    let mut admin = log.login("admin", "admin123").unwrap();
    log.upload(&mut admin, "Alice", "seed", Section::S1).unwrap();

    for role in Role::ALL {
        let (user, pass) = default_account(role);
        let session = log.login(user, pass).unwrap();

        let edit = log.edit_comment(&session, 1, "edited");
        let export = log.export(&session);
        if full_control(role) {
            edit.unwrap();
            export.unwrap();
        } else {
            assert!(edit.unwrap_err().is_forbidden(), "{role} must not edit comments");
            assert!(export.unwrap_err().is_forbidden(), "{role} must not export");
            assert!(
                log.delete(&session, 1).unwrap_err().is_forbidden(),
                "{role} must not delete"
            );
        }
    }

    // The message survived every denied delete.
    assert_eq!(log.list(&admin).unwrap().len(), 1);
}

#[test]
fn view_status_and_comment_are_open_to_all_roles() {
    let log = RadioLog::in_memory();
    let mut admin = log.login("admin", "admin123").unwrap();
    log.upload(&mut admin, "Alice", "seed", Section::S1).unwrap();

    for role in Role::ALL {
        let (user, pass) = default_account(role);
        let session = log.login(user, pass).unwrap();

        log.list(&session).unwrap();
        log.unresolved_by_section(&session).unwrap();
        log.update_status(&session, 1, Status::ActionOngoing).unwrap();
        log.add_comment(&session, 1, "checking in").unwrap();
    }

    let comment = &log.list(&admin).unwrap()[0].comment;
    assert_eq!(comment.lines().count(), Role::ALL.len(), "one comment entry per role");
    assert!(comment.starts_with("[Admin] checking in"));
}

#[test]
fn no_per_section_scoping() {
    let log = RadioLog::in_memory();
    let mut admin = log.login("admin", "admin123").unwrap();
    log.upload(&mut admin, "Alice", "for S4", Section::S4).unwrap();

    // S1 may freely mutate an S4 message; trust is flat.
    let s1 = log.login("s1", "s1pass").unwrap();
    log.update_status(&s1, 1, Status::Completed).unwrap();
    log.add_comment(&s1, 1, "handled it anyway").unwrap();
}

// ============================================================================
// Pluggable credential stores
// ============================================================================

#[test]
fn custom_static_table_replaces_the_defaults() {
    let log = RadioLog::builder()
        .static_credentials(
            StaticCredentials::new().with_user("duty", "secret", Role::Hq),
        )
        .build();

    assert_eq!(log.login("DUTY", "secret").unwrap().role(), Role::Hq);
    assert!(log.login("admin", "admin123").unwrap_err().is_auth_failure());
}

/// A credential backend that accepts exactly one hard-wired identity, as an
/// external provider integration would.
struct SingleUser;

impl CredentialStore for SingleUser {
    fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        (username.trim().eq_ignore_ascii_case("watchkeeper") && password == "on-duty")
            .then_some(Role::Commander)
    }
}

#[test]
fn credential_backends_are_injectable() {
    let log = RadioLog::builder().credentials(Arc::new(SingleUser)).build();
    assert_eq!(log.login("Watchkeeper", "on-duty").unwrap().role(), Role::Commander);
    assert!(log.login("watchkeeper", "off-duty").unwrap_err().is_auth_failure());
}
