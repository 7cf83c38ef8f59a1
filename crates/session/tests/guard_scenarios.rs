use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use uuid::Uuid;

use schoolgate_auth::{Claims, Role, RoleClaim, RoleRequirement};
use schoolgate_core::{AccountId, RoutePath, TeacherId};
use schoolgate_nav::{GuardDecision, MenuItem, RouteAccess, RouteRule, RouteTable};
use schoolgate_session::SessionManager;
use schoolgate_store::{FileStore, MemoryStore, SessionStore};

/// Mint a real HS256 token, the same shape the account service issues.
/// The guard layer never verifies the signature, but decoding should be
/// exercised against conventionally encoded tokens, not hand-assembled ones.
fn mint_token(role: RoleClaim, expires_at: DateTime<Utc>) -> String {
    let claims = Claims {
        subject: Some(AccountId::new()),
        role,
        issued_at: Some(expires_at - ChronoDuration::minutes(30)),
        expires_at,
        teacher_id: Some(TeacherId::new()),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("failed to encode jwt")
}

fn school_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteRule::new("/dashboard", RouteAccess::Authenticated),
        RouteRule::new(
            "/staff",
            RouteAccess::Requires(RoleRequirement::Exactly(Role::Principal)),
        ),
        RouteRule::new(
            "/reports",
            RouteAccess::Requires(RoleRequirement::OneOf(vec![
                Role::Principal,
                Role::VicePrincipal,
            ])),
        ),
        RouteRule::new(
            "/grading",
            RouteAccess::Requires(RoleRequirement::OneOf(vec![
                Role::Teacher,
                Role::DepartmentHead,
            ])),
        ),
    ])
}

fn school_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "Trang chủ",
            "icon-dashboard",
            "/dashboard",
            vec![
                Role::Principal,
                Role::VicePrincipal,
                Role::DepartmentHead,
                Role::Teacher,
                Role::ClericalStaff,
                Role::Parent,
                Role::Student,
            ],
        ),
        MenuItem::new(
            "Quản lý nhân sự",
            "icon-staff",
            "/staff",
            vec![Role::Principal],
        ),
        MenuItem::new(
            "Báo cáo",
            "icon-reports",
            "/reports",
            vec![Role::Principal, Role::VicePrincipal],
        ),
        MenuItem::new(
            "Bảng điểm",
            "icon-grading",
            "/grading",
            vec![Role::Teacher, Role::DepartmentHead],
        ),
    ]
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 5, 8, 0, 0).unwrap()
}

#[test]
fn empty_store_redirects_to_login_for_any_guarded_route() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    let table = school_routes();

    let decision = mgr.guard_navigation(&table, &RoutePath::new("/staff"), now());
    assert_eq!(decision, GuardDecision::RedirectToLogin);
    assert_eq!(decision.redirect_target(), Some("/login"));
}

#[test]
fn wrong_role_renders_the_error_page_without_redirecting() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Teacher),
        now() + ChronoDuration::hours(2),
    ));

    let table = school_routes();
    let decision = mgr.guard_navigation(&table, &RoutePath::new("/reports"), now());

    assert_eq!(decision, GuardDecision::RenderNotFound);
    assert_eq!(decision.redirect_target(), None);
    // The session itself is still intact; only its role was insufficient.
    assert!(mgr.authenticate(now()));
}

#[test]
fn matching_role_is_allowed_through() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Teacher),
        now() + ChronoDuration::hours(2),
    ));

    let table = school_routes();
    let decision = mgr.guard_navigation(&table, &RoutePath::new("/grading"), now());
    assert!(decision.is_allowed());
}

#[test]
fn live_session_cannot_reenter_the_login_screen() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Parent),
        now() + ChronoDuration::hours(2),
    ));

    assert_eq!(mgr.guard_login(now()), GuardDecision::RenderNotFound);

    mgr.terminate();
    assert!(mgr.guard_login(now()).is_allowed());
}

#[test]
fn expiry_mid_session_is_caught_on_the_next_navigation() {
    schoolgate_observability::init_with_directives("schoolgate=debug");

    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Teacher),
        now() + ChronoDuration::minutes(10),
    ));
    let table = school_routes();

    let first = mgr.guard_navigation(&table, &RoutePath::new("/grading"), now());
    assert!(first.is_allowed());

    // Ten minutes later the token is past expiry; the very next navigation
    // must redirect and scrub the slot.
    let later = now() + ChronoDuration::minutes(10);
    let second = mgr.guard_navigation(&table, &RoutePath::new("/grading"), later);
    assert_eq!(second, GuardDecision::RedirectToLogin);
    assert_eq!(mgr.store().get(), None);
}

#[test]
fn guard_decisions_are_idempotent_while_state_is_unchanged() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Student),
        now() + ChronoDuration::hours(2),
    ));
    let table = school_routes();

    let first = mgr.guard_navigation(&table, &RoutePath::new("/dashboard"), now());
    let second = mgr.guard_navigation(&table, &RoutePath::new("/dashboard"), now());
    assert_eq!(first, second);
}

#[test]
fn menu_matches_the_session_role() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    let catalog = school_menu();
    let current = RoutePath::new("/grading");

    // No session: empty sidebar.
    assert!(mgr.visible_menu(&catalog, &current, now()).is_empty());

    mgr.establish(&mint_token(
        RoleClaim::Known(Role::Teacher),
        now() + ChronoDuration::hours(2),
    ));

    let entries = mgr.visible_menu(&catalog, &current, now());
    let labels: Vec<&str> = entries.iter().map(|e| e.item.label.as_ref()).collect();
    assert_eq!(labels, ["Trang chủ", "Bảng điểm"]);
    assert!(!entries[0].active);
    assert!(entries[1].active);
}

#[test]
fn unrecognized_role_authenticates_but_sees_and_reaches_nothing() {
    let mut mgr = SessionManager::new(MemoryStore::new());
    mgr.establish(&mint_token(
        RoleClaim::Unrecognized("Quản trị viên".to_string()),
        now() + ChronoDuration::hours(2),
    ));
    let table = school_routes();

    assert!(mgr.authenticate(now()));
    assert!(
        mgr.guard_navigation(&table, &RoutePath::new("/dashboard"), now())
            .is_allowed()
    );
    assert_eq!(
        mgr.guard_navigation(&table, &RoutePath::new("/grading"), now()),
        GuardDecision::RenderNotFound
    );
    assert!(
        mgr.visible_menu(&school_menu(), &RoutePath::new("/dashboard"), now())
            .is_empty()
    );
}

#[test]
fn session_survives_a_reload_through_the_file_store() {
    let path = std::env::temp_dir().join(format!("schoolgate-session-{}.json", Uuid::now_v7()));
    let token = mint_token(
        RoleClaim::Known(Role::ClericalStaff),
        now() + ChronoDuration::hours(2),
    );

    {
        let mut mgr = SessionManager::new(FileStore::open(&path).unwrap());
        mgr.establish(&token);
        assert!(mgr.authenticate(now()));
    }

    // "Reload": a fresh manager over the same file picks the session up.
    let mut mgr = SessionManager::new(FileStore::open(&path).unwrap());
    assert!(mgr.authenticate(now()));
    assert_eq!(
        mgr.current_claims(now()).unwrap().role,
        RoleClaim::Known(Role::ClericalStaff)
    );

    let _ = std::fs::remove_file(&path);
}
