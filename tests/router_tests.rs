//! Router resolution tests: protected paths redirect unauthenticated
//! sessions to the civilian login with history replacement, role-matched
//! dashboards render only for their role, the topic wildcard captures one
//! segment, and unknown paths land in the explicit not-found state.

use lexportal::router::{Resolution, Router, View, LOGIN_PATH};
use lexportal::session::{Identity, Role, Session};

fn police() -> Session {
    Session::new(Identity::Police { badge_id: "B123".into() }, "officer1")
}

fn civilian() -> Session {
    Session::new(Identity::Civilian { civilian_id: "7".into() }, "asha")
}

fn assert_redirects_to_login(res: Resolution) {
    match res {
        Resolution::Redirect { to, replace } => {
            assert_eq!(to, LOGIN_PATH);
            assert!(replace, "gate redirects must replace history");
        }
        other => panic!("expected login redirect, got {:?}", other),
    }
}

#[test]
fn anonymous_is_redirected_from_every_protected_path() {
    let router = Router::with_default_routes();
    let anon = Session::anonymous();
    for path in [
        "/dashboard/civilian",
        "/dashboard/lawyer",
        "/dashboard/police",
        "/register-complaint",
        "/complaint-history",
        "/IPCSections",
        "/caseInfo",
        "/EvidenceReport",
        "/lawyerinfo",
        "/policeinfo",
        "/criminal-law",
    ] {
        assert_redirects_to_login(router.resolve(path, &anon));
    }
}

#[test]
fn scenario_anonymous_to_police_dashboard_redirects() {
    let router = Router::with_default_routes();
    assert_redirects_to_login(router.resolve("/dashboard/police", &Session::anonymous()));
}

#[test]
fn scenario_police_session_renders_police_dashboard() {
    let router = Router::with_default_routes();
    match router.resolve("/dashboard/police", &police()) {
        Resolution::Render { view, .. } => assert_eq!(view, View::Dashboard(Role::Police)),
        other => panic!("expected render, got {:?}", other),
    }
}

#[test]
fn scenario_role_mismatch_redirects() {
    let router = Router::with_default_routes();
    assert_redirects_to_login(router.resolve("/dashboard/lawyer", &civilian()));
}

#[test]
fn public_paths_render_for_anonymous_sessions() {
    let router = Router::with_default_routes();
    let anon = Session::anonymous();
    for (path, view) in [
        ("/", View::Home),
        ("/home", View::Home),
        ("/about", View::About),
        ("/login/civilian", View::Login(Role::Civilian)),
        ("/login/police", View::Login(Role::Police)),
        ("/signup/lawyer", View::Signup(Role::Lawyer)),
    ] {
        match router.resolve(path, &anon) {
            Resolution::Render { view: v, .. } => assert_eq!(v, view, "path {}", path),
            other => panic!("expected {} to render, got {:?}", path, other),
        }
    }
}

#[test]
fn redirect_target_always_resolves_to_the_login_form() {
    // The second hop of the state machine: Redirecting leads to a new
    // Resolving that must terminate at a render.
    let router = Router::with_default_routes();
    let anon = Session::anonymous();
    let Resolution::Redirect { to, .. } = router.resolve("/EvidenceReport", &anon) else {
        panic!("expected redirect");
    };
    match router.resolve(&to, &anon) {
        Resolution::Render { view, .. } => assert_eq!(view, View::Login(Role::Civilian)),
        other => panic!("login path must render for anonymous sessions, got {:?}", other),
    }
}

#[test]
fn topic_wildcard_captures_one_segment_for_authenticated_sessions() {
    let router = Router::with_default_routes();
    match router.resolve("/criminal-law", &civilian()) {
        Resolution::Render { view, params } => {
            assert_eq!(view, View::LawTopic);
            assert_eq!(params, vec![("topic".to_string(), "criminal-law".to_string())]);
        }
        other => panic!("expected topic render, got {:?}", other),
    }
}

#[test]
fn literal_routes_win_over_the_wildcard() {
    let router = Router::with_default_routes();
    // `/about` also matches `/{topic}`; the literal must win even though the
    // session could pass the wildcard's gate.
    match router.resolve("/about", &civilian()) {
        Resolution::Render { view, params } => {
            assert_eq!(view, View::About);
            assert!(params.is_empty());
        }
        other => panic!("expected about, got {:?}", other),
    }
}

#[test]
fn unknown_paths_are_not_found_not_redirected() {
    let router = Router::with_default_routes();
    assert_eq!(router.resolve("/no/such/screen", &civilian()), Resolution::NotFound);
    assert_eq!(router.resolve("/a/b/c/d", &Session::anonymous()), Resolution::NotFound);
}
