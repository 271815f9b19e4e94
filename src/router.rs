//! Path-to-view resolution. The router owns the static descriptor table,
//! consults the access gate for protected descriptors, and reduces every
//! navigation to a pure `Resolution` value; the shell performs the effects
//! (rendering, redirect following, history bookkeeping).

use tracing::debug;

use crate::gate::can_access;
use crate::session::{Role, Session};

/// Where denied navigations land. History is replaced, not pushed, so the
/// user cannot bounce back into the redirect.
pub const LOGIN_PATH: &str = "/login/civilian";

/// Every screen the portal can render. Closed set: the shell matches this
/// exhaustively, so a screen without a renderer is a compile error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Login(Role),
    Signup(Role),
    Dashboard(Role),
    RegisterComplaint,
    ComplaintHistory,
    CaseInfo,
    EvidenceReport,
    SectionsTable,
    LawyerDirectory,
    PoliceDirectory,
    /// Dynamic legal-topic page; the captured segment seeds the search.
    LawTopic,
}

/// Access requirement attached to a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    /// Any authenticated role.
    Authenticated,
    /// Authenticated and role-matched.
    RoleOnly(Role),
}

impl Guard {
    fn required_role(&self) -> Option<Role> {
        match self {
            Guard::Public | Guard::Authenticated => None,
            Guard::RoleOnly(r) => Some(*r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern: literal segments match exactly, one `{name}`
/// segment captures a single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(name) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Segment::Param(name.to_string())
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path, returning captured params on success.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let parts: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = Vec::new();
        for (seg, part) in self.segments.iter().zip(parts.iter()) {
            match seg {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.push((name.clone(), (*part).to_string())),
            }
        }
        Some(params)
    }
}

/// Static metadata binding a path pattern to a screen and its guard.
#[derive(Debug, Clone)]
pub struct ViewDescriptor {
    pub pattern: RoutePattern,
    pub guard: Guard,
    pub view: View,
}

/// Outcome of one navigation event. `Redirect { replace: true }` replaces the
/// current history entry so back-navigation cannot loop through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render { view: View, params: Vec<(String, String)> },
    Redirect { to: String, replace: bool },
    NotFound,
}

pub struct Router {
    routes: Vec<ViewDescriptor>,
}

impl Router {
    pub fn new(routes: Vec<ViewDescriptor>) -> Self { Self { routes } }

    /// The portal route table. Order matters: literal routes come first and
    /// the `{topic}` wildcard sits last, so named screens always win.
    pub fn with_default_routes() -> Self {
        let mut routes: Vec<ViewDescriptor> = vec![
            route("/", Guard::Public, View::Home),
            route("/home", Guard::Public, View::Home),
            route("/about", Guard::Public, View::About),
        ];
        for role in Role::ALL {
            routes.push(route(&format!("/login/{}", role.slug()), Guard::Public, View::Login(role)));
            routes.push(route(&format!("/signup/{}", role.slug()), Guard::Public, View::Signup(role)));
            routes.push(route(
                &format!("/dashboard/{}", role.slug()),
                Guard::RoleOnly(role),
                View::Dashboard(role),
            ));
        }
        routes.push(route("/register-complaint", Guard::Authenticated, View::RegisterComplaint));
        routes.push(route("/complaint-history", Guard::Authenticated, View::ComplaintHistory));
        routes.push(route("/IPCSections", Guard::Authenticated, View::SectionsTable));
        routes.push(route("/caseInfo", Guard::Authenticated, View::CaseInfo));
        routes.push(route("/EvidenceReport", Guard::Authenticated, View::EvidenceReport));
        routes.push(route("/lawyerinfo", Guard::Authenticated, View::LawyerDirectory));
        routes.push(route("/policeinfo", Guard::Authenticated, View::PoliceDirectory));
        routes.push(route("/{topic}", Guard::Authenticated, View::LawTopic));
        Self::new(routes)
    }

    /// Resolve one navigation event against the current session. First
    /// matching descriptor wins; a failed gate resolves to the login
    /// redirect; no match is the explicit not-found terminal state.
    pub fn resolve(&self, path: &str, session: &Session) -> Resolution {
        for desc in &self.routes {
            let Some(params) = desc.pattern.matches(path) else { continue };
            match desc.guard {
                Guard::Public => {}
                Guard::Authenticated | Guard::RoleOnly(_) => {
                    if !can_access(session, desc.guard.required_role()) {
                        debug!(path, "gate denied, redirecting to login");
                        return Resolution::Redirect { to: LOGIN_PATH.to_string(), replace: true };
                    }
                }
            }
            return Resolution::Render { view: desc.view.clone(), params };
        }
        Resolution::NotFound
    }
}

fn route(pattern: &str, guard: Guard, view: View) -> ViewDescriptor {
    ViewDescriptor { pattern: RoutePattern::parse(pattern), guard, view }
}
