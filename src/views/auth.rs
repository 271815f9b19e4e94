//! Login and signup forms, one per role.

use tracing::info;

use crate::session::{Identity, Role, Session};

use super::validation::{valid_badge_id, valid_email, valid_phone};
use super::{ViewCtx, ViewFlow};

pub async fn login_form(role: Role, ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== {} login ==", role);
    let id_or_username = match ctx.prompt.line("Id or username") {
        Ok(s) => s,
        Err(e) => return input_aborted(e),
    };
    let password = match ctx.prompt.line("Password") {
        Ok(s) => s,
        Err(e) => return input_aborted(e),
    };
    if id_or_username.is_empty() || password.is_empty() {
        println!("Please fill in all required fields");
        return ViewFlow::Stay;
    }

    match ctx.api.login(role, &id_or_username, &password).await {
        Ok(reply) => {
            let identity = match role {
                // The backend returns the civilian id; the badge id comes back
                // as a string; lawyers log in with the bar id itself.
                Role::Civilian => Identity::Civilian {
                    civilian_id: reply
                        .civilian_id
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| id_or_username.clone()),
                },
                Role::Lawyer => Identity::Lawyer { lawyer_id: id_or_username.clone() },
                Role::Police => Identity::Police {
                    badge_id: reply.badge_id.clone().unwrap_or_else(|| id_or_username.clone()),
                },
            };
            // The store write happens before any navigation so the dashboard
            // gate never sees a stale session.
            ctx.store.set(Session::new(identity, id_or_username));
            info!(role = %role, "login ok");
            println!("{}", if reply.message.is_empty() { "Login successful" } else { reply.message.as_str() });
            ViewFlow::Goto(format!("/dashboard/{}", role.slug()))
        }
        Err(e) => {
            println!("{}", e.message());
            if e.is_user_fixable() {
                println!("No account yet? Try /signup/{}", role.slug());
            }
            ViewFlow::Stay
        }
    }
}

pub async fn signup_form(role: Role, ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== {} signup ==", role);
    match role {
        Role::Civilian => civilian_signup(ctx).await,
        Role::Lawyer | Role::Police => id_signup(role, ctx).await,
    }
}

async fn civilian_signup(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    let (username, phoneno, password) = match (
        ctx.prompt.line("Username"),
        ctx.prompt.line("Phone number"),
        ctx.prompt.line("Password"),
    ) {
        (Ok(u), Ok(ph), Ok(pw)) => (u, ph, pw),
        _ => return ViewFlow::Stay,
    };
    if username.is_empty() || password.is_empty() {
        println!("Username and Password required");
        return ViewFlow::Stay;
    }
    match ctx.api.signup_civilian(&username, &phoneno, &password).await {
        Ok(reply) => {
            println!("{}", reply.message);
            ViewFlow::Goto("/login/civilian".to_string())
        }
        Err(e) => {
            println!("{}", e.message());
            ViewFlow::Stay
        }
    }
}

async fn id_signup(role: Role, ctx: &mut ViewCtx<'_>) -> ViewFlow {
    let id_label = match role {
        Role::Lawyer => "Bar id",
        Role::Police => "Badge id",
        Role::Civilian => unreachable!("civilian signup handled separately"),
    };
    let (id, email, phoneno, password) = match (
        ctx.prompt.line(id_label),
        ctx.prompt.line("Email"),
        ctx.prompt.line("Phone number"),
        ctx.prompt.line("Password"),
    ) {
        (Ok(i), Ok(e), Ok(ph), Ok(pw)) => (i, e, ph, pw),
        _ => return ViewFlow::Stay,
    };
    if id.is_empty() || email.is_empty() || phoneno.is_empty() || password.is_empty() {
        println!("All fields are required");
        return ViewFlow::Stay;
    }
    if !valid_phone(&phoneno) {
        println!("Phone number must be a 10-digit number");
        return ViewFlow::Stay;
    }
    if !valid_email(&email) {
        println!("Please enter a valid email address");
        return ViewFlow::Stay;
    }
    if role == Role::Police && !valid_badge_id(&id) {
        println!("Badge ID must be a positive number");
        return ViewFlow::Stay;
    }
    match ctx.api.signup_with_id(role, &id, &email, &phoneno, &password).await {
        Ok(reply) => {
            println!("{}", reply.message);
            ViewFlow::Goto(format!("/login/{}", role.slug()))
        }
        Err(e) => {
            println!("{}", e.message());
            ViewFlow::Stay
        }
    }
}

fn input_aborted(e: crate::error::PortalError) -> ViewFlow {
    println!("input aborted: {}", e.message());
    ViewFlow::Stay
}
