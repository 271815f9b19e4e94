//! Static screens: home (with role-aware quick links) and about.

use crate::session::{Identity, Role};

use super::{ViewCtx, ViewFlow};

pub fn home(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    let session = ctx.store.get();
    println!("== Legal services portal ==");
    println!("File complaints, follow cases, and search the legal code.");
    match session.identity {
        Identity::Anonymous => {
            println!("Sign in to continue:");
            for role in Role::ALL {
                println!("  /login/{}  (or /signup/{})", role.slug(), role.slug());
            }
        }
        Identity::Civilian { .. } => {
            println!("Hello {}.", session.display_name());
            println!("  /dashboard/civilian  /register-complaint  /complaint-history  /IPCSections");
        }
        Identity::Lawyer { .. } => {
            println!("Hello {}.", session.display_name());
            println!("  /dashboard/lawyer  /lawyerinfo  /caseInfo  /EvidenceReport  /IPCSections");
        }
        Identity::Police { .. } => {
            println!("Hello {}.", session.display_name());
            println!("  /dashboard/police  /policeinfo  /register-complaint  /EvidenceReport");
        }
    }
    println!("Type 'help' for shell commands, '/about' for more.");
    ViewFlow::Stay
}

pub fn about() -> ViewFlow {
    println!("== About ==");
    println!("A single portal for civilians, lawyers, and police:");
    println!("  - civilians file and follow complaints");
    println!("  - lawyers track assigned cases and register court branches");
    println!("  - police register incidents, stations, and case evidence");
    println!("All records live with the portal backend; this terminal is a thin client.");
    ViewFlow::Stay
}
