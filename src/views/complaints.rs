//! Complaint registration, complaint history, and case detail screens.

use chrono::Utc;

use crate::api::ComplaintDraft;
use crate::session::Identity;

use super::dashboard::print_cases;
use super::{ViewCtx, ViewFlow};

pub async fn register_complaint_form(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Register complaint ==");
    let name = ctx.prompt.optional("Reporter name").unwrap_or_default();
    let email = ctx.prompt.optional("Reporter email").unwrap_or_default();
    let phone = ctx.prompt.optional("Reporter phone").unwrap_or_default();
    let description = match ctx.prompt.line("Description") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let location = match ctx.prompt.line("Location") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let address = ctx.prompt.optional("Address").unwrap_or_default();
    let incident_date = match ctx.prompt.line("Incident date (YYYY-MM-DD)") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };

    if description.is_empty() || location.is_empty() || incident_date.is_empty() {
        println!("Description, location, and incident date are required");
        return ViewFlow::Stay;
    }

    let session = ctx.store.get();
    let badge_id = match session.identity {
        Identity::Police { ref badge_id } => Some(badge_id.clone()),
        _ => None,
    };

    let draft = ComplaintDraft {
        badge_id,
        name,
        email,
        phone,
        description,
        location,
        address,
        incident_date,
        timestamp: Utc::now().to_rfc3339(),
    };
    match ctx.api.register_complaint(&draft).await {
        Ok(reply) => {
            println!("{}", reply.message);
            println!(
                "incident #{} filed as case #{} (lawyer {})",
                reply.incident_id,
                reply.case_id,
                reply.lawyer_id.as_deref().unwrap_or("unassigned")
            );
        }
        Err(e) => println!("{}", e.message()),
    }
    ViewFlow::Stay
}

pub async fn complaint_history(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Complaint history ==");
    let session = ctx.store.get();
    match session.identity {
        Identity::Anonymous => {}
        Identity::Civilian { .. } => {
            // The backend has no civilian-scoped case listing; point at the
            // per-case evidence view instead.
            println!("Look up a specific case under /caseInfo.");
        }
        Identity::Lawyer { ref lawyer_id } => match ctx.api.lawyer_cases(lawyer_id).await {
            Ok(bundle) => print_cases(&bundle.assigned),
            Err(e) => println!("Could not fetch cases: {}", e.message()),
        },
        Identity::Police { ref badge_id } => match ctx.api.police_cases(badge_id).await {
            Ok(bundle) => {
                println!("Assigned:");
                print_cases(&bundle.assigned);
                println!("Resolved:");
                print_cases(&bundle.resolved);
            }
            Err(e) => println!("Could not fetch cases: {}", e.message()),
        },
    }
    ViewFlow::Stay
}

pub async fn case_info(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Case info ==");
    let case_id = match ctx.prompt.line("Case id") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let Ok(case_id) = case_id.parse::<i64>() else {
        println!("Case id must be numeric");
        return ViewFlow::Stay;
    };
    match ctx.api.evidence_for_case(case_id).await {
        Ok(records) if records.is_empty() => println!("No evidence recorded for case {}", case_id),
        Ok(records) => {
            for r in records {
                println!("  [{}] {} ({} on {})", r.evidence_id, r.details, r.submitter_type, r.upload_date);
            }
        }
        Err(e) => println!("{}", e.message()),
    }
    ViewFlow::Stay
}
