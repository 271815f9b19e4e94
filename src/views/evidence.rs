//! Evidence upload and per-case evidence listing.

use std::path::PathBuf;

use crate::api::EvidenceSubmitter;
use crate::session::Identity;

use super::validation::{allowed_evidence_file, ALLOWED_EVIDENCE_EXTENSIONS};
use super::{ViewCtx, ViewFlow};

pub async fn evidence_report_form(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Evidence report ==");
    let session = ctx.store.get();
    // The backend accepts police and lawyer submitters only; refuse the rest
    // locally with the same outcome it would return.
    let submitter = match session.identity {
        Identity::Police { ref badge_id } => EvidenceSubmitter::Police { badge_id: badge_id.clone() },
        Identity::Lawyer { ref lawyer_id } => EvidenceSubmitter::Lawyer { lawyer_id: lawyer_id.clone() },
        Identity::Civilian { .. } | Identity::Anonymous => {
            println!("Invalid submitter type");
            return ViewFlow::Stay;
        }
    };

    let case_id = match ctx.prompt.line("Case id") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let Ok(case_id) = case_id.parse::<i64>() else {
        println!("Complaint ID must be numeric");
        return ViewFlow::Stay;
    };
    let file = match ctx.prompt.line("Evidence file path") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    if file.is_empty() {
        println!("No selected file");
        return ViewFlow::Stay;
    }
    if !allowed_evidence_file(&file) {
        println!(
            "File type not allowed. Allowed types: {}",
            ALLOWED_EVIDENCE_EXTENSIONS.join(", ")
        );
        return ViewFlow::Stay;
    }

    match ctx.api.submit_evidence(case_id, &submitter, &PathBuf::from(&file)).await {
        Ok(reply) => {
            println!("{}", reply.message);
            println!("  {}", reply.evidence.details);
        }
        Err(e) => println!("{}", e.message()),
    }
    ViewFlow::Stay
}
