//! Role dashboards. Police and lawyer dashboards list their cases from the
//! backend; the civilian dashboard links onward.

use crate::api::CaseSummary;
use crate::session::{Identity, Role};

use super::table::print_table;
use super::{ViewCtx, ViewFlow};

pub async fn dashboard(role: Role, ctx: &mut ViewCtx<'_>) -> ViewFlow {
    let session = ctx.store.get();
    println!("== {} dashboard ==", role);
    println!("Signed in as {}", session.display_name());

    // The router only renders a dashboard for its own role; the identity
    // match is still exhaustive so a new role cannot be forgotten here.
    match session.identity {
        Identity::Anonymous => {}
        Identity::Civilian { .. } => {
            println!("Quick links: /register-complaint, /complaint-history, /IPCSections, /caseInfo");
        }
        Identity::Lawyer { ref lawyer_id } => match ctx.api.lawyer_cases(lawyer_id).await {
            Ok(bundle) => {
                println!("Assigned cases:");
                print_cases(&bundle.assigned);
            }
            Err(e) => println!("Could not fetch cases: {}", e.message()),
        },
        Identity::Police { ref badge_id } => match ctx.api.police_cases(badge_id).await {
            Ok(bundle) => {
                println!("Assigned cases:");
                print_cases(&bundle.assigned);
                println!("Resolved cases:");
                print_cases(&bundle.resolved);
            }
            Err(e) => println!("Could not fetch cases: {}", e.message()),
        },
    }
    ViewFlow::Stay
}

pub(super) fn print_cases(cases: &[CaseSummary]) {
    if cases.is_empty() {
        println!("  (none)");
        return;
    }
    print_table(&["case id", "title", "description", "lawyer"], &case_rows(cases));
}

pub(super) fn case_rows(cases: &[CaseSummary]) -> Vec<Vec<String>> {
    cases
        .iter()
        .map(|c| {
            vec![
                c.case_id.to_string(),
                c.title.clone(),
                c.description.clone(),
                c.lawyer_id.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_rows_shape() {
        let cases = vec![CaseSummary {
            case_id: 12,
            title: "Case: A - 2026-08-01".into(),
            description: "stolen bicycle".into(),
            lawyer_id: Some("BAR-9".into()),
        }];
        let rows = case_rows(&cases);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "12");
        assert_eq!(rows[0][3], "BAR-9");
    }
}
