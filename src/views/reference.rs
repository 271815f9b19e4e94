//! Legal-code reference search. Renders matching sections as a table; an
//! empty query lists the whole table. A `{topic}` path segment seeds the
//! first query so `/theft` opens already searched.

use crate::api::SectionRow;

use super::table::print_table;
use super::{ViewCtx, ViewFlow};

pub async fn sections_table(seed: Option<String>, ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Legal sections ==");
    let query = match seed {
        Some(topic) => topic.replace('-', " "),
        None => match ctx.prompt.line("Search (empty lists everything)") {
            Ok(s) => s,
            Err(_) => return ViewFlow::Stay,
        },
    };
    match ctx.api.search_sections(&query).await {
        Ok(rows) if rows.is_empty() => println!("No sections matched '{}'", query),
        Ok(rows) => print_table(&["Section", "Offense", "Punishment"], &section_rows(&rows)),
        Err(e) => println!("Search failed: {}", e.message()),
    }
    ViewFlow::Stay
}

fn section_rows(rows: &[SectionRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| vec![r.section.clone(), r.offense.clone(), r.punishment.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_rows_order() {
        let rows = vec![SectionRow {
            section: "378".into(),
            offense: "Theft".into(),
            punishment: "3 years".into(),
        }];
        assert_eq!(section_rows(&rows), vec![vec![
            "378".to_string(),
            "Theft".to_string(),
            "3 years".to_string(),
        ]]);
    }
}
