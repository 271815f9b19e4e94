//! Lawyer and police directory registration forms.

use crate::api::{LawyerInfoDraft, PoliceInfoDraft};

use super::{ViewCtx, ViewFlow};

pub async fn lawyer_info_form(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Lawyer court registration ==");
    let bar_id = match ctx.prompt.line("Bar id") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let branch_name = match ctx.prompt.line("Branch") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let state = match ctx.prompt.line("State") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let court_location = ctx.prompt.optional("Court location").unwrap_or_default();
    let judiciary = ctx.prompt.optional("Judiciary").unwrap_or_default();
    let judiciary_id = ctx.prompt.optional("Judiciary id").unwrap_or_default();

    if bar_id.is_empty() || state.is_empty() {
        println!("Bar ID and State are required");
        return ViewFlow::Stay;
    }

    let draft = LawyerInfoDraft { bar_id, branch_name, state, court_location, judiciary, judiciary_id };
    match ctx.api.register_lawyer_info(&draft).await {
        Ok(reply) => println!("{}", reply.message),
        Err(e) => println!("{}", e.message()),
    }
    ViewFlow::Stay
}

pub async fn police_info_form(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Police station registration ==");
    let state = match ctx.prompt.line("State") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let pin_code = match ctx.prompt.line("Pin code") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let station_number = match ctx.prompt.line("Station number") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let station_location = match ctx.prompt.line("Station location") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    let police_id = match ctx.prompt.line("Police id") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };

    if state.is_empty() || pin_code.is_empty() || station_number.is_empty()
        || station_location.is_empty() || police_id.is_empty()
    {
        println!("All fields are required");
        return ViewFlow::Stay;
    }
    if pin_code.parse::<i64>().is_err() || station_number.parse::<i64>().is_err() {
        println!("Pin Code and Station Number must be numeric");
        return ViewFlow::Stay;
    }

    let draft = PoliceInfoDraft { state, pin_code, station_number, station_location, police_id };
    match ctx.api.register_police_info(&draft).await {
        Ok(reply) => println!("{}", reply.message),
        Err(e) => println!("{}", e.message()),
    }
    ViewFlow::Stay
}
