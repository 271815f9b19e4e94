//! Help/support widget, reachable from any screen via the shell's `support`
//! command.

use super::{ViewCtx, ViewFlow};

pub async fn support_form(ctx: &mut ViewCtx<'_>) -> ViewFlow {
    println!("== Help & support ==");
    let question = match ctx.prompt.line("Your question") {
        Ok(s) => s,
        Err(_) => return ViewFlow::Stay,
    };
    if question.is_empty() {
        println!("Question is required");
        return ViewFlow::Stay;
    }
    // Account linkage is best-effort: the backend accepts anonymous questions.
    match ctx.api.submit_support(&question, None).await {
        Ok(reply) => match reply.support_id {
            Some(id) => println!("Question recorded (#{}), the team will follow up.", id),
            None => println!("{}", reply.message),
        },
        Err(e) => println!("Could not submit question: {}", e.message()),
    }
    ViewFlow::Stay
}
