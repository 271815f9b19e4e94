//!
//! Portal screens
//! --------------
//! One form per navigable view. Forms read their fields from a `Prompt`
//! source (stdin in the binary, scripted lines in tests), validate locally,
//! call the API client, and report outcomes inline. Only the login form
//! mutates the session store, and it does so before returning its navigation
//! request, so the router never gates against a stale session.

mod auth;
mod complaints;
mod dashboard;
mod directory;
mod evidence;
mod reference;
mod statics;
mod support;
mod table;
pub mod validation;

pub use support::support_form;
pub use table::print_table;

use std::collections::VecDeque;
use std::io::Write;

use crate::api::ApiClient;
use crate::error::{PortalError, PortalResult};
use crate::router::View;
use crate::session::SessionStore;

/// Where the shell should go after a view finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFlow {
    Stay,
    Goto(String),
}

/// Line-oriented form input. Labels are prompts; answers come back trimmed.
pub trait Prompt {
    fn line(&mut self, label: &str) -> PortalResult<String>;

    /// Optional-field convention: an empty answer is `None`.
    fn optional(&mut self, label: &str) -> PortalResult<Option<String>> {
        let s = self.line(label)?;
        Ok(if s.is_empty() { None } else { Some(s) })
    }
}

/// Interactive prompt reading from stdin.
#[derive(Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn line(&mut self, label: &str) -> PortalResult<String> {
        print!("{}: ", label);
        std::io::stdout().flush()?;
        let mut buf = String::new();
        std::io::stdin().read_line(&mut buf)?;
        Ok(buf.trim().to_string())
    }
}

/// Scripted prompt for driving forms in tests.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(answers: I) -> Self {
        Self { answers: answers.into_iter().map(Into::into).collect() }
    }
}

impl Prompt for ScriptedPrompt {
    fn line(&mut self, _label: &str) -> PortalResult<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| PortalError::internal("script_exhausted", "scripted prompt ran out of answers"))
    }
}

/// Everything a form needs: backend access, the session store, and input.
pub struct ViewCtx<'a> {
    pub api: &'a ApiClient,
    pub store: &'a SessionStore,
    pub prompt: &'a mut dyn Prompt,
}

/// Render one resolved view. Exhaustive over `View`, so adding a screen
/// without a renderer fails to compile.
pub async fn render(view: &View, params: &[(String, String)], ctx: &mut ViewCtx<'_>) -> ViewFlow {
    match view {
        View::Home => statics::home(ctx),
        View::About => statics::about(),
        View::Login(role) => auth::login_form(*role, ctx).await,
        View::Signup(role) => auth::signup_form(*role, ctx).await,
        View::Dashboard(role) => dashboard::dashboard(*role, ctx).await,
        View::RegisterComplaint => complaints::register_complaint_form(ctx).await,
        View::ComplaintHistory => complaints::complaint_history(ctx).await,
        View::CaseInfo => complaints::case_info(ctx).await,
        View::EvidenceReport => evidence::evidence_report_form(ctx).await,
        View::SectionsTable => reference::sections_table(None, ctx).await,
        View::LawyerDirectory => directory::lawyer_info_form(ctx).await,
        View::PoliceDirectory => directory::police_info_form(ctx).await,
        View::LawTopic => {
            let topic = params.iter().find(|(k, _)| k == "topic").map(|(_, v)| v.clone());
            reference::sections_table(topic, ctx).await
        }
    }
}
