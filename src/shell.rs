//!
//! Navigation shell
//! ----------------
//! The single-threaded event loop of the portal. Reads commands and paths
//! from stdin, resolves paths through the router, and performs the effects a
//! resolution asks for: rendering the view, following a redirect, or
//! reporting the not-found state. All session mutations happen between
//! stdin reads, so gate checks never race a login.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config::PortalConfig;
use crate::router::{Resolution, Router, LOGIN_PATH};
use crate::session::SessionStore;
use crate::views::{self, Prompt, StdinPrompt, ViewCtx, ViewFlow};

/// Bound on gate-redirect chains per navigation event. A correct route table
/// resolves in two hops (denied path, then the public login path).
const MAX_REDIRECTS: usize = 8;

/// Rendered-path history. Denied paths are never recorded: the login entry
/// takes the slot the denied path would have taken, so `back` cannot loop
/// through the gate.
#[derive(Debug, Default)]
pub struct NavHistory {
    entries: Vec<String>,
}

impl NavHistory {
    pub fn push(&mut self, path: &str) {
        if self.entries.last().map(|s| s.as_str()) != Some(path) {
            self.entries.push(path.to_string());
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(|s| s.as_str())
    }

    /// Step back one entry, returning the path to re-resolve. Re-resolving
    /// runs the gate again, so a stale entry can still redirect.
    pub fn back(&mut self) -> Option<String> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.entries.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct Shell {
    router: Router,
    api: ApiClient,
    store: SessionStore,
    history: NavHistory,
}

impl Shell {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let api = ApiClient::new(&config.api_url, config.http_timeout)?;
        let store = SessionStore::open(config.session_file());
        Ok(Self {
            router: Router::with_default_routes(),
            api,
            store,
            history: NavHistory::default(),
        })
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn history(&self) -> &NavHistory {
        &self.history
    }

    /// One navigation event: resolve, follow redirects, render. A view may
    /// itself request navigation (login lands on the dashboard), which
    /// continues the same loop.
    pub async fn navigate(&mut self, start: &str, prompt: &mut dyn Prompt) {
        let mut path = normalize(start);
        for _ in 0..MAX_REDIRECTS {
            match self.router.resolve(&path, &self.store.get()) {
                Resolution::Render { view, params } => {
                    self.history.push(&path);
                    let mut ctx = ViewCtx { api: &self.api, store: &self.store, prompt: &mut *prompt };
                    match views::render(&view, &params, &mut ctx).await {
                        ViewFlow::Stay => return,
                        ViewFlow::Goto(next) => path = normalize(&next),
                    }
                }
                Resolution::Redirect { to, replace } => {
                    info!(from = %path, to = %to, replace, "redirecting");
                    println!("(redirected to {})", to);
                    path = to;
                }
                Resolution::NotFound => {
                    println!("No screen at {}", path);
                    return;
                }
            }
        }
        warn!(%path, "redirect limit reached, giving up");
    }

    /// Interactive loop. Paths render screens; everything else is a command.
    pub async fn run_repl(&mut self) -> Result<()> {
        println!("lexportal. Type 'help' for commands, or a path like {} to begin.", LOGIN_PATH);
        self.navigate("/", &mut StdinPrompt).await;
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            input.clear();
            print!("portal> ");
            let _ = io::stdout().flush();
            if stdin.read_line(&mut input).is_err() {
                break;
            }
            if input.is_empty() {
                // EOF
                break;
            }
            let line = input.trim();
            if line.is_empty() {
                continue;
            }
            let lower = line.to_ascii_lowercase();
            match lower.as_str() {
                "quit" | "exit" => break,
                "help" => {
                    print_help();
                    continue;
                }
                "status" | "whoami" => {
                    self.print_status();
                    continue;
                }
                "logout" => {
                    self.store.clear();
                    println!("Signed out.");
                    continue;
                }
                "back" => {
                    match self.history.back() {
                        Some(prev) => self.navigate(&prev, &mut StdinPrompt).await,
                        None => println!("Nothing to go back to."),
                    }
                    continue;
                }
                "support" => {
                    let mut prompt = StdinPrompt;
                    let mut ctx = ViewCtx { api: &self.api, store: &self.store, prompt: &mut prompt };
                    let _ = views::support_form(&mut ctx).await;
                    continue;
                }
                "health" => {
                    match self.api.health().await {
                        Ok(reply) => println!("backend: {}", reply.message),
                        Err(e) => println!("backend unreachable: {}", e.message()),
                    }
                    continue;
                }
                _ => {}
            }
            // Paths stay case-sensitive; only the command word is folded.
            if lower.starts_with("go ") {
                let rest = line[3..].trim().to_string();
                self.navigate(&rest, &mut StdinPrompt).await;
                continue;
            }
            if line.starts_with('/') {
                self.navigate(line, &mut StdinPrompt).await;
                continue;
            }
            println!("Unrecognized input. Paths start with '/'; type 'help' for commands.");
        }
        Ok(())
    }

    fn print_status(&self) {
        let s = self.store.get();
        if s.authenticated() {
            println!(
                "signed in as {} ({}) id={}",
                s.display_name(),
                s.role().map(|r| r.as_str()).unwrap_or("?"),
                s.identity.id().unwrap_or("?")
            );
        } else {
            println!("not signed in");
        }
        println!("backend: {}", self.api.base());
        println!("history: {} screen(s)", self.history.len());
    }
}

fn normalize(path: &str) -> String {
    let p = path.trim();
    if p.starts_with('/') {
        p.to_string()
    } else {
        format!("/{}", p)
    }
}

fn print_help() {
    println!(
        "Commands:\n  /<path>            open a screen (e.g. /login/civilian, /dashboard/police)\n  go <path>          same as typing the path\n  back               return to the previous screen\n  status | whoami    show the current session\n  logout             sign out\n  support            ask the help desk a question\n  health             check the backend\n  help               this text\n  quit | exit        leave the portal"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_back_steps_to_previous() {
        let mut h = NavHistory::default();
        h.push("/");
        h.push("/about");
        assert_eq!(h.current(), Some("/about"));
        assert_eq!(h.back().as_deref(), Some("/"));
        assert_eq!(h.current(), Some("/"));
        assert_eq!(h.back(), None);
    }

    #[test]
    fn history_skips_consecutive_duplicates() {
        let mut h = NavHistory::default();
        h.push("/about");
        h.push("/about");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn normalize_adds_leading_slash() {
        assert_eq!(normalize("about"), "/about");
        assert_eq!(normalize(" /about "), "/about");
    }
}
