use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use lexportal::config::PortalConfig;
use lexportal::shell::Shell;
use lexportal::views::StdinPrompt;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--api <url>] [--state-dir <dir>]            # interactive portal\n  {program} --go <path> [--api <url>] [--state-dir <dir>] # open one screen and exit\n\nFlags:\n  --api <url>          Backend base URL (default: env LEXPORTAL_API_URL or http://127.0.0.1:5000)\n  --state-dir <dir>    Directory for the session state file (default: env LEXPORTAL_STATE_DIR or state)\n  --go <path>          One-shot navigation (e.g. --go /about)\n  -h, --help           Show this help"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    let mut args: Vec<String> = std::env::args().collect();
    let program = args.remove(0);

    let mut config = PortalConfig::load();
    let mut one_shot: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--api" => {
                if i + 1 >= args.len() { eprintln!("--api requires a value"); print_usage(&program); std::process::exit(2); }
                config.api_url = args[i + 1].clone();
                i += 2; continue;
            }
            "--state-dir" => {
                if i + 1 >= args.len() { eprintln!("--state-dir requires a value"); print_usage(&program); std::process::exit(2); }
                config.state_dir = args[i + 1].clone().into();
                i += 2; continue;
            }
            "--go" => {
                if i + 1 >= args.len() { eprintln!("--go requires a path"); print_usage(&program); std::process::exit(2); }
                one_shot = Some(args[i + 1].clone());
                i += 2; continue;
            }
            "-h" | "--help" => {
                print_usage(&program);
                return Ok(());
            }
            unk => {
                eprintln!("Unrecognized argument: {}", unk);
                print_usage(&program);
                std::process::exit(2);
            }
        }
    }

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    info!(
        target: "lexportal",
        "lexportal starting: RUST_LOG='{}', api='{}', state_dir='{}'",
        rust_log,
        config.api_url,
        config.state_dir.display()
    );

    let mut shell = Shell::new(&config)?;
    match one_shot {
        Some(path) => {
            shell.navigate(&path, &mut StdinPrompt).await;
            Ok(())
        }
        None => shell.run_repl().await,
    }
}
