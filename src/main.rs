use clap::Parser;
use std::process;
use walksh::cli::ShellArgs;
use walksh::session::{Session, MAX_PROMPT_LEN};
use walksh::{reaper, repl, run_shell};

fn main() {
    env_logger::init();
    let args = ShellArgs::parse();

    if let Err(e) = reaper::spawn_reaper() {
        eprintln!("Failed to start background reaper: {}", e);
    }

    let mut session = Session::new();
    if let Some(text) = args.prompt {
        if text.len() < MAX_PROMPT_LEN {
            session.prompt = text;
        } else {
            eprintln!("Error: Limit Exceeded - prompt exceeded set length");
        }
    }

    if let Some(line) = args.command {
        let code = match repl::handle_command_input(&mut session, &line) {
            Ok(Some(code)) => code,
            Ok(None) => 0,
            Err(e) => {
                eprintln!("{}", e);
                1
            }
        };
        process::exit(code);
    }

    match run_shell(&mut session) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
