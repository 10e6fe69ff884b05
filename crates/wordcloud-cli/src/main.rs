mod args;
mod config;
mod dialogs;
mod interactive;
mod io;
mod run;

use run::RunStatus;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run::run() {
        Ok(RunStatus::Done) => {}
        Ok(RunStatus::Rejected) => std::process::exit(2),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
