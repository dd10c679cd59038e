use clap::Parser;
use vi_command_cli::GetExitCode;

fn main() {
    env_logger::init();
    let args = vi_command_cli::Args::parse();

    let result = vi_command_cli::run(std::io::stdin().lock(), std::io::stdout().lock(), args);
    if let Err(error) = &result {
        eprintln!("vi-command: {}", error);
    }
    std::process::exit(result.get_exit_code());
}
