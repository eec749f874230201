//! cpekit 명령줄 진입점
//!
//! 인자 파싱(clap) -> 로깅 초기화 -> 설정 로드 -> 서브커맨드 실행 순으로
//! 동작합니다. 로그는 stderr로 내보내 stdout의 결과 출력(텍스트/JSON)과
//! 섞이지 않게 합니다.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::OutputWriter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::load(&cli.config)?;
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Parse(args) => commands::parse::execute(&args.cpe, &config.parser, &writer),
        Commands::Convert(args) => commands::convert::execute(&args.cpe, &config.parser, &writer),
        Commands::Validate(args) => commands::validate::execute(&args.cpe, &config.parser, &writer),
    }
}
