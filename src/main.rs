use std::io;
use std::process;

use clap::Parser;
use lcoe_toolbox::app::{self, AppError};
use lcoe_toolbox::logging;
use lcoe_toolbox::ui_cli::Cli;
use tracing::{error, info};

/// 프로그램의 엔트리 포인트. 인자를 해석하고 로그를 초기화한 뒤 계산을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(err) = try_run(&cli) {
        error!("{err:?}");
        eprintln!("오류: {err}");
        process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    info!("LCOE Toolbox v{}", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(cli, &mut stdin.lock(), &mut stdout.lock())
}
