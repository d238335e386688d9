use karuta_json::{config::Config, console};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();
    console::print_paths(&config);

    if !config.input.exists() {
        eprintln!("✗ エラー: CSVファイルが見つかりません: {}", config.input.display());
        return ExitCode::FAILURE;
    }

    let success = console::convert_and_report(&config);
    if success {
        if config.output.exists() {
            let path = config.output_absolute().unwrap_or_else(|_| config.output.clone());
            println!("✓ JSONファイルが正常に作成されました: {}", path.display());
        } else {
            println!("⚠ 警告: JSONファイルが作成されませんでした");
        }
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
