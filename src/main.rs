//! zensan - 半角記号を全角記号に変換するCLI
//!
//! 引数が与えられた場合は各引数を変換して1行ずつ出力します。
//! 引数なしの場合は標準入力を1行ずつ変換して標準出力へ書き出します。

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use zensan::normalize;

fn main() -> ExitCode {
    // ロギング初期化 (error/warnのみ出力)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        for arg in &args {
            println!("{}", normalize(arg));
        }
        return ExitCode::SUCCESS;
    }

    // 標準入力モード
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("標準入力の読込に失敗: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = writeln!(out, "{}", normalize(&line)) {
            // パイプ切断などの書込エラー
            log::error!("標準出力への書込に失敗: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
