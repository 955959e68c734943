//! UCDテーブルコンパイラのメインエントリーポイント
//!
//! このモジュールは、`UnicodeData.txt`からUStringのルックアップテーブルを
//! 生成するためのサブコマンドを提供します。データベースファイルの取得と、
//! 宣言・テーブルデータ両アーティファクトの生成を統合したCLIツールです。

mod fetch;
mod generate;

use clap::Parser;
use thiserror::Error;

use crate::{fetch::FetchError, generate::GenerateError};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// `UnicodeData.txt`から両アーティファクトを生成します
    ///
    /// ローカルにファイルがなければダウンロードし、パース、分類、
    /// テーブル構築、出力までを一度に実行します。
    Generate(generate::Args),

    /// `UnicodeData.txt`をダウンロードします
    ///
    /// 固定URLからデータベースファイルを取得して保存します。
    Fetch(fetch::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// テーブル生成中のエラー
    #[error(transparent)]
    GenerateError(#[from] GenerateError),
    /// ダウンロード中のエラー
    #[error(transparent)]
    FetchError(#[from] FetchError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # エラー
///
/// 各サブコマンドの実行中にエラーが発生した場合、そのエラーが返されます。
fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => Ok(generate::run(args)?),
        Command::Fetch(args) => Ok(fetch::run(args)?),
    }
}
