//! `UnicodeData.txt`のダウンロードモジュール
//!
//! このモジュールは、固定URLから`UnicodeData.txt`を取得して保存する
//! サブコマンドを提供します。

use std::path::PathBuf;

use clap::Parser;

use ucdata::errors::DownloadError;
use ucdata::fetch;

/// ダウンロードコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "fetch", about = "A program to download UnicodeData.txt.")]
pub struct Args {
    /// File to which UnicodeData.txt is saved.
    #[clap(short = 'o', long, default_value = "UnicodeData.txt")]
    data_out: PathBuf,
}

/// ダウンロード処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// ダウンロードエラー
    #[error("Fetching UnicodeData.txt failed: {0}")]
    Download(#[from] DownloadError),
}

/// ダウンロードコマンドを実行する
///
/// 既存のキャッシュファイルの有無にかかわらず、常にダウンロードし直します。
///
/// # 引数
///
/// * `args` - ダウンロードコマンドの引数
///
/// # 戻り値
///
/// 成功時は`Ok(())`
///
/// # エラー
///
/// 転送またはI/Oに失敗した場合、`FetchError`を返します。
pub fn run(args: Args) -> Result<(), FetchError> {
    println!("Downloading {}...", fetch::UNICODE_DATA_URL);
    fetch::download_unicode_data(&args.data_out)?;
    println!("Successfully downloaded to {}", args.data_out.display());
    Ok(())
}
