//! `UnicodeData.txt`のダウンロード機能
//!
//! このモジュールは、ローカルに存在しない場合に`UnicodeData.txt`を
//! 固定URLから1回だけ取得して保存する機能を提供します。

#![cfg(feature = "download")]

use std::path::Path;

use crate::errors::DownloadError;

/// 対象データベースバージョンの`UnicodeData.txt`の固定URL
pub const UNICODE_DATA_URL: &str = "https://unicode.org/Public/8.0.0/ucd/UnicodeData.txt";

/// `UnicodeData.txt`がローカルに存在することを保証します。
///
/// ファイルが既に存在する場合は何もしません。存在しない場合は
/// [`download_unicode_data`]でダウンロードします。
///
/// # 引数
///
/// * `path` - ローカルキャッシュファイルのパス
///
/// # エラー
///
/// ダウンロードに失敗した場合にエラーを返します。リトライは行いません。
pub fn ensure_unicode_data<P>(path: P) -> Result<(), DownloadError>
where
    P: AsRef<Path>,
{
    if path.as_ref().exists() {
        return Ok(());
    }
    download_unicode_data(path)
}

/// `UnicodeData.txt`をダウンロードして指定されたパスに保存します。
///
/// レスポンス全体を同じディレクトリ内の一時ファイルに書き込んでから
/// 最終パスへ永続化するため、途中で失敗しても不完全なキャッシュ
/// ファイルは残りません。
///
/// # 引数
///
/// * `path` - 保存先のファイルパス
///
/// # エラー
///
/// ネットワークリクエストの失敗、成功以外のHTTPステータス、または
/// I/O失敗の場合にエラーを返します。
pub fn download_unicode_data<P>(path: P) -> Result<(), DownloadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dest_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dest_dir)?;

    let mut response = reqwest::blocking::get(UNICODE_DATA_URL)?;
    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status()));
    }

    let mut temp_file = tempfile::NamedTempFile::new_in(dest_dir)?;
    response.copy_to(temp_file.as_file_mut())?;
    temp_file.persist(path)?;

    Ok(())
}
