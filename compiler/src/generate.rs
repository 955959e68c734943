//! アーティファクト生成モジュール
//!
//! このモジュールは、`UnicodeData.txt`から宣言アーティファクト
//! (`UnicodeData.h`)とデータアーティファクト(`UnicodeData.cpp`)を
//! 生成する機能を提供します。入力ファイルがローカルに存在しない場合は
//! 先にダウンロードします。

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use ucdata::errors::{DownloadError, UcdataError};
use ucdata::{emit, fetch, record, CategoryTables};

/// 生成コマンドの引数
///
/// 入力データベースファイルと2つの出力アーティファクトのパスを指定します。
#[derive(Parser, Debug)]
#[clap(
    name = "generate",
    about = "A program to compile UnicodeData.txt into the UString lookup tables."
)]
pub struct Args {
    /// UnicodeData.txt file, downloaded first when missing.
    #[clap(short = 'i', long, default_value = "UnicodeData.txt")]
    data_in: PathBuf,

    /// File to which the declarations artifact is output.
    #[clap(long, default_value = "Include/UString/UnicodeData.h")]
    header_out: PathBuf,

    /// File to which the table data artifact is output.
    #[clap(long, default_value = "Source/UnicodeData.cpp")]
    source_out: PathBuf,
}

/// 生成処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// ダウンロードエラー
    #[error("Fetching UnicodeData.txt failed: {0}")]
    Download(#[from] DownloadError),

    /// テーブル生成エラー
    #[error("Table generation failed: {0}")]
    Ucdata(#[from] UcdataError),
}

/// 生成コマンドを実行する
///
/// 入力をパースしてカテゴリテーブルを構築し、両アーティファクトを
/// 書き出します。
///
/// # 引数
///
/// * `args` - 生成コマンドの引数
///
/// # 戻り値
///
/// 成功時は`Ok(())`
///
/// # エラー
///
/// ダウンロード、パース、分類、またはアーティファクトの書き込みに
/// 失敗した場合、`GenerateError`を返します。
pub fn run(args: Args) -> Result<(), GenerateError> {
    if !args.data_in.exists() {
        println!("{} is missing, downloading...", args.data_in.display());
    }
    fetch::ensure_unicode_data(&args.data_in)?;

    println!("Parsing {}...", args.data_in.display());
    let records = record::from_reader(File::open(&args.data_in)?)?;

    println!("Building the category tables...");
    let tables = CategoryTables::from_records(&records)?;
    println!(" - classified {} code points", tables.num_entries());

    println!("Writing the declarations...");
    let mut header_wtr = BufWriter::new(create_output_file(&args.header_out)?);
    emit::emit_declarations(&mut header_wtr, &tables)?;
    header_wtr.flush()?;

    println!("Writing the table data...");
    let mut source_wtr = BufWriter::new(create_output_file(&args.source_out)?);
    emit::emit_data(&mut source_wtr, &tables)?;
    source_wtr.flush()?;

    println!(
        "Successfully generated {} and {}",
        args.header_out.display(),
        args.source_out.display(),
    );
    Ok(())
}

/// 親ディレクトリを作成してから出力ファイルを作成する
fn create_output_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
        0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\n";

    fn sample_args(dir: &Path) -> Args {
        let data_in = dir.join("UnicodeData.txt");
        fs::write(&data_in, SAMPLE).unwrap();
        Args {
            data_in,
            header_out: dir.join("Include/UString/UnicodeData.h"),
            source_out: dir.join("Source/UnicodeData.cpp"),
        }
    }

    #[test]
    fn test_run_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let args = sample_args(dir.path());
        let header_out = args.header_out.clone();
        let source_out = args.source_out.clone();

        run(args).unwrap();

        let header = fs::read_to_string(header_out).unwrap();
        let source = fs::read_to_string(source_out).unwrap();
        assert!(header.contains("UCHAR_NUM_LETTERS"));
        assert!(source.contains("0x0041"));
    }

    // /dev/fullへの書き込みはフラッシュ時にのみENOSPCで失敗するため、
    // バッファされた書き込みエラーが破棄されないことを検証できます。
    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_fails_on_header_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = sample_args(dir.path());
        args.header_out = PathBuf::from("/dev/full");

        let result = run(args);
        assert!(matches!(result, Err(GenerateError::Io(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_fails_on_source_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = sample_args(dir.path());
        args.source_out = PathBuf::from("/dev/full");

        let result = run(args);
        assert!(matches!(result, Err(GenerateError::Io(_))));
    }
}
