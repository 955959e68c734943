//! # ucdata
//!
//! ucdataは、Unicode Character Database (UCD) をコンパクトな分割済み
//! ルックアップテーブルへコンパイルするライブラリです。
//!
//! ## 概要
//!
//! このライブラリは、`UnicodeData.txt`をパースし、一般カテゴリと双方向
//! クラスのテキストコードを消費側ライブラリの列挙型と一致する固定数値IDに
//! 解決し、レコードを10個の互いに素なカテゴリバケットに分割して、相互整合な
//! 2つのテキストアーティファクト（宣言とテーブルデータ）を出力します。
//! アーティファクトはUTF-8文字列ライブラリUStringにコンパイル時データ
//! として取り込まれ、文字分類（一般カテゴリ、双方向クラス、簡易ケース
//! マッピング）に使用されます。
//!
//! ## 主な機能
//!
//! - **パース**: セミコロン区切り15フィールドの検証付きレコード化
//! - **分類**: テキストコードから固定ID(カテゴリ0〜29、双方向0〜22)への解決
//! - **テーブル構築**: 10バケットへの入力順を保った分割
//! - **出力**: 宣言アーティファクトとデータアーティファクトの描画
//! - **ダウンロード**: `UnicodeData.txt`の取得（downloadフィーチャー有効時）
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ucdata::record;
//! use ucdata::tables::CategoryTables;
//!
//! let data = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
//!             0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n";
//!
//! let records = record::from_reader(data.as_bytes())?;
//! let tables = CategoryTables::from_records(&records)?;
//! assert_eq!(tables.letters().len(), 1);
//! assert_eq!(tables.numbers().len(), 1);
//!
//! let mut header = Vec::new();
//! let mut source = Vec::new();
//! ucdata::emit::emit_declarations(&mut header, &tables)?;
//! ucdata::emit::emit_data(&mut source, &tables)?;
//! assert!(String::from_utf8(source)?.contains("{0x0041, 0x01, 0x0000, 0x0061, 0x0000, 14, 0},"));
//! # Ok(())
//! # }
//! ```

/// 一般カテゴリ・双方向クラス・バケットの定義
pub mod category;

/// アーティファクトの出力
pub mod emit;

/// エラー型の定義
pub mod errors;

/// `UnicodeData.txt`のダウンロード機能
#[cfg(feature = "download")]
pub mod fetch;

/// `UnicodeData.txt`のレコードパーサー
pub mod record;

/// カテゴリテーブルの構築
pub mod tables;

pub use crate::category::{Bucket, CaseKind, Category, Direction};
pub use crate::record::CodePointRecord;
pub use crate::tables::{CategoryTables, LetterEntry, SimpleEntry};

/// ヌルコードポイント
///
/// 簡易ケースマッピングが存在しないことを表す番兵値です。
pub const CODE_POINT_NULL: u32 = 0;

/// 最大コードポイント
pub const CODE_POINT_MAX: u32 = 0x10FFFF;
