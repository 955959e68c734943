//! アーティファクトの出力
//!
//! このモジュールは、構築済みの[`CategoryTables`]から2つの相互整合な
//! アーティファクトを描画します:
//!
//! - 宣言アーティファクト (`UnicodeData.h`): 定数、レコード形の宣言、
//!   および`要素数+1`でサイズ付けされた外部ストレージ宣言
//! - データアーティファクト (`UnicodeData.cpp`): 全10バケットの
//!   完全リテラルな初期化子テーブル
//!
//! 要素数定数とデータテーブルは同じ`Vec`の長さから導出されるため、
//! 1回の実行内で両アーティファクトが食い違うことはありません。
//! 両方とも同一の固定バケット順で出力されます。同じ入力に対する
//! 再実行はバイト単位で同一の出力を生成します。

use std::io::Write;

use crate::errors::Result;
use crate::tables::{CategoryTables, LetterEntry, SimpleEntry};
use crate::{CODE_POINT_MAX, CODE_POINT_NULL};

/// 生成ファイル先頭のバナー
const BANNER: &str = "// Generated by the ucdata compiler. Do not edit; re-run `compile generate`.\n";

/// 宣言アーティファクトのインクルードガード
const INCLUDE_GUARD: &str = "_USTRING_UNICODE_DATA_H_";

/// 文字以外の9バケットの固定出力順 (要素数定数名、配列名)
const SIMPLE_TABLE_NAMES: [(&str, &str); 9] = [
    ("UCHAR_NUM_NUMBERS", "UCharNumbers"),
    ("UCHAR_NUM_WHITESPACE", "UCharWhitespace"),
    ("UCHAR_NUM_CONTROLS", "UCharControls"),
    ("UCHAR_NUM_LINEBREAKS", "UCharLinebreaks"),
    ("UCHAR_NUM_PUNCTUATIONS", "UCharPunctuations"),
    ("UCHAR_NUM_SYMBOLS", "UCharSymbols"),
    ("UCHAR_NUM_SURROGATES", "UCharSurrogates"),
    ("UCHAR_NUM_MARKS", "UCharMarks"),
    ("UCHAR_NUM_OTHERS", "UCharOthers"),
];

/// 固定順で並べた文字以外の9バケット
fn simple_tables(tables: &CategoryTables) -> [(&'static str, &'static str, &[SimpleEntry]); 9] {
    let buckets = [
        tables.numbers(),
        tables.whitespace(),
        tables.controls(),
        tables.linebreaks(),
        tables.punctuations(),
        tables.symbols(),
        tables.surrogates(),
        tables.marks(),
        tables.others(),
    ];
    std::array::from_fn(|i| (SIMPLE_TABLE_NAMES[i].0, SIMPLE_TABLE_NAMES[i].1, buckets[i]))
}

/// 宣言アーティファクト(`UnicodeData.h`)を描画します。
///
/// # 引数
///
/// * `wtr` - 書き込み先のWriterオブジェクト
/// * `tables` - 構築済みのカテゴリテーブル
///
/// # 戻り値
///
/// 成功時は `Ok(())` を返します。
///
/// # エラー
///
/// 書き込み中にI/Oエラーが発生した場合にエラーを返します。
pub fn emit_declarations<W>(mut wtr: W, tables: &CategoryTables) -> Result<()>
where
    W: Write,
{
    wtr.write_all(BANNER.as_bytes())?;
    writeln!(wtr)?;
    writeln!(wtr, "#ifndef {INCLUDE_GUARD}")?;
    writeln!(wtr, "#define {INCLUDE_GUARD}")?;
    writeln!(wtr)?;
    writeln!(wtr, "    #include <cstdint>")?;
    writeln!(wtr, "    #include <map>")?;
    writeln!(wtr, "    #include <cstring>")?;
    writeln!(wtr)?;
    write_define(&mut wtr, "UCHAR_CODE_NULL", format!("0x{CODE_POINT_NULL:X}"))?;
    write_define(&mut wtr, "UCHAR_CODE_MAX", format!("0x{CODE_POINT_MAX:X}"))?;
    write_define(&mut wtr, "UCHAR_CASE_NONE", "0")?;
    write_define(&mut wtr, "UCHAR_CASE_UPPER", "1")?;
    write_define(&mut wtr, "UCHAR_CASE_LOWER", "2")?;
    write_define(&mut wtr, "UCHAR_CASE_TITLE", "3")?;
    writeln!(wtr)?;
    write_define(&mut wtr, "UCHAR_NUM_LETTERS", tables.letters().len())?;
    for (count_name, _, entries) in simple_tables(tables) {
        write_define(&mut wtr, count_name, entries.len())?;
    }
    writeln!(wtr)?;
    writeln!(wtr, "    struct UCharLetter")?;
    writeln!(wtr, "    {{")?;
    writeln!(wtr, "        std::uint32_t  codePoint;")?;
    writeln!(wtr, "        std::uint8_t   characterCase;")?;
    writeln!(wtr, "        std::uint32_t  upperVersion;")?;
    writeln!(wtr, "        std::uint32_t  lowerVersion;")?;
    writeln!(wtr, "        std::uint32_t  titleVersion;")?;
    writeln!(wtr, "        std::uint8_t   category;")?;
    writeln!(wtr, "        std::uint8_t   direction;")?;
    writeln!(wtr, "    }};")?;
    writeln!(wtr)?;
    writeln!(wtr, "    struct UCharEntry")?;
    writeln!(wtr, "    {{")?;
    writeln!(wtr, "        std::uint32_t  codePoint;")?;
    writeln!(wtr, "        std::uint8_t   category;")?;
    writeln!(wtr, "        std::uint8_t   direction;")?;
    writeln!(wtr, "    }};")?;
    writeln!(wtr)?;
    writeln!(
        wtr,
        "    extern UCharLetter UCharLetters[UCHAR_NUM_LETTERS+1];"
    )?;
    for (count_name, array_name, _) in simple_tables(tables) {
        writeln!(wtr, "    extern UCharEntry  {array_name}[{count_name}+1];")?;
    }
    writeln!(wtr)?;
    writeln!(wtr, "#endif")?;

    Ok(())
}

/// データアーティファクト(`UnicodeData.cpp`)を描画します。
///
/// テーブルは宣言アーティファクトと同一の固定バケット順で出力されます。
/// 各配列は`要素数+1`でサイズ付けされ、初期化子は要素数分だけ並ぶため、
/// 末尾の1スロットはゼロ初期化されたまま残ります。
///
/// # 引数
///
/// * `wtr` - 書き込み先のWriterオブジェクト
/// * `tables` - 構築済みのカテゴリテーブル
///
/// # 戻り値
///
/// 成功時は `Ok(())` を返します。
///
/// # エラー
///
/// 書き込み中にI/Oエラーが発生した場合にエラーを返します。
pub fn emit_data<W>(mut wtr: W, tables: &CategoryTables) -> Result<()>
where
    W: Write,
{
    wtr.write_all(BANNER.as_bytes())?;
    writeln!(wtr)?;
    writeln!(wtr, "#include \"UnicodeData.h\"")?;
    writeln!(wtr)?;
    write_letter_table(&mut wtr, tables.letters())?;
    for (count_name, array_name, entries) in simple_tables(tables) {
        write_simple_table(&mut wtr, count_name, array_name, entries)?;
    }

    Ok(())
}

/// `#define`行を固定幅の名前カラムで書き出します。
fn write_define<W, V>(wtr: &mut W, name: &str, value: V) -> Result<()>
where
    W: Write,
    V: std::fmt::Display,
{
    writeln!(wtr, "    #define {name:<24} {value}")?;
    Ok(())
}

/// 文字バケットの初期化子テーブルを書き出します。
///
/// フィールド順は宣言アーティファクトの`UCharLetter`と同じです。
/// コードポイントとケースマッピングは16進、ケース種別・カテゴリID・
/// 双方向クラスIDは小さい整数として出力されます。
fn write_letter_table<W>(wtr: &mut W, letters: &[LetterEntry]) -> Result<()>
where
    W: Write,
{
    writeln!(wtr, "    UCharLetter UCharLetters[UCHAR_NUM_LETTERS+1] =")?;
    writeln!(wtr, "    {{")?;
    for entry in letters {
        writeln!(
            wtr,
            "        {{0x{:04X}, 0x{:02X}, 0x{:04X}, 0x{:04X}, 0x{:04X}, {}, {}}},",
            entry.code_point,
            entry.case.id(),
            entry.upper,
            entry.lower,
            entry.title,
            entry.category.id(),
            entry.direction.id(),
        )?;
    }
    writeln!(wtr, "    }};")?;
    writeln!(wtr)?;
    Ok(())
}

/// 3フィールド形のバケットの初期化子テーブルを書き出します。
fn write_simple_table<W>(
    wtr: &mut W,
    count_name: &str,
    array_name: &str,
    entries: &[SimpleEntry],
) -> Result<()>
where
    W: Write,
{
    writeln!(wtr, "    UCharEntry {array_name}[{count_name}+1] =")?;
    writeln!(wtr, "    {{")?;
    for entry in entries {
        writeln!(
            wtr,
            "        {{0x{:04X}, {}, {}}},",
            entry.code_point,
            entry.category.id(),
            entry.direction.id(),
        )?;
    }
    writeln!(wtr, "    }};")?;
    writeln!(wtr)?;
    Ok(())
}
