//! `UnicodeData.txt`のレコードパーサー
//!
//! このモジュールは、セミコロン区切りの`UnicodeData.txt`を1行1レコードの
//! [`CodePointRecord`]のシーケンスに変換します。各行はちょうど15フィールドを
//! 持たなければならず、違反は即座にエラーになります。空の簡易ケース
//! マッピングフィールドは、この段階でヌルコードポイント(0)に既定化されます。

use std::io::{BufRead, BufReader, Read};

use crate::errors::{Result, UcdataError};
use crate::CODE_POINT_NULL;

/// `UnicodeData.txt`の1行あたりのフィールド数
pub const NUM_FIELDS: usize = 15;

/// エラーメッセージでの入力フォーマット名
const FORMAT_NAME: &str = "UnicodeData.txt";

/// `UnicodeData.txt`の1行に対応するレコード
///
/// 15フィールドのうち、テーブル生成に使用される5フィールドのみを保持します。
/// 簡易ケースマッピングは、入力で空だった場合0になります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointRecord {
    /// コードポイント (第1フィールド、16進)
    pub code_point: u32,
    /// 一般カテゴリのテキストコード (第3フィールド)
    pub general_category: String,
    /// 双方向クラスのテキストコード (第5フィールド)
    pub bidi_class: String,
    /// 大文字への簡易マッピング (第13フィールド、なければ0)
    pub upper: u32,
    /// 小文字への簡易マッピング (第14フィールド、なければ0)
    pub lower: u32,
    /// タイトルケースへの簡易マッピング (第15フィールド、なければ0)
    pub title: u32,
}

/// リーダーから`UnicodeData.txt`全体をパースします。
///
/// 空行はスキップされ、入力（コードポイント昇順）の順序は保持されます。
///
/// # 引数
///
/// * `rdr` - `UnicodeData.txt`のリーダー
///
/// # 戻り値
///
/// 成功時はレコードのベクターを返します。
///
/// # エラー
///
/// フィールド数が15でない行、または16進フィールドがパースできない行が
/// あった場合にエラーを返します。
pub fn from_reader<R>(rdr: R) -> Result<Vec<CodePointRecord>>
where
    R: Read,
{
    let mut records = vec![];

    let rdr = BufReader::new(rdr);
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, i + 1)?);
    }

    Ok(records)
}

/// `UnicodeData.txt`の1行を[`CodePointRecord`]にパースします。
///
/// # 引数
///
/// * `line` - パースする行
/// * `line_no` - エラーメッセージ用の1始まりの行番号
///
/// # エラー
///
/// フィールド数が15でない場合、または16進フィールドが不正な場合に
/// エラーを返します。
fn parse_record(line: &str, line_no: usize) -> Result<CodePointRecord> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != NUM_FIELDS {
        let msg = format!(
            "line {line_no} must have exactly {NUM_FIELDS} fields, found {}: {line:?}",
            fields.len(),
        );
        return Err(UcdataError::invalid_format(FORMAT_NAME, msg));
    }

    Ok(CodePointRecord {
        code_point: u32::from_str_radix(fields[0], 16)?,
        general_category: fields[2].to_string(),
        bidi_class: fields[4].to_string(),
        upper: parse_mapping(fields[12])?,
        lower: parse_mapping(fields[13])?,
        title: parse_mapping(fields[14])?,
    })
}

/// 簡易ケースマッピングフィールドをパースします。
///
/// 空のフィールドはマッピングなしを意味し、ヌルコードポイント(0)に
/// 既定化されます。
fn parse_mapping(field: &str) -> Result<u32> {
    if field.is_empty() {
        return Ok(CODE_POINT_NULL);
    }
    Ok(u32::from_str_radix(field, 16)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_line() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(
            record,
            CodePointRecord {
                code_point: 0x0041,
                general_category: "Lu".to_string(),
                bidi_class: "L".to_string(),
                upper: 0,
                lower: 0x0061,
                title: 0,
            }
        );
    }

    #[test]
    fn test_parse_control_line() {
        let line = "0009;<control>;Cc;0;S;;;;;N;CHARACTER TABULATION;;;;";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(record.code_point, 0x0009);
        assert_eq!(record.general_category, "Cc");
        assert_eq!(record.bidi_class, "S");
    }

    #[test]
    fn test_empty_case_mappings_default_to_null() {
        let line = "05D0;HEBREW LETTER ALEF;Lo;0;R;;;;;N;;;;;";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(record.upper, 0);
        assert_eq!(record.lower, 0);
        assert_eq!(record.title, 0);
    }

    #[test]
    fn test_titlecase_letter_keeps_all_mappings() {
        let line = "01C5;LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON;\
                    Lt;0;L;<compat> 0044 017E;;;;N;LATIN LETTER CAPITAL D SMALL Z HACEK;;01C4;01C6;01C5";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(record.upper, 0x01C4);
        assert_eq!(record.lower, 0x01C6);
        assert_eq!(record.title, 0x01C5);
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        // 14フィールドしかない行
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;0061;";
        let err = parse_record(line, 7).unwrap_err();
        assert!(matches!(err, UcdataError::InvalidFormat(_)));
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("found 14"));
    }

    #[test]
    fn test_invalid_hex_is_fatal() {
        let line = "ZZZZ;BROKEN;Lu;0;L;;;;;N;;;;0061;";
        let err = parse_record(line, 1).unwrap_err();
        assert!(matches!(err, UcdataError::ParseInt(_)));
    }

    #[test]
    fn test_from_reader_skips_blank_lines_and_keeps_order() {
        let data = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
                    \n\
                    0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;\n";
        let records = from_reader(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code_point, 0x0041);
        assert_eq!(records[1].code_point, 0x0042);
    }

    #[test]
    fn test_from_reader_reports_offending_line_number() {
        let data = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
                    0042;NO SEMICOLONS HERE\n";
        let err = from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let line = " 0041 ; LATIN CAPITAL LETTER A ; Lu ; 0 ; L ;;;;; N ;;;; 0061 ;";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(record.code_point, 0x0041);
        assert_eq!(record.general_category, "Lu");
        assert_eq!(record.lower, 0x0061);
    }
}
