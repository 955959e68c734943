//! カテゴリテーブルの構築
//!
//! このモジュールは、パース済みレコードを分類し、10個の出力バケットに
//! 振り分けた[`CategoryTables`]を構築します。テーブルは1回の線形パスで
//! 構築され、以降は不変です。バケット内の順序は入力順を保持します。

use crate::category::{Bucket, CaseKind, Category, Direction};
use crate::errors::{Result, UcdataError};
use crate::record::CodePointRecord;

/// エラーメッセージでの入力フォーマット名
const FORMAT_NAME: &str = "UnicodeData.txt";

/// 文字バケット(Lu/Ll/Lt/Lm/Lo)のエントリ
///
/// ケース種別と3つの簡易ケースマッピングを併せ持つ7フィールドの形です。
/// マッピング値0はマッピングなしを意味します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    /// コードポイント
    pub code_point: u32,
    /// ケース種別
    pub case: CaseKind,
    /// 大文字への簡易マッピング (なければ0)
    pub upper: u32,
    /// 小文字への簡易マッピング (なければ0)
    pub lower: u32,
    /// タイトルケースへの簡易マッピング (なければ0)
    pub title: u32,
    /// 一般カテゴリ
    pub category: Category,
    /// 双方向クラス
    pub direction: Direction,
}

/// 文字以外の9バケットで共有される3フィールドのエントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleEntry {
    /// コードポイント
    pub code_point: u32,
    /// 一般カテゴリ
    pub category: Category,
    /// 双方向クラス
    pub direction: Direction,
}

/// 10個の出力バケットに分割されたカテゴリテーブル
///
/// [`CategoryTables::from_records`]で1回だけ構築され、以降は読み取り
/// 専用です。アーティファクトの出力が完了するまでの間だけ存在します。
#[derive(Debug, Default)]
pub struct CategoryTables {
    letters: Vec<LetterEntry>,
    numbers: Vec<SimpleEntry>,
    whitespace: Vec<SimpleEntry>,
    controls: Vec<SimpleEntry>,
    linebreaks: Vec<SimpleEntry>,
    punctuations: Vec<SimpleEntry>,
    symbols: Vec<SimpleEntry>,
    surrogates: Vec<SimpleEntry>,
    marks: Vec<SimpleEntry>,
    others: Vec<SimpleEntry>,
}

impl CategoryTables {
    /// パース済みレコードからテーブルを構築します。
    ///
    /// 各レコードの一般カテゴリと双方向クラスを固定IDに解決し、
    /// カテゴリに対応するちょうど1つのバケットに追加します。
    ///
    /// # 引数
    ///
    /// * `records` - 入力順のレコードのスライス
    ///
    /// # 戻り値
    ///
    /// 成功時は `Ok(CategoryTables)` を返します。
    ///
    /// # エラー
    ///
    /// カテゴリまたは双方向クラスのテキストコードが固定列挙型に
    /// 解決できない場合にエラーを返します。レコードが黙って捨てられる
    /// ことはありません。
    pub fn from_records(records: &[CodePointRecord]) -> Result<Self> {
        let mut tables = Self::default();

        for record in records {
            let category = Category::from_code(&record.general_category).ok_or_else(|| {
                UcdataError::invalid_format(
                    FORMAT_NAME,
                    format!(
                        "U+{:04X}: unknown general category code {:?}",
                        record.code_point, record.general_category,
                    ),
                )
            })?;
            let direction = Direction::from_code(&record.bidi_class).ok_or_else(|| {
                UcdataError::invalid_format(
                    FORMAT_NAME,
                    format!(
                        "U+{:04X}: unknown bidirectional class code {:?}",
                        record.code_point, record.bidi_class,
                    ),
                )
            })?;

            let entry = SimpleEntry {
                code_point: record.code_point,
                category,
                direction,
            };
            match category.bucket() {
                Bucket::Letters => tables.letters.push(LetterEntry {
                    code_point: record.code_point,
                    case: category.case_kind(),
                    upper: record.upper,
                    lower: record.lower,
                    title: record.title,
                    category,
                    direction,
                }),
                Bucket::Numbers => tables.numbers.push(entry),
                Bucket::Whitespace => tables.whitespace.push(entry),
                Bucket::Controls => tables.controls.push(entry),
                Bucket::Linebreaks => tables.linebreaks.push(entry),
                Bucket::Punctuations => tables.punctuations.push(entry),
                Bucket::Symbols => tables.symbols.push(entry),
                Bucket::Surrogates => tables.surrogates.push(entry),
                Bucket::Marks => tables.marks.push(entry),
                Bucket::Others => tables.others.push(entry),
            }
        }

        Ok(tables)
    }

    /// 文字バケットを取得します。
    pub fn letters(&self) -> &[LetterEntry] {
        &self.letters
    }

    /// 数字バケットを取得します。
    pub fn numbers(&self) -> &[SimpleEntry] {
        &self.numbers
    }

    /// 空白バケットを取得します。
    pub fn whitespace(&self) -> &[SimpleEntry] {
        &self.whitespace
    }

    /// 制御・書式バケットを取得します。
    pub fn controls(&self) -> &[SimpleEntry] {
        &self.controls
    }

    /// 行・段落区切りバケットを取得します。
    pub fn linebreaks(&self) -> &[SimpleEntry] {
        &self.linebreaks
    }

    /// 句読点バケットを取得します。
    pub fn punctuations(&self) -> &[SimpleEntry] {
        &self.punctuations
    }

    /// 記号バケットを取得します。
    pub fn symbols(&self) -> &[SimpleEntry] {
        &self.symbols
    }

    /// サロゲートバケットを取得します。
    pub fn surrogates(&self) -> &[SimpleEntry] {
        &self.surrogates
    }

    /// 結合マークバケットを取得します。
    pub fn marks(&self) -> &[SimpleEntry] {
        &self.marks
    }

    /// その他バケットを取得します。
    pub fn others(&self) -> &[SimpleEntry] {
        &self.others
    }

    /// 全バケットの要素数の合計を取得します。
    pub fn num_entries(&self) -> usize {
        self.letters.len()
            + self.numbers.len()
            + self.whitespace.len()
            + self.controls.len()
            + self.linebreaks.len()
            + self.punctuations.len()
            + self.symbols.len()
            + self.surrogates.len()
            + self.marks.len()
            + self.others.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    fn build(data: &str) -> CategoryTables {
        let records = record::from_reader(data.as_bytes()).unwrap();
        CategoryTables::from_records(&records).unwrap()
    }

    #[test]
    fn test_uppercase_letter_entry() {
        let tables = build("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n");
        assert_eq!(tables.num_entries(), 1);
        assert_eq!(
            tables.letters(),
            &[LetterEntry {
                code_point: 0x0041,
                case: CaseKind::Upper,
                upper: 0,
                lower: 0x0061,
                title: 0,
                category: Category::Lu,
                direction: Direction::L,
            }]
        );
    }

    #[test]
    fn test_control_entry() {
        let tables = build("0009;<control>;Cc;0;BN;;;;;N;;;;;\n");
        assert_eq!(tables.num_entries(), 1);
        assert_eq!(
            tables.controls(),
            &[SimpleEntry {
                code_point: 0x0009,
                category: Category::Cc,
                direction: Direction::BN,
            }]
        );
    }

    #[test]
    fn test_modifier_letter_has_no_case() {
        let tables = build("02B0;MODIFIER LETTER SMALL H;Lm;0;L;<super> 0068;;;;N;;;;;\n");
        assert_eq!(tables.letters()[0].case, CaseKind::None);
        assert_eq!(tables.letters()[0].category, Category::Lm);
    }

    #[test]
    fn test_one_bucket_per_record() {
        let data = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
                    0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n\
                    0020;SPACE;Zs;0;WS;;;;;N;;;;;\n\
                    0009;<control>;Cc;0;S;;;;;N;;;;;\n\
                    2028;LINE SEPARATOR;Zl;0;WS;;;;;N;;;;;\n\
                    002C;COMMA;Po;0;CS;;;;;N;;;;;\n\
                    002B;PLUS SIGN;Sm;0;ES;;;;;N;;;;;\n\
                    D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;\n\
                    0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;;;;;\n\
                    E000;<Private Use, First>;Co;0;L;;;;;N;;;;;\n";
        let tables = build(data);
        assert_eq!(tables.num_entries(), 10);
        for bucket in [
            tables.numbers(),
            tables.whitespace(),
            tables.controls(),
            tables.linebreaks(),
            tables.punctuations(),
            tables.symbols(),
            tables.surrogates(),
            tables.marks(),
            tables.others(),
        ] {
            assert_eq!(bucket.len(), 1);
        }
        assert_eq!(tables.letters().len(), 1);
    }

    #[test]
    fn test_bucket_preserves_input_order() {
        let data = "0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n\
                    0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;\n\
                    0032;DIGIT TWO;Nd;0;EN;;2;2;2;N;;;;;\n";
        let tables = build(data);
        let code_points: Vec<u32> = tables.numbers().iter().map(|e| e.code_point).collect();
        assert_eq!(code_points, vec![0x0030, 0x0031, 0x0032]);
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        let records = record::from_reader(
            "0041;LATIN CAPITAL LETTER A;Xy;0;L;;;;;N;;;;0061;\n".as_bytes(),
        )
        .unwrap();
        let err = CategoryTables::from_records(&records).unwrap_err();
        assert!(err.to_string().contains("unknown general category"));
        assert!(err.to_string().contains("U+0041"));
    }

    #[test]
    fn test_unknown_direction_is_fatal() {
        let records = record::from_reader(
            "0041;LATIN CAPITAL LETTER A;Lu;0;QQ;;;;;N;;;;0061;\n".as_bytes(),
        )
        .unwrap();
        let err = CategoryTables::from_records(&records).unwrap_err();
        assert!(err.to_string().contains("unknown bidirectional class"));
    }
}
