//! 一般カテゴリと双方向クラスの定義
//!
//! このモジュールは、Unicode Character Databaseのテキストコードを
//! 消費側ライブラリの`UChar::Category`/`UChar::Direction`列挙型と
//! 一致する固定の数値IDに解決します。判別子の値と順序は
//! 消費側との契約であり、変更できません。

/// コードポイントの一般カテゴリ
///
/// 判別子は消費側の`UChar::Category`列挙型と同じ順序で0〜29に固定されています。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    /// Mark, nonspacing
    Mn = 0,
    /// Mark, spacing combining
    Mc = 1,
    /// Mark, enclosing
    Me = 2,
    /// Number, decimal digit
    Nd = 3,
    /// Number, letter
    Nl = 4,
    /// Number, other
    No = 5,
    /// Separator, space
    Zs = 6,
    /// Separator, line
    Zl = 7,
    /// Separator, paragraph
    Zp = 8,
    /// Other, control
    Cc = 9,
    /// Other, format
    Cf = 10,
    /// Other, surrogate
    Cs = 11,
    /// Other, private use
    Co = 12,
    /// Other, not assigned
    Cn = 13,
    /// Letter, uppercase
    Lu = 14,
    /// Letter, lowercase
    Ll = 15,
    /// Letter, titlecase
    Lt = 16,
    /// Letter, modifier
    Lm = 17,
    /// Letter, other
    Lo = 18,
    /// Punctuation, connector
    Pc = 19,
    /// Punctuation, dash
    Pd = 20,
    /// Punctuation, open
    Ps = 21,
    /// Punctuation, close
    Pe = 22,
    /// Punctuation, initial quote
    Pi = 23,
    /// Punctuation, final quote
    Pf = 24,
    /// Punctuation, other
    Po = 25,
    /// Symbol, math
    Sm = 26,
    /// Symbol, currency
    Sc = 27,
    /// Symbol, modifier
    Sk = 28,
    /// Symbol, other
    So = 29,
}

impl Category {
    /// すべてのカテゴリをID順に並べた配列
    pub const ALL: [Self; 30] = [
        Self::Mn,
        Self::Mc,
        Self::Me,
        Self::Nd,
        Self::Nl,
        Self::No,
        Self::Zs,
        Self::Zl,
        Self::Zp,
        Self::Cc,
        Self::Cf,
        Self::Cs,
        Self::Co,
        Self::Cn,
        Self::Lu,
        Self::Ll,
        Self::Lt,
        Self::Lm,
        Self::Lo,
        Self::Pc,
        Self::Pd,
        Self::Ps,
        Self::Pe,
        Self::Pi,
        Self::Pf,
        Self::Po,
        Self::Sm,
        Self::Sc,
        Self::Sk,
        Self::So,
    ];

    /// 2文字のテキストコードからカテゴリを解決します。
    ///
    /// # 引数
    ///
    /// * `code` - `UnicodeData.txt`第3フィールドの一般カテゴリコード
    ///
    /// # 戻り値
    ///
    /// 既知のコードであれば `Some(Category)`、未知のコードであれば `None`
    pub fn from_code(code: &str) -> Option<Self> {
        let category = match code {
            "Mn" => Self::Mn,
            "Mc" => Self::Mc,
            "Me" => Self::Me,
            "Nd" => Self::Nd,
            "Nl" => Self::Nl,
            "No" => Self::No,
            "Zs" => Self::Zs,
            "Zl" => Self::Zl,
            "Zp" => Self::Zp,
            "Cc" => Self::Cc,
            "Cf" => Self::Cf,
            "Cs" => Self::Cs,
            "Co" => Self::Co,
            "Cn" => Self::Cn,
            "Lu" => Self::Lu,
            "Ll" => Self::Ll,
            "Lt" => Self::Lt,
            "Lm" => Self::Lm,
            "Lo" => Self::Lo,
            "Pc" => Self::Pc,
            "Pd" => Self::Pd,
            "Ps" => Self::Ps,
            "Pe" => Self::Pe,
            "Pi" => Self::Pi,
            "Pf" => Self::Pf,
            "Po" => Self::Po,
            "Sm" => Self::Sm,
            "Sc" => Self::Sc,
            "Sk" => Self::Sk,
            "So" => Self::So,
            _ => return None,
        };
        Some(category)
    }

    /// テキストコードを取得します。
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mn => "Mn",
            Self::Mc => "Mc",
            Self::Me => "Me",
            Self::Nd => "Nd",
            Self::Nl => "Nl",
            Self::No => "No",
            Self::Zs => "Zs",
            Self::Zl => "Zl",
            Self::Zp => "Zp",
            Self::Cc => "Cc",
            Self::Cf => "Cf",
            Self::Cs => "Cs",
            Self::Co => "Co",
            Self::Cn => "Cn",
            Self::Lu => "Lu",
            Self::Ll => "Ll",
            Self::Lt => "Lt",
            Self::Lm => "Lm",
            Self::Lo => "Lo",
            Self::Pc => "Pc",
            Self::Pd => "Pd",
            Self::Ps => "Ps",
            Self::Pe => "Pe",
            Self::Pi => "Pi",
            Self::Pf => "Pf",
            Self::Po => "Po",
            Self::Sm => "Sm",
            Self::Sc => "Sc",
            Self::Sk => "Sk",
            Self::So => "So",
        }
    }

    /// 消費側列挙型と一致する数値IDを取得します。
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// カテゴリが属する出力バケットを取得します。
    ///
    /// このマッチは網羅的であるため、バケットに割り当てられないカテゴリは
    /// コンパイル時に存在し得ません。
    pub const fn bucket(self) -> Bucket {
        match self {
            Self::Lu | Self::Ll | Self::Lt | Self::Lm | Self::Lo => Bucket::Letters,
            Self::Nd | Self::Nl | Self::No => Bucket::Numbers,
            Self::Zs => Bucket::Whitespace,
            Self::Cc | Self::Cf => Bucket::Controls,
            Self::Zl | Self::Zp => Bucket::Linebreaks,
            Self::Pc | Self::Pd | Self::Ps | Self::Pe | Self::Pi | Self::Pf | Self::Po => {
                Bucket::Punctuations
            }
            Self::Sm | Self::Sc | Self::Sk | Self::So => Bucket::Symbols,
            Self::Cs => Bucket::Surrogates,
            Self::Mn | Self::Mc | Self::Me => Bucket::Marks,
            Self::Co | Self::Cn => Bucket::Others,
        }
    }

    /// 文字ケースの種別を取得します。
    ///
    /// Lu/Ll/Ltはそれぞれ大文字/小文字/タイトルケース、
    /// Lm/Loを含む残りのカテゴリはケースなしです。
    pub const fn case_kind(self) -> CaseKind {
        match self {
            Self::Lu => CaseKind::Upper,
            Self::Ll => CaseKind::Lower,
            Self::Lt => CaseKind::Title,
            _ => CaseKind::None,
        }
    }
}

/// コードポイントの双方向クラス
///
/// 判別子は消費側の`UChar::Direction`列挙型と同じ順序で0〜22に固定されています。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// Left-to-Right
    L = 0,
    /// Right-to-Left
    R = 1,
    /// European Number
    EN = 2,
    /// European Number Separator
    ES = 3,
    /// European Number Terminator
    ET = 4,
    /// Arabic Number
    AN = 5,
    /// Common Number Separator
    CS = 6,
    /// Paragraph Separator
    B = 7,
    /// Segment Separator
    S = 8,
    /// Whitespace
    WS = 9,
    /// Other Neutral
    ON = 10,
    /// Left-to-Right Embedding
    LRE = 11,
    /// Left-to-Right Override
    LRO = 12,
    /// Arabic Letter
    AL = 13,
    /// Right-to-Left Embedding
    RLE = 14,
    /// Right-to-Left Override
    RLO = 15,
    /// Pop Directional Format
    PDF = 16,
    /// Nonspacing Mark
    NSM = 17,
    /// Boundary Neutral
    BN = 18,
    /// Left-to-Right Isolate
    LRI = 19,
    /// Right-to-Left Isolate
    RLI = 20,
    /// First Strong Isolate
    FSI = 21,
    /// Pop Directional Isolate
    PDI = 22,
}

impl Direction {
    /// すべての双方向クラスをID順に並べた配列
    pub const ALL: [Self; 23] = [
        Self::L,
        Self::R,
        Self::EN,
        Self::ES,
        Self::ET,
        Self::AN,
        Self::CS,
        Self::B,
        Self::S,
        Self::WS,
        Self::ON,
        Self::LRE,
        Self::LRO,
        Self::AL,
        Self::RLE,
        Self::RLO,
        Self::PDF,
        Self::NSM,
        Self::BN,
        Self::LRI,
        Self::RLI,
        Self::FSI,
        Self::PDI,
    ];

    /// テキストコードから双方向クラスを解決します。
    ///
    /// # 引数
    ///
    /// * `code` - `UnicodeData.txt`第5フィールドの双方向クラスコード
    ///
    /// # 戻り値
    ///
    /// 既知のコードであれば `Some(Direction)`、未知のコードであれば `None`
    pub fn from_code(code: &str) -> Option<Self> {
        let direction = match code {
            "L" => Self::L,
            "R" => Self::R,
            "EN" => Self::EN,
            "ES" => Self::ES,
            "ET" => Self::ET,
            "AN" => Self::AN,
            "CS" => Self::CS,
            "B" => Self::B,
            "S" => Self::S,
            "WS" => Self::WS,
            "ON" => Self::ON,
            "LRE" => Self::LRE,
            "LRO" => Self::LRO,
            "AL" => Self::AL,
            "RLE" => Self::RLE,
            "RLO" => Self::RLO,
            "PDF" => Self::PDF,
            "NSM" => Self::NSM,
            "BN" => Self::BN,
            "LRI" => Self::LRI,
            "RLI" => Self::RLI,
            "FSI" => Self::FSI,
            "PDI" => Self::PDI,
            _ => return None,
        };
        Some(direction)
    }

    /// 消費側列挙型と一致する数値IDを取得します。
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// 30の一般カテゴリを分割する10個の出力バケット
///
/// 各カテゴリは[`Category::bucket`]によってちょうど1つのバケットに属します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// 文字 (Lu, Ll, Lt, Lm, Lo)
    Letters,
    /// 数字 (Nd, Nl, No)
    Numbers,
    /// 空白 (Zs)
    Whitespace,
    /// 制御・書式 (Cc, Cf)
    Controls,
    /// 行・段落区切り (Zl, Zp)
    Linebreaks,
    /// 句読点 (Pc, Pd, Ps, Pe, Pi, Pf, Po)
    Punctuations,
    /// 記号 (Sm, Sc, Sk, So)
    Symbols,
    /// サロゲート (Cs)
    Surrogates,
    /// 結合マーク (Mn, Mc, Me)
    Marks,
    /// その他 (Co, Cn)
    Others,
}

/// 文字ケースの種別
///
/// 判別子は消費側の`UCHAR_CASE_*`定数と一致します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CaseKind {
    /// ケースなし
    None = 0,
    /// 大文字
    Upper = 1,
    /// 小文字
    Lower = 2,
    /// タイトルケース
    Title = 3,
}

impl CaseKind {
    /// 消費側定数と一致する数値IDを取得します。
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }
}
