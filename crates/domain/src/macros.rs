/// 必須（空文字不可）の String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - serde: 文字列として入出力し、デシリアライズは `new()` の検証を通す
/// - `new()`: 空チェック（trim はしない。保存値は入力そのまま）
/// - `as_str()`: 文字列参照
/// - `Display`
///
/// # 引数
///
/// - `$label`: エラーメッセージに使うラベル（例: `"タイトル"`）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use songbook_domain::song::SongTitle;
///
/// let title = SongTitle::new("Supermassive Black Hole")?;
/// assert_eq!(title.as_str(), "Supermassive Black Hole");
/// assert!(SongTitle::new("").is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_required_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(try_from = "String", into = "String")]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl TryFrom<String> for $Name {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$Name> for String {
            fn from(value: $Name) -> Self {
                value.0
            }
        }

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                Ok(Self(value))
            }

            /// DB から読み出した値を検証なしで復元する
            pub(crate) fn from_db(value: String) -> Self {
                Self(value)
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}
