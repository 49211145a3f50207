//! # 歌詞の節分割
//!
//! 歌詞テキストを空行（`"\n\n"`）で区切り、節（verse）の列にする。
//!
//! - trim・正規化・空節の除去は行わない（区切りが連続すれば空文字の節が残る）
//! - 空のテキストは空文字 1 節として扱う
//!
//! 空テキストを「歌詞なし」として扱うかどうかは呼び出し側が決める。

use std::str::Split;

/// 節の区切り文字列
pub const VERSE_DELIMITER: &str = "\n\n";

/// 節のイテレータ
///
/// 遅延評価で、`Clone` すれば先頭からやり直せる。
#[derive(Debug, Clone)]
pub struct Verses<'a> {
    inner: Split<'a, &'static str>,
}

impl<'a> Iterator for Verses<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// テキストを節に分割する
///
/// ```rust
/// use songbook_domain::verse::verses;
///
/// let v: Vec<&str> = verses("A\n\nB\n\nC").collect();
/// assert_eq!(v, ["A", "B", "C"]);
///
/// let empty: Vec<&str> = verses("").collect();
/// assert_eq!(empty, [""]);
/// ```
pub fn verses(text: &str) -> Verses<'_> {
    Verses {
        inner: text.split(VERSE_DELIMITER),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("A\n\nB\n\nC", vec!["A", "B", "C"])]
    #[case("", vec![""])]
    #[case("single line", vec!["single line"])]
    #[case("A\nB", vec!["A\nB"])]
    #[case("A\n\n\n\nB", vec!["A", "", "B"])]
    #[case("\n\nA\n\n", vec!["", "A", ""])]
    #[case("A\n\n\nB", vec!["A", "\nB"])]
    #[case(" A \n\n B ", vec![" A ", " B "])]
    fn test_空行で分割し空節も位置を保って残す(#[case] text: &str, #[case] expected: Vec<&str>) {
        let actual: Vec<&str> = verses(text).collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_cloneで先頭からやり直せる() {
        let iter = verses("A\n\nB");

        let first: Vec<&str> = iter.clone().collect();
        let second: Vec<&str> = iter.collect();

        assert_eq!(first, ["A", "B"]);
        assert_eq!(first, second);
    }
}
