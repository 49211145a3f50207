//! # ページネーション
//!
//! クライアントが指定する `page`（1 始まり）と `limit`（1 ページの件数）を
//! 正規化し、ストレージ向けの `LIMIT/OFFSET` またはメモリ上の列に対する
//! スライス範囲に変換する。
//!
//! ## デフォルト値
//!
//! | 入力 | 解決後 |
//! |------|--------|
//! | `page` 未指定 / 0 以下 | `1` |
//! | `limit` 未指定 / 0 以下 | [`DEFAULT_LIMIT`] |
//!
//! 楽曲一覧と歌詞の節取得で同じ規則を使う。
//!
//! I/O を持たず、失敗しない。数値として解釈できない入力の扱いは呼び出し側（HTTP 層）の責務。

use std::ops::Range;

/// `limit` 未指定時の件数
pub const DEFAULT_LIMIT: i64 = 10;

/// 正規化済みのページ指定
///
/// # 不変条件
///
/// - `page >= 1`
/// - `limit >= 1`
///
/// # 使用例
///
/// ```rust
/// use songbook_domain::pagination::Pagination;
///
/// let p = Pagination::resolve(Some(0), None);
/// assert_eq!(p.page(), 1);
/// assert_eq!(p.limit(), 10);
/// assert_eq!(p.offset(), 0);
///
/// let verses = ["A", "B", "C"];
/// assert_eq!(Pagination::resolve(Some(2), Some(2)).slice(&verses), ["C"]);
/// assert!(Pagination::resolve(Some(3), Some(2)).slice(&verses).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page:  i64,
    limit: i64,
}

impl Pagination {
    /// 生のクエリ値からページ指定を解決する
    pub fn resolve(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// 先頭からの読み飛ばし件数 `(page - 1) * limit`
    ///
    /// 巨大な入力でもオーバーフローせず `i64::MAX` で飽和する。
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// 長さ `len` の列に対する半開区間 `start..end` を返す
    ///
    /// - `start >= len` の場合は空区間 `len..len`
    /// - `end > len` の場合は `len` に切り詰める
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= len {
            return len..len;
        }
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(len);
        start..end
    }

    /// 列から該当ページ部分を切り出す
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
