//! # 楽曲（Song）
//!
//! 楽曲カタログの唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! - 作成: 識別子はストレージが採番する（[`NewSong`] → [`Song`]）
//! - 更新: 識別子以外の全フィールドを上書きする
//! - 削除: 物理削除（バージョン管理・論理削除なし）
//!
//! ## 不変条件
//!
//! - タイトル、アーティスト、リリース日、歌詞、リンクは空文字不可
//! - グループ名は省略可能（`None` と空文字 `Some("")` は区別する）

use serde::{Deserialize, Serialize};

// =========================================================================
// SongId
// =========================================================================

/// 楽曲 ID
///
/// ストレージが採番する整数 ID。一度割り当てられたら変更されない。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct SongId(i64);

impl SongId {
    /// 既存の整数値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// 必須フィールドの値オブジェクト
// =========================================================================

define_required_string! {
    /// 楽曲タイトル
    pub struct SongTitle {
        label: "タイトル",
    }
}

define_required_string! {
    /// アーティスト名
    pub struct ArtistName {
        label: "アーティスト",
    }
}

define_required_string! {
    /// リリース日
    ///
    /// 書式は自由（`2006-07-16`、`16.07.2006` などをそのまま保持する）。
    pub struct ReleaseDate {
        label: "リリース日",
    }
}

define_required_string! {
    /// 歌詞テキスト
    ///
    /// 空行（`"\n\n"`）区切りで節に分割される。分割は [`crate::verse`] を参照。
    pub struct LyricText {
        label: "歌詞",
    }
}

define_required_string! {
    /// 外部リンク
    pub struct SongLink {
        label: "リンク",
    }
}

// =========================================================================
// NewSong / Song
// =========================================================================

/// 識別子を持たない楽曲データ
///
/// 作成・更新の入力。全フィールドが検証済みであることを型で保証する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    title:        SongTitle,
    artist:       ArtistName,
    release_date: ReleaseDate,
    text:         LyricText,
    link:         SongLink,
    group_name:   Option<String>,
}

impl NewSong {
    /// 入力値を検証して楽曲データを作成する
    ///
    /// 最初に見つかった空フィールドを `DomainError::Validation` として返す。
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_date: impl Into<String>,
        text: impl Into<String>,
        link: impl Into<String>,
        group_name: Option<String>,
    ) -> Result<Self, crate::DomainError> {
        Ok(Self {
            title: SongTitle::new(title)?,
            artist: ArtistName::new(artist)?,
            release_date: ReleaseDate::new(release_date)?,
            text: LyricText::new(text)?,
            link: SongLink::new(link)?,
            group_name,
        })
    }

    pub fn title(&self) -> &SongTitle {
        &self.title
    }

    pub fn artist(&self) -> &ArtistName {
        &self.artist
    }

    pub fn release_date(&self) -> &ReleaseDate {
        &self.release_date
    }

    pub fn text(&self) -> &LyricText {
        &self.text
    }

    pub fn link(&self) -> &SongLink {
        &self.link
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// 採番された ID を付与して楽曲エンティティにする
    pub fn with_id(self, id: SongId) -> Song {
        Song { id, fields: self }
    }
}

/// 楽曲エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    id:     SongId,
    fields: NewSong,
}

impl Song {
    /// DB から読み出した行を復元する
    ///
    /// 保存済みデータは検証を経ずに信頼する（空の歌詞が直接投入されている場合もある）。
    pub fn from_db(
        id: SongId,
        title: String,
        artist: String,
        release_date: String,
        text: String,
        link: String,
        group_name: Option<String>,
    ) -> Self {
        Self {
            id,
            fields: NewSong {
                title: SongTitle::from_db(title),
                artist: ArtistName::from_db(artist),
                release_date: ReleaseDate::from_db(release_date),
                text: LyricText::from_db(text),
                link: SongLink::from_db(link),
                group_name,
            },
        }
    }

    pub fn id(&self) -> SongId {
        self.id
    }

    pub fn title(&self) -> &SongTitle {
        self.fields.title()
    }

    pub fn artist(&self) -> &ArtistName {
        self.fields.artist()
    }

    pub fn release_date(&self) -> &ReleaseDate {
        self.fields.release_date()
    }

    pub fn text(&self) -> &LyricText {
        self.fields.text()
    }

    pub fn link(&self) -> &SongLink {
        self.fields.link()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.fields.group_name()
    }

    /// 識別子を維持したまま全フィールドを上書きする
    pub fn overwritten_with(self, fields: NewSong) -> Self {
        Self {
            id: self.id,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn new_song() -> NewSong {
        NewSong::new(
            "Supermassive Black Hole",
            "Muse",
            "16.07.2006",
            "Ooh baby, don't you know I suffer?\n\nOoh you set my soul alight",
            "https://www.youtube.com/watch?v=Xsp3_a-PMTw",
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_全フィールドが揃っていれば作成できる() {
        let song = new_song();

        assert_eq!(song.title().as_str(), "Supermassive Black Hole");
        assert_eq!(song.artist().as_str(), "Muse");
        assert_eq!(song.group_name(), None);
    }

    #[rstest]
    #[case("", "A", "2022-01-01", "L", "x.com", "タイトルは必須です")]
    #[case("T", "", "2022-01-01", "L", "x.com", "アーティストは必須です")]
    #[case("T", "A", "", "L", "x.com", "リリース日は必須です")]
    #[case("T", "A", "2022-01-01", "", "x.com", "歌詞は必須です")]
    #[case("T", "A", "2022-01-01", "L", "", "リンクは必須です")]
    fn test_必須フィールドが空ならバリデーションエラー(
        #[case] title: &str,
        #[case] artist: &str,
        #[case] release_date: &str,
        #[case] text: &str,
        #[case] link: &str,
        #[case] expected: &str,
    ) {
        let result = NewSong::new(title, artist, release_date, text, link, None);

        match result {
            Err(crate::DomainError::Validation(msg)) => assert_eq!(msg, expected),
            other => panic!("Validation エラーを期待したが {other:?}"),
        }
    }

    #[test]
    fn test_空白のみの値はtrimせずに受け入れる() {
        let title = SongTitle::new(" ").unwrap();

        assert_eq!(title.as_str(), " ");
    }

    #[test]
    fn test_グループ名の空文字と未指定は区別される() {
        let with_empty = NewSong::new("T", "A", "D", "L", "x", Some(String::new())).unwrap();
        let without = NewSong::new("T", "A", "D", "L", "x", None).unwrap();

        assert_eq!(with_empty.group_name(), Some(""));
        assert_eq!(without.group_name(), None);
    }

    #[test]
    fn test_overwritten_withはidを維持して上書きする() {
        let song = new_song().with_id(SongId::from_i64(7));
        let fields = NewSong::new("New", "Artist", "2024", "text", "link", Some("G".into())).unwrap();

        let updated = song.overwritten_with(fields);

        assert_eq!(updated.id(), SongId::from_i64(7));
        assert_eq!(updated.title().as_str(), "New");
        assert_eq!(updated.group_name(), Some("G"));
    }

    #[test]
    fn test_from_dbは空の歌詞も復元できる() {
        let song = Song::from_db(
            SongId::from_i64(1),
            "T".into(),
            "A".into(),
            "D".into(),
            String::new(),
            "x".into(),
            None,
        );

        assert_eq!(song.text().as_str(), "");
    }

    #[test]
    fn test_song_idはjsonで数値になる() {
        let json = serde_json::to_value(SongId::from_i64(42)).unwrap();

        assert_eq!(json, serde_json::json!(42));
    }

    #[test]
    fn test_必須フィールド型のデシリアライズは空文字を拒否する() {
        let result = serde_json::from_str::<SongTitle>(r#""""#);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("タイトルは必須です"));
    }

    #[test]
    fn test_必須フィールド型は文字列としてjson入出力する() {
        let artist: ArtistName = serde_json::from_str(r#""Muse""#).unwrap();

        assert_eq!(artist.as_str(), "Muse");
        assert_eq!(serde_json::to_value(&artist).unwrap(), serde_json::json!("Muse"));
    }
}
