//! 楽曲ユースケース
//!
//! 各操作はリポジトリのステートメントを高々 1 回だけ実行する。
//! リトライはせず、ストアの失敗はそのまま `CoreError::Database` として返す。

use std::sync::Arc;

use songbook_domain::{
    DomainError,
    pagination::Pagination,
    song::{NewSong, Song, SongId},
    verse::verses,
};
use songbook_infra::repository::SongRepository;

use crate::error::CoreError;

/// 楽曲ユースケース
pub struct SongUseCaseImpl {
    song_repository: Arc<dyn SongRepository>,
}

impl SongUseCaseImpl {
    pub fn new(song_repository: Arc<dyn SongRepository>) -> Self {
        Self { song_repository }
    }

    /// 楽曲一覧を ID 昇順で 1 ページ分取得する
    ///
    /// 結果が空でもエラーにはしない。
    #[tracing::instrument(skip(self))]
    pub async fn list_songs(&self, pagination: Pagination) -> Result<Vec<Song>, CoreError> {
        Ok(self.song_repository.find_page(pagination).await?)
    }

    /// 歌詞を節に分割し、指定ページの節を返す
    ///
    /// - 楽曲が存在しない → `NotFound`
    /// - 歌詞が空 → `NotFound`（歌詞なし）
    /// - ページが範囲外 → 空の列
    #[tracing::instrument(skip(self), fields(%id))]
    pub async fn get_song_verses(
        &self,
        id: SongId,
        pagination: Pagination,
    ) -> Result<Vec<String>, CoreError> {
        let text = self
            .song_repository
            .find_text(id)
            .await?
            .ok_or_else(|| song_not_found(id))?;

        if text.is_empty() {
            return Err(CoreError::NotFound(format!(
                "楽曲に歌詞が登録されていません: {id}"
            )));
        }

        let all: Vec<&str> = verses(&text).collect();
        Ok(pagination
            .slice(&all)
            .iter()
            .map(|verse| (*verse).to_string())
            .collect())
    }

    /// 楽曲を作成する（ID はストアが採番する）
    #[tracing::instrument(skip_all)]
    pub async fn create_song(&self, song: NewSong) -> Result<Song, CoreError> {
        let song = self.song_repository.insert(song).await?;
        tracing::info!(song_id = %song.id(), "楽曲を作成しました");
        Ok(song)
    }

    /// 楽曲の全フィールドを上書きする
    #[tracing::instrument(skip(self, song), fields(%id))]
    pub async fn update_song(&self, id: SongId, song: NewSong) -> Result<(), CoreError> {
        let affected = self.song_repository.update(id, &song).await?;
        if affected == 0 {
            return Err(song_not_found(id));
        }
        Ok(())
    }

    /// 楽曲を削除する
    #[tracing::instrument(skip(self), fields(%id))]
    pub async fn delete_song(&self, id: SongId) -> Result<(), CoreError> {
        let affected = self.song_repository.delete(id).await?;
        if affected == 0 {
            return Err(song_not_found(id));
        }
        Ok(())
    }
}

fn song_not_found(id: SongId) -> CoreError {
    DomainError::NotFound {
        entity_type: "楽曲",
        id:          id.to_string(),
    }
    .into()
}
