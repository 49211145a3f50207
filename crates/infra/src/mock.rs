//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! songbook-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use songbook_domain::{
    pagination::Pagination,
    song::{NewSong, Song, SongId},
};

use crate::{error::InfraError, repository::SongRepository};

// ===== MockSongRepository =====

#[derive(Default)]
struct MockSongState {
    songs:   BTreeMap<SongId, Song>,
    last_id: i64,
    failing: bool,
}

/// ID 昇順に楽曲を保持するインメモリリポジトリ
///
/// `BIGSERIAL` と同様に ID は 1 から単調増加し、削除しても再利用しない。
#[derive(Clone, Default)]
pub struct MockSongRepository {
    state: Arc<Mutex<MockSongState>>,
}

impl MockSongRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の全操作をストアエラーにする
    pub fn fail_all(&self) {
        self.state.lock().unwrap().failing = true;
    }

    /// 検証を経ずに行を直接投入する（空の歌詞など）
    pub fn add_song(&self, song: Song) {
        let mut state = self.state.lock().unwrap();
        state.last_id = state.last_id.max(song.id().as_i64());
        state.songs.insert(song.id(), song);
    }

    /// 現在保持している楽曲を ID 昇順で返す
    pub fn songs(&self) -> Vec<Song> {
        self.state.lock().unwrap().songs.values().cloned().collect()
    }

    fn check(state: &MockSongState) -> Result<(), InfraError> {
        if state.failing {
            return Err(InfraError::unexpected("mock store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl SongRepository for MockSongRepository {
    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Song>, InfraError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        let all: Vec<Song> = state.songs.values().cloned().collect();
        Ok(pagination.slice(&all).to_vec())
    }

    async fn find_text(&self, id: SongId) -> Result<Option<String>, InfraError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state
            .songs
            .get(&id)
            .map(|song| song.text().as_str().to_string()))
    }

    async fn insert(&self, song: NewSong) -> Result<Song, InfraError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        state.last_id += 1;
        let song = song.with_id(SongId::from_i64(state.last_id));
        state.songs.insert(song.id(), song.clone());
        Ok(song)
    }

    async fn update(&self, id: SongId, song: &NewSong) -> Result<u64, InfraError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        let Some(existing) = state.songs.remove(&id) else {
            return Ok(0);
        };
        state
            .songs
            .insert(id, existing.overwritten_with(song.clone()));
        Ok(1)
    }

    async fn delete(&self, id: SongId) -> Result<u64, InfraError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(u64::from(state.songs.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio_test::assert_err;

    use super::*;

    fn new_song(title: &str) -> NewSong {
        NewSong::new(title, "A", "2022-01-01", "L1\n\nL2", "x.com", None).unwrap()
    }

    #[tokio::test]
    async fn test_insertは1から連番を採番する() {
        let repo = MockSongRepository::new();

        let first = repo.insert(new_song("one")).await.unwrap();
        let second = repo.insert(new_song("two")).await.unwrap();

        assert_eq!(first.id(), SongId::from_i64(1));
        assert_eq!(second.id(), SongId::from_i64(2));
    }

    #[tokio::test]
    async fn test_削除したidは再利用しない() {
        let repo = MockSongRepository::new();
        let first = repo.insert(new_song("one")).await.unwrap();
        repo.delete(first.id()).await.unwrap();

        let second = repo.insert(new_song("two")).await.unwrap();

        assert_eq!(second.id(), SongId::from_i64(2));
    }

    #[tokio::test]
    async fn test_find_pageはid昇順でページを返す() {
        let repo = MockSongRepository::new();
        for title in ["a", "b", "c"] {
            repo.insert(new_song(title)).await.unwrap();
        }

        let page = repo
            .find_page(Pagination::resolve(Some(2), Some(2)))
            .await
            .unwrap();

        let titles: Vec<&str> = page.iter().map(|s| s.title().as_str()).collect();
        assert_eq!(titles, ["c"]);
    }

    #[tokio::test]
    async fn test_存在しないidの更新と削除は0行() {
        let repo = MockSongRepository::new();

        assert_eq!(repo.update(SongId::from_i64(9), &new_song("x")).await.unwrap(), 0);
        assert_eq!(repo.delete(SongId::from_i64(9)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fail_all後は全操作がエラー() {
        let repo = MockSongRepository::new();
        repo.fail_all();

        assert_err!(repo.find_page(Pagination::default()).await);
        assert_err!(repo.find_text(SongId::from_i64(1)).await);
        assert_err!(repo.insert(new_song("x")).await);
        assert_err!(repo.delete(SongId::from_i64(1)).await);
    }
}
