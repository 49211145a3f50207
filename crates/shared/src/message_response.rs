//! # メッセージレスポンス
//!
//! 更新・削除など、返すべきエンティティを持たない成功レスポンスの形式 `{ "message": "..." }`。

use serde::{Deserialize, Serialize};

/// 成功メッセージのみを返すレスポンス
///
/// ```
/// use songbook_shared::MessageResponse;
///
/// let response = MessageResponse::new("楽曲を削除しました");
/// assert_eq!(response.message, "楽曲を削除しました");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializeでmessageフィールドのみを持つ() {
        let json = serde_json::to_value(MessageResponse::new("ok")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "ok" }));
    }
}
