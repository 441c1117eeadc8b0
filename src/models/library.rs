use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Saved title on a profile's watchlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistItem {
    /// Unique identifier
    pub id: String,
    /// Owning profile identifier
    pub profile_id: String,
    /// Upstream catalog title identifier
    pub tmdb_id: i64,
    /// Media type ("movie" or "tv")
    pub media_type: String,
    /// When the title was added
    pub added_at: DateTime<Utc>,
}

impl WatchlistItem {
    pub fn new(profile_id: impl Into<String>, tmdb_id: i64, media_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile_id: profile_id.into(),
            tmdb_id,
            media_type: media_type.into(),
            added_at: Utc::now(),
        }
    }
}

/// Playback progress for a title on a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchHistoryItem {
    /// Unique identifier
    pub id: String,
    /// Owning profile identifier
    pub profile_id: String,
    /// Upstream catalog title identifier
    pub tmdb_id: i64,
    /// Media type ("movie" or "tv")
    pub media_type: String,
    /// Playback position in seconds
    pub position: i64,
    /// Total duration in seconds
    pub duration: i64,
    /// Last playback update time
    pub last_watched: DateTime<Utc>,
}

impl WatchHistoryItem {
    pub fn new(
        profile_id: impl Into<String>,
        tmdb_id: i64,
        media_type: impl Into<String>,
        position: i64,
        duration: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile_id: profile_id.into(),
            tmdb_id,
            media_type: media_type.into(),
            position,
            duration,
            last_watched: Utc::now(),
        }
    }
}
