use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Song {
    pub name: String,
    pub lyric: String,
    /// Path of the audio file, relative to the static asset root.
    pub src: String,
    pub length: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Playlist {
    pub id: i64,
    pub songs: Vec<Song>,
}

/// Returns the first playlist whose id, rendered in decimal, equals `id`.
///
/// The comparison is on text, so `"01"` or `"+1"` never match playlist `1`.
pub fn find_playlist<'a>(playlists: &'a [Playlist], id: &str) -> Option<&'a Playlist> {
    playlists.iter().find(|playlist| playlist.id.to_string() == id)
}
