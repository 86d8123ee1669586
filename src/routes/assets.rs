use std::path::Path;

use warp::Filter;

/// Serves the static tree under `/`, with `songs/` mounted explicitly so it
/// can live outside the static root if configured that way.
pub fn route(static_dir: &Path) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let songs = warp::path("songs").and(warp::fs::dir(static_dir.join("songs")));

    songs.or(warp::fs::dir(static_dir.to_path_buf()))
}
