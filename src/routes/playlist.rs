use warp::Filter;

use super::{pass_through, reject_on_err, with_store};
use crate::model::{find_playlist, Playlist};
use crate::resources::{ResourceStore, PLAYLISTS};

pub fn route(store: ResourceStore) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let playlists = warp::path!("playlists")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: ResourceStore| pass_through(store, PLAYLISTS));

    let playlist_by_id = warp::path!("playlists" / String)
        .and(warp::get())
        .and(with_store(store))
        .and_then(get_playlist);

    playlists.or(playlist_by_id)
}

async fn get_playlist(id: String, store: ResourceStore) -> Result<warp::reply::Json, warp::Rejection> {
    let playlists = match reject_on_err(store.load_playlists().await)? {
        Some(playlists) => playlists,
        None => return Ok(warp::reply::json(&Option::<Playlist>::None)),
    };

    let found = find_playlist(&playlists, &id);
    if found.is_none() {
        tracing::debug!(%id, "no playlist with id");
    }
    Ok(warp::reply::json(&found))
}
