use std::convert::Infallible;

use serde::Serialize;
use warp::http::{header, StatusCode};
use warp::{Filter, Rejection, Reply};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::resources::ResourceStore;

pub mod assets;
pub mod feed;
pub mod playlist;

/// Body sent when a bundled resource is absent or a lookup finds nothing.
pub const NULL: &[u8] = b"null";

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

pub fn base(config: &Config) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let store = ResourceStore::new(&config.resource_dir);

    root()
        .or(feed::route(store.clone()))
        .or(playlist::route(store))
        .or(assets::route(&config.static_dir))
        .recover(recover)
        .with(warp::trace::request())
}

fn root() -> impl Filter<Extract = impl warp::Reply, Error = Rejection> + Clone {
    warp::path::end().and(warp::get()).map(|| "Hello World!")
}

pub(crate) fn with_store(
    store: ResourceStore,
) -> impl Filter<Extract = (ResourceStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

/// Replies with a resource's bytes untouched, or `null` if it is missing.
pub(crate) async fn pass_through(
    store: ResourceStore,
    name: &'static str,
) -> std::result::Result<impl Reply, Rejection> {
    let body = reject_on_err(store.load(name).await)?.unwrap_or_else(|| NULL.to_vec());
    Ok(warp::reply::with_header(
        body,
        header::CONTENT_TYPE,
        "application/json",
    ))
}

pub(crate) fn reject_on_err<T>(result: Result<T>) -> std::result::Result<T, Rejection> {
    result.map_err(warp::reject::custom)
}

pub async fn recover(rejection: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let (status, message) = if let Some(err) = rejection.find::<Error>() {
        tracing::error!(error = %err, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    } else if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "not found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        tracing::warn!(?rejection, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    };

    let body = warp::reply::json(&ErrorResponse { error: message });
    Ok(warp::reply::with_status(body, status))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use warp::http::Response;
    use warp::hyper::body::Bytes;

    pub const FEED_DOC: &str = "{\n  \"banners\": [ {\"title\": \"Weekly\"} ]\n}\n";
    pub const PLAYLISTS_DOC: &str = r#"[
    {"id": 1, "songs": [{"name": "A", "lyric": "la", "src": "a.mp3", "length": "3:00"}]},
    {"id": 42, "songs": [
        {"name": "B", "lyric": "first\nsecond", "src": "songs/b.mp3", "length": "4:10"},
        {"name": "C", "lyric": "", "src": "songs/c.mp3", "length": "2:05"}
    ]}
]"#;
    pub const SONG_BYTES: &[u8] = b"ID3\x03\x00\x00\x00\x00\x00\x00fake-audio";

    /// A resource tree with both documents, a static index and one song.
    pub fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "feed.json", FEED_DOC.as_bytes());
        write(dir.path(), "playlists.json", PLAYLISTS_DOC.as_bytes());
        write(dir.path(), "static/index.html", b"<h1>music</h1>");
        write(dir.path(), "static/songs/a.mp3", SONG_BYTES);
        dir
    }

    pub fn body(resp: &Response<Bytes>) -> &str {
        std::str::from_utf8(resp.body()).unwrap()
    }

    pub fn content_type(resp: &Response<Bytes>) -> &str {
        resp.headers()[header::CONTENT_TYPE].to_str().unwrap()
    }

    pub fn write(root: &Path, name: &str, contents: &[u8]) {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn root_greets() {
        let dir = fixture();
        let resp = warp::test::request()
            .path("/")
            .reply(&base(&Config::new(dir.path())))
            .await;

        assert_eq!(StatusCode::OK, resp.status());
        assert_eq!("Hello World!", body(&resp));
        assert!(content_type(&resp).starts_with("text/plain"));
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let dir = fixture();
        let resp = warp::test::request()
            .path("/nope/never")
            .reply(&base(&Config::new(dir.path())))
            .await;

        assert_eq!(StatusCode::NOT_FOUND, resp.status());
        assert_eq!(r#"{"error":"not found"}"#, body(&resp));
    }

    #[tokio::test]
    async fn writes_are_not_allowed() {
        let dir = fixture();
        let resp = warp::test::request()
            .method("POST")
            .path("/playlists")
            .reply(&base(&Config::new(dir.path())))
            .await;

        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, resp.status());
    }

    #[tokio::test]
    async fn malformed_document_is_500() {
        let dir = fixture();
        write(dir.path(), "playlists.json", b"[{\"id\": 1");

        let resp = warp::test::request()
            .path("/playlists/1")
            .reply(&base(&Config::new(dir.path())))
            .await;

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, resp.status());
        assert_eq!(r#"{"error":"internal server error"}"#, body(&resp));
    }
}
