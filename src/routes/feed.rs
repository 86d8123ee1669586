use warp::Filter;

use super::{pass_through, with_store};
use crate::resources::{ResourceStore, FEED};

pub fn route(store: ResourceStore) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("feed")
        .and(warp::get())
        .and(with_store(store))
        .and_then(|store: ResourceStore| pass_through(store, FEED))
}
