use warp::Filter;

pub const DEFAULT_HEALTH_PORT: u16 = 8080;

/// `GET /health` -> `200 OK` with body `OK`, regardless of bot state.
pub fn health_route() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
{
    warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .map(|| "OK")
}

pub async fn run_health_server(port: u16) {
    log::info!("Health check server started on port {}", port);
    warp::serve(health_route()).run(([0, 0, 0, 0], port)).await;
}
