pub mod handlers;
mod routes;

pub use routes::router;
