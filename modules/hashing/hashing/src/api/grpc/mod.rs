mod server;

pub use server::HashingServiceImpl;
