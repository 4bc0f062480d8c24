pub mod http;

pub use http::AskHttpClient;
