mod unsplash_client;

pub use unsplash_client::{RandomPhoto, UnsplashClient, UnsplashError};
