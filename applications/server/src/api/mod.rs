/// API route modules
pub mod auth;
pub mod health;
pub mod library;
pub mod playback;
pub mod playlists;
pub mod tracks;
