//! ドキュメント読み込みの実装

pub mod html;
pub mod web;

pub use web::WebPageLoader;
