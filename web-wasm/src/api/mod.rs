//! 分類APIクライアント

pub mod classify;
