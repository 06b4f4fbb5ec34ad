//! Celeb Classify Common Library
//!
//! Web(WASM)ウィジェットと共有される型とユーティリティ

pub mod config;
pub mod data_url;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod state;
pub mod types;

pub use config::{json_body, PayloadFormat, WidgetConfig, IMAGE_DATA_FIELD};
pub use data_url::{encode_data_url, extract_base64, extract_mime_type, DEFAULT_MIME_TYPE};
pub use error::{ClassifyError, Result};
pub use matcher::{best_match, evaluate, format_score, score_rows, MatchView, ScoreRow};
pub use parser::{parse_entries, parse_response};
pub use state::{SelectedImage, SelectionStatus, SubmitOutcome, SubmitPhase, WidgetState};
pub use types::{ClassificationResponse, ClassificationResult};
