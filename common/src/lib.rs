//! MRI Classifier Common Library
//!
//! ブラウザ(WASM)とCLIで共有されるコントローラ・型・ユーティリティ

pub mod controller;
pub mod data_url;
pub mod endpoint;
pub mod error;
pub mod response;
pub mod types;

pub use controller::{Controller, Phase, Preview, Selection, Submission, SubmitRejected, Ticket};
pub use data_url::encode_data_url;
pub use endpoint::{Endpoint, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use error::{Error, Result};
pub use response::{interpret_response, Outcome, FALLBACK_ERROR_MESSAGE};
pub use types::{Prediction, PredictResponse, NO_FILE_MESSAGE, READ_ERROR_MESSAGE};
