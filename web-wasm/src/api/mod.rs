//! 推論サービス連携

mod predict;

pub use predict::{build_form_data, predict, FILE_FIELD};
