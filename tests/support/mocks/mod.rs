// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memory;
pub mod settings;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// インメモリ永続化
pub use memory::{InMemoryCatalog, KNOWN_BACKEND, KNOWN_LANGS};

// 設定リポジトリ
pub use settings::InMemorySettings;

// ユーティリティ関連
pub use util::{DummyClock, StepClock};
