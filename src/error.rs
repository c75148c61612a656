//! # 统一错误处理模块
//!
//! 定义 matforge 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 引用 `design/classify.rs` 的 `DesignFailure`

use crate::design::DesignFailure;
use thiserror::Error;

/// matforge 统一错误类型
#[derive(Error, Debug)]
pub enum MatforgeError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid molecular structure in {path}: {reason}")]
    InvalidStructure { path: String, reason: String },

    #[error("Failed to parse JSON from {path}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported input: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 导出与渲染错误
    // ─────────────────────────────────────────────────────────────
    #[error("Export refused for '{name}': coordinate block failed validation")]
    ExportRefused { name: String },

    #[error("Rendering failed: {0}")]
    RenderError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    MissingRequirement(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // AI 服务错误
    // ─────────────────────────────────────────────────────────────
    #[error("{}", .0.user_message())]
    Design(#[from] DesignFailure),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MatforgeError>;
