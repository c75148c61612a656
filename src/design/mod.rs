//! # 材料设计模块
//!
//! 与生成式 AI 服务的边界：提示词构建、HTTP 调用、失败分类。
//! 预览核心不依赖本模块。
//!
//! ## 子模块
//! - `prompt`: 提示词与响应 schema
//! - `client`: `MaterialDesigner` trait 与 Gemini 实现
//! - `classify`: 失败描述 → 用户提示
//!
//! ## 依赖关系
//! - 被 `commands/design.rs` 使用
//! - 使用 `models/material.rs`

pub mod classify;
pub mod client;
pub mod prompt;

pub use classify::DesignFailure;
pub use client::{GeminiClient, GeminiConfig, MaterialDesigner};
