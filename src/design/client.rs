//! # 生成式 AI 客户端
//!
//! 一次调用：需求 → 材料记录，或带原始描述的失败。
//! 调用方通过 `MaterialDesigner` trait 使用，便于替换实现。
//!
//! ## 依赖关系
//! - 被 `commands/design.rs` 调用
//! - 使用 `design/prompt.rs` 构建请求，`design/classify.rs` 描述失败
//! - 使用 `reqwest` (blocking) 发送 HTTP 请求，`serde_json` 解析响应

use crate::design::classify::DesignFailure;
use crate::design::prompt::{build_prompt, response_schema};
use crate::models::{MaterialRecord, UserRequirements};

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// 默认模型
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// 默认 API 地址
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 凭据请求头，密钥不进入 URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// 传输层错误描述中去掉 URL
fn transport_failure(e: reqwest::Error) -> DesignFailure {
    DesignFailure::Transport(e.without_url().to_string())
}

/// 材料设计服务
pub trait MaterialDesigner {
    fn design(&self, requirements: &UserRequirements) -> Result<MaterialRecord, DesignFailure>;
}

/// 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f64,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(120),
        }
    }

    /// generateContent 接口地址
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

// ─────────────────────────────────────────────────────────────
// 响应结构
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// 从响应中取出模型输出的文本
fn extract_text(response: GenerateContentResponse) -> Result<String, DesignFailure> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(DesignFailure::Api(format!("Prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| DesignFailure::InvalidResponse("Response contained no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(DesignFailure::Api(format!(
            "Response blocked or empty, finish reason: {}",
            reason
        )));
    }

    Ok(text)
}

/// 解析模型输出为材料记录并检查完整性
pub fn parse_record(text: &str) -> Result<MaterialRecord, DesignFailure> {
    let record: MaterialRecord = serde_json::from_str(text.trim())
        .map_err(|e| DesignFailure::InvalidResponse(format!("Invalid JSON from model: {}", e)))?;

    if !record.is_complete() {
        return Err(DesignFailure::Incomplete);
    }

    Ok(record)
}

/// 解析完整的 generateContent 响应体
pub fn parse_response_body(body: &str) -> Result<MaterialRecord, DesignFailure> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| DesignFailure::InvalidResponse(format!("Malformed API response: {}", e)))?;
    parse_record(&extract_text(response)?)
}

/// Gemini REST 客户端
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, DesignFailure> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport_failure)?;
        Ok(GeminiClient { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn request_body(&self, requirements: &UserRequirements) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(requirements) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": self.config.temperature
            }
        })
    }
}

impl MaterialDesigner for GeminiClient {
    fn design(&self, requirements: &UserRequirements) -> Result<MaterialRecord, DesignFailure> {
        let response = self
            .http
            .post(self.config.url())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&self.request_body(requirements))
            .send()
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.text().map_err(transport_failure)?;

        if !status.is_success() {
            // 保留状态码与响应体，供分类匹配
            return Err(DesignFailure::Api(format!("[{}] {}", status.as_u16(), body)));
        }

        parse_response_body(&body)
    }
}
