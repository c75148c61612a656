//! # AI 服务失败分类
//!
//! 根据失败描述文本匹配用户可见的类别，按固定优先级取第一个命中项：
//! 安全拦截 > 凭据错误 > 限流 > 请求格式错误 > 通用错误。
//! 没有任何描述文本的失败归为 `Unexpected`。
//!
//! ## 依赖关系
//! - 被 `design/client.rs` 产生，被 `error.rs` 和 `commands/design.rs` 使用
//! - 使用 `thiserror`

use thiserror::Error;

/// 失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    SafetyBlock,
    Credential,
    RateLimit,
    MalformedRequest,
    Generic,
    Unexpected,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::SafetyBlock => write!(f, "safety"),
            FailureKind::Credential => write!(f, "credential"),
            FailureKind::RateLimit => write!(f, "rate-limit"),
            FailureKind::MalformedRequest => write!(f, "malformed-request"),
            FailureKind::Generic => write!(f, "api"),
            FailureKind::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// 按优先级对失败描述分类
pub fn classify(message: Option<&str>) -> FailureKind {
    let Some(message) = message else {
        return FailureKind::Unexpected;
    };

    if message.contains("SAFETY") {
        FailureKind::SafetyBlock
    } else if message.contains("API key not valid") || message.contains("API_KEY_INVALID") {
        FailureKind::Credential
    } else if message.contains("429")
        || message
            .to_lowercase()
            .contains("resource has been exhausted")
    {
        FailureKind::RateLimit
    } else if message.contains("400") {
        FailureKind::MalformedRequest
    } else {
        FailureKind::Generic
    }
}

/// AI 调用失败
///
/// 保留服务端原始描述，分类在展示层完成。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignFailure {
    /// 服务返回非成功状态（描述包含状态码与响应体）
    #[error("{0}")]
    Api(String),

    /// 网络或传输层错误
    #[error("{0}")]
    Transport(String),

    /// 响应无法解析为材料记录
    #[error("{0}")]
    InvalidResponse(String),

    /// 返回的记录缺少字段
    #[error("Received incomplete data from the API.")]
    Incomplete,

    /// 没有任何描述的失败
    #[error("unknown failure")]
    Unknown,
}

impl DesignFailure {
    /// 原始描述文本
    pub fn description(&self) -> Option<String> {
        match self {
            DesignFailure::Unknown => None,
            other => Some(other.to_string()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        classify(self.description().as_deref())
    }

    /// 每个类别对应的唯一提示
    pub fn user_message(&self) -> String {
        let description = self.description().unwrap_or_default();
        match self.kind() {
            FailureKind::SafetyBlock => "The request was blocked by the AI's safety filters. Please modify your input and try again.".to_string(),
            FailureKind::Credential => {
                "API configuration error. Please contact the administrator.".to_string()
            }
            FailureKind::RateLimit => "The service is currently experiencing high demand. Please try again in a few moments.".to_string(),
            FailureKind::MalformedRequest => format!(
                "There was a problem with the request. The AI reported: {}. Please check your inputs.",
                description
            ),
            FailureKind::Generic => format!("An API error occurred: {}", description),
            FailureKind::Unexpected => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}
