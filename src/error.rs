use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// API 调用错误
    Api(ApiError),
    /// 文件操作错误
    File(FileError),
    /// 业务逻辑错误
    Business(BusinessError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Business(e) => write!(f, "业务错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Business(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回错误响应（非 2xx 状态码）
    BadResponse {
        endpoint: String,
        status: u16,
    },
    /// 响应中缺少必要字段
    MissingField {
        endpoint: String,
        field: &'static str,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadResponse { endpoint, status } => {
                write!(f, "API返回错误响应 ({}): status={}", endpoint, status)
            }
            ApiError::MissingField { endpoint, field } => {
                write!(f, "API响应缺少字段 ({}): {}", endpoint, field)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 删除文件失败
    DeleteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录不存在
    DirectoryNotFound {
        path: String,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::DeleteFailed { path, source } => {
                write!(f, "删除文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
            FileError::DirectoryNotFound { path } => write!(f, "目录不存在: {}", path),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::DeleteFailed { source, .. }
            | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 业务逻辑错误
#[derive(Debug)]
pub enum BusinessError {
    /// 字段校验未通过
    ValidationFailed {
        field_count: usize,
    },
    /// 记录中缺少图片文件引用
    MissingImage {
        field: &'static str,
    },
    /// 邮件投递被拒绝（非 200 状态）
    DeliveryRejected {
        status: u16,
    },
    /// 记录提交失败
    RecordSubmitFailed {
        record_index: usize,
    },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::ValidationFailed { field_count } => {
                write!(f, "字段校验未通过 ({} 个字段不合法)", field_count)
            }
            BusinessError::MissingImage { field } => {
                write!(f, "记录缺少图片文件: {}", field)
            }
            BusinessError::DeliveryRejected { status } => {
                write!(f, "邮件投递被拒绝: status={}", status)
            }
            BusinessError::RecordSubmitFailed { record_index } => {
                write!(f, "记录提交失败 (记录: {})", record_index)
            }
        }
    }
}

impl std::error::Error for BusinessError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建API错误响应错误
    pub fn api_bad_response(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建响应缺少字段错误
    pub fn api_missing_field(endpoint: impl Into<String>, field: &'static str) -> Self {
        AppError::Api(ApiError::MissingField {
            endpoint: endpoint.into(),
            field,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建邮件投递被拒绝错误
    pub fn delivery_rejected(status: u16) -> Self {
        AppError::Business(BusinessError::DeliveryRejected { status })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
