/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的申请记录数量
    pub max_concurrent_records: usize,
    /// 待处理记录 TOML 文件存放目录
    pub records_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 警告文件（无法提交的记录写入这里）
    pub warn_file: String,
    // --- 媒体上传配置 ---
    pub upload_api_url: String,
    pub upload_preset: String,
    // --- 邮件投递配置 ---
    pub email_api_url: String,
    pub email_service_id: String,
    pub email_template_id: String,
    pub email_user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_records: 4,
            records_folder: "pending_records".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            warn_file: "warn.txt".to_string(),
            upload_api_url: "https://api.cloudinary.com/v1_1/dvq8z9idm/image/upload".to_string(),
            upload_preset: "PhoneTel".to_string(),
            email_api_url: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            email_service_id: "service_tj8ac6h".to_string(),
            email_template_id: "template_5bqbq15".to_string(),
            email_user_id: "GSRmOqymJi-5RvZgZ".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_records: std::env::var("MAX_CONCURRENT_RECORDS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_records),
            records_folder: std::env::var("RECORDS_FOLDER").unwrap_or(default.records_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            upload_api_url: std::env::var("UPLOAD_API_URL").unwrap_or(default.upload_api_url),
            upload_preset: std::env::var("UPLOAD_PRESET").unwrap_or(default.upload_preset),
            email_api_url: std::env::var("EMAIL_API_URL").unwrap_or(default.email_api_url),
            email_service_id: std::env::var("EMAIL_SERVICE_ID").unwrap_or(default.email_service_id),
            email_template_id: std::env::var("EMAIL_TEMPLATE_ID").unwrap_or(default.email_template_id),
            email_user_id: std::env::var("EMAIL_USER_ID").unwrap_or(default.email_user_id),
        }
    }
}
