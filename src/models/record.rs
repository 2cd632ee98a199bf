use crate::models::fields::Field;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 一次申请提交的全部字段
///
/// 生命周期：创建时为空 → 用户逐字段填写 → 提交成功后整体重置为空。
/// 两个图片字段在提交前是本地文件引用，上传成功后在外发载荷中被替换为 URL。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headshot_image: Option<PathBuf>,
    /// 来源 TOML 文件路径（处理完成后用于清理）
    #[serde(skip)]
    pub source_path: Option<String>,
}

impl SubmissionRecord {
    /// 设置文本字段的值
    ///
    /// 文件字段不接受文本值，传入时忽略
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Ssn => self.ssn = value,
            Field::Dob => self.dob = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
            Field::Address2 => self.address2 = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::ZipCode => self.zip_code = value,
            Field::UploadId | Field::HeadshotImage => {
                tracing::debug!("忽略对文件字段 {} 的文本赋值", field);
            }
        }
    }

    /// 设置文件字段的引用
    ///
    /// 文本字段不接受文件引用，传入时忽略
    pub fn set_image(&mut self, field: Field, path: impl Into<PathBuf>) {
        match field {
            Field::UploadId => self.upload_id = Some(path.into()),
            Field::HeadshotImage => self.headshot_image = Some(path.into()),
            _ => {
                tracing::debug!("忽略对文本字段 {} 的文件赋值", field);
            }
        }
    }

    /// 整体重置为空（提交成功后调用）
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 是否为初始空状态
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 获取申请人姓名（用于日志显示）
    pub fn applicant_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim().to_string();
        if name.is_empty() {
            "(unnamed)".to_string()
        } else {
            name
        }
    }

    /// 设置来源文件路径
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.source_path = Some(file_path);
        self
    }

    /// 构建外发邮件载荷
    ///
    /// 两个文件字段被替换为各自上传后的 URL，其余字段原样带走
    pub fn to_email_payload(&self, headshot_url: String, upload_id_url: String) -> EmailPayload {
        EmailPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            ssn: self.ssn.clone(),
            dob: self.dob.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            upload_id: upload_id_url,
            headshot_image: headshot_url,
        }
    }
}

/// 外发邮件载荷（平铺的键值记录，键为线上字段名）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// 证件照上传后的 URL
    pub upload_id: String,
    /// 手持证件照上传后的 URL
    pub headshot_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_record() -> SubmissionRecord {
        let mut record = SubmissionRecord::default();
        record.set_text(Field::FirstName, "John");
        record.set_text(Field::LastName, "Smith");
        record.set_text(Field::Ssn, "123456789");
        record.set_text(Field::Dob, "1990-05-17");
        record.set_text(Field::Phone, "5551234567");
        record.set_text(Field::Email, "john@example.com");
        record.set_text(Field::Address, "12 Main St");
        record.set_text(Field::City, "Austin");
        record.set_text(Field::State, "Texas");
        record.set_text(Field::ZipCode, "78701");
        record.set_image(Field::UploadId, "scans/id.png");
        record.set_image(Field::HeadshotImage, "scans/headshot.png");
        record
    }

    #[test]
    fn test_payload_replaces_files_and_keeps_fields() {
        let record = filled_record();
        let payload = record.to_email_payload("https://cdn/u1.png".into(), "https://cdn/u2.png".into());

        // 文件字段换成 URL：headshot 对应第一个上传结果，uploadId 对应第二个
        assert_eq!(payload.headshot_image, "https://cdn/u1.png");
        assert_eq!(payload.upload_id, "https://cdn/u2.png");

        // 其余字段原样带走
        assert_eq!(payload.first_name, "John");
        assert_eq!(payload.ssn, "123456789");
        assert_eq!(payload.state, "Texas");
        assert_eq!(payload.zip_code, "78701");
        assert_eq!(payload.address2, "");
    }

    #[test]
    fn test_payload_uses_wire_field_names() {
        let record = filled_record();
        let payload = record.to_email_payload("u1".into(), "u2".into());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["firstName"], "John");
        assert_eq!(json["zipCode"], "78701");
        assert_eq!(json["uploadId"], "u2");
        assert_eq!(json["headshotImage"], "u1");
    }

    #[test]
    fn test_reset_restores_empty_shape() {
        let mut record = filled_record();
        assert!(!record.is_empty());

        record.reset();
        assert!(record.is_empty());
        assert_eq!(record, SubmissionRecord::default());
        assert!(record.upload_id.is_none());
        assert!(record.headshot_image.is_none());
    }

    #[test]
    fn test_set_ignores_mismatched_kinds() {
        let mut record = SubmissionRecord::default();
        record.set_text(Field::UploadId, "not-a-file");
        record.set_image(Field::FirstName, "scans/id.png");

        assert!(record.upload_id.is_none());
        assert_eq!(record.first_name, "");
    }

    #[test]
    fn test_toml_record_parsing() {
        let toml_src = r#"
            firstName = "Jane"
            lastName = "Doe"
            ssn = "987654321"
            dob = "1988-01-02"
            phone = "2125550199"
            email = "jane@example.com"
            address = "401 5th Ave"
            city = "New York"
            state = "New York"
            zipCode = "10016"
            uploadId = "scans/jane_id.jpg"
            headshotImage = "scans/jane_headshot.jpg"
        "#;

        let record: SubmissionRecord = toml::from_str(toml_src).unwrap();
        assert_eq!(record.applicant_name(), "Jane Doe");
        assert_eq!(record.address2, "");
        assert_eq!(record.upload_id.as_deref(), Some(std::path::Path::new("scans/jane_id.jpg")));
    }
}
