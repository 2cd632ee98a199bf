//! 字段校验服务 - 业务能力层
//!
//! 纯校验能力：输入申请记录，输出错误记录，不做任何 I/O。
//! 错误记录里没有某个字段的键，就表示该字段合法；
//! 错误记录非空时提交被阻止。

use anyhow::Result;
use regex::Regex;

use crate::models::fields::{ErrorRecord, Field};
use crate::models::record::SubmissionRecord;
use crate::models::us_state::UsState;

/// 字段校验服务
///
/// 职责：
/// - 对单条申请记录做整体校验
/// - 每次调用整体重算错误记录
/// - 不关心流程顺序，不做网络调用
pub struct Validator;

impl Validator {
    /// 创建新的校验服务
    pub fn new() -> Self {
        Self
    }

    /// 校验整条申请记录
    ///
    /// # 参数
    /// - `record`: 待校验的申请记录
    ///
    /// # 返回
    /// 返回错误记录；为空表示全部字段合法
    pub fn validate(&self, record: &SubmissionRecord) -> Result<ErrorRecord> {
        let ssn_re = Regex::new(r"^\d{9}$")?;
        let phone_re = Regex::new(r"^\d{10}$")?;
        let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?;
        let zip_re = Regex::new(r"^\d{5}$")?;

        let mut errors = ErrorRecord::new();

        if record.first_name.trim().is_empty() {
            errors.insert(Field::FirstName, "First name is required.".to_string());
        }
        if record.last_name.trim().is_empty() {
            errors.insert(Field::LastName, "Last name is required.".to_string());
        }
        if !ssn_re.is_match(&record.ssn) {
            errors.insert(Field::Ssn, "SSN must be a 9-digit number.".to_string());
        }
        if record.dob.is_empty() {
            errors.insert(Field::Dob, "Date of birth is required.".to_string());
        }
        if !phone_re.is_match(&record.phone) {
            errors.insert(Field::Phone, "Phone number must be 10 digits.".to_string());
        }
        if !email_re.is_match(&record.email) {
            errors.insert(Field::Email, "Invalid email format.".to_string());
        }
        if record.address.trim().is_empty() {
            errors.insert(Field::Address, "Address is required.".to_string());
        }
        if record.city.trim().is_empty() {
            errors.insert(Field::City, "City is required.".to_string());
        }
        // state 必须是 50 个州之一，不是仅仅非空
        if UsState::from_name(record.state.trim()).is_none() {
            errors.insert(Field::State, "State selection is required.".to_string());
        }
        if !zip_re.is_match(&record.zip_code) {
            errors.insert(Field::ZipCode, "ZIP Code must be 5 digits.".to_string());
        }
        if !has_file(&record.upload_id) {
            errors.insert(Field::UploadId, "Upload ID is required.".to_string());
        }
        if !has_file(&record.headshot_image) {
            errors.insert(Field::HeadshotImage, "Headshot image is required.".to_string());
        }

        Ok(errors)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// 文件引用是否存在且非空
fn has_file(path: &Option<std::path::PathBuf>) -> bool {
    path.as_ref()
        .map(|p| !p.as_os_str().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建一条全部合法的记录
    fn valid_record() -> SubmissionRecord {
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
    fn test_valid_record_has_no_errors() {
        let errors = Validator::new().validate(&valid_record()).unwrap();
        assert!(errors.is_empty(), "意外的错误: {:?}", errors);
    }

    #[test]
    fn test_empty_record_keys_every_required_field() {
        let errors = Validator::new()
            .validate(&SubmissionRecord::default())
            .unwrap();

        // address2 以外的每个字段都应该出现在错误记录里
        for field in Field::ALL {
            if field.is_required() {
                assert!(errors.contains_key(&field), "缺少字段错误: {}", field);
            } else {
                assert!(!errors.contains_key(&field));
            }
        }
        assert_eq!(errors.len(), 12);
    }

    #[test]
    fn test_errors_keyed_exactly_by_invalid_fields() {
        let mut record = valid_record();
        record.set_text(Field::Ssn, "12345");
        record.set_text(Field::City, "   ");

        let errors = Validator::new().validate(&record).unwrap();
        let keys: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(keys, vec![Field::Ssn, Field::City]);
    }

    #[test]
    fn test_ssn_rule() {
        let validator = Validator::new();
        for (ssn, ok) in [("12345678", false), ("123456789", true), ("12345678a", false)] {
            let mut record = valid_record();
            record.set_text(Field::Ssn, ssn);
            let errors = validator.validate(&record).unwrap();
            assert_eq!(!errors.contains_key(&Field::Ssn), ok, "ssn={}", ssn);
        }
    }

    #[test]
    fn test_phone_rule_rejects_separators() {
        let validator = Validator::new();
        for (phone, ok) in [("5551234567", true), ("555-123-4567", false), ("555123456", false)] {
            let mut record = valid_record();
            record.set_text(Field::Phone, phone);
            let errors = validator.validate(&record).unwrap();
            assert_eq!(!errors.contains_key(&Field::Phone), ok, "phone={}", phone);
        }
    }

    #[test]
    fn test_email_rule() {
        let validator = Validator::new();
        for (email, ok) in [
            ("a@b.com", true),
            ("a@b", false),
            ("a.com", false),
            ("a b@c.com", false),
        ] {
            let mut record = valid_record();
            record.set_text(Field::Email, email);
            let errors = validator.validate(&record).unwrap();
            assert_eq!(!errors.contains_key(&Field::Email), ok, "email={}", email);
        }
    }

    #[test]
    fn test_zip_rule() {
        let validator = Validator::new();
        for (zip, ok) in [("12345", true), ("1234", false), ("123456", false)] {
            let mut record = valid_record();
            record.set_text(Field::ZipCode, zip);
            let errors = validator.validate(&record).unwrap();
            assert_eq!(!errors.contains_key(&Field::ZipCode), ok, "zip={}", zip);
        }
    }

    #[test]
    fn test_state_must_be_member_of_fixed_set() {
        let validator = Validator::new();

        let mut record = valid_record();
        record.set_text(Field::State, "");
        assert!(validator.validate(&record).unwrap().contains_key(&Field::State));

        record.set_text(Field::State, "Narnia");
        assert!(validator.validate(&record).unwrap().contains_key(&Field::State));

        record.set_text(Field::State, "New Hampshire");
        assert!(!validator.validate(&record).unwrap().contains_key(&Field::State));
    }

    #[test]
    fn test_missing_files_are_reported() {
        let mut record = valid_record();
        record.upload_id = None;
        record.headshot_image = Some(std::path::PathBuf::new());

        let errors = Validator::new().validate(&record).unwrap();
        assert_eq!(
            errors.get(&Field::UploadId).map(String::as_str),
            Some("Upload ID is required.")
        );
        assert_eq!(
            errors.get(&Field::HeadshotImage).map(String::as_str),
            Some("Headshot image is required.")
        );
    }

    #[test]
    fn test_address2_is_optional() {
        let mut record = valid_record();
        record.set_text(Field::Address2, "");
        let errors = Validator::new().validate(&record).unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut record = valid_record();
        record.set_text(Field::Ssn, "bad");
        record.set_text(Field::Email, "no-at-sign");

        let validator = Validator::new();
        let first = validator.validate(&record).unwrap();
        let second = validator.validate(&record).unwrap();
        assert_eq!(first, second);
    }
}
