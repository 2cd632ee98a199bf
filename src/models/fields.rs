//! 表单字段定义
//!
//! 表单的字段是一个封闭集合：每个字段有固定的线上名称（camelCase）、
//! 展示标签和占位提示。校验错误以字段为键记录。

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 校验错误记录：字段 → 用户可见的错误信息
///
/// 每次提交尝试整体重算，校验通过时整体清空
pub type ErrorRecord = BTreeMap<Field, String>;

/// 表单字段枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Ssn,
    Dob,
    Phone,
    Email,
    Address,
    Address2,
    City,
    State,
    ZipCode,
    UploadId,
    HeadshotImage,
}

impl Field {
    /// 全部字段（按表单展示顺序）
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::Ssn,
        Field::Dob,
        Field::Phone,
        Field::Email,
        Field::Address,
        Field::Address2,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::UploadId,
        Field::HeadshotImage,
    ];

    /// 获取线上字段名（与外发邮件载荷的键一致）
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Ssn => "ssn",
            Field::Dob => "dob",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
            Field::Address2 => "address2",
            Field::City => "city",
            Field::State => "state",
            Field::ZipCode => "zipCode",
            Field::UploadId => "uploadId",
            Field::HeadshotImage => "headshotImage",
        }
    }

    /// 获取展示标签
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Ssn => "SSN",
            Field::Dob => "Date of Birth",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::Address2 => "Address Line 2",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "ZIP Code",
            Field::UploadId => "Upload ID",
            Field::HeadshotImage => "Headshot Image Holding With Card",
        }
    }

    /// 获取占位提示（日期和文件字段没有占位文本）
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter your first name",
            Field::LastName => "Enter your last name",
            Field::Ssn => "Enter your SSN (9 digits)",
            Field::Dob => "",
            Field::Phone => "Enter your phone number (10 digits)",
            Field::Email => "Enter your email address",
            Field::Address => "Enter your address",
            Field::Address2 => "Enter additional address details",
            Field::City => "Enter your city",
            Field::State => "Select State",
            Field::ZipCode => "Enter your ZIP code (5 digits)",
            Field::UploadId => "",
            Field::HeadshotImage => "",
        }
    }

    /// 是否为文件字段
    pub fn is_file(self) -> bool {
        matches!(self, Field::UploadId | Field::HeadshotImage)
    }

    /// 是否为必填字段（只有 address2 可以留空）
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Address2)
    }

    /// 从线上字段名解析
    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
