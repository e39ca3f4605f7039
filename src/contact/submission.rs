use super::ContactError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw contact form payload as posted by the browser.
///
/// Every field is optional at this stage so that absent, `null` and blank
/// values all surface as missing fields rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub inquiry_type: Option<String>,
    pub message: Option<String>,
    pub lang: Option<String>,
}

/// A submission whose required fields are all present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidSubmission {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: String,
    pub message: String,
    pub lang: String,
}

impl ContactSubmission {
    /// Check required fields, reporting every missing one at once.
    pub fn validate(self) -> Result<ValidSubmission, ContactError> {
        let mut missing = Vec::new();

        let name = required(self.name, "name", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let inquiry_type = required(self.inquiry_type, "inquiryType", &mut missing);
        let message = required(self.message, "message", &mut missing);

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        Ok(ValidSubmission {
            name,
            company: optional(self.company),
            email,
            phone: optional(self.phone),
            inquiry_type,
            message,
            lang: self.lang.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The notification sent to the site owner for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub submission: ValidSubmission,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    pub const SUBJECT: &'static str = "New Contact Form Submission";

    pub fn new(submission: ValidSubmission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            submission,
            submitted_at,
        }
    }

    /// Bilingual plain-text body.
    pub fn body(&self) -> String {
        self.to_string()
    }
}

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━";

impl fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.submission;
        let na = "N/A";

        writeln!(f, "新しいお問い合わせ / {}", Self::SUBJECT)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "お名前 / Name: {}", s.name)?;
        writeln!(f, "会社名 / Company: {}", s.company.as_deref().unwrap_or(na))?;
        writeln!(f, "メール / Email: {}", s.email)?;
        writeln!(f, "電話番号 / Phone: {}", s.phone.as_deref().unwrap_or(na))?;
        writeln!(f, "お問い合わせ種類 / Inquiry Type: {}", s.inquiry_type)?;
        writeln!(f)?;
        writeln!(f, "お問い合わせ内容 / Message:")?;
        writeln!(f, "{}", s.message)?;
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "送信時刻 / Submitted: {}",
            self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(f, "言語 / Language: {}", s.lang)
    }
}
