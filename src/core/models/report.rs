//! Geological reports and their visibility

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who may read a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAccess {
    /// Anyone, including anonymous visitors
    Public,
    /// Any signed-in user
    Restricted,
    /// Only the author
    Private,
}

impl ReportAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportAccess::Public => "public",
            ReportAccess::Restricted => "restricted",
            ReportAccess::Private => "private",
        }
    }

    /// Parse a stored level; unknown values are treated as private
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("public") => ReportAccess::Public,
            Some("restricted") => ReportAccess::Restricted,
            _ => ReportAccess::Private,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeologicalReport {
    pub id: i32,
    pub deposit_id: i32,
    /// survey, assessment, feasibility, environmental
    pub report_type: Option<String>,
    pub title: String,
    pub summary: Option<String>,
    pub author_id: Option<Uuid>,
    pub report_date: Option<chrono::DateTime<chrono::Utc>>,
    pub access_level: ReportAccess,
}

impl GeologicalReport {
    /// Visibility rule for a reader who may be anonymous
    pub fn is_visible_to(&self, reader: Option<Uuid>) -> bool {
        match (self.access_level, reader) {
            (ReportAccess::Public, _) => true,
            (ReportAccess::Restricted, Some(_)) => true,
            (ReportAccess::Private, Some(reader)) => self.author_id == Some(reader),
            (_, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(access_level: ReportAccess, author_id: Option<Uuid>) -> GeologicalReport {
        GeologicalReport {
            id: 1,
            deposit_id: 1,
            report_type: Some("survey".to_string()),
            title: "Kapoeta reconnaissance".to_string(),
            summary: None,
            author_id,
            report_date: None,
            access_level,
        }
    }

    #[test]
    fn test_public_visible_to_everyone() {
        assert!(report(ReportAccess::Public, None).is_visible_to(None));
        assert!(report(ReportAccess::Public, None).is_visible_to(Some(Uuid::new_v4())));
    }

    #[test]
    fn test_restricted_needs_login() {
        let r = report(ReportAccess::Restricted, None);
        assert!(!r.is_visible_to(None));
        assert!(r.is_visible_to(Some(Uuid::new_v4())));
    }

    #[test]
    fn test_private_only_for_author() {
        let author = Uuid::new_v4();
        let r = report(ReportAccess::Private, Some(author));
        assert!(r.is_visible_to(Some(author)));
        assert!(!r.is_visible_to(Some(Uuid::new_v4())));
        assert!(!r.is_visible_to(None));
    }

    #[test]
    fn test_unknown_level_is_private() {
        assert_eq!(ReportAccess::from_stored(Some("internal")), ReportAccess::Private);
        assert_eq!(ReportAccess::from_stored(None), ReportAccess::Private);
        assert_eq!(ReportAccess::from_stored(Some("public")), ReportAccess::Public);
    }
}
