//! Download notices for team CV buttons

use tracing::info;

/// A CV download, as reported to the page's log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadNotice {
    /// Team member name, if the button sits inside a team card
    pub member: Option<String>,
    /// Link target of the button
    pub href: Option<String>,
}

impl DownloadNotice {
    pub fn new(member: Option<&str>, href: Option<&str>) -> Self {
        Self {
            member: member
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            href: href.map(str::to_string),
        }
    }

    /// Whether the CV is embedded in the page as a `data:` URL
    pub fn is_inline(&self) -> bool {
        self.href
            .as_deref()
            .is_some_and(|href| href.starts_with("data:"))
    }

    /// Emit the notice
    pub fn record(&self) {
        let member = self.member.as_deref().unwrap_or("unknown");
        info!(member, inline = self.is_inline(), "CV downloaded for: {}", member);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_name_trimmed() {
        let notice = DownloadNotice::new(Some("  Ada Lovelace \n"), Some("cv/ada.pdf"));
        assert_eq!(notice.member.as_deref(), Some("Ada Lovelace"));
        assert!(!notice.is_inline());
        notice.record();
    }

    #[test]
    fn test_missing_member() {
        let notice = DownloadNotice::new(Some("   "), None);
        assert_eq!(notice.member, None);
        notice.record();
    }

    #[test]
    fn test_inline_href() {
        let notice = DownloadNotice::new(Some("Grace"), Some("data:application/pdf;base64,AAAA"));
        assert!(notice.is_inline());
    }
}
