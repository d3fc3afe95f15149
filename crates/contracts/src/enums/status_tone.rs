/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Info,
    Warning,
    Danger,
    Muted,
}

impl StatusTone {
    /// CSS class of the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "status-success",
            StatusTone::Info => "status-info",
            StatusTone::Warning => "status-warning",
            StatusTone::Danger => "status-danger",
            StatusTone::Muted => "status-muted",
        }
    }
}
