use crate::types::{Omission, OmissionReason};

/// Sink for silent omissions. Always traces; stores only when enabled.
#[derive(Debug, Default)]
pub(super) struct Diagnostics {
    enabled: bool,
    omissions: Vec<Omission>,
}

impl Diagnostics {
    pub(super) const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            omissions: Vec::new(),
        }
    }

    pub(super) fn record(&mut self, declaration: &str, subject: &str, reason: OmissionReason) {
        tracing::debug!(declaration, subject, %reason, "omitted unsupported shape");
        if self.enabled {
            self.omissions.push(Omission {
                declaration: declaration.to_string(),
                subject: subject.to_string(),
                reason,
            });
        }
    }

    pub(super) fn omissions(&self) -> &[Omission] {
        &self.omissions
    }

    pub(super) fn into_omissions(self) -> Vec<Omission> {
        self.omissions
    }
}
