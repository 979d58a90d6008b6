use super::ValidationError;

/// Whether a service name is empty or whitespace only.
pub(crate) fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Collects violations during a scan of one entry.
///
/// In fail-fast mode the first recorded violation ends the scan; otherwise
/// every violation is kept in the order it was found.
#[derive(Debug)]
pub(crate) struct ViolationSink {
    fail_fast: bool,
    found: Vec<ValidationError>,
}

impl ViolationSink {
    pub(crate) fn fail_fast() -> Self {
        Self { fail_fast: true, found: Vec::new() }
    }

    pub(crate) fn collect_all() -> Self {
        Self { fail_fast: false, found: Vec::new() }
    }

    /// Record a violation. Returns `true` when the scan must stop.
    pub(crate) fn record(&mut self, violation: ValidationError) -> bool {
        self.found.push(violation);
        self.fail_fast
    }

    /// First violation found, if any
    pub(crate) fn into_result(self) -> Result<(), ValidationError> {
        match self.found.into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    pub(crate) fn into_violations(self) -> Vec<ValidationError> {
        self.found
    }
}
