//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit per-transition logging for the keyed request trackers.
    pub log_requests: bool,

    /// Emit debounce arm/fire events and suggestion-list updates.
    pub log_lookup: bool,

    /// Anything about symbol selection (search submit, suggestion click).
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,

    log_requests: false,
    log_lookup: false,
};
