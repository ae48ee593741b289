//! Stable identifiers for error paths and exemptions.
//!
//! Error paths are dotted: the first segment is the root owned by exactly one check,
//! the rest narrows the finding. Exemption ids are short snake_case names.

// Check roots
pub const ROOT_APPROVAL: &str = "approval";
pub const ROOT_AUTHORS: &str = "authors";
pub const ROOT_CONTENT: &str = "content";
pub const ROOT_FILE: &str = "file";
pub const ROOT_IDENTITY: &str = "identity";
pub const ROOT_STATUS: &str = "status";

// Leaf segments
pub const SEG_AUTHORS: &str = "authors";
pub const SEG_BASE: &str = "base";
pub const SEG_SECTIONS: &str = "sections";
pub const SEG_NAME: &str = "name";
pub const SEG_MATCHING: &str = "matching";
pub const SEG_CONSTANT: &str = "constant";
pub const SEG_VALID: &str = "valid";
pub const SEG_TRANSITION: &str = "transition";

// Full error paths
pub const PATH_APPROVAL_AUTHORS: &str = "approval.authors";
pub const PATH_AUTHORS_BASE: &str = "authors.base";
pub const PATH_CONTENT_SECTIONS: &str = "content.sections";
pub const PATH_FILE_NAME: &str = "file.name";
pub const PATH_IDENTITY_MATCHING: &str = "identity.matching";
pub const PATH_IDENTITY_CONSTANT: &str = "identity.constant";
pub const PATH_STATUS_VALID: &str = "status.valid";
pub const PATH_STATUS_TRANSITION: &str = "status.transition";

// Exemptions
pub const EXEMPT_STATUS_CHANGE_ALLOWED: &str = "status_change_allowed";
pub const EXEMPT_EDITOR_APPROVAL: &str = "editor_approval";
pub const EXEMPT_CANONICAL_DOCUMENT: &str = "canonical_document";
pub const EXEMPT_WITHDRAWN: &str = "withdrawn_exception";

// Labels
pub const LABEL_NEW: &str = "c-new";
pub const LABEL_STATUS: &str = "c-status";
pub const LABEL_UPDATE: &str = "c-update";

// Tool-level
pub const PATH_TOOL_RUNTIME: &str = "tool.runtime";

/// All check roots, in traversal order.
pub fn all_check_roots() -> &'static [&'static str] {
    &[
        ROOT_APPROVAL,
        ROOT_AUTHORS,
        ROOT_CONTENT,
        ROOT_FILE,
        ROOT_IDENTITY,
        ROOT_STATUS,
    ]
}

/// All exemption ids.
pub fn all_exemptions() -> &'static [&'static str] {
    &[
        EXEMPT_CANONICAL_DOCUMENT,
        EXEMPT_EDITOR_APPROVAL,
        EXEMPT_STATUS_CHANGE_ALLOWED,
        EXEMPT_WITHDRAWN,
    ]
}
