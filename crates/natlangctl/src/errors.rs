//! Error codes and exit status for natlangctl

use natlang_common::NatlangError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code for bad input (empty review)
pub const EXIT_USAGE: i32 = 64;

/// Exit code when a profile is missing required fields or is not valid JSON
pub const EXIT_INVALID_PROFILE: i32 = 65;

/// Exit code when the prompt template file does not exist
pub const EXIT_TEMPLATE_MISSING: i32 = 66;

/// Map an error chain to a process exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    let natlang = err.chain().find_map(|cause| cause.downcast_ref::<NatlangError>());
    match natlang {
        Some(NatlangError::EmptyReview) => EXIT_USAGE,
        Some(NatlangError::InvalidProfile(_)) | Some(NatlangError::Json(_)) => EXIT_INVALID_PROFILE,
        Some(NatlangError::TemplateNotFound { .. }) => EXIT_TEMPLATE_MISSING,
        _ => EXIT_GENERAL_ERROR,
    }
}
