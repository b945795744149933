/*
 * Error Module
 *
 * This module defines the error type shared by the sandbox. Everything the
 * loop does with the compiled-in parameters is infallible; the variants here
 * cover parameter validation, the random range precondition, the optional
 * box cap and window creation.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SandboxError {
    #[error("invalid random range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("invalid sandbox parameters: {0}")]
    InvalidParams(String),

    #[error("box limit of {limit} reached")]
    CapacityReached { limit: usize },

    #[error("failed to create window: {0}")]
    Window(String),
}
