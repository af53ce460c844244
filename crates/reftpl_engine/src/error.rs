/*
SPDX-License-Identifier: MPL-2.0
*/

use thiserror::Error;

/// Errors from the engine's input-loading surface.
///
/// Resolution itself never fails: unresolvable placeholders and malformed
/// expressions degrade locally (empty string / fallback value) so the engine
/// can run inline while a user is still typing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    Parse(String, String),
}
