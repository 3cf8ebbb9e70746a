// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for bioscan-cli
// ABOUTME: Pretty JSON results on stdout and structured JSON errors on stderr

use bioscan::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print an error document on stderr
pub fn print_error(error: AppError) {
    let summary = error.to_string();
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{summary}"),
    }
}
