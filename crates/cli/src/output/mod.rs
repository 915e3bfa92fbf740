// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for status lines and dry-run plans.

pub mod json;
pub mod text;
