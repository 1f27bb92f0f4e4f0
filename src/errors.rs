// ABOUTME: Error types re-exported from trainload-core
// ABOUTME: Keeps crate::errors paths stable for engine modules and callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use trainload_core::errors::*;
