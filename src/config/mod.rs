// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Configuration management

pub mod settings;

pub use settings::{AppearanceConfig, BackendConfig, Settings};
