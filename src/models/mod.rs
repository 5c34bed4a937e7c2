// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for toolbar tools and configuration.

pub mod config;
pub mod registry;
pub mod tool;
