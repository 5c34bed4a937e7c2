// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the toolbar widget.

pub mod button;
pub mod toolbar;
