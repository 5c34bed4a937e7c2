// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for tool icons and toolbar configuration files.

pub mod media;
pub mod serialization;
