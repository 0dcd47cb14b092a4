// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for portfolio documents and sketch images.

pub mod media;
pub mod serialization;
