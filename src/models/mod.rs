// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the Folio application.

pub mod case_study;
pub mod portfolio;
pub mod viewer;
