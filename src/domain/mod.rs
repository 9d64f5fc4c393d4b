// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure image domain: crop geometry and output format rules. No I/O state.

pub mod image;
