// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/operations/mod.rs

pub mod crop;
