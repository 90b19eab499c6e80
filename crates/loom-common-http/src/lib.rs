// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Loom.
//!
//! This crate provides a pre-configured HTTP client builder that identifies
//! the calling product in the `User-Agent` header and transparently decodes
//! gzip-compressed responses.

mod client;

pub use client::{builder_for, product_identifier};
