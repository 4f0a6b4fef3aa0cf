// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Controllers that react to namespace events.

pub mod namespace;

pub use namespace::{NamespaceController, NamespacePolicy};
