// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Failed to create LimitRange: {0}")]
    LimitRangeCreation(String),

    #[error("Failed to create ResourceQuota: {0}")]
    ResourceQuotaCreation(String),

    #[error("Invalid object: {0}")]
    InvalidObject(String),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
