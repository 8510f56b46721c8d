// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0
pub mod cli;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod listing;

#[cfg(test)]
pub mod test_utils;
