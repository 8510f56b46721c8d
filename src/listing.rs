// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the namespace listing printed by the poller.

use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render the numbered namespace listing, one line per namespace.
pub fn render_namespace_listing(namespaces: &[Namespace]) -> String {
    let mut out = format!(
        "There are {} namespaces in the cluster:\n",
        namespaces.len()
    );
    for (i, ns) in namespaces.iter().enumerate() {
        out.push_str(&format!("{}) {}\n", i + 1, ns.name_any()));
    }
    out
}
