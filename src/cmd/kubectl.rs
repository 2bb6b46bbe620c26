//! Kubectl command implementation
//!
//! Handles the `qdoc kubectl` command which prints a ready-to-paste kubectl
//! invocation for docs snippets

use crate::kubectl::generate_kubectl_command;

/// Print a kubectl command for a resource
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::kubectl::cmd_kubectl;
///
/// cmd_kubectl("get", "qiskitjob", "bell-state", Some("quantum"));
/// ```
pub fn cmd_kubectl(operation: &str, resource: &str, name: &str, namespace: Option<&str>) {
    println!(
        "{}",
        generate_kubectl_command(operation, resource, name, namespace)
    );
}
