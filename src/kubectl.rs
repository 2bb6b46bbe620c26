//! kubectl command generation for operator docs snippets

/// Build a `kubectl` invocation for a resource.
///
/// The namespace flag is appended only when a non-empty namespace is given.
/// Surrounding whitespace is trimmed from the result; inner spacing is left
/// as produced, so an empty `name` shows up as a double space.
///
/// # Examples
///
/// ```
/// use qdoc_kit::kubectl::generate_kubectl_command;
///
/// assert_eq!(
///     generate_kubectl_command("get", "qiskitjob", "bell-state", Some("quantum")),
///     "kubectl get qiskitjob bell-state -n quantum"
/// );
/// assert_eq!(
///     generate_kubectl_command("delete", "qiskitjob", "bell-state", None),
///     "kubectl delete qiskitjob bell-state"
/// );
/// ```
pub fn generate_kubectl_command(
    operation: &str,
    resource: &str,
    name: &str,
    namespace: Option<&str>,
) -> String {
    let ns = match namespace {
        Some(ns) if !ns.is_empty() => format!("-n {}", ns),
        _ => String::new(),
    };
    format!("kubectl {} {} {} {}", operation, resource, name, ns)
        .trim()
        .to_string()
}
