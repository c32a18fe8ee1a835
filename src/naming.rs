//! Identifier derivation for generated client code.
//!
//! Pure mapping functions from schema identifiers (service names, method
//! names, file paths) to the identifiers used in the emitted JavaScript.
//! All of them are deterministic string transforms with no lookup state.

/// Convert a snake_case identifier to UpperCamelCase.
///
/// Underscores act as word boundaries and are removed; the first letter of
/// each word is upper-cased and all other characters are preserved, so
/// already-camel input passes through unchanged.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if ch == '_' {
            word_start = true;
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Client type name for a service: the camel-cased service name plus a
/// `Client` suffix.
pub fn client_name(service: &str) -> String {
    format!("{}Client", camel_case(service))
}

/// Fully-qualified wire name for a service.
///
/// This is the routing identifier the server side expects, so it must be
/// passed verbatim to the generated runtime constructor: the owning file's
/// package prefix when one is declared, then the camel-cased service name.
pub fn wire_name(package: &str, service: &str) -> String {
    let name = camel_case(service);
    if package.is_empty() {
        name
    } else {
        format!("{package}.{name}")
    }
}

/// Generated stub name for a method: camel-cased, with only the first
/// character lower-cased. The wire method name keeps its camel-cased form.
pub fn stub_name(method: &str) -> String {
    let name = camel_case(method);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name,
    }
}

/// Final segment of a dotted fully-qualified type reference, used to name
/// the decoded-message constructor in generated code.
pub fn output_short_name(type_ref: &str) -> &str {
    type_ref.split('.').next_back().unwrap_or(type_ref)
}

/// Base name of a schema file's generated module: the path with a
/// recognized schema extension stripped and `_pb` appended.
pub fn base_file_name(path: &str) -> String {
    let stem = path
        .strip_suffix(".proto")
        .or_else(|| path.strip_suffix(".protodevel"))
        .unwrap_or(path);
    format!("{stem}_pb")
}

/// Output artifact name for a schema file.
pub fn artifact_name(path: &str) -> String {
    format!("{}_twirp.js", base_file_name(path))
}

/// Module name used in the generated `require` call: the final path
/// segment of [`base_file_name`], since the messages module is loaded as a
/// sibling of the client file.
pub fn module_name(path: &str) -> String {
    let base = base_file_name(path);
    match base.rfind('/') {
        Some(idx) => base[idx + 1..].to_string(),
        None => base,
    }
}
