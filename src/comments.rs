//! Lookup of leading doc comments by descriptor path.
//!
//! protoc attaches source comments to a file's `SourceCodeInfo`, keyed by
//! the path of field numbers leading to the commented element. The index
//! is built once from the complete file set before any generation begins
//! and is read-only afterwards. A missing entry means "no documentation",
//! never an error.

use prost_types::FileDescriptorProto;
use std::collections::HashMap;

/// Field number of `FileDescriptorProto.service`.
const SERVICE_FIELD: i32 = 6;

/// Field number of `ServiceDescriptorProto.method`.
const METHOD_FIELD: i32 = 2;

/// Precomputed index from `(file, descriptor path)` to leading comment
/// text.
#[derive(Debug, Default)]
pub struct CommentIndex {
    leading: HashMap<(String, Vec<i32>), String>,
}

impl CommentIndex {
    /// Build the index from every file in the request, including
    /// transitively imported files that are not generation targets.
    pub fn build(files: &[FileDescriptorProto]) -> Self {
        let mut leading = HashMap::new();

        for file in files {
            let Some(info) = file.source_code_info.as_ref() else {
                continue;
            };
            for location in &info.location {
                if let Some(text) = location.leading_comments.as_ref() {
                    leading.insert(
                        (file.name().to_string(), location.path.clone()),
                        text.clone(),
                    );
                }
            }
        }

        Self { leading }
    }

    /// Leading comment for the service at `service_index` in `file`, if
    /// the schema carried one.
    pub fn service(&self, file: &str, service_index: usize) -> Option<&str> {
        self.lookup(file, &[SERVICE_FIELD, service_index as i32])
    }

    /// Leading comment for a method, addressed by its service and method
    /// declaration indexes within `file`.
    pub fn method(&self, file: &str, service_index: usize, method_index: usize) -> Option<&str> {
        self.lookup(
            file,
            &[
                SERVICE_FIELD,
                service_index as i32,
                METHOD_FIELD,
                method_index as i32,
            ],
        )
    }

    fn lookup(&self, file: &str, path: &[i32]) -> Option<&str> {
        self.leading
            .get(&(file.to_string(), path.to_vec()))
            .map(String::as_str)
    }
}
