//! Picks the generation targets out of a code generator request.
//!
//! A request carries every file needed to resolve types; only the files
//! protoc names in `file_to_generate` are direct targets. Selection is by
//! exact file name and keeps the target-list order. A target with no
//! matching file never aborts the run; it is reported back to the caller
//! so the miss is inspectable instead of silently swallowed.

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::FileDescriptorProto;

/// Outcome of target selection.
#[derive(Debug)]
pub struct Selection<'a> {
    /// Matched files, in target-list order.
    pub files: Vec<&'a FileDescriptorProto>,

    /// Generation targets with no matching file in the request.
    pub unmatched: Vec<String>,
}

/// Select the files to generate for, in the order protoc requested them.
///
/// Files with zero services are still selected; content never influences
/// selection.
pub fn files_to_generate(request: &CodeGeneratorRequest) -> Selection<'_> {
    let mut files = Vec::new();
    let mut unmatched = Vec::new();

    for target in &request.file_to_generate {
        match request
            .proto_file
            .iter()
            .find(|file| file.name() == target.as_str())
        {
            Some(file) => files.push(file),
            None => unmatched.push(target.clone()),
        }
    }

    Selection { files, unmatched }
}
