//! Walks services and methods and emits Twirp client code.
//!
//! One JavaScript artifact is produced per selected schema file: a header
//! block, a dependency preamble, then one client factory per service with
//! one callable stub per method, all in declaration order. The traversal
//! is a single sequential pass with no failure path of its own.

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::{FileDescriptorProto, ServiceDescriptorProto};

use crate::comments::CommentIndex;
use crate::emitter::Emitter;
use crate::naming;
use crate::selector::{files_to_generate, Selection};
use crate::VERSION;

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Artifact name, derived from the schema file path.
    pub name: String,

    /// Complete JavaScript content.
    pub content: String,
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerationOutput {
    /// Generated artifacts, one per matched target, in target order.
    pub files: Vec<GeneratedFile>,

    /// Generation targets with no matching file in the request.
    pub unmatched: Vec<String>,
}

/// Client code generator for one request.
pub struct ClientGenerator {
    comments: CommentIndex,
    output: Emitter,
}

impl ClientGenerator {
    /// Create a generator for the given request, indexing the doc
    /// comments of every file up front.
    pub fn new(request: &CodeGeneratorRequest) -> Self {
        Self {
            comments: CommentIndex::build(&request.proto_file),
            output: Emitter::new(),
        }
    }

    /// Run the full generation pass over the request's targets.
    pub fn generate(mut self, request: &CodeGeneratorRequest) -> GenerationOutput {
        let Selection { files, unmatched } = files_to_generate(request);
        let files = files
            .into_iter()
            .map(|file| self.generate_file(file))
            .collect();

        GenerationOutput { files, unmatched }
    }

    /// Emit one artifact for a schema file. A file with zero services
    /// still produces the header and preamble.
    fn generate_file(&mut self, file: &FileDescriptorProto) -> GeneratedFile {
        self.output.emit(&["/**"]);
        self.output.emit(&[
            " * Code generated by protoc-gen-twirp_js ",
            VERSION,
            ", DO NOT EDIT.",
        ]);
        self.output.emit(&[" * source: ", file.name()]);
        self.output.emit(&[" */"]);
        self.output
            .emit(&["// import our twirp js library dependency"]);
        self.output.emit(&["var createClient = require(\"twirp\");"]);
        self.output.emit(&["// import our protobuf definitions"]);
        let module = format!("./{}.js", naming::module_name(file.name()));
        self.output
            .emit(&["var pb = require(", &quote(&module), ");"]);
        self.output.emit(&["Object.assign(module.exports, pb);"]);
        self.output.emit(&[]);

        for (service_index, service) in file.service.iter().enumerate() {
            self.generate_client(file, service_index, service);
        }

        GeneratedFile {
            name: naming::artifact_name(file.name()),
            content: self.output.drain(),
        }
    }

    /// Emit one client factory block for a service.
    fn generate_client(
        &mut self,
        file: &FileDescriptorProto,
        service_index: usize,
        service: &ServiceDescriptorProto,
    ) {
        let client = naming::client_name(service.name());
        let wire = naming::wire_name(file.package(), service.name());

        self.output.emit(&["/**"]);
        match self
            .comments
            .service(file.name(), service_index)
            .filter(|text| !text.is_empty())
        {
            Some(text) => emit_comment_lines(&mut self.output, text, " * "),
            None => self.output.emit(&[" * Creates a new ", &client]),
        }
        self.output.emit(&[" */"]);

        self.output.emit(&[
            "module.exports.create",
            &client,
            " = function(baseurl, extraHeaders, useJSON) {",
        ]);
        self.output.emit(&[
            "    var rpc = createClient(baseurl, ",
            &quote(&wire),
            ", ",
            &quote(VERSION),
            ",  useJSON, extraHeaders === undefined ? {} : extraHeaders);",
        ]);
        self.output.emit(&["    return {"]);

        let last = service.method.len().saturating_sub(1);
        for (method_index, method) in service.method.iter().enumerate() {
            let wire_method = naming::camel_case(method.name());
            let stub = naming::stub_name(method.name());
            let output_type = naming::output_short_name(method.output_type());

            if let Some(text) = self
                .comments
                .method(file.name(), service_index, method_index)
                .filter(|text| !text.is_empty())
            {
                self.output.emit(&["        /**"]);
                emit_comment_lines(&mut self.output, text, "         * ");
                self.output.emit(&["         */"]);
            }

            let trailing_comma = if method_index == last { "" } else { "," };
            self.output.emit(&[
                "        ",
                &stub,
                ": function(data) { return rpc(",
                &quote(&wire_method),
                ", data, pb.",
                output_type,
                "); }",
                trailing_comma,
            ]);
        }

        self.output.emit(&["    }"]);
        self.output.emit(&["}"]);
        self.output.emit(&[]);
    }
}

/// Emit schema comment text verbatim, one output line per input line.
///
/// protoc keeps one leading space and a trailing newline on comment text;
/// both are stripped so the prefix fully controls the output shape.
fn emit_comment_lines(output: &mut Emitter, text: &str, prefix: &str) {
    let text = text.strip_suffix('\n').unwrap_or(text);
    for line in text.split('\n') {
        let line = line.strip_prefix(' ').unwrap_or(line);
        output.emit(&[prefix, line]);
    }
}

/// Render a JavaScript double-quoted string literal.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.escape_default())
}
