use keel_core::SourceModule;
use keel_transform::rewrite_function;

/// Assemble one Solidity translation unit from a scanned module.
///
/// State variables and events are emitted verbatim (terminator ensured), then
/// each constructor/function in source order goes through the rewrite pipeline
/// and gets its header annotated with the mutability verdict derived from its
/// own body. State declarations carry a provenance tag so generated contracts
/// remain diffable against their Keel source.
pub struct SolidityEmitter<'a> {
    module: &'a SourceModule,
}

impl<'a> SolidityEmitter<'a> {
    pub fn new(module: &'a SourceModule) -> Self {
        Self { module }
    }

    pub fn emit_to_string(&self) -> String {
        let mut out = String::new();
        out.push_str("// SPDX-License-Identifier: MIT\n");
        out.push_str("pragma solidity ^0.8.20;\n\n");
        out.push_str("// Generated by the Keel compiler; review before deployment.\n");
        out.push_str(&format!("contract {} {{\n", self.module.name));

        let state_names = self.module.state_names();

        for var in &self.module.state {
            out.push_str("    ");
            out.push_str(&var.decl);
            if !var.decl.contains(';') {
                out.push(';');
            }
            out.push_str(" // [keel state]\n");
        }

        for event in &self.module.events {
            out.push_str("    ");
            out.push_str(event);
            if !event.contains(';') {
                out.push(';');
            }
            out.push('\n');
        }

        for decl in &self.module.functions {
            let rewritten = rewrite_function(decl, &state_names);
            out.push('\n');
            out.push_str("    ");
            out.push_str(&rewritten.header);
            out.push('\n');
            for line in &rewritten.body {
                if line.trim().is_empty() {
                    out.push('\n');
                } else {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }

        out.push_str("}\n");
        out
    }
}
