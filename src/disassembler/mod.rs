//! Textual disassembly of decoded modules.
//!
//! [`Disassembler`] renders a [`Module`] as line-oriented assembly, one
//! instruction per line, in exact instruction order. Ids are shown with
//! symbolic labels where the module carries an `OpName` binding for them and
//! `%<id>` placeholders otherwise. Name bindings may appear anywhere in the
//! stream, including after the first use of the id they name, so rendering
//! runs in two passes: collect every binding, then print.
//!
//! Disassembly never fails on a decoded module. Instructions whose opcode
//! has no grammar entry render their raw opcode number and raw words
//! (`!<opcode> !<word>...`) instead of a mnemonic.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::disassembler::Disassembler;
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::{AddressingModel, Capability, MemoryModel};
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
//! let text = Disassembler::new().disassemble(&builder.build());
//!
//! assert!(text.contains("OpCapability Shader"));
//! assert!(text.contains("OpMemoryModel Logical GLSL450"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use crate::{
    grammar::InstructionTable,
    module::{Instruction, Module, Operand},
    spirv::{Op, Word},
};

/// Renders modules as textual assembly.
pub struct Disassembler<'a> {
    table: &'a InstructionTable,
}

impl Default for Disassembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Disassembler<'a> {
    /// Create a disassembler over the core instruction table.
    #[must_use]
    pub fn new() -> Disassembler<'static> {
        Disassembler {
            table: InstructionTable::core(),
        }
    }

    /// Create a disassembler over the given instruction table.
    #[must_use]
    pub fn with_table(table: &'a InstructionTable) -> Disassembler<'a> {
        Disassembler { table }
    }

    /// Render the module.
    ///
    /// Output starts with a comment block echoing the header, followed by
    /// one line per instruction in stream order; result-carrying lines are
    /// aligned on their `=`.
    #[must_use]
    pub fn disassemble(&self, module: &Module) -> String {
        let labels = collect_labels(module);

        let label_of = |id: Word| -> String {
            labels
                .get(&id)
                .map_or_else(|| format!("%{id}"), |name| format!("%{name}"))
        };

        // Left column is as wide as the longest result label.
        let column = module
            .instructions
            .iter()
            .filter_map(|inst| inst.result_id)
            .map(|id| label_of(id).len())
            .max()
            .unwrap_or(0);

        let (major, minor) = module.header.version_split();
        let mut text = String::new();
        let _ = writeln!(text, "; SPIR-V");
        let _ = writeln!(text, "; Version: {major}.{minor}");
        let _ = writeln!(text, "; Generator: {}", module.header.generator);
        let _ = writeln!(text, "; Bound: {}", module.header.bound);
        let _ = writeln!(text, "; Schema: {}", module.header.schema);

        for inst in &module.instructions {
            match inst.result_id {
                Some(id) => {
                    let _ = write!(text, "{:>column$} = ", label_of(id));
                }
                None => {
                    // Pad to the column the mnemonics start in; the three
                    // extra cells cover " = ".
                    let _ = write!(text, "{:>width$}", "", width = column + 3);
                }
            }
            self.render_inst(inst, &label_of, &mut text);
            text.push('\n');
        }

        text
    }

    fn render_inst(
        &self,
        inst: &Instruction,
        label_of: &dyn Fn(Word) -> String,
        text: &mut String,
    ) {
        match self.table.lookup_opcode(inst.opcode) {
            Some(def) => {
                let _ = write!(text, "Op{}", def.opname);
                if let Some(type_id) = inst.result_type {
                    let _ = write!(text, " {}", label_of(type_id));
                }
            }
            None => {
                let _ = write!(text, "!{}", inst.opcode);
            }
        }

        for operand in &inst.operands {
            text.push(' ');
            render_operand(operand, label_of, text);
        }
    }
}

fn render_operand(operand: &Operand, label_of: &dyn Fn(Word) -> String, text: &mut String) {
    let _ = match operand {
        Operand::IdRef(id) => write!(text, "{}", label_of(*id)),
        Operand::LiteralInt32(value) => write!(text, "{value}"),
        Operand::LiteralInt64(value) => write!(text, "{value}"),
        Operand::LiteralFloat32(value) => write!(text, "{value}"),
        Operand::LiteralFloat64(value) => write!(text, "{value}"),
        Operand::LiteralString(string) => write!(text, "\"{}\"", escape(string)),
        Operand::Capability(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::SourceLanguage(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::ExecutionModel(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::AddressingModel(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::MemoryModel(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::ExecutionMode(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::StorageClass(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::Dim(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::ImageFormat(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::AccessQualifier(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::Decoration(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::BuiltIn(v) => write!(text, "{}", <&'static str>::from(v)),
        Operand::FunctionControl(mask) => write!(text, "{mask}"),
        Operand::SelectionControl(mask) => write!(text, "{mask}"),
        Operand::LoopControl(mask) => write!(text, "{mask}"),
        Operand::MemoryAccess(mask) => write!(text, "{mask}"),
        Operand::ImageOperands(mask) => write!(text, "{mask}"),
        Operand::RawWord(word) => write!(text, "!{word}"),
    };
}

/// Collect `OpName` bindings over the whole module.
///
/// Names are sanitized to `[A-Za-z0-9_]`; ids whose sanitized name is empty
/// or already taken keep their numeric placeholder. The first binding for an
/// id wins.
fn collect_labels(module: &Module) -> HashMap<Word, String> {
    let mut labels = HashMap::new();
    let mut taken = HashSet::new();

    for inst in &module.instructions {
        if inst.op() != Some(Op::Name) {
            continue;
        }
        let (Some(Operand::IdRef(target)), Some(Operand::LiteralString(name))) =
            (inst.operands.first(), inst.operands.get(1))
        else {
            continue;
        };

        let sanitized = sanitize(name);
        if sanitized.is_empty() || labels.contains_key(target) || !taken.insert(sanitized.clone())
        {
            continue;
        }
        labels.insert(*target, sanitized);
    }

    labels
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn escape(string: &str) -> String {
    let mut escaped = String::with_capacity(string.len());
    for c in string.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::ModuleBuilder;
    use crate::spirv::{AddressingModel, Capability, MemoryModel, StorageClass};

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.trim_start().to_string()).collect()
    }

    #[test]
    fn header_comment_block() {
        let module = ModuleBuilder::with_version(1, 3).build();
        let text = Disassembler::new().disassemble(&module);
        assert!(text.starts_with("; SPIR-V\n; Version: 1.3\n"));
        assert!(text.contains("; Bound: 1\n"));
        assert!(text.contains("; Schema: 0\n"));
    }

    #[test]
    fn renders_in_stream_order() {
        let mut builder = ModuleBuilder::new();
        builder.capability(Capability::Shader);
        builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
        let text = Disassembler::new().disassemble(&builder.build());

        let rendered = lines(&text);
        assert_eq!(rendered[5], "OpCapability Shader");
        assert_eq!(rendered[6], "OpMemoryModel Logical GLSL450");
    }

    #[test]
    fn named_id_uses_label() {
        let mut builder = ModuleBuilder::new();
        let void = builder.type_void();
        builder.name(void, "void");
        let text = Disassembler::new().disassemble(&builder.build());

        assert!(text.contains("%void = OpTypeVoid"));
        assert!(text.contains("OpName %void \"void\""));
    }

    #[test]
    fn unnamed_id_uses_placeholder() {
        let mut builder = ModuleBuilder::new();
        let void = builder.type_void();
        let text = Disassembler::new().disassemble(&builder.build());
        assert!(text.contains(&format!("%{void} = OpTypeVoid")));
    }

    #[test]
    fn name_sanitization() {
        let mut builder = ModuleBuilder::new();
        let void = builder.type_void();
        builder.name(void, "a b.c");
        let text = Disassembler::new().disassemble(&builder.build());
        assert!(text.contains("%a_b_c = OpTypeVoid"));
    }

    #[test]
    fn colliding_names_fall_back_to_placeholder() {
        let mut builder = ModuleBuilder::new();
        let a = builder.type_void();
        let b = builder.type_bool();
        builder.name(a, "x");
        builder.name(b, "x");
        let text = Disassembler::new().disassemble(&builder.build());
        assert!(text.contains("%x = OpTypeVoid"));
        assert!(text.contains(&format!("%{b} = OpTypeBool")));
    }

    #[test]
    fn result_type_rendered_first() {
        let mut builder = ModuleBuilder::new();
        let float = builder.type_float(32);
        builder.name(float, "float");
        let ptr = builder.type_pointer(StorageClass::Function, float);
        builder.variable(ptr, StorageClass::Function);
        let text = Disassembler::new().disassemble(&builder.build());

        assert!(text.contains("OpTypePointer Function %float"));
        assert!(text.contains(&format!("OpVariable %{ptr} Function")));
    }

    #[test]
    fn string_escaping() {
        let mut builder = ModuleBuilder::new();
        let void = builder.type_void();
        builder.name(void, "say \"hi\"");
        let text = Disassembler::new().disassemble(&builder.build());
        assert!(text.contains("OpName %say__hi_ \"say \\\"hi\\\"\""));
    }

    #[test]
    fn opaque_instruction_renders_raw() {
        let mut builder = ModuleBuilder::new();
        builder.instruction(Instruction::opaque(4242, vec![7, 42]));
        let text = Disassembler::new().disassemble(&builder.build());
        assert!(text.contains("!4242 !7 !42"));
    }

    #[test]
    fn equals_column_alignment() {
        let mut builder = ModuleBuilder::new();
        builder.capability(Capability::Shader);
        let void = builder.type_void();
        builder.name(void, "void");
        let text = Disassembler::new().disassemble(&builder.build());

        let cap_line = text
            .lines()
            .find(|l| l.contains("OpCapability"))
            .unwrap();
        let void_line = text.lines().find(|l| l.contains("OpTypeVoid")).unwrap();
        assert_eq!(
            cap_line.find("OpCapability").unwrap(),
            void_line.find("OpTypeVoid").unwrap()
        );
    }
}
