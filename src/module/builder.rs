//! Incremental module construction.
//!
//! [`ModuleBuilder`] assembles a [`Module`] instruction by instruction,
//! allocating result ids and computing the header id bound on build. The
//! typed emit methods cover the instructions every module needs; anything
//! else goes through [`ModuleBuilder::instruction`] with a hand-built
//! [`Instruction`].
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::module::ModuleBuilder;
//! use spirvscope::spirv::{AddressingModel, Capability, MemoryModel};
//!
//! let mut builder = ModuleBuilder::new();
//! builder.capability(Capability::Shader);
//! builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);
//! let void = builder.type_void();
//! builder.name(void, "void");
//!
//! let module = builder.build();
//! assert_eq!(module.instructions.len(), 4);
//! assert!(module.header.bound > void);
//! ```

use super::{Instruction, Module, ModuleHeader, Operand};
use crate::spirv::{
    self, AddressingModel, Capability, Decoration, ExecutionMode, ExecutionModel, FunctionControl,
    MemoryModel, Op, StorageClass, Word,
};

/// Builds a [`Module`] incrementally.
///
/// Fresh ids are handed out sequentially; the id bound written to the header
/// covers both builder-allocated ids and any ids referenced by instructions
/// pushed directly.
pub struct ModuleBuilder {
    version: Word,
    generator: Word,
    instructions: Vec<Instruction>,
    next_id: Word,
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBuilder {
    /// Create a builder targeting version 1.0.
    #[must_use]
    pub fn new() -> Self {
        ModuleBuilder {
            version: spirv::version(1, 0),
            generator: 0,
            instructions: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a builder targeting the given version.
    #[must_use]
    pub fn with_version(major: u8, minor: u8) -> Self {
        ModuleBuilder {
            version: spirv::version(major, minor),
            ..Self::new()
        }
    }

    /// Set the generator word written to the header.
    pub fn set_generator(&mut self, generator: Word) {
        self.generator = generator;
    }

    /// Allocate a fresh id.
    pub fn fresh_id(&mut self) -> Word {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an instruction verbatim.
    pub fn instruction(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    /// `OpCapability`
    pub fn capability(&mut self, capability: Capability) {
        self.instructions.push(Instruction::new(
            Op::Capability,
            None,
            None,
            vec![Operand::Capability(capability)],
        ));
    }

    /// `OpExtension`
    pub fn extension(&mut self, name: &str) {
        self.instructions.push(Instruction::new(
            Op::Extension,
            None,
            None,
            vec![Operand::LiteralString(name.to_string())],
        ));
    }

    /// `OpExtInstImport`; returns the set id.
    pub fn ext_inst_import(&mut self, name: &str) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::ExtInstImport,
            None,
            Some(id),
            vec![Operand::LiteralString(name.to_string())],
        ));
        id
    }

    /// `OpMemoryModel`
    pub fn memory_model(&mut self, addressing: AddressingModel, memory: MemoryModel) {
        self.instructions.push(Instruction::new(
            Op::MemoryModel,
            None,
            None,
            vec![
                Operand::AddressingModel(addressing),
                Operand::MemoryModel(memory),
            ],
        ));
    }

    /// `OpEntryPoint`
    pub fn entry_point(
        &mut self,
        model: ExecutionModel,
        function: Word,
        name: &str,
        interface: &[Word],
    ) {
        let mut operands = vec![
            Operand::ExecutionModel(model),
            Operand::IdRef(function),
            Operand::LiteralString(name.to_string()),
        ];
        operands.extend(interface.iter().map(|id| Operand::IdRef(*id)));
        self.instructions
            .push(Instruction::new(Op::EntryPoint, None, None, operands));
    }

    /// `OpExecutionMode` with literal parameters.
    pub fn execution_mode(&mut self, entry_point: Word, mode: ExecutionMode, params: &[u32]) {
        let mut operands = vec![Operand::IdRef(entry_point), Operand::ExecutionMode(mode)];
        operands.extend(params.iter().map(|p| Operand::LiteralInt32(*p)));
        self.instructions
            .push(Instruction::new(Op::ExecutionMode, None, None, operands));
    }

    /// `OpName`
    pub fn name(&mut self, target: Word, name: &str) {
        self.instructions.push(Instruction::new(
            Op::Name,
            None,
            None,
            vec![
                Operand::IdRef(target),
                Operand::LiteralString(name.to_string()),
            ],
        ));
    }

    /// `OpMemberName`
    pub fn member_name(&mut self, target: Word, member: u32, name: &str) {
        self.instructions.push(Instruction::new(
            Op::MemberName,
            None,
            None,
            vec![
                Operand::IdRef(target),
                Operand::LiteralInt32(member),
                Operand::LiteralString(name.to_string()),
            ],
        ));
    }

    /// `OpDecorate`; `params` holds the decoration's trailing operands.
    pub fn decorate(&mut self, target: Word, decoration: Decoration, params: Vec<Operand>) {
        let mut operands = vec![Operand::IdRef(target), Operand::Decoration(decoration)];
        operands.extend(params);
        self.instructions
            .push(Instruction::new(Op::Decorate, None, None, operands));
    }

    /// `OpTypeVoid`
    pub fn type_void(&mut self) -> Word {
        let id = self.fresh_id();
        self.instructions
            .push(Instruction::new(Op::TypeVoid, None, Some(id), vec![]));
        id
    }

    /// `OpTypeBool`
    pub fn type_bool(&mut self) -> Word {
        let id = self.fresh_id();
        self.instructions
            .push(Instruction::new(Op::TypeBool, None, Some(id), vec![]));
        id
    }

    /// `OpTypeInt`
    pub fn type_int(&mut self, width: u32, signed: bool) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::TypeInt,
            None,
            Some(id),
            vec![
                Operand::LiteralInt32(width),
                Operand::LiteralInt32(u32::from(signed)),
            ],
        ));
        id
    }

    /// `OpTypeFloat`
    pub fn type_float(&mut self, width: u32) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::TypeFloat,
            None,
            Some(id),
            vec![Operand::LiteralInt32(width)],
        ));
        id
    }

    /// `OpTypeVector`
    pub fn type_vector(&mut self, component: Word, count: u32) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::TypeVector,
            None,
            Some(id),
            vec![Operand::IdRef(component), Operand::LiteralInt32(count)],
        ));
        id
    }

    /// `OpTypePointer`
    pub fn type_pointer(&mut self, storage: StorageClass, pointee: Word) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::TypePointer,
            None,
            Some(id),
            vec![Operand::StorageClass(storage), Operand::IdRef(pointee)],
        ));
        id
    }

    /// `OpTypeFunction`
    pub fn type_function(&mut self, return_type: Word, params: &[Word]) -> Word {
        let id = self.fresh_id();
        let mut operands = vec![Operand::IdRef(return_type)];
        operands.extend(params.iter().map(|p| Operand::IdRef(*p)));
        self.instructions
            .push(Instruction::new(Op::TypeFunction, None, Some(id), operands));
        id
    }

    /// `OpConstant` with a one-word literal.
    pub fn constant_bit32(&mut self, result_type: Word, value: u32) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Constant,
            Some(result_type),
            Some(id),
            vec![Operand::LiteralInt32(value)],
        ));
        id
    }

    /// `OpConstant` with a two-word literal.
    pub fn constant_bit64(&mut self, result_type: Word, value: u64) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Constant,
            Some(result_type),
            Some(id),
            vec![Operand::LiteralInt64(value)],
        ));
        id
    }

    /// `OpConstant` with a 32-bit float literal.
    pub fn constant_f32(&mut self, result_type: Word, value: f32) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Constant,
            Some(result_type),
            Some(id),
            vec![Operand::LiteralFloat32(value)],
        ));
        id
    }

    /// `OpConstant` with a 64-bit float literal.
    pub fn constant_f64(&mut self, result_type: Word, value: f64) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Constant,
            Some(result_type),
            Some(id),
            vec![Operand::LiteralFloat64(value)],
        ));
        id
    }

    /// `OpVariable` without an initializer.
    pub fn variable(&mut self, result_type: Word, storage: StorageClass) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Variable,
            Some(result_type),
            Some(id),
            vec![Operand::StorageClass(storage)],
        ));
        id
    }

    /// `OpFunction`; returns the function id.
    pub fn function(
        &mut self,
        return_type: Word,
        control: FunctionControl,
        function_type: Word,
    ) -> Word {
        let id = self.fresh_id();
        self.instructions.push(Instruction::new(
            Op::Function,
            Some(return_type),
            Some(id),
            vec![
                Operand::FunctionControl(control),
                Operand::IdRef(function_type),
            ],
        ));
        id
    }

    /// `OpFunctionEnd`
    pub fn function_end(&mut self) {
        self.instructions
            .push(Instruction::new(Op::FunctionEnd, None, None, vec![]));
    }

    /// `OpLabel`; returns the block id.
    pub fn label(&mut self) -> Word {
        let id = self.fresh_id();
        self.instructions
            .push(Instruction::new(Op::Label, None, Some(id), vec![]));
        id
    }

    /// `OpReturn`
    pub fn ret(&mut self) {
        self.instructions
            .push(Instruction::new(Op::Return, None, None, vec![]));
    }

    /// `OpReturnValue`
    pub fn ret_value(&mut self, value: Word) {
        self.instructions.push(Instruction::new(
            Op::ReturnValue,
            None,
            None,
            vec![Operand::IdRef(value)],
        ));
    }

    /// Finish the module, computing the header id bound.
    #[must_use]
    pub fn build(self) -> Module {
        let mut bound = self.next_id;
        for inst in &self.instructions {
            for id in inst
                .result_type
                .iter()
                .chain(inst.result_id.iter())
                .chain(inst.operands.iter().filter_map(|operand| match operand {
                    Operand::IdRef(id) => Some(id),
                    _ => None,
                }))
            {
                bound = bound.max(id + 1);
            }
        }

        Module {
            header: ModuleHeader::new(spirv::MAGIC_NUMBER, self.version, self.generator, bound, 0),
            instructions: self.instructions,
        }
    }
}
