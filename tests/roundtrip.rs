//! Round-trip integration tests: modules built through the builder survive
//! encode → decode unchanged, and decode-produced modules re-encode to the
//! same bytes.

use spirvscope::prelude::*;
use spirvscope::spirv::{
    AddressingModel, Capability, Decoration, ExecutionMode, ExecutionModel, FunctionControl,
    MemoryModel, StorageClass,
};

/// A small but representative fragment-shader-shaped module.
fn sample_module() -> Module {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);

    let void = builder.type_void();
    let fnty = builder.type_function(void, &[]);
    let float = builder.type_float(32);
    let vec4 = builder.type_vector(float, 4);
    let ptr_out = builder.type_pointer(StorageClass::Output, vec4);
    let color = builder.variable(ptr_out, StorageClass::Output);

    let main = builder.function(void, FunctionControl::empty(), fnty);
    builder.label();
    builder.ret();
    builder.function_end();

    builder.entry_point(ExecutionModel::Fragment, main, "main", &[color]);
    builder.execution_mode(main, ExecutionMode::OriginUpperLeft, &[]);
    builder.name(main, "main");
    builder.name(color, "color");
    builder.decorate(color, Decoration::Location, vec![Operand::LiteralInt32(0)]);

    builder.build()
}

#[test]
fn builder_module_round_trips() {
    let module = sample_module();
    let bytes = module.assemble().unwrap();
    let decoded = Module::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, module);
}

#[test]
fn decoded_module_reencodes_byte_identically() {
    let bytes = sample_module().assemble().unwrap();
    let decoded = Module::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.assemble().unwrap(), bytes);
}

#[test]
fn header_fields_preserved() {
    let mut builder = ModuleBuilder::with_version(1, 5);
    builder.set_generator(0x0008_0001);
    builder.capability(Capability::Shader);
    let module = builder.build();

    let decoded = Module::from_bytes(&module.assemble().unwrap()).unwrap();
    assert_eq!(decoded.header, module.header);
    assert_eq!(decoded.header.version_split(), (1, 5));
    assert_eq!(decoded.header.generator, 0x0008_0001);
}

#[test]
fn wide_and_float_constants_round_trip() {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    builder.capability(Capability::Int64);
    builder.capability(Capability::Float64);

    let u64t = builder.type_int(64, false);
    let i32t = builder.type_int(32, true);
    let f32t = builder.type_float(32);
    let f64t = builder.type_float(64);

    builder.constant_bit64(u64t, 0xDEAD_BEEF_CAFE_F00D);
    builder.constant_bit32(i32t, 0x8000_0001);
    builder.constant_f32(f32t, -0.5);
    builder.constant_f64(f64t, 1234.5678);

    let module = builder.build();
    let decoded = Module::from_bytes(&module.assemble().unwrap()).unwrap();
    assert_eq!(decoded, module);
}

#[test]
fn string_operands_round_trip_at_every_padding() {
    // Lengths 0..=8 cover every byte position within the padded words.
    for len in 0..=8 {
        let name: String = "abcdefgh"[..len].to_string();
        let mut builder = ModuleBuilder::new();
        let void = builder.type_void();
        builder.name(void, &name);
        let module = builder.build();

        let decoded = Module::from_bytes(&module.assemble().unwrap()).unwrap();
        assert_eq!(decoded, module, "length {len}");
    }
}

#[test]
fn opaque_instruction_round_trips_with_identical_raw_words() {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    builder.instruction(Instruction::opaque(4242, vec![0xAAAA_AAAA, 7, 0]));
    let module = builder.build();

    let bytes = module.assemble().unwrap();
    let decoded = Module::from_bytes(&bytes).unwrap();

    let opaque = &decoded.instructions[1];
    assert_eq!(opaque.opcode, 4242);
    assert_eq!(
        opaque.operands,
        vec![
            Operand::RawWord(0xAAAA_AAAA),
            Operand::RawWord(7),
            Operand::RawWord(0),
        ]
    );
    assert_eq!(decoded.assemble().unwrap(), bytes);
}

#[test]
fn decoration_parameters_round_trip() {
    let mut builder = ModuleBuilder::new();
    let float = builder.type_float(32);
    let ptr = builder.type_pointer(StorageClass::Input, float);
    let var = builder.variable(ptr, StorageClass::Input);
    builder.decorate(var, Decoration::Location, vec![Operand::LiteralInt32(3)]);
    builder.decorate(var, Decoration::RelaxedPrecision, vec![]);
    let module = builder.build();

    let decoded = Module::from_bytes(&module.assemble().unwrap()).unwrap();
    assert_eq!(decoded, module);
}

#[test]
fn execution_mode_parameters_round_trip() {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    let void = builder.type_void();
    let fnty = builder.type_function(void, &[]);
    let main = builder.function(void, FunctionControl::empty(), fnty);
    builder.label();
    builder.ret();
    builder.function_end();
    builder.entry_point(ExecutionModel::GLCompute, main, "main", &[]);
    builder.execution_mode(main, ExecutionMode::LocalSize, &[8, 8, 1]);
    let module = builder.build();

    let decoded = Module::from_bytes(&module.assemble().unwrap()).unwrap();
    assert_eq!(decoded, module);

    let mode_inst = decoded
        .instructions
        .iter()
        .find(|inst| inst.op() == Some(Op::ExecutionMode))
        .unwrap();
    assert_eq!(
        &mode_inst.operands[2..],
        &[
            Operand::LiteralInt32(8),
            Operand::LiteralInt32(8),
            Operand::LiteralInt32(1),
        ]
    );
}

#[test]
fn empty_module_round_trips() {
    let module = ModuleBuilder::new().build();
    let bytes = module.assemble().unwrap();
    assert_eq!(bytes.len(), 20);
    let decoded = Module::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, module);
}
