//! Benchmarks for the binary codec and disassembler.
//!
//! Measures the three transformations over a synthetic module with a
//! realistic instruction mix:
//! - decode (bytes to structured module)
//! - encode (structured module to bytes)
//! - disassemble (structured module to text)

extern crate spirvscope;

use criterion::{criterion_group, criterion_main, Criterion};
use spirvscope::prelude::*;
use spirvscope::spirv::{
    AddressingModel, Capability, Decoration, ExecutionModel, FunctionControl, MemoryModel,
    StorageClass,
};
use std::hint::black_box;

/// Build a module with `functions` small functions, plus the usual
/// preamble of types, variables, names and decorations.
fn synthetic_module(functions: u32) -> Module {
    let mut builder = ModuleBuilder::new();
    builder.capability(Capability::Shader);
    builder.memory_model(AddressingModel::Logical, MemoryModel::GLSL450);

    let void = builder.type_void();
    let fnty = builder.type_function(void, &[]);
    let float = builder.type_float(32);
    let vec4 = builder.type_vector(float, 4);
    let ptr = builder.type_pointer(StorageClass::Output, vec4);

    for i in 0..functions {
        let var = builder.variable(ptr, StorageClass::Output);
        builder.decorate(var, Decoration::Location, vec![Operand::LiteralInt32(i)]);

        let f = builder.function(void, FunctionControl::empty(), fnty);
        builder.label();
        builder.ret();
        builder.function_end();

        builder.entry_point(ExecutionModel::Fragment, f, &format!("main{i}"), &[var]);
        builder.name(f, &format!("main{i}"));
    }

    builder.build()
}

fn bench_decode(c: &mut Criterion) {
    let bytes = synthetic_module(64).assemble().unwrap();

    c.bench_function("decode_module", |b| {
        b.iter(|| {
            let module = Module::from_bytes(black_box(&bytes)).unwrap();
            black_box(module)
        });
    });
}

fn bench_encode(c: &mut Criterion) {
    let module = synthetic_module(64);

    c.bench_function("encode_module", |b| {
        b.iter(|| {
            let bytes = black_box(&module).assemble().unwrap();
            black_box(bytes)
        });
    });
}

fn bench_disassemble(c: &mut Criterion) {
    let module = synthetic_module(64);
    let disassembler = Disassembler::new();

    c.bench_function("disassemble_module", |b| {
        b.iter(|| {
            let text = disassembler.disassemble(black_box(&module));
            black_box(text)
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_disassemble);
criterion_main!(benches);
