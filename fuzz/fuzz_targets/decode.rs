#![no_main]

use libfuzzer_sys::fuzz_target;
use spirvscope::{Disassembler, Module};

fuzz_target!(|data: &[u8]| {
    // Decode must never panic; when it succeeds, the module must survive
    // re-encoding and disassembly.
    if let Ok(module) = Module::from_bytes(data) {
        let _ = module.assemble();
        let _ = Disassembler::new().disassemble(&module);
    }
});
