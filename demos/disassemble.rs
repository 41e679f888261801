//! Disassemble a SPIR-V module given on the command line.
//!
//! ```bash
//! cargo run --example disassemble -- shader.spv
//! ```

use std::path::Path;

use spirvscope::{Disassembler, Module};

fn main() -> spirvscope::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: disassemble <module.spv>");
        std::process::exit(2);
    };

    let module = Module::from_file(Path::new(&path))?;
    print!("{}", Disassembler::new().disassemble(&module));

    Ok(())
}
