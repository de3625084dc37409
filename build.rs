use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Put the linker script somewhere the linker can find it
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    if cfg!(feature = "rt") && !cfg!(feature = "disable-linker-script") {
        let linker = include_bytes!("memory.x").as_ref();

        File::create(out.join("memory.x"))
            .unwrap()
            .write_all(linker)
            .unwrap();
        println!("cargo:rustc-link-search={}", out.display());

        println!("cargo:rerun-if-changed=memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
