//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build time as the initial
//! wall-clock reference of the watch.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    // Put memory layout in the output directory and ensure it's on the linker search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Create rs file with the current UTC epoch and the local UTC offset
    let now = chrono::Local::now();
    File::create(out.join("build_time.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const BUILD_EPOCH: i64 = {:?};\nconst BUILD_UTC_OFFSET: i32 = {:?};\n",
            now.timestamp(),
            now.offset().local_minus_utc(),
        ))
        .unwrap();

    // By default, Cargo re-runs the build script whenever any file in the package changes,
    // which keeps the clock reference close to the time of flashing.
}
