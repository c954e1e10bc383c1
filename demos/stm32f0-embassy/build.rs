fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    // defmt.x must come after link.x
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
