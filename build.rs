fn main() {
    println!("cargo:rerun-if-env-changed=SHAKECOLOUR_CONFIG");

    // Only the device build needs the ESP-IDF environment; host builds
    // (library + tests) skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
