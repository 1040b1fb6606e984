//! Browser entry point. Trunk builds this binary for `wasm32-unknown-unknown`
//! with the `csr` feature enabled and mounts the app onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting saastra landing page");
    leptos::mount::mount_to_body(saastra_landing::app::App);
}

// Native builds only exist to run the test suite.
#[cfg(not(feature = "csr"))]
fn main() {}
