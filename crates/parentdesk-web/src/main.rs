//! WASM entry point for Leptos CSR app

use leptos::mount::mount_to_body;
use parentdesk_web::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
