mod app;
mod components;
mod config;
mod render;
mod utils;

fn main() {
    console_error_panic_hook::set_once();

    app::mount_widgets();
}
