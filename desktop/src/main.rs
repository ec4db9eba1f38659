use dioxus::desktop::Config;
use dioxus::desktop::LogicalSize;
use dioxus::desktop::WindowBuilder;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let window = WindowBuilder::new()
        .with_title("User Details")
        .with_inner_size(LogicalSize::new(720.0, 820.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
