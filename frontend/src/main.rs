use avalon_web::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("starting avalon-web");
    yew::Renderer::<App>::new().render();
}
